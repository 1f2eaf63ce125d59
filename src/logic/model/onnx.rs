//! ONNX classifier adapter.
//!
//! Wraps an `ort` session behind `RiskClassifier`. The session needs `&mut`
//! to run, so it sits behind a mutex; single-user traffic never contends.

use std::path::Path;

use ndarray::Array2;
use parking_lot::Mutex;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;

use crate::logic::features::FEATURE_COUNT;
use super::{ModelError, RiskClassifier};

pub struct OnnxClassifier {
    session: Mutex<Session>,
}

impl OnnxClassifier {
    /// Load an ONNX model from file.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::Load(format!("model not found: {}", path.display())));
        }

        let session = Session::builder()
            .map_err(|e| ModelError::Load(format!("session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ModelError::Load(format!("optimization level: {}", e)))?
            .commit_from_file(path)
            .map_err(|e| ModelError::Load(format!("load {}: {}", path.display(), e)))?;

        log::info!("ONNX classifier loaded from {}", path.display());

        Ok(Self {
            session: Mutex::new(session),
        })
    }
}

impl RiskClassifier for OnnxClassifier {
    fn predict(&self, row: &[f32; FEATURE_COUNT]) -> Result<Vec<f32>, ModelError> {
        let mut session = self.session.lock();

        // First output carries the class labels (sklearn exports emit
        // ["label", "probabilities"]).
        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| ModelError::Inference("model has no outputs".to_string()))?;

        let input_array = Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), row.to_vec())
            .map_err(|e| ModelError::Inference(format!("array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| ModelError::Inference(format!("tensor error: {}", e)))?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| ModelError::Inference(format!("run failed: {}", e)))?;

        let output = outputs
            .get(&output_name)
            .ok_or_else(|| ModelError::Inference(format!("no output named {}", output_name)))?;

        // Label tensors come out as int64 from sklearn converters; fall back
        // to f32 for exporters that emit floats.
        if let Ok(tensor) = output.try_extract_tensor::<i64>() {
            return Ok(tensor.1.iter().map(|&v| v as f32).collect());
        }

        let tensor = output
            .try_extract_tensor::<f32>()
            .map_err(|e| ModelError::Inference(format!("extract error: {}", e)))?;

        Ok(tensor.1.to_vec())
    }
}
