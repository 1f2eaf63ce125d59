//! Model Module - adapters around the trained artifacts.
//!
//! The scaler and classifier stay opaque behind two narrow traits so the
//! pipeline never sees a concrete model format. Swapping the ONNX backend
//! for anything else only touches this module.

pub mod onnx;
pub mod scaler;

use thiserror::Error;

use crate::logic::features::FEATURE_COUNT;

// Re-export common types
pub use onnx::OnnxClassifier;
pub use scaler::StandardScaler;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to load artifact: {0}")]
    Load(String),
    #[error("inference failed: {0}")]
    Inference(String),
    #[error("expected {expected} features, got {got}")]
    Shape { expected: usize, got: usize },
}

/// Fitted transform normalizing a raw feature row before classification.
pub trait FeatureScaler: Send + Sync {
    fn transform(&self, row: &[f32; FEATURE_COUNT]) -> Result<[f32; FEATURE_COUNT], ModelError>;
}

/// Trained model mapping a scaled feature row to a row of class labels.
/// The pipeline takes the first element and coerces it to an index.
pub trait RiskClassifier: Send + Sync {
    fn predict(&self, row: &[f32; FEATURE_COUNT]) -> Result<Vec<f32>, ModelError>;
}
