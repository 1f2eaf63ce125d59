//! Prediction pipeline - guard, scale, classify, map to a gauge position.
//!
//! Pure function of the loaded artifacts and one form submission. A
//! transform or predict failure does not propagate: the class index falls
//! back to 0 and the message is carried in `warning` so the UI can show it
//! alongside the (low-risk) gauge position.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logic::artifacts::ArtifactBundle;
use crate::logic::features::ActivityInput;

/// Class labels in index order
pub const CLASS_LABELS: [&str; 3] = ["Low Risk", "Moderate Risk", "High Risk"];

/// Label for a class index outside the trained range
pub const UNKNOWN_LABEL: &str = "Unknown";

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("Please enter some activity values before predicting.")]
    MissingActivity,
    #[error("Model or scaler not loaded. Check the models directory.")]
    ArtifactsUnavailable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub class_index: i64,
    pub label: String,
    pub score_percent: i32,
    pub needle_angle_degrees: i32,
    /// Set when transform/predict failed and the index fell back to 0.
    pub warning: Option<String>,
}

/// Map class index to label; anything outside the table is Unknown.
pub fn label_for(class_index: i64) -> String {
    usize::try_from(class_index)
        .ok()
        .and_then(|i| CLASS_LABELS.get(i))
        .map(|s| s.to_string())
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
}

/// Map class index to needle degrees: left (-90) low, center (0) moderate,
/// right (+90) high. Unknown indices park the needle at center.
pub fn needle_degrees_for(class_index: i64) -> i32 {
    match class_index {
        0 => -90,
        1 => 0,
        2 => 90,
        _ => 0,
    }
}

/// Score percentage over the fixed three-class range.
pub fn score_percent_for(class_index: i64) -> i32 {
    ((class_index as f64 / 2.0) * 100.0).round() as i32
}

fn result_for(class_index: i64, warning: Option<String>) -> PredictionResult {
    PredictionResult {
        class_index,
        label: label_for(class_index),
        score_percent: score_percent_for(class_index),
        needle_angle_degrees: needle_degrees_for(class_index),
        warning,
    }
}

/// Run one prediction. Guards are checked in order and short-circuit
/// before any model call.
pub fn run(bundle: &ArtifactBundle, input: &ActivityInput) -> Result<PredictionResult, PredictError> {
    if !input.has_activity() {
        return Err(PredictError::MissingActivity);
    }

    let (classifier, scaler) = match (&bundle.classifier, &bundle.scaler) {
        (Some(c), Some(s)) => (c, s),
        _ => return Err(PredictError::ArtifactsUnavailable),
    };

    let row = input.to_row();

    let outcome = scaler
        .transform(&row)
        .and_then(|scaled| classifier.predict(&scaled));

    let result = match outcome {
        Ok(predictions) => match predictions.first() {
            Some(&raw) => result_for(raw as i64, None),
            None => {
                log::error!("classifier returned an empty row");
                result_for(0, Some("Prediction error: classifier returned an empty row".to_string()))
            }
        },
        Err(e) => {
            log::error!("prediction failed: {}", e);
            result_for(0, Some(format!("Prediction error: {}", e)))
        }
    };

    Ok(result)
}
