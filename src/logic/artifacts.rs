//! Artifact loading - best-effort, once per process start.
//!
//! Three artifacts live in the models directory: the ONNX classifier, the
//! scaler parameters, and the training column order. A failed load leaves
//! its slot empty and logs a warning; the app still starts and the
//! prediction pipeline rejects requests until the missing pieces appear.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::logic::features::FEATURE_LAYOUT;
use crate::logic::model::{
    FeatureScaler, ModelError, OnnxClassifier, RiskClassifier, StandardScaler,
};

/// Everything loaded at startup. Registered as Tauri managed state and
/// never mutated afterwards.
pub struct ArtifactBundle {
    pub classifier: Option<Box<dyn RiskClassifier>>,
    pub scaler: Option<Box<dyn FeatureScaler>>,
    pub expected_columns: Option<Vec<String>>,
    pub models_dir: PathBuf,
    pub loaded_at: DateTime<Utc>,
}

/// Load status for the frontend banner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactStatus {
    pub classifier_loaded: bool,
    pub scaler_loaded: bool,
    pub columns_loaded: bool,
    pub columns_match: Option<bool>,
    pub models_dir: String,
    pub loaded_at: String,
}

fn safe_load<T>(path: &Path, load: impl FnOnce(&Path) -> Result<T, ModelError>) -> Option<T> {
    match load(path) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Could not load {}: {}", path.display(), e);
            None
        }
    }
}

fn load_columns(path: &Path) -> Result<Vec<String>, ModelError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ModelError::Load(format!("read {}: {}", path.display(), e)))?;
    serde_json::from_str(&raw)
        .map_err(|e| ModelError::Load(format!("parse {}: {}", path.display(), e)))
}

impl ArtifactBundle {
    /// Load all three artifacts from `models_dir`.
    pub fn load(models_dir: &Path) -> Self {
        let classifier = safe_load(&models_dir.join(constants::CLASSIFIER_FILE), OnnxClassifier::load)
            .map(|c| Box::new(c) as Box<dyn RiskClassifier>);
        let scaler = safe_load(&models_dir.join(constants::SCALER_FILE), StandardScaler::load)
            .map(|s| Box::new(s) as Box<dyn FeatureScaler>);
        let expected_columns = safe_load(&models_dir.join(constants::COLUMNS_FILE), load_columns);

        let bundle = Self {
            classifier,
            scaler,
            expected_columns,
            models_dir: models_dir.to_path_buf(),
            loaded_at: Utc::now(),
        };

        if bundle.columns_match() == Some(false) {
            log::warn!(
                "{} does not match the input row layout {:?}",
                constants::COLUMNS_FILE,
                FEATURE_LAYOUT
            );
        }

        bundle
    }

    /// Compare the loaded column order against the fixed row layout.
    /// None when the columns artifact is absent.
    pub fn columns_match(&self) -> Option<bool> {
        self.expected_columns
            .as_ref()
            .map(|cols| cols.iter().map(String::as_str).eq(FEATURE_LAYOUT))
    }

    pub fn status(&self) -> ArtifactStatus {
        ArtifactStatus {
            classifier_loaded: self.classifier.is_some(),
            scaler_loaded: self.scaler.is_some(),
            columns_loaded: self.expected_columns.is_some(),
            columns_match: self.columns_match(),
            models_dir: self.models_dir.display().to_string(),
            loaded_at: self.loaded_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_empty_dir_loads_nothing_without_panicking() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = ArtifactBundle::load(dir.path());

        assert!(bundle.classifier.is_none());
        assert!(bundle.scaler.is_none());
        assert!(bundle.expected_columns.is_none());
        assert_eq!(bundle.columns_match(), None);

        let status = bundle.status();
        assert!(!status.classifier_loaded);
        assert!(!status.scaler_loaded);
        assert!(!status.columns_loaded);
    }

    #[test]
    fn test_scaler_and_columns_load_independently() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(constants::SCALER_FILE),
            r#"{"mean": [0,0,0,0,0,0], "scale": [1,1,1,1,1,1]}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join(constants::COLUMNS_FILE),
            serde_json::to_string(&FEATURE_LAYOUT).unwrap(),
        )
        .unwrap();

        // Classifier is still missing; the others load anyway.
        let bundle = ArtifactBundle::load(dir.path());
        assert!(bundle.classifier.is_none());
        assert!(bundle.scaler.is_some());
        assert_eq!(bundle.columns_match(), Some(true));
    }

    #[test]
    fn test_column_order_mismatch_detected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(constants::COLUMNS_FILE),
            r#"["likes_per_day", "daily_usage_hours"]"#,
        )
        .unwrap();

        let bundle = ArtifactBundle::load(dir.path());
        assert_eq!(bundle.columns_match(), Some(false));
    }

    #[test]
    fn test_malformed_columns_artifact_becomes_absent() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(constants::COLUMNS_FILE), "not json").unwrap();

        let bundle = ArtifactBundle::load(dir.path());
        assert!(bundle.expected_columns.is_none());
    }
}
