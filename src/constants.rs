//! Central Configuration Constants
//!
//! Single source of truth for artifact locations and app identity.
//! To relocate the models directory, set MODELS_DIR or edit this file.

use std::path::PathBuf;

/// Default directory holding the trained artifacts
pub const DEFAULT_MODELS_DIR: &str = "models";

/// Trained classifier, exported to ONNX
pub const CLASSIFIER_FILE: &str = "classifier.onnx";

/// Fitted standard-scaler parameters (mean/scale arrays)
pub const SCALER_FILE: &str = "scaler.json";

/// Feature column names in training order
pub const COLUMNS_FILE: &str = "columns.json";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Reel Addiction Predictor";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get models directory from environment or use default
pub fn get_models_dir() -> PathBuf {
    std::env::var("MODELS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODELS_DIR))
}
