//! Tauri Commands - API for the gauge frontend.
//!
//! Errors cross the IPC boundary as strings; the frontend shows them
//! inline next to the form.

use tauri::State;

use crate::logic::artifacts::{ArtifactBundle, ArtifactStatus};
use crate::logic::features::{ActivityInput, InputLimits};
use crate::logic::gauge::GaugeRender;
use crate::logic::predict;

/// Run one prediction over the submitted form values.
#[tauri::command]
pub async fn run_prediction(
    input: ActivityInput,
    bundle: State<'_, ArtifactBundle>,
) -> Result<GaugeRender, String> {
    input.validate().map_err(|e| e.to_string())?;

    let result = predict::run(&bundle, &input).map_err(|e| e.to_string())?;

    log::info!(
        "prediction: class={} label={} score={}%",
        result.class_index,
        result.label,
        result.score_percent
    );

    Ok(GaugeRender::from_prediction(result))
}

/// Which artifacts loaded at startup (drives the missing-models banner).
#[tauri::command]
pub async fn get_artifact_status(
    bundle: State<'_, ArtifactBundle>,
) -> Result<ArtifactStatus, String> {
    Ok(bundle.status())
}

/// Widget bounds and defaults for the six form inputs.
#[tauri::command]
pub async fn get_input_limits() -> Result<InputLimits, String> {
    Ok(InputLimits::default())
}
