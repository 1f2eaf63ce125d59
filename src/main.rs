//! Reel Addiction Predictor - Main Entry Point

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod api;
mod logic;
pub mod constants;

use api::commands;
use logic::artifacts::ArtifactBundle;

fn main() {
    #[cfg(debug_assertions)]
    {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .init();
    }

    log::info!("Starting {} v{}...", constants::APP_NAME, constants::APP_VERSION);

    let models_dir = constants::get_models_dir();
    let bundle = ArtifactBundle::load(&models_dir);

    if bundle.classifier.is_some() && bundle.scaler.is_some() {
        log::info!("Artifacts loaded from {}", models_dir.display());
    } else {
        log::warn!(
            "Artifacts incomplete - predictions are rejected until {} holds the classifier and scaler",
            models_dir.display()
        );
    }

    tauri::Builder::default()
        .manage(bundle)
        .invoke_handler(tauri::generate_handler![
            commands::run_prediction,
            commands::get_artifact_status,
            commands::get_input_limits,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
