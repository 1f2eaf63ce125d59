//! API Module
//!
//! Tauri commands exposed to the gauge frontend.

pub mod commands;

pub use commands::*;
