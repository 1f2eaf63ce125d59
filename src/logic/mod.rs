//! Logic Module - artifact loading and the prediction pipeline.
//!
//! - `features` - activity input, bounds, fixed feature row layout
//! - `model/` - scaler/classifier adapters behind narrow traits
//! - `artifacts` - best-effort startup loading of the trained artifacts
//! - `predict` - guard checks, scale-then-classify, class mapping
//! - `gauge` - render payload and needle animation contract

pub mod artifacts;
pub mod features;
pub mod gauge;
pub mod model;
pub mod predict;
