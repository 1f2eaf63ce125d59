//! Gauge rendering contract.
//!
//! The frontend animates the needle from a fixed start angle to the target
//! over a fixed duration with a cubic ease-out. The curve is defined here
//! so the payload and the tests agree on the endpoints.

use serde::{Deserialize, Serialize};

use crate::logic::predict::PredictionResult;

/// Needle rest position before any sweep
pub const NEEDLE_START_DEGREES: i32 = -90;

/// Sweep duration in milliseconds
pub const SWEEP_DURATION_MS: u32 = 900;

/// Everything the gauge needs for one render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaugeRender {
    pub label: String,
    pub score_percent: i32,
    pub needle_angle_degrees: i32,
    pub start_angle_degrees: i32,
    pub duration_ms: u32,
    pub warning: Option<String>,
}

impl GaugeRender {
    pub fn from_prediction(result: PredictionResult) -> Self {
        Self {
            label: result.label,
            score_percent: result.score_percent,
            needle_angle_degrees: result.needle_angle_degrees,
            start_angle_degrees: NEEDLE_START_DEGREES,
            duration_ms: SWEEP_DURATION_MS,
            warning: result.warning,
        }
    }
}

/// Cubic ease-out over t in [0, 1].
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Needle angle at normalized animation time t.
pub fn needle_angle_at(target_degrees: i32, t: f32) -> f32 {
    let start = NEEDLE_START_DEGREES as f32;
    start + (target_degrees as f32 - start) * ease_out_cubic(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::predict;

    #[test]
    fn test_sweep_endpoints() {
        assert_eq!(needle_angle_at(90, 0.0), -90.0);
        assert_eq!(needle_angle_at(90, 1.0), 90.0);
        assert_eq!(needle_angle_at(-90, 1.0), -90.0);
    }

    #[test]
    fn test_sweep_is_monotonic() {
        let mut prev = needle_angle_at(90, 0.0);
        for step in 1..=10 {
            let angle = needle_angle_at(90, step as f32 / 10.0);
            assert!(angle >= prev, "sweep went backwards at step {}", step);
            prev = angle;
        }
    }

    #[test]
    fn test_render_carries_animation_contract() {
        let result = PredictionResult {
            class_index: 2,
            label: predict::label_for(2),
            score_percent: predict::score_percent_for(2),
            needle_angle_degrees: predict::needle_degrees_for(2),
            warning: None,
        };
        let render = GaugeRender::from_prediction(result);

        assert_eq!(render.label, "High Risk");
        assert_eq!(render.score_percent, 100);
        assert_eq!(render.needle_angle_degrees, 90);
        assert_eq!(render.start_angle_degrees, -90);
        assert_eq!(render.duration_ms, 900);
        assert!(render.warning.is_none());
    }
}
