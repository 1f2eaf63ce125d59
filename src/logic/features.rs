//! Activity Input - the six usage metrics entered in the form.
//!
//! The row layout is fixed and must match the column order the scaler and
//! classifier were trained on. `columns.json` is checked against
//! `FEATURE_LAYOUT` at load time (see `artifacts`).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of input features
pub const FEATURE_COUNT: usize = 6;

/// Feature column names in training order
pub const FEATURE_LAYOUT: [&str; FEATURE_COUNT] = [
    "daily_usage_hours",
    "avg_screen_minutes",
    "likes_per_day",
    "comments_per_day",
    "shares_per_day",
    "videos_per_day",
];

// Widget bounds (mirrored server-side in `validate`)
pub const DAILY_USAGE_HOURS_MAX: f32 = 24.0;
pub const AVG_SCREEN_MINUTES_MAX: u32 = 600;
pub const LIKES_PER_DAY_MAX: u32 = 5000;
pub const COMMENTS_PER_DAY_MAX: u32 = 2000;
pub const SHARES_PER_DAY_MAX: u32 = 2000;
pub const VIDEOS_PER_DAY_MAX: u32 = 3000;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
}

/// One interaction's worth of form values. Ephemeral, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityInput {
    pub daily_usage_hours: f32,
    pub avg_screen_minutes: u32,
    pub likes_per_day: u32,
    pub comments_per_day: u32,
    pub shares_per_day: u32,
    pub videos_per_day: u32,
}

impl ActivityInput {
    /// Build the fixed-order feature row the scaler expects.
    pub fn to_row(&self) -> [f32; FEATURE_COUNT] {
        [
            self.daily_usage_hours,
            self.avg_screen_minutes as f32,
            self.likes_per_day as f32,
            self.comments_per_day as f32,
            self.shares_per_day as f32,
            self.videos_per_day as f32,
        ]
    }

    /// Zero-activity guard. Shares and videos are intentionally not part
    /// of this check; tests pin the exact field set.
    pub fn has_activity(&self) -> bool {
        !(self.daily_usage_hours == 0.0
            && self.avg_screen_minutes == 0
            && self.likes_per_day == 0
            && self.comments_per_day == 0)
    }

    /// Server-side mirror of the widget min/max constraints.
    pub fn validate(&self) -> Result<(), InputError> {
        if !(0.0..=DAILY_USAGE_HOURS_MAX).contains(&self.daily_usage_hours) {
            return Err(InputError::OutOfRange {
                field: "daily_usage_hours",
                min: 0.0,
                max: DAILY_USAGE_HOURS_MAX as f64,
            });
        }
        let checks: [(&'static str, u32, u32); 5] = [
            ("avg_screen_minutes", self.avg_screen_minutes, AVG_SCREEN_MINUTES_MAX),
            ("likes_per_day", self.likes_per_day, LIKES_PER_DAY_MAX),
            ("comments_per_day", self.comments_per_day, COMMENTS_PER_DAY_MAX),
            ("shares_per_day", self.shares_per_day, SHARES_PER_DAY_MAX),
            ("videos_per_day", self.videos_per_day, VIDEOS_PER_DAY_MAX),
        ];
        for (field, value, max) in checks {
            if value > max {
                return Err(InputError::OutOfRange {
                    field,
                    min: 0.0,
                    max: max as f64,
                });
            }
        }
        Ok(())
    }
}

/// Per-field widget constraint, sent to the frontend so the form is built
/// from the same numbers the backend validates against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldLimit {
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputLimits {
    pub daily_usage_hours: FieldLimit,
    pub avg_screen_minutes: FieldLimit,
    pub likes_per_day: FieldLimit,
    pub comments_per_day: FieldLimit,
    pub shares_per_day: FieldLimit,
    pub videos_per_day: FieldLimit,
}

impl Default for InputLimits {
    fn default() -> Self {
        let int = |max: u32, default: f64| FieldLimit {
            min: 0.0,
            max: max as f64,
            default,
            step: 1.0,
        };
        Self {
            daily_usage_hours: FieldLimit {
                min: 0.0,
                max: DAILY_USAGE_HOURS_MAX as f64,
                default: 1.0,
                step: 0.1,
            },
            avg_screen_minutes: int(AVG_SCREEN_MINUTES_MAX, 60.0),
            likes_per_day: int(LIKES_PER_DAY_MAX, 30.0),
            comments_per_day: int(COMMENTS_PER_DAY_MAX, 10.0),
            shares_per_day: int(SHARES_PER_DAY_MAX, 5.0),
            videos_per_day: int(VIDEOS_PER_DAY_MAX, 40.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ActivityInput {
        ActivityInput {
            daily_usage_hours: 5.0,
            avg_screen_minutes: 120,
            likes_per_day: 200,
            comments_per_day: 40,
            shares_per_day: 10,
            videos_per_day: 80,
        }
    }

    #[test]
    fn test_row_order_matches_layout() {
        let row = input().to_row();
        assert_eq!(row, [5.0, 120.0, 200.0, 40.0, 10.0, 80.0]);
        assert_eq!(FEATURE_LAYOUT.len(), FEATURE_COUNT);
    }

    /// Shares and videos alone do not count as activity.
    #[test]
    fn test_zero_guard_ignores_shares_and_videos() {
        let quiet = ActivityInput {
            daily_usage_hours: 0.0,
            avg_screen_minutes: 0,
            likes_per_day: 0,
            comments_per_day: 0,
            shares_per_day: 15,
            videos_per_day: 99,
        };
        assert!(!quiet.has_activity());

        let mut active = quiet.clone();
        active.likes_per_day = 1;
        assert!(active.has_activity());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut bad = input();
        bad.daily_usage_hours = 25.0;
        assert!(bad.validate().is_err());

        let mut bad = input();
        bad.likes_per_day = LIKES_PER_DAY_MAX + 1;
        assert!(bad.validate().is_err());

        assert!(input().validate().is_ok());
    }
}
