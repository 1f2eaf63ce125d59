//! Standard scaler loaded from the JSON parameters exported at training
//! time: `{"mean": [..6], "scale": [..6]}`, applied as `(x - mean) / scale`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::logic::features::FEATURE_COUNT;
use super::{FeatureScaler, ModelError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f32>,
    pub scale: Vec<f32>,
}

impl StandardScaler {
    /// Load and validate scaler parameters from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ModelError::Load(format!("read {}: {}", path.display(), e)))?;
        let scaler: Self = serde_json::from_str(&raw)
            .map_err(|e| ModelError::Load(format!("parse {}: {}", path.display(), e)))?;
        scaler.validate()?;
        Ok(scaler)
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.mean.len() != FEATURE_COUNT {
            return Err(ModelError::Shape {
                expected: FEATURE_COUNT,
                got: self.mean.len(),
            });
        }
        if self.scale.len() != FEATURE_COUNT {
            return Err(ModelError::Shape {
                expected: FEATURE_COUNT,
                got: self.scale.len(),
            });
        }
        if self.scale.iter().any(|s| *s == 0.0) {
            return Err(ModelError::Load("scale contains a zero entry".to_string()));
        }
        Ok(())
    }
}

impl FeatureScaler for StandardScaler {
    fn transform(&self, row: &[f32; FEATURE_COUNT]) -> Result<[f32; FEATURE_COUNT], ModelError> {
        let mut scaled = [0.0f32; FEATURE_COUNT];
        for i in 0..FEATURE_COUNT {
            scaled[i] = (row[i] - self.mean[i]) / self.scale[i];
        }
        Ok(scaled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_transform_centers_and_scales() {
        let scaler = StandardScaler {
            mean: vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            scale: vec![1.0, 2.0, 1.0, 2.0, 1.0, 2.0],
        };
        let scaled = scaler.transform(&[2.0, 6.0, 3.0, 0.0, 5.0, 10.0]).unwrap();
        assert_eq!(scaled, [1.0, 2.0, 0.0, -2.0, 0.0, 2.0]);
    }

    #[test]
    fn test_load_rejects_wrong_length() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"mean": [0.0, 0.0], "scale": [1.0, 1.0]}}"#).unwrap();
        let err = StandardScaler::load(file.path()).unwrap_err();
        assert!(matches!(err, ModelError::Shape { expected: 6, got: 2 }));
    }

    #[test]
    fn test_load_rejects_zero_scale() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"mean": [0,0,0,0,0,0], "scale": [1,1,0,1,1,1]}}"#
        )
        .unwrap();
        assert!(StandardScaler::load(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = StandardScaler::load(Path::new("no/such/scaler.json")).unwrap_err();
        assert!(matches!(err, ModelError::Load(_)));
    }
}
