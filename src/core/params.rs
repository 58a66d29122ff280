use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{EstimatorKind, FallbackMode, SquareMode};

pub const DEFAULT_SIZE: u32 = 1024;
pub const DEFAULT_TOLERANCE: u8 = 15;
pub const DEFAULT_MARGIN_RATIO: f64 = 0.1;

/// Cropping parameters suitable for preset files and the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropParams {
    /// Output side in pixels; the result is always `size` x `size`
    pub size: u32,
    /// Added to the background estimate to form the content threshold
    pub tolerance: u8,
    /// Fallback margin as a fraction of the image width
    pub margin_ratio: f64,
    pub estimator: EstimatorKind,
    pub square_mode: SquareMode,
    pub fallback_mode: FallbackMode,
}

impl Default for CropParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            tolerance: DEFAULT_TOLERANCE,
            margin_ratio: DEFAULT_MARGIN_RATIO,
            estimator: EstimatorKind::Corners,
            square_mode: SquareMode::Clamp,
            fallback_mode: FallbackMode::Trim,
        }
    }
}

impl CropParams {
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidArgument {
                arg: "size",
                value: self.size.to_string(),
            });
        }
        if !(0.0..0.5).contains(&self.margin_ratio) {
            return Err(Error::InvalidArgument {
                arg: "margin_ratio",
                value: self.margin_ratio.to_string(),
            });
        }
        Ok(())
    }

    /// Load a JSON preset. Fields missing from the file keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let params: CropParams = serde_json::from_str(&text)?;
        debug!("Loaded crop preset from {:?}: {:?}", path, params);
        params.validate()?;
        Ok(params)
    }
}
