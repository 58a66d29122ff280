use image::RgbImage;
use image::imageops::crop_imm;
use tracing::{debug, info, warn};

use crate::core::analysis::background::{content_threshold, estimator_for};
use crate::core::analysis::luminance::to_luminance;
use crate::core::analysis::mask::{bounding_box, threshold_mask};
use crate::core::params::CropParams;
use crate::core::processing::resize::resize_to_square;
use crate::core::processing::square::{fallback_region, square_region};
use crate::error::{Error, Result};
use crate::types::{BoundingBox, CropBox};

/// Crop decided for one image, before any pixel is copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropPlan {
    /// Content was found; `region` is the square derived from `bbox`
    Smart { bbox: BoundingBox, region: CropBox },
    /// No content pixel; `region` is the margin-based fallback crop
    Fallback { margin: u32, region: CropBox },
}

impl CropPlan {
    pub fn region(&self) -> CropBox {
        match self {
            CropPlan::Smart { region, .. } | CropPlan::Fallback { region, .. } => *region,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, CropPlan::Fallback { .. })
    }
}

/// Analyse `img` and decide which region to keep.
pub fn plan_crop(img: &RgbImage, params: &CropParams) -> Result<CropPlan> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::EmptyCrop {
            region: CropBox {
                left: 0,
                top: 0,
                right: width,
                bottom: height,
            },
        });
    }

    let luma = to_luminance(img);
    let estimator = estimator_for(params.estimator);
    let background = estimator.estimate(&luma);
    let threshold = content_threshold(background, params.tolerance);
    debug!(
        "Background ({}): {}, threshold: {}",
        estimator.name(),
        background,
        threshold
    );

    let mask = threshold_mask(&luma, threshold);
    let plan = match bounding_box(&mask) {
        Some(bbox) => {
            let region = square_region(&bbox, width, height, params.square_mode);
            if !region.is_square() {
                warn!(
                    "Crop region {} clamped to image bounds {}x{} is not square",
                    region, width, height
                );
            }
            CropPlan::Smart { bbox, region }
        }
        None => {
            let (margin, region) =
                fallback_region(width, height, params.margin_ratio, params.fallback_mode);
            CropPlan::Fallback { margin, region }
        }
    };

    info!("Crop plan for {}x{} image: {:?}", width, height, plan);
    Ok(plan)
}

/// Cut the planned region out of `img` and resample it to `size` x `size`.
pub fn apply_plan(img: &RgbImage, plan: &CropPlan, size: u32) -> Result<RgbImage> {
    let region = plan.region();
    if region.is_empty() {
        return Err(Error::EmptyCrop { region });
    }

    let cropped = crop_imm(img, region.left, region.top, region.width(), region.height()).to_image();
    resize_to_square(&cropped, size)
}
