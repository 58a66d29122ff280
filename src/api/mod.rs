//! High-level, ergonomic library API: crop a file to a file, or an in-memory
//! image to an in-memory image. Prefer these entrypoints over the low-level
//! `core` modules when integrating iconcrop.
use std::path::{Path, PathBuf};

use image::RgbImage;
use tracing::info;

use crate::core::params::CropParams;
use crate::core::processing::pipeline::{CropPlan, apply_plan, plan_crop};
use crate::error::Result;
use crate::io::{open_rgb, save_rgb};

/// What one invocation did. `Display` renders the one-line diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropOutcome {
    pub plan: CropPlan,
    pub source_size: (u32, u32),
    pub output_size: (u32, u32),
    pub destination: PathBuf,
}

impl std::fmt::Display for CropOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.plan {
            CropPlan::Smart { bbox, region } => write!(
                f,
                "Smart Cropped from {} to {} and saved to {}",
                bbox,
                region,
                self.destination.display()
            ),
            CropPlan::Fallback { .. } => {
                write!(f, "No distinct content found. Falling back to center crop.")
            }
        }
    }
}

/// Result of in-memory cropping
#[derive(Debug, Clone)]
pub struct CroppedImage {
    pub plan: CropPlan,
    pub image: RgbImage,
}

/// Crop an already decoded image with the given parameters (no disk I/O)
pub fn crop_image(img: &RgbImage, params: &CropParams) -> Result<CroppedImage> {
    params.validate()?;
    let plan = plan_crop(img, params)?;
    let image = apply_plan(img, &plan, params.size)?;
    Ok(CroppedImage { plan, image })
}

/// Crop `source` into a `size` x `size` square written to `destination`.
///
/// Nothing is written if decoding or cropping fails.
pub fn crop_smart_with_params(
    source: &Path,
    destination: &Path,
    params: &CropParams,
) -> Result<CropOutcome> {
    params.validate()?;
    info!("Cropping {:?} -> {:?}", source, destination);

    let img = open_rgb(source)?;
    let CroppedImage { plan, image } = crop_image(&img, params)?;
    save_rgb(destination, &image)?;

    Ok(CropOutcome {
        plan,
        source_size: img.dimensions(),
        output_size: image.dimensions(),
        destination: destination.to_path_buf(),
    })
}

/// Crop with the default parameters: corner background, tolerance 15,
/// 10% fallback margin, 1024 x 1024 output.
pub fn crop_smart(source: &Path, destination: &Path) -> Result<CropOutcome> {
    crop_smart_with_params(source, destination, &CropParams::default())
}
