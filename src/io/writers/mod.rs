//! Output encoders. JPEG goes through `jpeg-encoder` at full quality; every
//! other extension is handed to the `image` crate.
pub mod jpeg;
pub mod raster;

use std::path::Path;

use image::RgbImage;
use tracing::info;

use crate::error::Result;

pub use jpeg::write_rgb_jpeg;
pub use raster::write_rgb_raster;

fn is_jpeg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("jpg") || e.eq_ignore_ascii_case("jpeg"))
}

/// Save `img` to `output`, encoded according to its extension.
pub fn save_rgb(output: &Path, img: &RgbImage) -> Result<()> {
    if is_jpeg(output) {
        write_rgb_jpeg(output, img)?;
    } else {
        write_rgb_raster(output, img)?;
    }
    info!(
        "Saved {}x{} image to {:?}",
        img.width(),
        img.height(),
        output
    );
    Ok(())
}
