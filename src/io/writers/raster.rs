use std::path::Path;

use image::{ImageFormat, RgbImage};

use crate::error::{Error, Result};

/// Encode through the `image` crate, choosing the format from the extension.
pub fn write_rgb_raster(output: &Path, img: &RgbImage) -> Result<()> {
    let format = ImageFormat::from_path(output).map_err(|e| Error::write(output, e))?;
    img.save_with_format(output, format)
        .map_err(|e| Error::write(output, e))
}
