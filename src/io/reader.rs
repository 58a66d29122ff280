use std::path::Path;

use image::RgbImage;
use tracing::debug;

use crate::error::{Error, Result};

/// Decode `path` into an 8-bit RGB buffer. Alpha, if any, is discarded.
pub fn open_rgb(path: &Path) -> Result<RgbImage> {
    let img = image::open(path).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "Decoded {:?}: {}x{} {:?}",
        path,
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img.to_rgb8())
}
