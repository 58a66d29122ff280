use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbImage;
use tracing::info;

use crate::error::{Error, Result};

/// Resample an RGB image to exactly `target_cols` x `target_rows` with a
/// Lanczos3 convolution. Aspect ratio is not preserved.
pub fn resize_rgb_image(src: &RgbImage, target_cols: u32, target_rows: u32) -> Result<RgbImage> {
    let (original_cols, original_rows) = src.dimensions();
    if original_cols == 0 || original_rows == 0 {
        return Err(Error::Resize(format!(
            "cannot resample an empty {}x{} image",
            original_cols, original_rows
        )));
    }
    info!(
        "Original size: {}x{}, New size: {}x{}",
        original_cols, original_rows, target_cols, target_rows
    );

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_cols,
        original_rows,
        src.as_raw().clone(),
        PixelType::U8x3,
    )
    .map_err(Error::resize)?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x3);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::resize)?;

    RgbImage::from_raw(target_cols, target_rows, dst_image.into_vec())
        .ok_or_else(|| Error::Resize("resized buffer does not match target dimensions".into()))
}

/// Resample to a `size` x `size` square.
pub fn resize_to_square(src: &RgbImage, size: u32) -> Result<RgbImage> {
    resize_rgb_image(src, size, size)
}
