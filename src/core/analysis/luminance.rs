use image::RgbImage;
use ndarray::Array2;

/// ITU-R 601-2 luma in 16.16 fixed point, rounded to nearest.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}

/// Luminance plane of an RGB image, shaped `(rows, cols)`.
pub fn to_luminance(img: &RgbImage) -> Array2<u8> {
    let (cols, rows) = img.dimensions();
    Array2::from_shape_fn((rows as usize, cols as usize), |(row, col)| {
        let [r, g, b] = img.get_pixel(col as u32, row as u32).0;
        luma(r, g, b)
    })
}
