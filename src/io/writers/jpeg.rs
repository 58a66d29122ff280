use jpeg_encoder::{ColorType, Encoder};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::RgbImage;

use crate::error::{Error, Result};

pub const JPEG_QUALITY: u8 = 100;

pub fn write_rgb_jpeg(output: &Path, img: &RgbImage) -> Result<()> {
    let (cols, rows) = img.dimensions();
    let cols = u16::try_from(cols).map_err(|_| Error::write(output, "width exceeds JPEG limit"))?;
    let rows = u16::try_from(rows).map_err(|_| Error::write(output, "height exceeds JPEG limit"))?;

    let file = File::create(output).map_err(|e| Error::write(output, e))?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, JPEG_QUALITY);
    encoder
        .encode(img.as_raw(), cols, rows, ColorType::Rgb)
        .map_err(|e| Error::write(output, e))?;
    Ok(())
}
