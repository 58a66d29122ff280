//! I/O layer: decoding the source raster and encoding the cropped result.
//! `reader` turns any format the `image` crate understands into RGB;
//! `writers` picks an encoder from the destination extension.
pub mod reader;
pub use reader::open_rgb;

pub mod writers;
pub use writers::save_rgb;
