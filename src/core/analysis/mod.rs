//! Image analysis on single-channel luminance planes.
pub mod background;
pub mod luminance;
pub mod mask;
