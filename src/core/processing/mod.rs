//! Region derivation, resampling, and the crop pipeline that ties analysis
//! and processing together.
pub mod pipeline;
pub mod resize;
pub mod square;
