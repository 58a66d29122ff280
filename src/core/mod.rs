//! Core building blocks: luminance analysis, background estimation, content
//! masks and bounding boxes, square-region derivation, and resampling. These
//! are internal primitives consumed by the high-level `api` module.
pub mod analysis;
pub mod params;
pub mod processing;
