//! Crate-level error type and `Result` alias.
//! Wraps decode failures of the source image, write/encode failures of the
//! destination, and semantic variants for bad parameters and degenerate crops.
use std::path::PathBuf;

use thiserror::Error;

use crate::types::CropBox;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write {path:?}: {message}")]
    Write { path: PathBuf, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Crop region {region} is empty")]
    EmptyCrop { region: CropBox },

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("Invalid parameter preset: {0}")]
    Params(#[from] serde_json::Error),
}

impl Error {
    pub fn write<E: std::fmt::Display>(path: &std::path::Path, e: E) -> Self {
        Error::Write {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    }

    pub fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }
}
