use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to load preset {path:?}: {source}")]
    Preset {
        path: PathBuf,
        #[source]
        source: iconcrop::Error,
    },

    #[error(transparent)]
    Crop(#[from] iconcrop::Error),
}
