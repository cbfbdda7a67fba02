use std::path::PathBuf;

use money_run_core::CoreError;
use thiserror::Error;

/// Failures while loading sprite sheets.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("png decode failed: {0}")]
    Decode(#[from] png::DecodingError),

    #[error("unsupported png layout: {0}")]
    Unsupported(String),

    #[error(transparent)]
    Sheet(#[from] CoreError),
}

impl AssetError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            AssetError::Io { .. } => "io",
            AssetError::Decode(_) => "decode",
            AssetError::Unsupported(_) => "unsupported",
            AssetError::Sheet(err) => err.code(),
        }
    }
}
