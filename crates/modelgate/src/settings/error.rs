//! Settings storage errors.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while reading or writing the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file i/o failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file: {0}")]
    Json(#[from] serde_json::Error),
}

impl SettingsError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type SettingsResult<T> = Result<T, SettingsError>;
