//! Application-wide error type
//!
//! Every fallible operation in the app returns this error so callers can
//! propagate with `?` and log a single, readable message.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Filesystem access failed (settings, font file)
    #[error("I/O error at {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },

    /// The settings file exists but could not be parsed or written
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The embedded wallpaper catalog is malformed
    #[error("invalid wallpaper catalog: {0}")]
    Catalog(String),

    /// Fetching a remote image failed
    #[error("failed to fetch {url}: {message}")]
    Http { url: String, message: String },

    /// The font could not be registered with the renderer
    #[error("failed to load font: {0}")]
    Font(String),

    /// An integration collaborator (favorites, download, wallpaper) reported failure
    #[error("{action} failed: {message}")]
    Extension { action: &'static str, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
