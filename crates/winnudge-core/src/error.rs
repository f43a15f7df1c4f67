use std::fmt;

use thiserror::Error;

/// Errors produced by winnudge operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// A native windowing call failed (invalid handle, access denied, ...).
    #[error("platform call failed: {0}")]
    Platform(String),

    #[error("could not determine the config directory")]
    NoConfigDir,

    #[error("unknown action: {0:?}")]
    UnknownAction(String),

    #[error("invalid color {0:?}, expected #RRGGBB")]
    InvalidColor(String),
}

impl Error {
    /// Wraps any displayable OS error as [`Error::Platform`].
    ///
    /// Platform crates use this with `map_err` since they cannot add
    /// `From` impls for their foreign error types.
    pub fn platform(err: impl fmt::Display) -> Self {
        Self::Platform(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
