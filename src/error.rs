use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// An outing carries an activity name outside the fixed taxonomy. The
    /// taxonomy is closed, so this is an upstream data contract violation
    /// and aborts report generation.
    #[error("unknown activity '{0}'")]
    UnknownActivity(String),

    #[error("invalid settings file {path}: {reason}")]
    Settings { path: PathBuf, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
