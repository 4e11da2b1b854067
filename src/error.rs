use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop the game. Everything else, including quitting, is
/// ordinary control flow.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("asset `{name}` could not be read from {path}")]
    MissingAsset {
        name: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("asset `{name}` is unusable: {reason}")]
    InvalidAsset { name: &'static str, reason: String },

    #[error("terminal I/O failed")]
    Terminal(#[from] std::io::Error),
}
