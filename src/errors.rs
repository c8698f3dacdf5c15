use std::path::PathBuf;
use thiserror::Error;

// Bring in specific errors from other modules we want to wrap
use crate::config::ConfigError;
use crate::store::AuthError;
use crate::tree::EditError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Mind map edit failed: {0}")]
    Edit(#[from] EditError),

    #[error("Access denied: {0}")]
    Auth(#[from] AuthError),

    #[error("Cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logging already initialised: {0}")]
    Logging(String),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
