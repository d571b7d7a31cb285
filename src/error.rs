use miette::Diagnostic;
use thiserror::Error;

/// Main error type for ogimg operations
#[derive(Error, Diagnostic, Debug)]
pub enum OgError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(ogimg::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(ogimg::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation failed: {message}")]
    #[diagnostic(code(ogimg::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, OgError>;
