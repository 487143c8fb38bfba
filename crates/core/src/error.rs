use thiserror::Error;

/// Top-level error type used across the entire application.
///
/// Only [`BarError::InvalidAlignment`] is ever returned from the layout API;
/// `DuplicateKey` and `UnknownKey` are non-fatal and surface as log lines.
#[derive(Debug, Error)]
pub enum BarError {
    #[error("invalid alignment '{0}' (expected \"left\" or \"right\")")]
    InvalidAlignment(String),

    #[error("duplicate item key '{0}'")]
    DuplicateKey(String),

    #[error("unknown item key '{0}'")]
    UnknownKey(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("command error: {0}")]
    Command(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = BarError> = std::result::Result<T, E>;
