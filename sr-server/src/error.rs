use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] sr_config::ConfigError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Invalid lifecycle transition: expected {expected}, was {actual}")]
    InvalidState {
        expected: &'static str,
        actual: String,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
