mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod validation_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use validation_config::ValidationConfig;

#[cfg(test)]
mod tests;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_MAX_NAME_LENGTH: usize = 100;
const DEFAULT_MIN_AGE: u8 = 3;
const DEFAULT_MAX_AGE: u8 = 120;
const MIN_PORT: u16 = 1024;
