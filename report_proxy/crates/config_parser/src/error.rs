use config::ConfigError;
use global_utils::env_parser::EnvParserError;
use std::net::AddrParseError;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, ConfigParserError>;

#[derive(Debug, Error)]
pub enum ConfigParserError {
    #[error("Failed to convert SocketAddr, err: {0}")]
    SocketConversionError(#[from] AddrParseError),
    #[error("Failed to merge configuration, error: {0}")]
    ConfigMergingError(#[from] ConfigError),
    #[error("D4Sign credentials are not configured: {0}")]
    MissingCredentials(#[from] EnvParserError),
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
