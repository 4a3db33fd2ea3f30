//! Client configuration error types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, ClientError>;

/// Configuration errors
///
/// The holder itself never produces these: setters accept any value.
/// They surface when a configuration is loaded or resolved for use.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unknown transport protocol name
    #[error("Invalid protocol: {0} (expected http or https)")]
    InvalidProtocol(String),

    /// Loading from file or environment failed
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),
}
