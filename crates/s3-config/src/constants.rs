//! Provider and SDK defaults

/// Default S3 endpoint (host only, the scheme comes from the protocol)
pub const DEFAULT_ENDPOINT: &str = "s3.amazonaws.com";

/// Default buffer size for streaming reads and writes (bytes)
pub const DEFAULT_BUFFER_SIZE: i32 = 8192;

/// Default number of retries for a failed request
pub const DEFAULT_MAX_ERROR_RETRY: i32 = 3;

/// Prefix for environment variable overrides, e.g. `S3_CONFIG_SERVICE_URL`
pub const ENV_PREFIX: &str = "S3_CONFIG";

/// SDK default user agent string
pub fn sdk_user_agent() -> String {
    format!(
        "s3-config/{} ({}; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}
