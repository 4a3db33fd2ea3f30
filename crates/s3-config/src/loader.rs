//! Layered configuration loading
//!
//! Sources are merged lowest to highest priority:
//!
//! 1. Built-in defaults
//! 2. A config file (format picked from the extension: toml, json, yaml, ...)
//! 3. Environment variables prefixed with `S3_CONFIG_`, e.g.
//!    `S3_CONFIG_SERVICE_URL` or `S3_CONFIG_COMMUNICATION_PROTOCOL=http`

use crate::constants::ENV_PREFIX;
use crate::{ClientConfig, Result};
use ::config::{Config, Environment, File};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, instrument};

impl ClientConfig {
    /// Load configuration from defaults, an optional file and the process
    /// environment.
    ///
    /// The process environment is read as-is; binaries that want `.env`
    /// support load it before calling this.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_from(path, None)
    }

    /// Load configuration with an explicit environment.
    ///
    /// `env` replaces the process environment when given. A missing file
    /// is an error.
    #[instrument(skip(env))]
    pub fn load_from(path: Option<&Path>, env: Option<HashMap<String, String>>) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&ClientConfig::default())?);

        if let Some(path) = path {
            debug!("Reading config file {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .source(env.map(|vars| vars.into_iter().collect()));
        builder = builder.add_source(environment);

        let config: ClientConfig = builder.build()?.try_deserialize()?;
        debug!(
            service_url = config.service_url(),
            protocol = %config.communication_protocol(),
            "Loaded client config"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClientError, Protocol};

    fn env(vars: &[(&str, &str)]) -> HashMap<String, String> {
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_load_defaults_only() {
        let config = ClientConfig::load_from(None, Some(HashMap::new())).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_env_overrides() {
        let config = ClientConfig::load_from(
            None,
            Some(env(&[
                ("S3_CONFIG_SERVICE_URL", "localhost:9000"),
                ("S3_CONFIG_MAX_ERROR_RETRY", "0"),
                ("S3_CONFIG_COMMUNICATION_PROTOCOL", "HTTP"),
                ("S3_CONFIG_USE_SECURE_CREDENTIAL_STORAGE", "false"),
                ("S3_CONFIG_BUFFER_SIZE", "65536"),
                ("UNRELATED_BUFFER_SIZE", "1"),
            ])),
        )
        .unwrap();

        assert_eq!(config.service_url(), "localhost:9000");
        assert_eq!(config.max_error_retry(), 0);
        assert_eq!(config.communication_protocol(), Protocol::Http);
        assert!(!config.use_secure_credential_storage());
        assert_eq!(config.buffer_size(), 65536);
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = ClientConfig::load_from(
            Some(Path::new("/nonexistent/s3-config.toml")),
            Some(HashMap::new()),
        )
        .unwrap_err();
        assert!(matches!(err, ClientError::Load(_)));
    }

    #[test]
    fn test_bad_protocol_is_error() {
        let result = ClientConfig::load_from(
            None,
            Some(env(&[("S3_CONFIG_COMMUNICATION_PROTOCOL", "ftp")])),
        );
        assert!(result.is_err());
    }
}
