//! Checked, read-only view of a client configuration

use crate::constants::{sdk_user_agent, DEFAULT_ENDPOINT, DEFAULT_MAX_ERROR_RETRY};
use crate::{ClientConfig, ClientError, Protocol, Result};
use tracing::{debug, instrument, warn};

/// Settings a client reads when building requests.
///
/// Produced by [`ClientConfig::resolve`]. Unset fields are replaced by
/// their defaults and out-of-range numbers are rejected, so everything
/// here is ready to use. The snapshot is immutable and can be shared
/// between threads once the client is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    endpoint: String,
    user_agent: String,
    max_error_retry: u32,
    protocol: Protocol,
    use_secure_credential_storage: bool,
    buffer_size: usize,
}

impl ClientConfig {
    /// Resolve this configuration into a checked snapshot.
    ///
    /// An empty endpoint or user agent falls back to the default, as does a
    /// retry count of `-1`. Retry counts below `-1` and non-positive buffer
    /// sizes are errors.
    #[instrument(skip(self))]
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let endpoint = if self.is_service_url_set() {
            self.service_url().to_string()
        } else {
            warn!("service URL is not set, using {}", DEFAULT_ENDPOINT);
            DEFAULT_ENDPOINT.to_string()
        };

        let user_agent = if self.is_user_agent_set() {
            self.user_agent().to_string()
        } else {
            warn!("user agent is not set, using SDK default");
            sdk_user_agent()
        };

        let max_error_retry = if self.is_max_error_retry_set() {
            self.max_error_retry()
        } else if self.max_error_retry() == -1 {
            debug!("max error retry is unset, using {}", DEFAULT_MAX_ERROR_RETRY);
            DEFAULT_MAX_ERROR_RETRY
        } else {
            return Err(ClientError::Config(format!(
                "max_error_retry must be -1 or greater, got {}",
                self.max_error_retry()
            )));
        };

        let buffer_size = usize::try_from(self.buffer_size())
            .ok()
            .filter(|size| *size > 0)
            .ok_or_else(|| {
                ClientError::Config(format!(
                    "buffer_size must be positive, got {}",
                    self.buffer_size()
                ))
            })?;

        let resolved = ResolvedConfig {
            endpoint,
            user_agent,
            // Non-negative after the checks above
            max_error_retry: max_error_retry.unsigned_abs(),
            protocol: self.communication_protocol(),
            use_secure_credential_storage: self.use_secure_credential_storage(),
            buffer_size,
        };

        debug!("Resolved client config for {}", resolved.base_url());
        Ok(resolved)
    }
}

impl ResolvedConfig {
    /// Endpoint as configured, possibly without a scheme
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// User agent header value
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Retry budget per request
    pub fn max_error_retry(&self) -> u32 {
        self.max_error_retry
    }

    /// Transport protocol
    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Whether the secret key should be kept in protected storage
    pub fn use_secure_credential_storage(&self) -> bool {
        self.use_secure_credential_storage
    }

    /// I/O chunk size in bytes
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Build the base URL for API requests.
    ///
    /// An endpoint that already names a scheme keeps it; otherwise the
    /// configured protocol's scheme is prepended.
    pub fn base_url(&self) -> String {
        let endpoint = self.endpoint.trim_end_matches('/');
        if has_scheme(endpoint) {
            endpoint.to_string()
        } else {
            format!("{}://{}", self.protocol.scheme(), endpoint)
        }
    }

    /// Port requests are sent to.
    ///
    /// An explicit port in the endpoint wins; otherwise the well-known
    /// port of the scheme is used.
    pub fn port(&self) -> u16 {
        let base_url = self.base_url();
        let (scheme, rest) = base_url.split_once("://").unwrap_or(("", base_url.as_str()));
        let authority = rest.split('/').next().unwrap_or_default();
        let explicit = authority
            .rsplit_once(':')
            .filter(|(host, _)| !host.contains(':') || host.ends_with(']'))
            .and_then(|(_, port)| port.parse().ok());

        explicit.unwrap_or_else(|| match scheme.parse::<Protocol>() {
            Ok(protocol) => protocol.default_port(),
            Err(_) => self.protocol.default_port(),
        })
    }
}

fn has_scheme(endpoint: &str) -> bool {
    let lower = endpoint.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
