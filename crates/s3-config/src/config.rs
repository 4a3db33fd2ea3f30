//! Client configuration

use crate::constants::{sdk_user_agent, DEFAULT_BUFFER_SIZE, DEFAULT_ENDPOINT, DEFAULT_MAX_ERROR_RETRY};
use crate::Protocol;
use serde::{Deserialize, Serialize};

/// Configuration for an S3 client.
///
/// A plain settings holder: every field starts with a default, and the
/// setters accept any value without validation. Consumers that need
/// checked values should go through [`ClientConfig::resolve`].
///
/// The `with_*` setters return the receiver so calls can be chained:
///
/// ```
/// use s3_config::{ClientConfig, Protocol};
///
/// let mut config = ClientConfig::new();
/// config
///     .with_service_url("minio.local:9000")
///     .with_communication_protocol(Protocol::Http)
///     .with_max_error_retry(5);
///
/// assert_eq!(config.service_url(), "minio.local:9000");
/// assert_eq!(config.max_error_retry(), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    service_url: String,
    user_agent: String,
    max_error_retry: i32,
    communication_protocol: Protocol,
    use_secure_credential_storage: bool,
    buffer_size: i32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let user_agent = sdk_user_agent();

        tracing::debug!("get default user-agent: {}", user_agent);

        Self {
            service_url: DEFAULT_ENDPOINT.to_string(),
            user_agent,
            max_error_retry: DEFAULT_MAX_ERROR_RETRY,
            communication_protocol: Protocol::Https,
            use_secure_credential_storage: true,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl ClientConfig {
    /// Create a config holding the default values
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Service URL ====================

    /// Endpoint the client sends requests to
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Set the endpoint
    pub fn set_service_url(&mut self, service_url: impl Into<String>) {
        self.service_url = service_url.into();
    }

    /// Set the endpoint and return this config
    pub fn with_service_url(&mut self, service_url: impl Into<String>) -> &mut Self {
        self.set_service_url(service_url);
        self
    }

    /// Check if the endpoint is set (non-empty)
    pub(crate) fn is_service_url_set(&self) -> bool {
        !self.service_url.is_empty()
    }

    // ==================== User Agent ====================

    /// User agent sent with every request
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Set the user agent
    pub fn set_user_agent(&mut self, user_agent: impl Into<String>) {
        self.user_agent = user_agent.into();
    }

    /// Set the user agent and return this config
    pub fn with_user_agent(&mut self, user_agent: impl Into<String>) -> &mut Self {
        self.set_user_agent(user_agent);
        self
    }

    /// Check if the user agent is set (non-empty)
    pub(crate) fn is_user_agent_set(&self) -> bool {
        !self.user_agent.is_empty()
    }

    // ==================== Max Error Retry ====================

    /// Number of times a failed request is retried
    pub fn max_error_retry(&self) -> i32 {
        self.max_error_retry
    }

    /// Set the retry count
    pub fn set_max_error_retry(&mut self, max_error_retry: i32) {
        self.max_error_retry = max_error_retry;
    }

    /// Set the retry count and return this config
    pub fn with_max_error_retry(&mut self, max_error_retry: i32) -> &mut Self {
        self.set_max_error_retry(max_error_retry);
        self
    }

    /// Check if the retry count is set.
    ///
    /// `-1` and below count as unset; zero is a valid count.
    pub(crate) fn is_max_error_retry_set(&self) -> bool {
        self.max_error_retry > -1
    }

    // ==================== Communication Protocol ====================

    /// Whether requests go over HTTP or HTTPS. Defaults to HTTPS.
    pub fn communication_protocol(&self) -> Protocol {
        self.communication_protocol
    }

    /// Set the protocol
    pub fn set_communication_protocol(&mut self, protocol: Protocol) {
        self.communication_protocol = protocol;
    }

    /// Set the protocol and return this config
    pub fn with_communication_protocol(&mut self, protocol: Protocol) -> &mut Self {
        self.set_communication_protocol(protocol);
        self
    }

    // ==================== Secure Credential Storage ====================

    /// Whether the client should keep the secret key in protected storage.
    ///
    /// Advisory only; this config never holds a secret. Turning it off
    /// lets a client run where protected storage is unavailable, at the
    /// cost of keeping the key in ordinary memory.
    pub fn use_secure_credential_storage(&self) -> bool {
        self.use_secure_credential_storage
    }

    /// Set the secure storage flag
    pub fn set_use_secure_credential_storage(&mut self, secure: bool) {
        self.use_secure_credential_storage = secure;
    }

    /// Set the secure storage flag and return this config
    pub fn with_use_secure_credential_storage(&mut self, secure: bool) -> &mut Self {
        self.set_use_secure_credential_storage(secure);
        self
    }

    // ==================== Buffer Size ====================

    /// Chunk size (bytes) for reading input streams and writing request bodies
    pub fn buffer_size(&self) -> i32 {
        self.buffer_size
    }

    /// Set the buffer size
    pub fn set_buffer_size(&mut self, buffer_size: i32) {
        self.buffer_size = buffer_size;
    }

    /// Set the buffer size and return this config
    pub fn with_buffer_size(&mut self, buffer_size: i32) -> &mut Self {
        self.set_buffer_size(buffer_size);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new();
        assert_eq!(config.service_url(), DEFAULT_ENDPOINT);
        assert_eq!(config.user_agent(), sdk_user_agent());
        assert_eq!(config.max_error_retry(), 3);
        assert_eq!(config.communication_protocol(), Protocol::Https);
        assert!(config.use_secure_credential_storage());
        assert_eq!(config.buffer_size(), DEFAULT_BUFFER_SIZE);
        assert_eq!(config, ClientConfig::default());
    }

    #[rstest]
    #[case("", false)]
    #[case("https://custom.example.com", true)]
    #[case(" ", true)]
    fn test_is_service_url_set(#[case] url: &str, #[case] expected: bool) {
        let mut config = ClientConfig::new();
        config.set_service_url(url);
        assert_eq!(config.is_service_url_set(), expected);
    }

    #[test]
    fn test_is_user_agent_set() {
        let mut config = ClientConfig::new();
        assert!(config.is_user_agent_set());
        config.set_user_agent("");
        assert!(!config.is_user_agent_set());
        config.with_user_agent("my-app/2.0");
        assert!(config.is_user_agent_set());
    }

    #[rstest]
    #[case(3, true)]
    #[case(0, true)]
    #[case(-1, false)]
    #[case(i32::MIN, false)]
    #[case(i32::MAX, true)]
    fn test_is_max_error_retry_set(#[case] retries: i32, #[case] expected: bool) {
        let mut config = ClientConfig::new();
        config.set_max_error_retry(retries);
        assert_eq!(config.max_error_retry(), retries);
        assert_eq!(config.is_max_error_retry_set(), expected);
    }

    #[test]
    fn test_with_returns_same_instance() {
        let mut config = ClientConfig::new();
        let addr: *const ClientConfig = &config;

        let returned = config.with_service_url("a").with_user_agent("b");
        assert!(std::ptr::eq(returned, addr));

        let returned = config.with_max_error_retry(7);
        assert!(std::ptr::eq(returned, addr));
        let returned = config.with_communication_protocol(Protocol::Http);
        assert!(std::ptr::eq(returned, addr));
        let returned = config.with_use_secure_credential_storage(false);
        assert!(std::ptr::eq(returned, addr));
        let returned = config.with_buffer_size(1);
        assert!(std::ptr::eq(returned, addr));
    }

    #[test]
    fn test_setters_accept_invalid_values() {
        let mut config = ClientConfig::new();
        config.set_buffer_size(-4096);
        config.set_max_error_retry(-10);
        config.set_service_url("");
        assert_eq!(config.buffer_size(), -4096);
        assert_eq!(config.max_error_retry(), -10);
        assert_eq!(config.service_url(), "");
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"service_url": "localhost:9000", "communication_protocol": "HTTP"}"#)
                .unwrap();
        assert_eq!(config.service_url(), "localhost:9000");
        assert_eq!(config.communication_protocol(), Protocol::Http);
        assert_eq!(config.max_error_retry(), 3);
        assert_eq!(config.buffer_size(), DEFAULT_BUFFER_SIZE);
        assert!(config.use_secure_credential_storage());
    }
}
