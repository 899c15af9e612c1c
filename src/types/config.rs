//! Client configuration types

use super::environment::Environment;
use crate::transport::HttpTransport;
use crate::{AcquiringError, Result};
use std::sync::Arc;
use std::time::Duration;

/// Terminal credentials issued by the gateway
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    terminal_key: String,
    password: String,
}

impl Credentials {
    /// Create a new credential pair
    pub fn new(terminal_key: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            terminal_key: terminal_key.into(),
            password: password.into(),
        }
    }

    /// Public terminal identifier
    pub fn terminal_key(&self) -> &str {
        &self.terminal_key
    }

    /// Shared secret used for signing
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("terminal_key", &self.terminal_key)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Acquiring client configuration
#[derive(Clone)]
pub struct ClientConfig {
    /// Terminal credentials
    pub credentials: Credentials,
    /// Gateway root URL, request paths are appended to it verbatim
    pub base_url: String,
    /// Default deadline for every call, used when the call's context sets none
    pub timeout: Option<Duration>,
    /// Custom transport; a `reqwest::Client` is built when absent
    pub transport: Option<Arc<dyn HttpTransport>>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field(
                "transport",
                &self.transport.as_ref().map(|_| "<transport>"),
            )
            .finish()
    }
}

impl ClientConfig {
    /// Create a config for the production gateway
    pub fn new(terminal_key: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(terminal_key, password),
            base_url: Environment::Production.base_url().to_string(),
            timeout: None,
            transport: None,
        }
    }

    /// Validate the client configuration
    pub fn validate(&self) -> Result<()> {
        if self.credentials.terminal_key().is_empty() {
            return Err(AcquiringError::config("Terminal key cannot be empty"));
        }

        if self.credentials.password().is_empty() {
            return Err(AcquiringError::config("Password cannot be empty"));
        }

        validate_base_url(&self.base_url)
    }

    /// Set the gateway root URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Point the client at a predefined environment
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.base_url = environment.base_url().to_string();
        self
    }

    /// Set the default per-call deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a custom transport
    pub fn with_transport<T: HttpTransport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }
}

/// Check that a gateway root URL is an absolute http(s) URL
pub(crate) fn validate_base_url(base_url: &str) -> Result<()> {
    if base_url.is_empty() {
        return Err(AcquiringError::config("Base URL cannot be empty"));
    }

    let parsed = url::Url::parse(base_url)
        .map_err(|e| AcquiringError::config(format!("Invalid base URL {}: {}", base_url, e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(AcquiringError::config(format!(
            "Base URL must use http or https, got {}",
            scheme
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::new("TK1", "pw");
        assert_eq!(config.base_url, "https://securepay.tinkoff.ru/v2");
        assert_eq!(config.timeout, None);
        assert!(config.transport.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("TK1", "pw")
            .with_environment(Environment::Test)
            .with_timeout(Duration::from_secs(10));
        assert_eq!(config.base_url, "https://rest-api-test.tinkoff.ru/v2");
        assert_eq!(config.timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_config_validation() {
        assert!(ClientConfig::new("", "pw").validate().is_err());
        assert!(ClientConfig::new("TK1", "").validate().is_err());
        assert!(ClientConfig::new("TK1", "pw")
            .with_base_url("")
            .validate()
            .is_err());
        assert!(ClientConfig::new("TK1", "pw")
            .with_base_url("ftp://example.com")
            .validate()
            .is_err());
        assert!(ClientConfig::new("TK1", "pw")
            .with_base_url("not a url")
            .validate()
            .is_err());
        assert!(ClientConfig::new("TK1", "pw")
            .with_base_url("http://127.0.0.1:8080/v2")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = ClientConfig::new("TK1", "super-secret");
        let printed = format!("{:?}", config);
        assert!(printed.contains("TK1"));
        assert!(!printed.contains("super-secret"));
    }
}
