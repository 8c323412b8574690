//! Client configuration.
//!
//! [`CnpConfig`] carries the credentials and endpoint the client needs for
//! every envelope. It can be built directly, deserialized from TOML, or
//! loaded from environment variables.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::{CnpError, Result};

/// Environment variable holding the API username.
pub const ENV_USER: &str = "CNP_USER";
/// Environment variable holding the API password.
pub const ENV_PASSWORD: &str = "CNP_PASSWORD";
/// Environment variable holding the merchant identifier.
pub const ENV_MERCHANT_ID: &str = "CNP_MERCHANT_ID";
/// Environment variable holding the endpoint URL.
pub const ENV_API_BASE: &str = "CNP_API_BASE";

/// Connection settings for the Worldpay CNP online endpoint.
///
/// # Examples
///
/// ```
/// use worldpay_cnp::CnpConfig;
///
/// let toml = r#"
///     user = "merchant-user"
///     password = "secret"
///     merchant_id = "100"
///     api_base = "https://www.testvantivcnp.com/sandbox/communicator/online"
/// "#;
///
/// let config: CnpConfig = toml::from_str(toml).unwrap();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CnpConfig {
    /// API username (`authentication/user` in the envelope).
    pub user: String,

    /// API password (`authentication/password` in the envelope).
    pub password: String,

    /// Merchant identifier (`merchantId` attribute on the envelope).
    pub merchant_id: String,

    /// Full URL of the online transaction endpoint.
    pub api_base: String,
}

impl CnpConfig {
    /// Creates a configuration from explicit values.
    pub fn new(
        user: impl Into<String>,
        password: impl Into<String>,
        merchant_id: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
            merchant_id: merchant_id.into(),
            api_base: api_base.into(),
        }
    }

    /// Loads the configuration from `CNP_*` environment variables.
    ///
    /// Reads [`ENV_USER`], [`ENV_PASSWORD`], [`ENV_MERCHANT_ID`], and
    /// [`ENV_API_BASE`].
    ///
    /// # Errors
    ///
    /// Returns [`CnpError::Config`] naming the first missing variable.
    pub fn from_env() -> Result<Self> {
        let var = |name: &str| {
            std::env::var(name)
                .map_err(|_| CnpError::Config(format!("environment variable {name} is not set")))
        };

        Ok(Self {
            user: var(ENV_USER)?,
            password: var(ENV_PASSWORD)?,
            merchant_id: var(ENV_MERCHANT_ID)?,
            api_base: var(ENV_API_BASE)?,
        })
    }

    /// Validates the configuration.
    ///
    /// Checks that the credentials and merchant id are non-empty and that
    /// the endpoint is a parseable absolute URL. The URL scheme is not
    /// restricted here; the client warns on non-HTTPS endpoints at submit
    /// time so local mock servers stay usable.
    ///
    /// # Errors
    ///
    /// Returns [`CnpError::Config`] describing the first failing field.
    pub fn validate(&self) -> Result<()> {
        if self.user.is_empty() {
            return Err(CnpError::Config("user must not be empty".to_owned()));
        }
        if self.password.is_empty() {
            return Err(CnpError::Config("password must not be empty".to_owned()));
        }
        if self.merchant_id.is_empty() {
            return Err(CnpError::Config("merchant_id must not be empty".to_owned()));
        }
        if self.api_base.is_empty() {
            return Err(CnpError::Config("api_base must not be empty".to_owned()));
        }

        let url = Url::parse(&self.api_base)
            .map_err(|e| CnpError::Config(format!("invalid api_base '{}': {e}", self.api_base)))?;

        if url.host_str().is_none() {
            return Err(CnpError::Config(format!("api_base is missing a host: {}", self.api_base)));
        }

        Ok(())
    }

    /// Whether the endpoint uses HTTPS.
    ///
    /// Only meaningful after [`validate`](Self::validate) has passed.
    pub(crate) fn is_https(&self) -> bool {
        Url::parse(&self.api_base).map(|u| u.scheme() == "https").unwrap_or(false)
    }
}

/// HTTP transport settings.
///
/// Tunes the underlying reqwest client. [`CnpClient::new`] uses a shared
/// pooled client with these defaults; construct via
/// [`CnpClient::with_http_config`] to override them.
///
/// [`CnpClient::new`]: crate::CnpClient::new
/// [`CnpClient::with_http_config`]: crate::CnpClient::with_http_config
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Maximum idle connections kept per host.
    pub pool_max_idle_per_host: usize,

    /// Total request timeout in seconds.
    pub timeout_secs: u64,

    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { pool_max_idle_per_host: 10, timeout_secs: 30, connect_timeout_secs: 10 }
    }
}

impl HttpConfig {
    /// Total request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connection timeout as a [`Duration`].
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> CnpConfig {
        CnpConfig::new(
            "username",
            "password",
            "100",
            "https://www.testvantivcnp.com/sandbox/communicator/online",
        )
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_config_from_toml() {
        let toml = r#"
            user = "merchant-user"
            password = "secret"
            merchant_id = "042"
            api_base = "https://payments.example.com/online"
        "#;

        let config: CnpConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.user, "merchant-user");
        assert_eq!(config.merchant_id, "042");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_toml_field_rejected() {
        let toml = r#"
            user = "merchant-user"
            password = "secret"
        "#;
        let result: std::result::Result<CnpConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    // The only test touching CNP_* variables; keep it that way, since the
    // process environment is shared across the test binary.
    #[test]
    fn test_from_env_loads_and_names_missing_variable() {
        std::env::set_var(ENV_USER, "env-user");
        std::env::set_var(ENV_PASSWORD, "env-pass");
        std::env::set_var(ENV_MERCHANT_ID, "100");
        std::env::set_var(ENV_API_BASE, "https://payments.example.com/online");

        let config = CnpConfig::from_env().unwrap();
        assert_eq!(config.user, "env-user");
        assert_eq!(config.password, "env-pass");
        assert_eq!(config.merchant_id, "100");
        assert!(config.validate().is_ok());

        std::env::remove_var(ENV_MERCHANT_ID);
        let err = CnpConfig::from_env().unwrap_err();
        assert!(matches!(err, CnpError::Config(_)));
        assert!(err.to_string().contains(ENV_MERCHANT_ID));

        std::env::remove_var(ENV_USER);
        std::env::remove_var(ENV_PASSWORD);
        std::env::remove_var(ENV_API_BASE);
    }

    #[test]
    fn test_empty_user_rejected() {
        let config = CnpConfig { user: String::new(), ..valid_config() };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("user"));
    }

    #[test]
    fn test_empty_password_rejected() {
        let config = CnpConfig { password: String::new(), ..valid_config() };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("password"));
    }

    #[test]
    fn test_empty_merchant_id_rejected() {
        let config = CnpConfig { merchant_id: String::new(), ..valid_config() };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("merchant_id"));
    }

    #[test]
    fn test_unparseable_api_base_rejected() {
        let config = CnpConfig { api_base: "not a url".to_owned(), ..valid_config() };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("api_base"));
    }

    #[test]
    fn test_http_api_base_allowed() {
        // Non-HTTPS endpoints validate; the client only warns.
        let config = CnpConfig { api_base: "http://127.0.0.1:8080/online".to_owned(), ..valid_config() };
        assert!(config.validate().is_ok());
        assert!(!config.is_https());
    }

    #[test]
    fn test_is_https() {
        assert!(valid_config().is_https());
    }

    #[test]
    fn test_http_config_defaults() {
        let config = HttpConfig::default();
        assert_eq!(config.pool_max_idle_per_host, 10);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.connect_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_http_config_from_toml() {
        let toml = r#"
            pool_max_idle_per_host = 4
            timeout_secs = 60
            connect_timeout_secs = 5
        "#;

        let config: HttpConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.pool_max_idle_per_host, 4);
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }
}
