//! Bridge configuration: Entrez base URL, identification, and request pacing.

use std::borrow::Cow;
use std::time::Duration;

use crate::error::GeneMcpError;

const EUTILS_BASE: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";
const EUTILS_BASE_ENV: &str = "GENEMCP_EUTILS_BASE";
const EMAIL_ENV: &str = "NCBI_EMAIL";
const API_KEY_ENV: &str = "NCBI_API_KEY";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable settings for one [`crate::bridge::Bridge`].
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Cow<'static, str>,
    pub email: Option<String>,
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub min_request_interval: Duration,
}

impl Config {
    /// Builds a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GeneMcpError::Configuration`] when `timeout` is zero.
    pub fn new(
        base_url: impl Into<Cow<'static, str>>,
        email: Option<String>,
        api_key: Option<String>,
        timeout: Duration,
        min_request_interval: Duration,
    ) -> Result<Self, GeneMcpError> {
        if timeout.is_zero() {
            return Err(GeneMcpError::Configuration(
                "timeout must be greater than zero".to_string(),
            ));
        }

        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(GeneMcpError::Configuration(
                "base URL must not be empty".to_string(),
            ));
        }

        Ok(Self {
            base_url,
            email: non_empty(email),
            api_key: non_empty(api_key),
            timeout,
            min_request_interval,
        })
    }

    /// Default configuration with environment fallbacks.
    ///
    /// `NCBI_EMAIL` and `NCBI_API_KEY` identify the caller to NCBI;
    /// `GENEMCP_EUTILS_BASE` overrides the E-utilities base URL.
    /// Without an API key NCBI allows 3 requests per second, with one 10.
    ///
    /// # Errors
    ///
    /// Returns [`GeneMcpError::Configuration`] when the environment override
    /// produces an invalid value.
    pub fn from_env() -> Result<Self, GeneMcpError> {
        let api_key = env_value(API_KEY_ENV);
        let interval = default_min_interval(api_key.is_some());
        Self::new(
            env_base(EUTILS_BASE, EUTILS_BASE_ENV),
            env_value(EMAIL_ENV),
            api_key,
            DEFAULT_TIMEOUT,
            interval,
        )
    }

    /// Returns `from_env` with the email/api key replaced when given.
    ///
    /// CLI flags take precedence over environment variables. Supplying an
    /// API key also moves the pacing to the keyed request budget.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Config::from_env`].
    pub fn from_env_with_overrides(
        email: Option<String>,
        api_key: Option<String>,
    ) -> Result<Self, GeneMcpError> {
        let mut config = Self::from_env()?;
        if let Some(email) = non_empty(email) {
            config.email = Some(email);
        }
        if let Some(api_key) = non_empty(api_key) {
            config.min_request_interval = default_min_interval(true);
            config.api_key = Some(api_key);
        }
        Ok(config)
    }
}

fn default_min_interval(has_api_key: bool) -> Duration {
    if has_api_key {
        Duration::from_millis(100)
    } else {
        Duration::from_millis(334)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn env_value(var: &str) -> Option<String> {
    non_empty(std::env::var(var).ok())
}

fn env_base(default: &'static str, env_var: &str) -> Cow<'static, str> {
    std::env::var(env_var)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(Cow::Owned)
        .unwrap_or_else(|| Cow::Borrowed(default))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config(timeout: Duration) -> Result<Config, GeneMcpError> {
        Config::new(
            EUTILS_BASE,
            None,
            None,
            timeout,
            Duration::from_millis(334),
        )
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = base_config(Duration::ZERO).expect_err("zero timeout should fail");
        assert!(matches!(err, GeneMcpError::Configuration(_)));
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let err = Config::new(
            "  ",
            None,
            None,
            DEFAULT_TIMEOUT,
            Duration::from_millis(334),
        )
        .expect_err("blank base URL should fail");
        assert!(matches!(err, GeneMcpError::Configuration(_)));
    }

    #[test]
    fn blank_credentials_normalize_to_none() {
        let config = Config::new(
            EUTILS_BASE,
            Some("   ".to_string()),
            Some(String::new()),
            DEFAULT_TIMEOUT,
            Duration::ZERO,
        )
        .expect("config");
        assert_eq!(config.email, None);
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn interval_defaults_are_key_aware() {
        assert_eq!(default_min_interval(false), Duration::from_millis(334));
        assert_eq!(default_min_interval(true), Duration::from_millis(100));
    }

    #[test]
    fn overrides_take_precedence_and_tighten_interval() {
        let config = Config::from_env_with_overrides(
            Some("curator@example.org".to_string()),
            Some("abc123".to_string()),
        )
        .expect("config");
        assert_eq!(config.email.as_deref(), Some("curator@example.org"));
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.min_request_interval, Duration::from_millis(100));
    }
}
