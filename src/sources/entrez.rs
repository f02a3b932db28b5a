use std::sync::Arc;

use crate::config::Config;
use crate::error::GeneMcpError;
use crate::sources::rate_limit::RateLimiter;

const TOOL_NAME: &str = "genemcp-cli";

/// The three E-utilities endpoints the bridge speaks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endpoint {
    Search,
    Summary,
    Fetch,
}

impl Endpoint {
    fn path(self) -> &'static str {
        match self {
            Self::Search => "esearch.fcgi",
            Self::Summary => "esummary.fcgi",
            Self::Fetch => "efetch.fcgi",
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Search => "esearch",
            Self::Summary => "esummary",
            Self::Fetch => "efetch",
        }
    }
}

/// Issues single rate-limited GET requests against the E-utilities.
///
/// One attempt per call; retry policy is deliberately absent. The limiter
/// is shared so every request in the process draws from the same budget.
#[derive(Debug, Clone)]
pub(crate) struct EntrezClient {
    client: reqwest::Client,
    config: Config,
    limiter: Arc<RateLimiter>,
}

impl EntrezClient {
    pub(crate) fn new(config: Config) -> Result<Self, GeneMcpError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("genemcp-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(GeneMcpError::HttpClientInit)?;

        let limiter = Arc::new(RateLimiter::new(config.min_request_interval));
        Ok(Self {
            client,
            config,
            limiter,
        })
    }

    fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.path()
        )
    }

    /// Performs one `GET {base}/{endpoint}.fcgi` call and decodes the body
    /// as JSON. Caller-supplied `params` are merged with the fixed
    /// parameters (`retmode=json`, `tool`, optional `email`/`api_key`).
    pub(crate) async fn request(
        &self,
        endpoint: Endpoint,
        db: &str,
        params: &[(&str, &str)],
    ) -> Result<serde_json::Value, GeneMcpError> {
        self.limiter.acquire().await;

        let mut req = self
            .client
            .get(self.endpoint_url(endpoint))
            .query(&[("db", db)])
            .query(params)
            .query(&[("retmode", "json"), ("tool", TOOL_NAME)]);
        if let Some(email) = self.config.email.as_deref() {
            req = req.query(&[("email", email)]);
        }
        if let Some(api_key) = self.config.api_key.as_deref() {
            req = req.query(&[("api_key", api_key)]);
        }

        tracing::debug!(endpoint = endpoint.name(), db, "entrez request");

        let resp = req.send().await.map_err(|err| {
            if err.is_timeout() {
                GeneMcpError::Timeout {
                    endpoint: endpoint.name().to_string(),
                }
            } else {
                GeneMcpError::Http(err)
            }
        })?;

        let status = resp.status();
        let bytes = resp.bytes().await.map_err(|err| {
            if err.is_timeout() {
                GeneMcpError::Timeout {
                    endpoint: endpoint.name().to_string(),
                }
            } else {
                GeneMcpError::Http(err)
            }
        })?;

        if !status.is_success() {
            return Err(GeneMcpError::Api {
                endpoint: endpoint.name().to_string(),
                status: status.as_u16(),
                body: crate::sources::body_excerpt(&bytes),
            });
        }

        serde_json::from_slice(&bytes).map_err(|source| GeneMcpError::Protocol {
            endpoint: endpoint.name().to_string(),
            source,
        })
    }
}
