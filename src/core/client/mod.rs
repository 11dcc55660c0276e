//! Public client surface + builder.
//! Internals are split into `retry` (policy + backoff) and `constants` (UA + defaults).

mod constants;
mod retry;

pub use retry::{Backoff, RetryConfig};

use crate::core::VsmeError;
use constants::{BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_COUNTRY, USER_AGENT};
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;
use url::Url;

/// Handle to the reporting API.
///
/// Cheap to clone; all clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct VsmeClient {
    http: Client,
    base_url: Url,
    country: String,
    retry: RetryConfig,
}

impl Default for VsmeClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl VsmeClient {
    /// Create a new builder.
    pub fn builder() -> VsmeClientBuilder {
        VsmeClientBuilder::default()
    }

    /// The API base every endpoint is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Country code sent with activity-based calculation requests.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// The client-wide retry policy.
    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /* -------- internal helpers used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Resolve a relative endpoint path (no leading slash) against the base.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, VsmeError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Send a request, retrying according to `retry_override` or the client policy.
    ///
    /// Requests whose body cannot be cloned (streamed uploads) are sent exactly once.
    pub(crate) async fn send_with_retry(
        &self,
        req: RequestBuilder,
        retry_override: Option<&RetryConfig>,
    ) -> Result<Response, VsmeError> {
        let cfg = retry_override.unwrap_or(&self.retry);
        let mut attempt = 0u32;

        loop {
            let Some(this_try) = req.try_clone() else {
                return Ok(req.send().await?);
            };

            match this_try.send().await {
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    if !cfg.should_retry_status(attempt, status) {
                        return Ok(resp);
                    }
                    #[cfg(feature = "tracing")]
                    tracing::debug!(status, attempt, url = %resp.url(), "retrying after status");
                }
                Err(e) => {
                    if !cfg.should_retry_error(attempt, &e) {
                        return Err(e.into());
                    }
                    #[cfg(feature = "tracing")]
                    tracing::debug!(attempt, error = %e, "retrying after transport error");
                }
            }

            tokio::time::sleep(cfg.backoff.delay(attempt)).await;
            attempt += 1;
        }
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct VsmeClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    country: Option<String>,
    retry: Option<RetryConfig>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl VsmeClientBuilder {
    /// Start from the environment: `VSME_API_URL` overrides the API base.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is set but is not a valid URL.
    pub fn from_env() -> Result<Self, VsmeError> {
        let mut builder = Self::default();
        if let Ok(raw) = std::env::var(BASE_URL_ENV)
            && !raw.trim().is_empty()
        {
            builder.base_url = Some(Url::parse(raw.trim())?);
        }
        Ok(builder)
    }

    /// Override the API base (e.g., `https://esg.example.com/api/`).
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Country code used for activity-based calculation requests. Default: `UK`.
    pub fn country(mut self, code: impl Into<String>) -> Self {
        self.country = Some(code.into());
        self
    }

    /// Set the client-wide retry policy. Default: disabled.
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default base URL cannot be parsed or the HTTP client fails to build.
    pub fn build(self) -> Result<VsmeClient, VsmeError> {
        let base_url = match self.base_url {
            Some(url) => with_trailing_slash(url),
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(VsmeClient {
            http: httpb.build()?,
            base_url,
            country: self.country.unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
            retry: self.retry.unwrap_or_default(),
        })
    }
}

/// `Url::join` drops the last path segment unless the base ends with `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
