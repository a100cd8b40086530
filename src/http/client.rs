//! Shared REST core: `RestClient`.
//!
//! Owns the `reqwest::Client`, the base URL, an optional bearer token and the
//! retry loop. The endpoint clients (`AggregatorHttp`, `HorizonHttp`) build
//! paths and query structs on top of it.

use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};

use async_lock::RwLock;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Low-level REST client for one API host. Clones share the bearer token.
#[derive(Clone)]
pub struct RestClient {
    base_url: String,
    client: Client,
    /// Bearer token. NEVER exposed publicly.
    auth_token: Arc<RwLock<Option<String>>>,
    idempotent: RetryConfig,
}

impl RestClient {
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(Duration::from_secs(30))
                .pool_max_idle_per_host(10);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
            auth_token: Arc::new(RwLock::new(None)),
            idempotent: RetryConfig::idempotent(),
        })
    }

    /// Override the config used for `RetryPolicy::Idempotent`.
    pub fn with_idempotent_retry(mut self, config: RetryConfig) -> Self {
        self.idempotent = config;
        self
    }

    /// Pre-set the bearer token on construction.
    pub fn with_auth_token(self, token: Option<String>) -> Self {
        Self {
            auth_token: Arc::new(RwLock::new(token.filter(|t| !t.is_empty()))),
            ..self
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn set_auth_token(&self, token: Option<String>) {
        *self.auth_token.write().await = token.filter(|t| !t.is_empty());
    }

    pub(crate) async fn has_auth_token(&self) -> bool {
        self.auth_token.read().await.is_some()
    }

    /// `{base_url}{path}` plus an url-encoded query string when one is given.
    pub(crate) fn url<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: Option<&Q>,
    ) -> Result<String, HttpError> {
        let mut url = format!("{}{}", self.base_url, path);
        if let Some(q) = query {
            let encoded = serde_urlencoded::to_string(q)?;
            if !encoded.is_empty() {
                url = format!("{}?{}", url, encoded);
            }
        }
        Ok(url)
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::GET, url, None::<&()>, retry)
            .await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::POST, url, Some(body), retry)
            .await
    }

    async fn request_with_retry<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match retry {
            RetryPolicy::None => return self.do_request(&method, url, body).await,
            RetryPolicy::Idempotent => self.idempotent.clone(),
            RetryPolicy::Custom(config) => config,
        };

        let mut attempt = 0;
        loop {
            let error = match self.do_request::<T, B>(&method, url, body).await {
                Ok(resp) => return Ok(resp),
                Err(e) => e,
            };

            if !config.should_retry(&error) {
                return Err(error);
            }
            if attempt >= config.max_retries {
                tracing::warn!(%method, url, attempts = attempt + 1, error = %error, "Giving up on request");
                return Err(HttpError::MaxRetriesExceeded {
                    attempts: attempt + 1,
                    last_error: error.to_string(),
                });
            }

            let delay = config.delay_for(attempt, &error);
            tracing::debug!(
                %method,
                url,
                attempt = attempt + 1,
                max = config.max_retries,
                delay_ms = delay.as_millis() as u64,
                error = %error,
                "Retrying request"
            );
            futures_timer::Delay::new(delay).await;
            attempt += 1;
        }
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let mut req = self
            .client
            .request(method.clone(), url)
            .header("Accept", "application/json");
        if let Some(token) = self.auth_token.read().await.as_deref() {
            req = req.bearer_auth(token);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        if resp.status().is_success() {
            return Ok(resp.json::<T>().await?);
        }

        let retry_after_secs = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());
        let body = resp.text().await.unwrap_or_default();
        Err(status_error(status, retry_after_secs, body))
    }
}

/// Map a non-success status onto `HttpError`.
fn status_error(status: u16, retry_after_secs: Option<u64>, body: String) -> HttpError {
    match status {
        401 | 403 => HttpError::Unauthorized,
        404 => HttpError::NotFound(body),
        408 => HttpError::Timeout,
        429 => HttpError::RateLimited {
            retry_after_ms: retry_after_secs.map(|s| s.saturating_mul(1000)),
        },
        400..=499 => HttpError::BadRequest(body),
        _ => HttpError::ServerError { status, body },
    }
}
