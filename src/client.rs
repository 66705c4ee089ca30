use std::fmt;
use std::time::Duration;

use reqwest::header;

use crate::{
    backoff::{run_with_backoff, BackoffPolicy},
    decode::decode_variant_response,
    ClientConfig, EvaluationError, Result, UserIdentity, VariantMap,
};

/// HTTP client for the remote evaluation `/sdk/vardata` endpoint.
///
/// The client holds an immutable [`ClientConfig`] and a shared `reqwest`
/// connection pool; [`fetch`](EvaluationClient::fetch) may be called
/// concurrently from any number of tasks on one instance.
#[derive(Clone)]
pub struct EvaluationClient {
    http: reqwest::Client,
    api_key: String,
    config: ClientConfig,
    backoff: BackoffPolicy,
}

impl fmt::Debug for EvaluationClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvaluationClient")
            .field("api_key", &"<redacted>")
            .field("config", &self.config)
            .finish()
    }
}

impl EvaluationClient {
    /// Creates a client with the default [`ClientConfig`].
    pub fn new(api_key: impl Into<String>) -> Self {
        let config = ClientConfig::default();
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            backoff: BackoffPolicy::from_config(&config),
            config,
        }
    }

    /// Creates a client from environment variables.
    ///
    /// Reads:
    /// - `EXPERIMENT_API_KEY` — the deployment API key (required)
    /// - `EXPERIMENT_SERVER_URL` — base URL override (optional)
    ///
    /// Returns an error if the API key is missing or empty.
    pub fn from_env() -> std::result::Result<Self, String> {
        let api_key = std::env::var("EXPERIMENT_API_KEY")
            .map_err(|_| "missing EXPERIMENT_API_KEY environment variable".to_owned())?;
        if api_key.trim().is_empty() {
            return Err("EXPERIMENT_API_KEY is set but empty".to_owned());
        }
        let mut client = Self::new(api_key);
        if let Ok(url) = std::env::var("EXPERIMENT_SERVER_URL") {
            if !url.trim().is_empty() {
                let mut config = client.config.clone();
                config.server_url = url;
                client = client.with_config(config);
            }
        }
        Ok(client)
    }

    /// Applies endpoint, timeout, and retry configuration.
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.backoff = BackoffPolicy::from_config(&config);
        self.config = config;
        self
    }

    /// Fetches variant assignments for `user`.
    ///
    /// Performs one attempt; on failure, if `fetch_retries > 0`, the same
    /// request is retried under the configured backoff policy. Retries are
    /// strictly sequential and each retry is a fresh request. The error
    /// surfaced after exhaustion is the one from the final attempt.
    pub async fn fetch(&self, user: &UserIdentity) -> Result<VariantMap> {
        match self.do_fetch(user).await {
            Ok(variants) => Ok(variants),
            Err(err) if self.config.fetch_retries > 0 => {
                tracing::debug!(error = %err, "first fetch attempt failed, retrying with backoff");
                run_with_backoff(self.backoff, || self.do_fetch(user)).await
            }
            Err(err) => Err(err),
        }
    }

    /// One attempt: build, send, and decode a single request under the
    /// configured timeout.
    async fn do_fetch(&self, user: &UserIdentity) -> Result<VariantMap> {
        if !user.has_identity() {
            tracing::warn!(
                "user id and device id are both absent; the service may not resolve this identity"
            );
        }
        tracing::debug!(?user, "fetching variants");

        let response = self
            .http
            .post(self.vardata_url())
            .header(header::AUTHORIZATION, format!("Api-Key {}", self.api_key))
            .header(header::CONTENT_TYPE, "application/json")
            .timeout(Duration::from_millis(self.config.fetch_timeout_ms))
            .json(user)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(classify_transport_error)?;
        tracing::debug!(status = status.as_u16(), "received fetch response");

        if !status.is_success() {
            return Err(EvaluationError::Http {
                status: status.as_u16(),
                body,
            });
        }
        decode_variant_response(&body)
    }

    fn vardata_url(&self) -> String {
        format!(
            "{}/sdk/vardata",
            self.config.server_url.trim_end_matches('/')
        )
    }
}

/// The per-attempt deadline also surfaces as a `reqwest::Error`; split it out
/// so callers can tell a timeout from other transport failures.
fn classify_transport_error(err: reqwest::Error) -> EvaluationError {
    if err.is_timeout() {
        EvaluationError::Timeout(err)
    } else {
        EvaluationError::Transport(err)
    }
}
