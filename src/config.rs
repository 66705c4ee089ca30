/// Endpoint, timeout, and retry configuration for [`crate::EvaluationClient`].
///
/// Set once at client construction and never mutated afterward.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the evaluation service. The client appends `/sdk/vardata`.
    pub server_url: String,
    /// Per-attempt timeout in milliseconds, bounding the entire
    /// request/response cycle.
    pub fetch_timeout_ms: u64,
    /// Number of retries after the initial attempt. `0` disables retry.
    pub fetch_retries: u32,
    /// Delay before the first retry, in milliseconds.
    pub retry_backoff_min_ms: u64,
    /// Upper bound on any retry delay, in milliseconds.
    pub retry_backoff_max_ms: u64,
    /// Multiplier applied to the delay after each retry. `1.0` yields a
    /// constant delay of `retry_backoff_min_ms`.
    pub retry_backoff_scalar: f64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: "https://api.experiment.neuralforge.one".to_owned(),
            fetch_timeout_ms: 10_000,
            fetch_retries: 8,
            retry_backoff_min_ms: 500,
            retry_backoff_max_ms: 10_000,
            retry_backoff_scalar: 1.5,
        }
    }
}
