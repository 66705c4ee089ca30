/// Error type returned by this crate.
///
/// All four variants are treated identically by the retry policy; once
/// attempts are exhausted, the error from the last attempt is the one the
/// caller sees.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    /// Network or request execution error from `reqwest`.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// An attempt exceeded its per-request deadline.
    #[error("fetch attempt timed out: {0}")]
    Timeout(reqwest::Error),
    /// Non-success HTTP status code with raw response body.
    #[error("http error {status}: {body}")]
    Http { status: u16, body: String },
    /// Response body was not a well-formed variant mapping.
    #[error("parse error: {0}")]
    Parse(String),
}
