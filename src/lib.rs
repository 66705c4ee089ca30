//! `experiment-http` is an async HTTP client for a remote feature-experiment
//! evaluation service.
//!
//! The crate wraps the `/sdk/vardata` endpoint with a single ergonomic method,
//! [`EvaluationClient::fetch`]: serialize a [`UserIdentity`], POST it to the
//! service, and return the assigned [`Variant`] per flag key. Failed attempts
//! (transport errors, timeouts, non-2xx responses, malformed bodies) are
//! retried with exponential backoff according to [`ClientConfig`].

mod backoff;
mod client;
mod config;
mod decode;
mod error;
mod user;
mod variant;
mod wire;

pub use backoff::{run_with_backoff, BackoffPolicy};
pub use client::EvaluationClient;
pub use config::ClientConfig;
pub use error::EvaluationError;
pub use user::UserIdentity;
pub use variant::{Variant, VariantMap};

pub type Result<T> = std::result::Result<T, EvaluationError>;
