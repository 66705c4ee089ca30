use serde::Deserialize;

/// One variant record as the evaluation service returns it.
///
/// `value` is required; everything else the service sends (`key`,
/// experiment metadata, future fields) is ignored.
#[derive(Debug, Deserialize)]
pub struct WireVariant {
    pub value: String,
    #[serde(default)]
    pub payload: Option<serde_json::Value>,
}
