use std::collections::HashMap;

use serde::Serialize;

/// The user a variant fetch evaluates against.
///
/// All fields are optional; absent fields are omitted from the request body.
/// A user without both `user_id` and `device_id` is still sent, but the
/// service may not be able to resolve its identity — [`fetch`] logs a warning
/// in that case.
///
/// [`fetch`]: crate::EvaluationClient::fetch
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UserIdentity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    /// Arbitrary additional properties evaluated by targeting rules.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub user_properties: HashMap<String, serde_json::Value>,
}

impl UserIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_device_id(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    pub fn with_user_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.user_properties.insert(key.into(), value.into());
        self
    }

    pub(crate) fn has_identity(&self) -> bool {
        self.user_id.is_some() || self.device_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::UserIdentity;

    #[test]
    fn absent_fields_are_omitted_from_the_body() {
        let user = UserIdentity::new().with_user_id("u-1");
        let body = serde_json::to_string(&user).expect("must serialize");
        assert_eq!(body, r#"{"user_id":"u-1"}"#);
    }

    #[test]
    fn empty_user_serializes_to_empty_object() {
        let body = serde_json::to_string(&UserIdentity::new()).expect("must serialize");
        assert_eq!(body, "{}");
    }

    #[test]
    fn user_properties_round_into_the_body() {
        let user = UserIdentity::new()
            .with_device_id("d-1")
            .with_user_property("plan", "premium");
        let body: serde_json::Value =
            serde_json::to_value(&user).expect("must serialize");
        assert_eq!(body["device_id"], "d-1");
        assert_eq!(body["user_properties"]["plan"], "premium");
    }

    #[test]
    fn has_identity_requires_user_or_device_id() {
        assert!(!UserIdentity::new().has_identity());
        assert!(UserIdentity::new().with_user_id("u").has_identity());
        assert!(UserIdentity::new().with_device_id("d").has_identity());
    }
}
