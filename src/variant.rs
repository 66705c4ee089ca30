use std::collections::HashMap;

/// The assigned treatment for one flag or experiment key.
#[derive(Clone, Debug, PartialEq)]
pub struct Variant {
    /// The variant value, e.g. `"on"`, `"control"`, `"treatment"`.
    pub value: String,
    /// Optional structured payload attached to the variant.
    pub payload: Option<serde_json::Value>,
}

/// Fetch result: flag key mapped to its assigned [`Variant`]. Unordered.
pub type VariantMap = HashMap<String, Variant>;
