use std::collections::HashMap;

use crate::{wire, EvaluationError, Variant, VariantMap};

/// Decodes a fetch response body into a [`VariantMap`].
///
/// An empty body decodes to an empty map, not an error.
pub(crate) fn decode_variant_response(body: &str) -> Result<VariantMap, EvaluationError> {
    if body.trim().is_empty() {
        return Ok(VariantMap::new());
    }
    let records: HashMap<String, wire::WireVariant> = serde_json::from_str(body)
        .map_err(|err| EvaluationError::Parse(format!("invalid variant response JSON: {err}")))?;
    Ok(records
        .into_iter()
        .map(|(key, record)| {
            (
                key,
                Variant {
                    value: record.value,
                    payload: record.payload,
                },
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::decode_variant_response;
    use crate::EvaluationError;

    #[test]
    fn decodes_value_and_payload_per_key() {
        let body = json!({
            "checkout-redesign": { "value": "treatment", "payload": { "color": "teal" } },
            "new-onboarding": { "value": "control" }
        })
        .to_string();

        let variants = decode_variant_response(&body).expect("must decode");
        assert_eq!(variants.len(), 2);
        assert_eq!(variants["checkout-redesign"].value, "treatment");
        assert_eq!(
            variants["checkout-redesign"].payload,
            Some(json!({ "color": "teal" }))
        );
        assert_eq!(variants["new-onboarding"].value, "control");
        assert_eq!(variants["new-onboarding"].payload, None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let body = json!({
            "flag": { "key": "treatment", "value": "on", "expKey": "exp-1" }
        })
        .to_string();

        let variants = decode_variant_response(&body).expect("must decode");
        assert_eq!(variants["flag"].value, "on");
    }

    #[test]
    fn empty_body_decodes_to_empty_map() {
        assert!(decode_variant_response("").expect("must decode").is_empty());
        assert!(decode_variant_response("  ").expect("must decode").is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = decode_variant_response("not json").expect_err("must fail");
        assert!(matches!(err, EvaluationError::Parse(_)));
    }

    #[test]
    fn record_without_value_is_a_parse_error() {
        let body = json!({ "flag": { "payload": 1 } }).to_string();
        let err = decode_variant_response(&body).expect_err("must fail");
        assert!(matches!(err, EvaluationError::Parse(_)));
    }
}
