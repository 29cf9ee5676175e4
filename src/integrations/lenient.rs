// src/integrations/lenient.rs
//
// Field decoders for museum payloads. Optional fields that arrive with an
// unexpected JSON type decode as absent instead of failing the record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Non-blank string, or `None` for anything else
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        _ => None,
    })
}

/// Identifier given either as a string or a number
pub fn id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Nested structure that is dropped when it does not have the expected shape
pub fn shape<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Probe {
        #[serde(deserialize_with = "string")]
        name: Option<String>,
        #[serde(deserialize_with = "id")]
        id: Option<String>,
        #[serde(deserialize_with = "shape")]
        tags: Option<Vec<String>>,
    }

    #[test]
    fn test_string_rejects_non_strings() {
        let probe: Probe = serde_json::from_value(json!({ "name": { "first": "Ada" } })).unwrap();
        assert_eq!(probe.name, None);

        let probe: Probe = serde_json::from_value(json!({ "name": "  Ada " })).unwrap();
        assert_eq!(probe.name.as_deref(), Some("Ada"));

        let probe: Probe = serde_json::from_value(json!({ "name": "" })).unwrap();
        assert_eq!(probe.name, None);
    }

    #[test]
    fn test_id_accepts_numbers_and_strings() {
        let probe: Probe = serde_json::from_value(json!({ "id": 94979 })).unwrap();
        assert_eq!(probe.id.as_deref(), Some("94979"));

        let probe: Probe = serde_json::from_value(json!({ "id": "O12345" })).unwrap();
        assert_eq!(probe.id.as_deref(), Some("O12345"));

        let probe: Probe = serde_json::from_value(json!({ "id": null })).unwrap();
        assert_eq!(probe.id, None);
    }

    #[test]
    fn test_shape_drops_mismatched_structure() {
        let probe: Probe = serde_json::from_value(json!({ "tags": "not-a-list" })).unwrap();
        assert_eq!(probe.tags, None);

        let probe: Probe = serde_json::from_value(json!({})).unwrap();
        assert_eq!(probe.tags, None);
    }
}
