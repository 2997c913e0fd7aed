//! Tolerant field decoders for host and ad-server JSON.
//!
//! Publisher configs and the ZEDO ad server both mix numbers and numeric
//! strings for the same field. These decoders accept either form and map
//! anything else to `None` instead of failing the enclosing document.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Number or numeric string → `Some(u64)`; anything else → `None`.
pub fn u64_or_string<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_u64))
}

/// String or number → `Some(String)`; anything else → `None`.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Bool or `"true"`/`"false"` → `Some(bool)`; anything else → `None`.
pub fn bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Array → its raw elements; anything else (null, missing, scalar) → empty.
pub fn entries<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    })
}

fn value_as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f < u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "u64_or_string")]
        num: Option<u64>,
        #[serde(default, deserialize_with = "string_or_number")]
        text: Option<String>,
        #[serde(default, deserialize_with = "bool_or_string")]
        flag: Option<bool>,
    }

    #[test]
    fn test_accepts_numbers_and_strings() {
        let fields: Fields =
            serde_json::from_str(r#"{"num": "20000000", "text": 600, "flag": "true"}"#).unwrap();
        assert_eq!(fields.num, Some(20_000_000));
        assert_eq!(fields.text.as_deref(), Some("600"));
        assert_eq!(fields.flag, Some(true));
    }

    #[test]
    fn test_missing_and_null_fields() {
        let fields: Fields = serde_json::from_str(r#"{"num": null}"#).unwrap();
        assert_eq!(fields.num, None);
        assert_eq!(fields.text, None);
        assert_eq!(fields.flag, None);
    }

    #[test]
    fn test_malformed_values_become_none() {
        let fields: Fields =
            serde_json::from_str(r#"{"num": "abc", "text": {"x": 1}, "flag": [true]}"#).unwrap();
        assert_eq!(fields.num, None);
        assert_eq!(fields.text, None);
        assert_eq!(fields.flag, None);
    }

    #[test]
    fn test_out_of_range_float_is_none() {
        let fields: Fields = serde_json::from_str(r#"{"num": 1e30}"#).unwrap();
        assert_eq!(fields.num, None);

        let fields: Fields = serde_json::from_str(r#"{"num": 2.0e7}"#).unwrap();
        assert_eq!(fields.num, Some(20_000_000));
    }

    #[derive(Deserialize)]
    struct Listing {
        #[serde(default, deserialize_with = "entries")]
        items: Vec<Value>,
    }

    #[test]
    fn test_entries_tolerate_non_lists() {
        let listing: Listing = serde_json::from_str(r#"{"items": [1, null, "x"]}"#).unwrap();
        assert_eq!(listing.items.len(), 3);

        for body in [r#"{"items": null}"#, r#"{"items": "oops"}"#, r#"{}"#] {
            let listing: Listing = serde_json::from_str(body).unwrap();
            assert!(listing.items.is_empty());
        }
    }

    #[test]
    fn test_zero_is_present() {
        let fields: Fields = serde_json::from_str(r#"{"num": 0}"#).unwrap();
        assert_eq!(fields.num, Some(0));
    }
}
