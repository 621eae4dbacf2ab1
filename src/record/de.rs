//! Lenient field deserializers for raw slide records.
//!
//! The content service is loosely typed: orders arrive as numbers or numeric
//! strings, content sometimes arrives as a list of lines. Every helper here
//! degrades an unusable value to its default instead of failing the record.

use super::types::{HintValue, SlideId};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub(crate) fn slide_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SlideId, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => match n.as_i64() {
            Some(id) => SlideId::Number(id),
            None => SlideId::Text(n.to_string()),
        },
        Value::String(s) => SlideId::Text(s),
        _ => SlideId::Missing,
    })
}

pub(crate) fn order<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(order_from_value(&value).unwrap_or_else(|| {
        tracing::debug!(value = %value, "unusable slide order, defaulting to 0");
        0
    }))
}

fn order_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .filter(|f| *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(value))
}

/// Like [`text`], but also joins a list of lines with `\n`.
pub(crate) fn content<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(lines) => {
            let lines: Vec<String> = lines.into_iter().filter_map(scalar_text).collect();
            Some(lines.join("\n"))
        },
        other => scalar_text(other),
    })
}

pub(crate) fn hint<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<HintValue>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(HintValue::Text(s)),
        Value::Number(n) => Some(HintValue::Number(n)),
        _ => None,
    })
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_from_value() {
        assert_eq!(order_from_value(&json!(7)), Some(7));
        assert_eq!(order_from_value(&json!(-2)), Some(-2));
        assert_eq!(order_from_value(&json!(3.0)), Some(3));
        assert_eq!(order_from_value(&json!(3.5)), None);
        assert_eq!(order_from_value(&json!(" 12 ")), Some(12));
        assert_eq!(order_from_value(&json!("twelve")), None);
        assert_eq!(order_from_value(&json!(null)), None);
        assert_eq!(order_from_value(&json!(u64::MAX)), None);
    }

    #[test]
    fn test_content_joins_lines() {
        let joined = content(json!(["Step one", "Step two", 3])).unwrap();
        assert_eq!(joined.as_deref(), Some("Step one\nStep two\n3"));
    }

    #[test]
    fn test_text_stringifies_scalars() {
        assert_eq!(text(json!(42)).unwrap().as_deref(), Some("42"));
        assert_eq!(text(json!(true)).unwrap().as_deref(), Some("true"));
        assert_eq!(text(json!({"a": 1})).unwrap(), None);
    }

    #[test]
    fn test_slide_id_variants() {
        assert_eq!(slide_id(json!(5)).unwrap(), SlideId::Number(5));
        assert_eq!(slide_id(json!("a-1")).unwrap(), SlideId::Text("a-1".to_string()));
        assert_eq!(slide_id(json!(1.5)).unwrap(), SlideId::Text("1.5".to_string()));
        assert_eq!(slide_id(json!([1])).unwrap(), SlideId::Missing);
    }
}
