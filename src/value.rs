//! Field value types.
//!
//! A resolved field carries one of a small set of JSON-shaped values:
//! free text, a list of strings (colors, pages), or an arbitrary
//! structured blob kept opaque for the presentation layer.

use serde::{Deserialize, Serialize};

/// Possible values an intake field can hold.
///
/// The snapshot is interchange data from an upstream JSON API, so this
/// enum deserializes untagged from the raw wire shapes: `"finance"`,
/// `["Brown", "Cream"]`, `null`, or a nested object.
///
/// "Undefined" is not a variant: an absent field is modeled as a missing
/// map entry (`Option`/no key), while an explicit JSON `null` is
/// [`FieldValue::Null`].
///
/// # Examples
///
/// ```
/// use clarity_intake::FieldValue;
///
/// let text = FieldValue::from("finance");
/// let colors = FieldValue::from(vec!["Brown".to_string(), "Cream".to_string()]);
///
/// assert!(text.is_text());
/// assert!(colors.is_list());
/// assert!(!FieldValue::Null.is_provided());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Text(String),
    List(Vec<String>),
    Structured(serde_json::Value),
}

impl FieldValue {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub const fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    pub const fn as_structured(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Structured(v) => Some(v),
            _ => None,
        }
    }

    /// Whether this value counts as "provided" by whoever supplied it.
    ///
    /// Explicit `null` and the empty string are treated as not provided;
    /// everything else, including an empty list, is.
    #[must_use]
    pub fn is_provided(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Text(v) => !v.is_empty(),
            Self::List(_) | Self::Structured(_) => true,
        }
    }

    /// JSON truthiness, used only by provenance classification.
    ///
    /// The upstream checks ran in a dynamically-typed layer, so arrays and
    /// objects are truthy even when empty, while `null`, `""`, `false`,
    /// and `0` are falsy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Text(v) => !v.is_empty(),
            Self::List(_) => true,
            Self::Structured(v) => match v {
                serde_json::Value::Null => false,
                serde_json::Value::Bool(b) => *b,
                serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
                serde_json::Value::String(s) => !s.is_empty(),
                serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
            },
        }
    }

    /// Returns a human-readable type name.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Structured(_) => "structured",
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Null
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Text(v) => write!(f, "{v}"),
            Self::List(v) => write!(f, "[{}]", v.join(", ")),
            Self::Structured(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(v: Vec<String>) -> Self {
        Self::List(v)
    }
}

impl From<&[&str]> for FieldValue {
    fn from(v: &[&str]) -> Self {
        Self::List(v.iter().map(ToString::to_string).collect())
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::String(s) => Self::Text(s),
            other => Self::Structured(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provided_rejects_null_and_empty_text() {
        assert!(!FieldValue::Null.is_provided());
        assert!(!FieldValue::Text(String::new()).is_provided());
        assert!(FieldValue::Text("x".into()).is_provided());
        // An empty list is still an explicit value.
        assert!(FieldValue::List(vec![]).is_provided());
    }

    #[test]
    fn test_truthiness_follows_json_rules() {
        assert!(!FieldValue::Null.is_truthy());
        assert!(!FieldValue::Text(String::new()).is_truthy());
        assert!(FieldValue::Text("x".into()).is_truthy());
        assert!(FieldValue::List(vec![]).is_truthy());
        assert!(!FieldValue::Structured(serde_json::json!(false)).is_truthy());
        assert!(!FieldValue::Structured(serde_json::json!(0)).is_truthy());
        assert!(FieldValue::Structured(serde_json::json!({})).is_truthy());
    }

    #[test]
    fn test_untagged_deserialization_from_wire_shapes() {
        let text: FieldValue = serde_json::from_str("\"finance\"").unwrap();
        assert_eq!(text, FieldValue::Text("finance".into()));

        let list: FieldValue = serde_json::from_str("[\"Brown\",\"Cream\"]").unwrap();
        assert_eq!(list.as_list().map(<[String]>::len), Some(2));

        let null: FieldValue = serde_json::from_str("null").unwrap();
        assert!(null.is_null());

        let obj: FieldValue = serde_json::from_str("{\"title\":\"Acme\"}").unwrap();
        assert!(obj.is_structured());
    }

    #[test]
    fn test_serialization_round_trip() {
        let val = FieldValue::List(vec!["Navy".into(), "White".into()]);
        let json = serde_json::to_string(&val).unwrap();
        let back: FieldValue = serde_json::from_str(&json).unwrap();
        assert_eq!(val, back);
    }

    #[test]
    fn test_accessors_and_type_names() {
        let val = FieldValue::Text("modern".into());
        assert_eq!(val.as_text(), Some("modern"));
        assert!(val.as_list().is_none());
        assert_eq!(val.type_name(), "text");
        assert_eq!(FieldValue::default().type_name(), "null");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", FieldValue::Text("hi".into())), "hi");
        assert_eq!(
            format!("{}", FieldValue::List(vec!["a".into(), "b".into()])),
            "[a, b]"
        );
        assert_eq!(format!("{}", FieldValue::Null), "null");
    }

    #[test]
    fn test_from_json_value_collapses_null_and_strings() {
        let v: FieldValue = serde_json::json!(null).into();
        assert!(v.is_null());
        let v: FieldValue = serde_json::json!("plain").into();
        assert!(v.is_text());
        let v: FieldValue = serde_json::json!([1, 2]).into();
        assert!(v.is_structured());
    }
}
