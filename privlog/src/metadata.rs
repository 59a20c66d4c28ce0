//! Key/value metadata attached to log calls.
//!
//! Metadata is plain text; it does not pass through privacy policies, so only
//! values that are safe to log should go here.

use std::{collections::BTreeMap, fmt};

/// Metadata dictionary. Iteration (and therefore rendering) is in key order.
pub type Metadata = BTreeMap<String, MetadataValue>;

/// A metadata value with a string rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MetadataValue {
    /// Rendered as-is.
    String(String),
    /// Rendered as `[a, b, c]`.
    Array(Vec<MetadataValue>),
    /// Rendered as `[key: value, ...]` in key order.
    Dictionary(Metadata),
}

impl MetadataValue {
    /// Captures the `Display` rendering of `value`.
    pub fn display(value: impl fmt::Display) -> Self {
        Self::String(value.to_string())
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(text) => f.write_str(text),
            Self::Array(values) => {
                f.write_str("[")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            }
            Self::Dictionary(entries) => {
                f.write_str("[")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<MetadataValue>> From<Vec<T>> for MetadataValue {
    fn from(values: Vec<T>) -> Self {
        Self::Array(values.into_iter().map(Into::into).collect())
    }
}

impl From<Metadata> for MetadataValue {
    fn from(entries: Metadata) -> Self {
        Self::Dictionary(entries)
    }
}

/// Merges call-site metadata over sticky metadata; call-site values win.
pub fn merge(sticky: &Metadata, call_site: Option<&Metadata>) -> Metadata {
    let mut merged = sticky.clone();
    if let Some(call_site) = call_site {
        merged.extend(
            call_site
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
    }
    merged
}

/// Renders metadata as `k1=v1 k2=v2`, or `None` when empty.
pub fn prettify(metadata: &Metadata) -> Option<String> {
    if metadata.is_empty() {
        return None;
    }
    let pairs: Vec<String> = metadata
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect();
    Some(pairs.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(pairs: &[(&str, &str)]) -> Metadata {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), MetadataValue::from(*value)))
            .collect()
    }

    #[test]
    fn call_site_wins_on_collision() {
        let sticky = metadata(&[("request", "sticky"), ("user", "u1")]);
        let call_site = metadata(&[("request", "call")]);
        let merged = merge(&sticky, Some(&call_site));
        assert_eq!(merged["request"], MetadataValue::from("call"));
        assert_eq!(merged["user"], MetadataValue::from("u1"));
    }

    #[test]
    fn merge_without_call_site_keeps_sticky() {
        let sticky = metadata(&[("a", "1")]);
        assert_eq!(merge(&sticky, None), sticky);
    }

    #[test]
    fn prettify_joins_pairs_in_key_order() {
        let entries = metadata(&[("b", "2"), ("a", "1")]);
        assert_eq!(prettify(&entries).as_deref(), Some("a=1 b=2"));
        assert_eq!(prettify(&Metadata::new()), None);
    }

    #[test]
    fn nested_values_render() {
        let array = MetadataValue::from(vec!["x", "y"]);
        assert_eq!(array.to_string(), "[x, y]");

        let dictionary = MetadataValue::from(metadata(&[("k", "v"), ("a", "b")]));
        assert_eq!(dictionary.to_string(), "[a: b, k: v]");

        assert_eq!(MetadataValue::display(42).to_string(), "42");
    }
}
