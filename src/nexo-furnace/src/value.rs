//! Format-independent document tree
//!
//! Item definitions arrive as YAML or JSON. Both are converted into [`Value`]
//! so the item filter can read optional fields without caring which parser
//! produced them.

/// A loosely-typed document node.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<Value>),
    /// Entries in document order
    Mapping(Vec<(String, Value)>),
}

impl Value {
    /// Look up a key if this is a mapping
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Integer value, accepting floats with no fractional part
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            Value::Float(f) if f.fract() == 0.0 && f.is_finite() => Some(*f as i64),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    /// Whether the node counts as "set": null, false, zero and empty
    /// strings or collections do not.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Integer(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Sequence(items) => !items.is_empty(),
            Value::Mapping(entries) => !entries.is_empty(),
        }
    }

    /// Short name of the node type, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
        }
    }
}

impl From<serde_yaml::Value> for Value {
    fn from(value: serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Null => Value::Null,
            serde_yaml::Value::Bool(b) => Value::Bool(b),
            serde_yaml::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_yaml::Value::String(s) => Value::String(s),
            serde_yaml::Value::Sequence(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_yaml::Value::Mapping(mapping) => Value::Mapping(
                mapping
                    .into_iter()
                    .filter_map(|(k, v)| yaml_key(k).map(|k| (k, Value::from(v))))
                    .collect(),
            ),
            serde_yaml::Value::Tagged(tagged) => Value::from(tagged.value),
        }
    }
}

/// Scalar YAML keys become strings; anything else is dropped
fn yaml_key(key: serde_yaml::Value) -> Option<String> {
    match key {
        serde_yaml::Value::String(s) => Some(s),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Tagged(tagged) => yaml_key(tagged.value),
        _ => None,
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Mapping(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_conversion_keeps_order() {
        let yaml: serde_yaml::Value =
            serde_yaml::from_str("zeta: 1\nalpha: two\n42: [true, 1.5]\n").unwrap();
        let value = Value::from(yaml);

        let keys: Vec<_> = value
            .as_mapping()
            .unwrap()
            .iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(keys, vec!["zeta", "alpha", "42"]);
        assert_eq!(value.get("zeta").and_then(Value::as_i64), Some(1));
        assert_eq!(value.get("alpha").and_then(Value::as_str), Some("two"));
        assert_eq!(
            value.get("42"),
            Some(&Value::Sequence(vec![Value::Bool(true), Value::Float(1.5)]))
        );
    }

    #[test]
    fn test_yaml_tags_are_stripped() {
        let yaml: serde_yaml::Value = serde_yaml::from_str("key: !custom 7\n").unwrap();
        let value = Value::from(yaml);
        assert_eq!(value.get("key"), Some(&Value::Integer(7)));
    }

    #[test]
    fn test_json_conversion_keeps_order() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"b": {"x": null}, "a": [1, "s"]}"#).unwrap();
        let value = Value::from(json);

        let keys: Vec<_> = value
            .as_mapping()
            .unwrap()
            .iter()
            .map(|(k, _)| k.clone())
            .collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(value.get("b").and_then(|b| b.get("x")), Some(&Value::Null));
    }

    #[test]
    fn test_truthiness() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::Integer(0).is_truthy());
        assert!(!Value::Float(0.0).is_truthy());
        assert!(!Value::String(String::new()).is_truthy());
        assert!(!Value::Sequence(vec![]).is_truthy());
        assert!(!Value::Mapping(vec![]).is_truthy());

        assert!(Value::Integer(5).is_truthy());
        assert!(Value::String("x".into()).is_truthy());
        assert!(Value::Sequence(vec![Value::Null]).is_truthy());
    }

    #[test]
    fn test_accessors_on_wrong_type() {
        let value = Value::String("5".into());
        assert_eq!(value.get("anything"), None);
        assert_eq!(value.as_i64(), None);
        assert_eq!(value.as_sequence(), None);
        assert_eq!(Value::Float(2.0).as_i64(), Some(2));
        assert_eq!(Value::Float(2.5).as_i64(), None);
    }
}
