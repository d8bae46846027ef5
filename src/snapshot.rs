//! Form snapshot -- field values collected at submit time.
//!
//! The honeypot value is split off on construction, so it never reaches
//! the validator or the transport payload.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct FormSnapshot {
    #[serde(flatten)]
    fields: BTreeMap<String, String>,
    #[serde(skip)]
    decoy: Option<String>,
}

impl FormSnapshot {
    /// Build from raw name/value pairs. A repeated name keeps its last value.
    pub fn from_pairs<I, K, V>(pairs: I, decoy_field: &str) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut snapshot = Self::default();
        for (name, value) in pairs {
            let name = name.into();
            let value = value.into();
            if name == decoy_field {
                snapshot.decoy = Some(value);
            } else {
                snapshot.fields.insert(name, value);
            }
        }
        snapshot
    }

    /// Parse a flat JSON object of string values.
    pub fn from_json(json: &str, decoy_field: &str) -> crate::GuardResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let obj = value.as_object().ok_or_else(|| {
            crate::GuardError::InvalidInput("snapshot must be a JSON object".to_string())
        })?;
        let mut pairs = Vec::with_capacity(obj.len());
        for (name, v) in obj {
            let s = match v {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Null => String::new(),
                other => other.to_string(),
            };
            pairs.push((name.clone(), s));
        }
        Ok(Self::from_pairs(pairs, decoy_field))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Missing fields read as empty.
    pub fn get_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    /// Raw honeypot value, if the form carried one.
    pub fn decoy_value(&self) -> Option<&str> {
        self.decoy.as_deref()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoy_split_out() {
        let s = FormSnapshot::from_pairs(
            [("name", "Ada"), ("website", "http://spam"), ("email", "a@b.c")],
            "website",
        );
        assert_eq!(s.len(), 2);
        assert!(s.get("website").is_none());
        assert_eq!(s.decoy_value(), Some("http://spam"));
    }

    #[test]
    fn test_last_value_wins() {
        let s = FormSnapshot::from_pairs([("name", "A"), ("name", "B")], "website");
        assert_eq!(s.get("name"), Some("B"));
    }

    #[test]
    fn test_from_json_coerces_scalars() {
        let s = FormSnapshot::from_json(
            r#"{"name":"Ada","subject":42,"message":null,"website":""}"#,
            "website",
        )
        .unwrap();
        assert_eq!(s.get("subject"), Some("42"));
        assert_eq!(s.get("message"), Some(""));
        assert_eq!(s.decoy_value(), Some(""));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(FormSnapshot::from_json("[1,2]", "website").is_err());
    }

    #[test]
    fn test_serialized_payload_excludes_decoy() {
        let s = FormSnapshot::from_pairs([("name", "Ada"), ("website", "x")], "website");
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Ada"}));
    }
}
