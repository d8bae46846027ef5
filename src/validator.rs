//! Field validator -- stateless evaluation of the rule table.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::field::{FieldId, FieldResult, FieldRule};
use crate::snapshot::FormSnapshot;

#[derive(Debug, Clone)]
pub struct FieldValidator {
    rules: HashMap<FieldId, FieldRule>,
}

/// Result of validating a whole snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct FormValidation {
    pub is_valid: bool,
    pub results: BTreeMap<String, FieldResult>,
}

impl FormValidation {
    /// Failing fields and their messages.
    pub fn errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.results.iter().filter_map(|(name, r)| {
            r.error.as_deref().filter(|_| !r.valid).map(|e| (name.as_str(), e))
        })
    }
}

impl FieldValidator {
    /// Validator with no rules: every field passes.
    pub fn empty() -> Self {
        Self { rules: HashMap::new() }
    }

    /// Replace the rule for `rule.field`.
    pub fn with_rule(mut self, rule: FieldRule) -> Self {
        self.rules.insert(rule.field, rule);
        self
    }

    pub fn without_rule(mut self, field: FieldId) -> Self {
        self.rules.remove(&field);
        self
    }

    pub fn rule(&self, field: FieldId) -> Option<&FieldRule> {
        self.rules.get(&field)
    }

    pub fn validate_field(&self, field_name: &str, value: &str) -> FieldResult {
        let rule = match FieldId::parse(field_name).and_then(|id| self.rules.get(&id)) {
            Some(r) => r,
            None => return FieldResult::ok(),
        };

        if value.trim().is_empty() {
            return if rule.required {
                FieldResult::fail(format!("{} is required", rule.field.label()))
            } else {
                FieldResult::ok()
            };
        }

        match rule.first_failure(value) {
            Some(error) => FieldResult::fail(error),
            None => FieldResult::ok(),
        }
    }

    pub fn validate_form(&self, snapshot: &FormSnapshot) -> FormValidation {
        let mut results = BTreeMap::new();
        let mut is_valid = true;

        for (name, value) in snapshot.fields() {
            let result = self.validate_field(name, value);
            if !result.valid {
                tracing::debug!(field = name, error = ?result.error, "Field failed validation");
                is_valid = false;
            }
            results.insert(name.to_string(), result);
        }

        FormValidation { is_valid, results }
    }
}

impl Default for FieldValidator {
    fn default() -> Self {
        FieldId::ALL
            .iter()
            .fold(Self::empty(), |v, id| v.with_rule(id.default_rule()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HONEYPOT_FIELD;

    fn v() -> FieldValidator {
        FieldValidator::default()
    }

    #[test]
    fn test_required_fields_reject_empty_and_blank() {
        for id in FieldId::ALL {
            for value in ["", "   "] {
                let r = v().validate_field(id.as_str(), value);
                assert!(!r.valid, "{} should reject {:?}", id, value);
                assert_eq!(r.error, Some(format!("{} is required", id.label())));
            }
        }
    }

    #[test]
    fn test_optional_field_skips_other_checks_when_empty() {
        let validator = v().with_rule(
            FieldRule::optional(FieldId::Subject, "bad subject")
                .min_length(3)
                .pattern(regex::Regex::new("^never$").unwrap()),
        );
        assert!(validator.validate_field("subject", "").valid);
        assert!(validator.validate_field("subject", "  ").valid);
        // Non-empty values still get checked
        assert_eq!(
            validator.validate_field("subject", "ab").error.as_deref(),
            Some("Minimum 3 characters required")
        );
    }

    #[test]
    fn test_email() {
        assert!(v().validate_field("email", "a@b.c").valid);
        let r = v().validate_field("email", "not-an-email");
        assert!(!r.valid);
        assert_eq!(r.error.as_deref(), Some("Please enter a valid email address"));
        assert!(!v().validate_field("email", "a b@c.d").valid);
        assert!(!v().validate_field("email", "a@b").valid);
    }

    #[test]
    fn test_name_length_boundaries() {
        assert!(v().validate_field("name", "Jo").valid);
        assert!(!v().validate_field("name", "J").valid);
        assert!(v().validate_field("name", &"J".repeat(50)).valid);
        let r = v().validate_field("name", &"J".repeat(51));
        assert_eq!(r.error.as_deref(), Some("Maximum 50 characters allowed"));
    }

    #[test]
    fn test_name_pattern() {
        assert!(v().validate_field("name", "Mary-Jane O'Neil").valid);
        assert!(!v().validate_field("name", "Robert'); DROP").valid);
    }

    #[test]
    fn test_subject_and_message_lengths() {
        assert!(!v().validate_field("subject", "Hi").valid);
        assert!(v().validate_field("subject", "Hey").valid);
        assert!(!v().validate_field("subject", &"s".repeat(101)).valid);
        assert!(!v().validate_field("message", "too short").valid);
        assert!(v().validate_field("message", "long enough").valid);
        assert!(!v().validate_field("message", &"m".repeat(1001)).valid);
    }

    #[test]
    fn test_unknown_field_is_valid() {
        assert_eq!(v().validate_field("phone", ""), FieldResult::ok());
        assert_eq!(v().validate_field("phone", "!!!"), FieldResult::ok());
    }

    #[test]
    fn test_removed_rule_is_permissive() {
        let validator = v().without_rule(FieldId::Email);
        assert!(validator.validate_field("email", "").valid);
        assert!(validator.rule(FieldId::Email).is_none());
    }

    #[test]
    fn test_validate_form_excludes_decoy_and_includes_unknown() {
        let snapshot = FormSnapshot::from_pairs(
            [
                ("name", "Ada Lovelace"),
                ("email", "ada@example.org"),
                ("subject", "Engines"),
                ("message", "About the analytical engine"),
                ("phone", "n/a"),
                (HONEYPOT_FIELD, "filled-by-bot"),
            ],
            HONEYPOT_FIELD,
        );
        let result = v().validate_form(&snapshot);
        assert!(result.is_valid);
        assert!(!result.results.contains_key(HONEYPOT_FIELD));
        assert_eq!(result.results.get("phone"), Some(&FieldResult::ok()));
        assert_eq!(result.results.len(), 5);
    }

    #[test]
    fn test_validate_form_is_and_of_results() {
        let snapshot = FormSnapshot::from_pairs(
            [("name", "Ada"), ("email", "nope"), ("subject", "")],
            HONEYPOT_FIELD,
        );
        let result = v().validate_form(&snapshot);
        assert!(!result.is_valid);
        let errors: Vec<_> = result.errors().collect();
        assert_eq!(
            errors,
            vec![
                ("email", "Please enter a valid email address"),
                ("subject", "Subject is required"),
            ]
        );
    }
}
