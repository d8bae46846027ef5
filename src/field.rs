//! Field rule table -- one rule per known contact-form field.
//!
//! | Field   | Required | Min | Max  | Pattern                                  |
//! |---------|----------|-----|------|------------------------------------------|
//! | name    | yes      | 2   | 50   | letters, spaces, hyphens, apostrophes    |
//! | email   | yes      | -   | -    | `local@domain.tld`, no whitespace        |
//! | subject | yes      | 3   | 100  | -                                        |
//! | message | yes      | 10  | 1000 | -                                        |

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z\s'-]+$").expect("name pattern compiles")
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Known contact-form fields. Anything else is validated permissively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldId {
    pub const ALL: [FieldId; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "subject" => Some(Self::Subject),
            "message" => Some(Self::Message),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    /// Capitalized form used in "X is required".
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    /// Built-in rule for this field.
    pub fn default_rule(&self) -> FieldRule {
        match self {
            Self::Name => FieldRule::required(
                *self,
                "Name must be 2-50 characters (letters, spaces, hyphens, apostrophes only)",
            )
            .min_length(2)
            .max_length(50)
            .pattern(NAME_PATTERN.clone()),
            Self::Email => {
                FieldRule::required(*self, "Please enter a valid email address")
                    .pattern(EMAIL_PATTERN.clone())
            }
            Self::Subject => FieldRule::required(*self, "Subject must be 3-100 characters")
                .min_length(3)
                .max_length(100),
            Self::Message => FieldRule::required(*self, "Message must be 10-1000 characters")
                .min_length(10)
                .max_length(1000),
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single constraint on a non-empty value.
#[derive(Debug, Clone)]
pub enum Check {
    MinLength(usize),
    MaxLength(usize),
    Pattern(Regex),
}

impl Check {
    /// Evaluation rank: lengths before pattern.
    fn rank(&self) -> u8 {
        match self {
            Self::MinLength(_) => 0,
            Self::MaxLength(_) => 1,
            Self::Pattern(_) => 2,
        }
    }
}

/// Validation rule for one field. Checks are kept sorted min → max → pattern.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: FieldId,
    pub required: bool,
    /// Reported when the pattern check fails.
    pub message: String,
    checks: Vec<Check>,
}

impl FieldRule {
    pub fn required(field: FieldId, message: &str) -> Self {
        Self {
            field,
            required: true,
            message: message.to_string(),
            checks: Vec::new(),
        }
    }

    pub fn optional(field: FieldId, message: &str) -> Self {
        Self {
            required: false,
            ..Self::required(field, message)
        }
    }

    pub fn min_length(self, n: usize) -> Self {
        self.with_check(Check::MinLength(n))
    }

    pub fn max_length(self, n: usize) -> Self {
        self.with_check(Check::MaxLength(n))
    }

    pub fn pattern(self, re: Regex) -> Self {
        self.with_check(Check::Pattern(re))
    }

    /// Adds or replaces a check, keeping evaluation order stable.
    fn with_check(mut self, check: Check) -> Self {
        self.checks.retain(|c| c.rank() != check.rank());
        self.checks.push(check);
        self.checks.sort_by_key(Check::rank);
        self
    }

    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// First failing check's message for a non-empty value, if any.
    pub fn first_failure(&self, value: &str) -> Option<String> {
        let len = value.chars().count();
        self.checks.iter().find_map(|check| match check {
            Check::MinLength(min) if len < *min => {
                Some(format!("Minimum {} characters required", min))
            }
            Check::MaxLength(max) if len > *max => {
                Some(format!("Maximum {} characters allowed", max))
            }
            Check::Pattern(re) if !re.is_match(value) => Some(self.message.clone()),
            _ => None,
        })
    }
}

/// Outcome of validating one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FieldResult {
    pub fn ok() -> Self {
        Self { valid: true, error: None }
    }

    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
        }
    }
}
