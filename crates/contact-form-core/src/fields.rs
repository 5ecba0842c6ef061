//! Field rule definitions and per-field validation.
//!
//! A [`FieldRule`] describes the constraints for one form field: whether it
//! is required, its length bounds, and an optional pattern predicate. Rules
//! are checked in a fixed precedence (required, min length, max length,
//! pattern) and the first violated check wins, producing exactly one
//! message per field.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::validators::{validate_email, validate_name};

/// The fields of the contact form.
///
/// The string names double as error-map and serialization keys, and match
/// the HTML `name` attributes used by the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// The sender's name. Required.
    Name,
    /// The sender's email address. Required.
    Email,
    /// The message subject. The only optional field.
    Subject,
    /// The message body. Required.
    Message,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// The stable string name of this field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    /// Human-readable label for rendering.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fallback message when a rule has no entry for a failing check.
const DEFAULT_MESSAGE: &str = "Invalid value";

/// Constraint set for a single form field.
///
/// Constructed with builder methods, mirroring how the rule table in
/// [`contact_rules`] reads:
///
/// ```
/// use contact_form_core::fields::{Field, FieldRule};
///
/// let rule = FieldRule::new(Field::Subject)
///     .required(false)
///     .max_length(100)
///     .message("max_length", "Subject must be maximum 100 characters");
/// assert!(rule.check("Hello").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct FieldRule {
    /// The field this rule applies to.
    pub field: Field,
    /// Whether an empty value is a violation.
    pub required: bool,
    /// Minimum length in characters.
    pub min_length: Option<usize>,
    /// Maximum length in characters.
    pub max_length: Option<usize>,
    /// Syntax predicate, checked last.
    pub pattern: Option<fn(&str) -> bool>,
    /// Error messages keyed by check code
    /// (`required`, `min_length`, `max_length`, `pattern`).
    pub messages: HashMap<&'static str, String>,
}

impl FieldRule {
    /// Creates a rule with no constraints beyond `required`.
    pub fn new(field: Field) -> Self {
        Self {
            field,
            required: true,
            min_length: None,
            max_length: None,
            pattern: None,
            messages: HashMap::new(),
        }
    }

    /// Sets whether this field is required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the minimum length (characters).
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Sets the maximum length (characters).
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Sets the pattern predicate.
    pub fn pattern(mut self, pattern: fn(&str) -> bool) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Sets the error message for a check code.
    pub fn message(mut self, code: &'static str, msg: impl Into<String>) -> Self {
        self.messages.insert(code, msg.into());
        self
    }

    fn message_for(&self, code: &str) -> String {
        self.messages
            .get(code)
            .cloned()
            .unwrap_or_else(|| DEFAULT_MESSAGE.to_string())
    }

    /// Checks `value` against this rule.
    ///
    /// Returns the message of the first violated check, or `None` if the
    /// value satisfies the rule. An optional field with an empty value
    /// skips every check.
    pub fn check(&self, value: &str) -> Option<String> {
        if value.is_empty() {
            if self.required {
                return Some(self.message_for("required"));
            }
            return None;
        }
        let length = value.chars().count();
        if let Some(min) = self.min_length {
            if length < min {
                return Some(self.message_for("min_length"));
            }
        }
        if let Some(max) = self.max_length {
            if length > max {
                return Some(self.message_for("max_length"));
            }
        }
        if let Some(pattern) = self.pattern {
            if !pattern(value) {
                return Some(self.message_for("pattern"));
            }
        }
        None
    }
}

/// The rule table for the contact form.
pub fn contact_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::new(Field::Name)
            .min_length(5)
            .max_length(50)
            .pattern(validate_name)
            .message("required", "Required field")
            .message("min_length", "Name must be at least 5 characters")
            .message("max_length", "Name must be maximum 50 characters")
            .message(
                "pattern",
                "Invalid name. Name can contain letters and cannot contain numbers",
            ),
        FieldRule::new(Field::Email)
            .pattern(validate_email)
            .message("required", "Required field")
            .message("pattern", "Invalid email address"),
        FieldRule::new(Field::Subject)
            .required(false)
            .max_length(100)
            .message("max_length", "Subject must be maximum 100 characters"),
        FieldRule::new(Field::Message)
            .max_length(500)
            .message("required", "This field cannot be empty")
            .message("max_length", "Message must be maximum 500 characters"),
    ]
}
