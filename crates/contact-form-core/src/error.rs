//! Error types for the validation side of the form.
//!
//! Validation failures are recoverable by design: they block submission and
//! are surfaced inline, but never abort the session. Validators themselves
//! never fail; they only return boolean judgments consumed by the field
//! rules.

use std::collections::HashMap;
use std::fmt;

use crate::fields::Field;

/// A collection of per-field validation errors, at most one per field.
///
/// `Display` joins the entries as `field: message` pairs in form order, so
/// the collection can be logged or attached to a larger error as a single
/// line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    /// Per-field messages, keyed by field.
    pub field_errors: HashMap<Field, String>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no field has an error.
    pub fn is_empty(&self) -> bool {
        self.field_errors.is_empty()
    }

    /// Returns the number of failing fields.
    pub fn len(&self) -> usize {
        self.field_errors.len()
    }

    /// Returns the message for `field`, if it failed.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }
}

impl From<HashMap<Field, String>> for ValidationErrors {
    fn from(field_errors: HashMap<Field, String>) -> Self {
        Self { field_errors }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        // Iterate in form order for stable output.
        for field in Field::ALL {
            if let Some(msg) = self.field_errors.get(&field) {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {msg}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
