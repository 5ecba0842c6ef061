//! Form state: current values, per-field errors, and submission status.
//!
//! [`ContactForm`] is the sole owner of all mutable form state. Setting a
//! field never triggers validation; validation runs as a single pass over
//! every rule when [`ContactForm::validate`] is called (on submit).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;
use crate::fields::{contact_rules, Field, FieldRule};
use crate::snapshot::FormSnapshot;

/// The current values of the four form fields.
///
/// An empty string means the field has not been filled in; for the optional
/// subject this is a valid final state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    /// The sender's name.
    pub name: String,
    /// The sender's email address.
    pub email: String,
    /// The message subject (optional).
    pub subject: String,
    /// The message body.
    pub message: String,
}

impl FormValues {
    /// Returns the current value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Returns `true` if every field is empty.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// The form's lifecycle phase. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// No submission in progress or concluded.
    #[default]
    Idle,
    /// A request is in flight; further submits are no-ops.
    Loading,
    /// The last submission succeeded. Terminal until the user edits or
    /// resubmits.
    Success,
    /// The last submission failed. Terminal until the user edits or
    /// resubmits.
    Error,
}

/// Owner of form values, per-field errors, and submission status.
///
/// Errors hold at most one message per field and are cleared and recomputed
/// on every [`validate`](Self::validate) pass, so no entry ever refers to a
/// field that currently satisfies its rule.
#[derive(Debug, Clone)]
pub struct ContactForm {
    rules: Vec<FieldRule>,
    values: FormValues,
    errors: HashMap<Field, String>,
    status: SubmissionStatus,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    /// Creates an empty form with the standard contact rule table.
    pub fn new() -> Self {
        Self::with_rules(contact_rules())
    }

    /// Creates an empty form with a custom rule table.
    pub fn with_rules(rules: Vec<FieldRule>) -> Self {
        Self {
            rules,
            values: FormValues::default(),
            errors: HashMap::new(),
            status: SubmissionStatus::Idle,
        }
    }

    /// Sets a field's value.
    ///
    /// Does not validate. Editing while in a terminal state (Success or
    /// Error) returns the form to Idle.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if matches!(
            self.status,
            SubmissionStatus::Success | SubmissionStatus::Error
        ) {
            self.status = SubmissionStatus::Idle;
        }
        self.values.set(field, value.into());
    }

    /// Returns the current field values.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Returns the per-field errors from the last validation pass.
    pub fn errors(&self) -> &HashMap<Field, String> {
        &self.errors
    }

    /// Returns the current submission status.
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Returns the current errors as a [`ValidationErrors`] collection,
    /// suitable for logging or attaching to a larger error.
    pub fn validation_errors(&self) -> ValidationErrors {
        ValidationErrors::from(self.errors.clone())
    }

    /// Runs a full validation pass over every rule.
    ///
    /// Errors are cleared and recomputed, so the result is deterministic
    /// and idempotent for the same values. Returns `true` iff no field
    /// violates its rule.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();
        for rule in &self.rules {
            if let Some(msg) = rule.check(self.values.get(rule.field)) {
                self.errors.insert(rule.field, msg);
            }
        }
        self.errors.is_empty()
    }

    /// Clears values and errors and returns the status to Idle.
    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.errors.clear();
        self.status = SubmissionStatus::Idle;
    }

    /// Sets the submission status. Used by the submission controller.
    pub fn set_status(&mut self, status: SubmissionStatus) {
        self.status = status;
    }

    /// Clears all field values. Used by the submission controller after a
    /// successful submission ("no input values when success is true").
    pub fn clear_values(&mut self) {
        self.values = FormValues::default();
    }

    /// Clears the per-field errors. Used by the submission controller when
    /// entering the Loading state.
    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Takes a one-shot snapshot for the rendering collaborator.
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot::new(self.values.clone(), self.errors.clone(), self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_is_idle_and_empty() {
        let form = ContactForm::new();
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert!(form.values().is_empty());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_set_field_does_not_validate() {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, "x");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_validate_all_empty_yields_three_errors() {
        let mut form = ContactForm::new();
        assert!(!form.validate());
        assert_eq!(form.errors().len(), 3);
        assert!(form.errors().contains_key(&Field::Name));
        assert!(form.errors().contains_key(&Field::Email));
        assert!(form.errors().contains_key(&Field::Message));
        assert!(!form.errors().contains_key(&Field::Subject));
    }

    #[test]
    fn test_validate_full_valid_submission() {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, "Testowy Anonim");
        form.set_field(Field::Email, "testowy.anonim@domain.com");
        form.set_field(Field::Subject, "Test");
        form.set_field(
            Field::Message,
            "This is a long text message to send by me. This is a long text message to send by me",
        );
        assert!(form.validate());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_validate_recomputes_errors() {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, "Evan");
        form.validate();
        assert_eq!(
            form.errors().get(&Field::Name).map(String::as_str),
            Some("Name must be at least 5 characters")
        );

        form.set_field(Field::Name, "Evans");
        form.validate();
        assert!(!form.errors().contains_key(&Field::Name));
    }

    #[test]
    fn test_validate_is_idempotent() {
        let mut form = ContactForm::new();
        form.set_field(Field::Email, "www.google.com");
        form.validate();
        let first = form.errors().clone();
        form.validate();
        assert_eq!(&first, form.errors());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, "Evan");
        form.validate();
        form.set_status(SubmissionStatus::Error);
        form.reset();
        assert!(form.values().is_empty());
        assert!(form.errors().is_empty());
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_editing_leaves_terminal_state() {
        let mut form = ContactForm::new();
        form.set_status(SubmissionStatus::Success);
        form.set_field(Field::Name, "E");
        assert_eq!(form.status(), SubmissionStatus::Idle);

        form.set_status(SubmissionStatus::Error);
        form.set_field(Field::Name, "Ev");
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_editing_while_loading_keeps_loading() {
        let mut form = ContactForm::new();
        form.set_status(SubmissionStatus::Loading);
        form.set_field(Field::Name, "Evans");
        assert_eq!(form.status(), SubmissionStatus::Loading);
    }

    #[test]
    fn test_clear_values_keeps_status() {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, "Evans");
        form.set_status(SubmissionStatus::Success);
        form.clear_values();
        assert!(form.values().is_empty());
        assert_eq!(form.status(), SubmissionStatus::Success);
    }

    #[test]
    fn test_values_accessors() {
        let mut form = ContactForm::new();
        form.set_field(Field::Subject, "Hello");
        assert_eq!(form.values().get(Field::Subject), "Hello");
        assert_eq!(form.values().subject, "Hello");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&SubmissionStatus::Loading).unwrap();
        assert_eq!(json, "\"loading\"");
    }
}
