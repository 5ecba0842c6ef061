//! One-shot render snapshots.
//!
//! The rendering collaborator consumes a [`FormSnapshot`] of
//! `{values, errors, status}` instead of observing the form directly; the
//! form hands one out per render and keeps exclusive ownership of its
//! state. [`FieldView`] pairs each field with everything a template needs
//! to render one form row.

use std::collections::HashMap;

use serde::Serialize;

use crate::fields::Field;
use crate::form::{FormValues, SubmissionStatus};

/// The widget used to render a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    /// `<input type="text">`.
    TextInput,
    /// `<input type="email">`.
    EmailInput,
    /// `<textarea>`.
    Textarea,
}

impl Field {
    /// The stable `data-test` identifier of this field's container.
    pub const fn data_test(self) -> &'static str {
        match self {
            Self::Name => "new-name",
            Self::Email => "new-email",
            Self::Subject => "new-subject",
            Self::Message => "new-message",
        }
    }

    /// The widget this field renders with.
    pub const fn widget(self) -> WidgetKind {
        match self {
            Self::Email => WidgetKind::EmailInput,
            Self::Message => WidgetKind::Textarea,
            Self::Name | Self::Subject => WidgetKind::TextInput,
        }
    }
}

/// A point-in-time copy of the form state, safe to hand to a renderer.
#[derive(Debug, Clone, Serialize)]
pub struct FormSnapshot {
    /// Field values at snapshot time.
    pub values: FormValues,
    /// Per-field error messages from the last validation pass.
    pub errors: HashMap<Field, String>,
    /// Submission status at snapshot time.
    pub status: SubmissionStatus,
}

/// Everything needed to render one form row.
#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    /// The field being rendered.
    pub field: Field,
    /// Human-readable label.
    pub label: &'static str,
    /// `data-test` identifier for the row container.
    pub data_test: &'static str,
    /// Widget to render the input with.
    pub widget: WidgetKind,
    /// Current value.
    pub value: String,
    /// Error message, if the field failed the last validation pass.
    pub error: Option<String>,
}

impl FormSnapshot {
    /// Creates a snapshot from the form's current state.
    pub fn new(
        values: FormValues,
        errors: HashMap<Field, String>,
        status: SubmissionStatus,
    ) -> Self {
        Self {
            values,
            errors,
            status,
        }
    }

    /// Returns per-field views in form order.
    pub fn field_views(&self) -> Vec<FieldView> {
        Field::ALL
            .iter()
            .map(|&field| FieldView {
                field,
                label: field.label(),
                data_test: field.data_test(),
                widget: field.widget(),
                value: self.values.get(field).to_string(),
                error: self.errors.get(&field).cloned(),
            })
            .collect()
    }

    /// Returns `true` if a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.status == SubmissionStatus::Loading
    }
}
