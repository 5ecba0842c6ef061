//! # contact-form-core
//!
//! Validation and state core for a contact form: pure syntax validators,
//! per-field rule checking, the form state owner, and render snapshots for
//! a UI collaborator.
//!
//! Validation is on-submit only: [`form::ContactForm::set_field`] never
//! validates, and a single [`form::ContactForm::validate`] pass populates
//! at most one error per field.

pub mod error;
pub mod fields;
pub mod form;
pub mod render;
pub mod snapshot;
pub mod validators;

pub use error::ValidationErrors;
pub use fields::{contact_rules, Field, FieldRule};
pub use form::{ContactForm, FormValues, SubmissionStatus};
pub use snapshot::{FieldView, FormSnapshot, WidgetKind};
