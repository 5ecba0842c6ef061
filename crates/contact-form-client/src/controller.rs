//! The submission controller.
//!
//! Orchestrates the validate-then-submit flow: a submit runs one validation
//! pass over the form, aborts with inline errors if any field fails, and
//! otherwise drives the status through Loading to Success or Error based on
//! the backend's answer.
//!
//! The controller owns the form and is driven through `&mut self`, so no
//! validation pass can overlap an in-flight request.

use contact_form_core::{ContactForm, Field, FormSnapshot, SubmissionStatus};

use crate::backend::SubmitBackend;
use crate::error::SubmitError;
use crate::payload::ContactPayload;

/// Drives the form through the submission state machine.
///
/// The backend is injected at construction, which is how tests replace the
/// network with a deterministic stand-in.
pub struct SubmissionController {
    form: ContactForm,
    backend: Box<dyn SubmitBackend>,
    last_error: Option<SubmitError>,
}

impl SubmissionController {
    /// Creates a controller around an empty form.
    pub fn new(backend: Box<dyn SubmitBackend>) -> Self {
        Self::with_form(ContactForm::new(), backend)
    }

    /// Creates a controller around an existing form.
    pub fn with_form(form: ContactForm, backend: Box<dyn SubmitBackend>) -> Self {
        Self {
            form,
            backend,
            last_error: None,
        }
    }

    /// Read access to the owned form.
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Sets a field's value (see [`ContactForm::set_field`]).
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// The error from the last failed submission, if any.
    pub fn last_error(&self) -> Option<&SubmitError> {
        self.last_error.as_ref()
    }

    /// Takes a render snapshot of the current form state.
    pub fn snapshot(&self) -> FormSnapshot {
        self.form.snapshot()
    }

    /// Clears the form and the last submission error.
    pub fn reset(&mut self) {
        self.form.reset();
        self.last_error = None;
    }

    /// Runs one submit cycle and returns the resulting status.
    ///
    /// - No-op while a request is in flight (returns `Loading`).
    /// - If any field fails validation, errors are populated, no request is
    ///   sent, and the status is `Idle`.
    /// - Otherwise the payload is posted: on success the values are cleared
    ///   and the status becomes `Success`; on failure the values are
    ///   retained for a manual retry and the status becomes `Error`.
    pub async fn submit(&mut self) -> SubmissionStatus {
        if self.form.status() == SubmissionStatus::Loading {
            tracing::debug!("submit ignored: a request is already in flight");
            return SubmissionStatus::Loading;
        }

        // A resubmit from a terminal state starts a fresh cycle.
        self.form.set_status(SubmissionStatus::Idle);

        if !self.form.validate() {
            tracing::debug!(
                errors = %self.form.validation_errors(),
                "validation failed, submission aborted"
            );
            return self.form.status();
        }

        self.form.set_status(SubmissionStatus::Loading);
        let payload = ContactPayload::from(self.form.values());

        match self.backend.send(&payload).await {
            Ok(()) => {
                tracing::info!("contact message accepted by backend");
                self.form.clear_values();
                self.last_error = None;
                self.form.set_status(SubmissionStatus::Success);
            }
            Err(err) => {
                tracing::warn!(error = %err, "contact submission failed");
                self.last_error = Some(err);
                self.form.set_status(SubmissionStatus::Error);
            }
        }

        self.form.status()
    }
}
