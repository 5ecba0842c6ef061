//! # contact-form
//!
//! Meta-crate re-exporting the contact form workspace. Depend on this for
//! the whole stack, or on the individual crates for finer-grained control.
//!
//! ```
//! use contact_form::core::{ContactForm, Field};
//!
//! let mut form = ContactForm::new();
//! form.set_field(Field::Name, "Testowy Anonim");
//! assert!(!form.validate()); // email and message still missing
//! ```

/// Validators, field rules, form state, and render snapshots.
pub use contact_form_core as core;

/// Submission controller, HTTP backend, configuration, and logging.
pub use contact_form_client as client;
