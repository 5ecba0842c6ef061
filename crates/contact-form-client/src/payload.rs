//! The outbound request body.

use contact_form_core::FormValues;
use serde::{Deserialize, Serialize};

/// JSON body of the contact `POST`.
///
/// An empty subject is omitted from the serialized body rather than sent
/// as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Optional subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Message body.
    pub message: String,
}

impl From<&FormValues> for ContactPayload {
    fn from(values: &FormValues) -> Self {
        Self {
            name: values.name.clone(),
            email: values.email.clone(),
            subject: if values.subject.is_empty() {
                None
            } else {
                Some(values.subject.clone())
            },
            message: values.message.clone(),
        }
    }
}
