//! HTML rendering for the contact form.
//!
//! Renders a [`FormSnapshot`] into the markup the test contract relies on:
//! each field row is addressable by its `data-test` identifier, error text
//! lives in an element classed `error-message`, the loading indicator is
//! classed `loader`, and exactly one of two notification banners appears in
//! the terminal states.

use std::collections::HashMap;

use crate::form::SubmissionStatus;
use crate::snapshot::{FieldView, FormSnapshot, WidgetKind};

/// Class of the inline per-field error element.
pub const ERROR_MESSAGE_CLASS: &str = "error-message";
/// Class of the loading indicator shown while a request is in flight.
pub const LOADER_CLASS: &str = "loader";
/// Class of the error notification banner.
pub const TOAST_ERROR_CLASS: &str = "toast-error";
/// Id of the success notification banner.
pub const SUCCESS_ID: &str = "success";
/// Exact copy of the success notification.
pub const SUCCESS_MESSAGE: &str = "Your message has been sent successfully";
/// Heading shown above the form.
pub const FORM_HEADER: &str = "Contact Form";

/// Formats an HTML attributes map into a string like ` key="value"`.
fn render_attrs(attrs: &HashMap<String, String>) -> String {
    if attrs.is_empty() {
        return String::new();
    }
    let mut parts: Vec<String> = attrs
        .iter()
        .map(|(k, v)| format!(r#" {k}="{v}""#))
        .collect();
    parts.sort(); // deterministic output for testing
    parts.join("")
}

/// Renders the input element for one field view.
///
/// `attrs` carries extra HTML attributes for renderers that need them
/// (classes, aria hooks); [`render_form`] passes none.
pub fn render_widget(view: &FieldView, attrs: &HashMap<String, String>) -> String {
    let name = view.field.as_str();
    let id = format!("id_{name}");
    let extra = render_attrs(attrs);
    match view.widget {
        WidgetKind::TextInput => format!(
            r#"<input type="text" name="{name}" id="{id}" value="{}"{extra} />"#,
            view.value
        ),
        WidgetKind::EmailInput => format!(
            r#"<input type="email" name="{name}" id="{id}" value="{}"{extra} />"#,
            view.value
        ),
        WidgetKind::Textarea => format!(
            r#"<textarea name="{name}" id="{id}"{extra}>{}</textarea>"#,
            view.value
        ),
    }
}

/// Renders the inline error element, or nothing when the field is clean.
fn render_error(view: &FieldView) -> String {
    view.error.as_ref().map_or_else(String::new, |msg| {
        format!(r#"<div class="{ERROR_MESSAGE_CLASS}">{msg}</div>"#)
    })
}

/// Renders one form row: label, widget, and inline error.
fn render_row(view: &FieldView) -> String {
    let name = view.field.as_str();
    format!(
        r#"<div data-test="{}"><label for="id_{name}">{}</label>{}{}</div>"#,
        view.data_test,
        view.label,
        render_widget(view, &HashMap::new()),
        render_error(view),
    )
}

/// Renders the notification area for the current status.
fn render_notifications(status: SubmissionStatus) -> String {
    match status {
        SubmissionStatus::Loading => format!(r#"<div class="{LOADER_CLASS}"></div>"#),
        SubmissionStatus::Success => {
            format!(r#"<div id="{SUCCESS_ID}"><h3>{SUCCESS_MESSAGE}</h3></div>"#)
        }
        SubmissionStatus::Error => format!(
            r#"<div class="{TOAST_ERROR_CLASS}"><h3>Something went wrong. Please try again.</h3></div>"#
        ),
        SubmissionStatus::Idle => String::new(),
    }
}

/// Renders the whole form from a snapshot.
pub fn render_form(snapshot: &FormSnapshot) -> String {
    let rows: String = snapshot.field_views().iter().map(render_row).collect();
    format!(
        r#"<form data-test="form"><h1 data-test="header">{FORM_HEADER}</h1>{rows}<button type="submit">Submit</button></form>{}"#,
        render_notifications(snapshot.status),
    )
}
