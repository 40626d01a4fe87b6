//! The UI seam: how a validator reads field values and paints its results

use serde::{Deserialize, Serialize};

pub mod memory;

/// Something on the form a class can be toggled on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    Field(&'a str),
    ErrorSlot(&'a str),
    Submit(&'a str),
}

/// UI events a field can be subscribed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// The value changed
    Input,
    /// The field lost focus
    Blur,
}

/// A subscribed event delivered back to [`FormValidator::dispatch`](crate::FormValidator::dispatch)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEvent {
    pub field: String,
    pub kind: EventKind,
}

impl FieldEvent {
    pub fn input(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: EventKind::Input,
        }
    }

    pub fn blur(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: EventKind::Blur,
        }
    }
}

/// Host UI of one form.
///
/// Lookups of missing elements return `None`, and writes to them return
/// `false`; the validator skips those updates instead of failing.
pub trait FormSurface {
    /// Current value of a field
    fn value(&self, field: &str) -> Option<String>;

    /// Attribute of a field
    fn attribute(&self, field: &str, name: &str) -> Option<String>;

    fn set_attribute(&mut self, field: &str, name: &str, value: &str) -> bool;

    /// Replace the text of an error slot
    fn set_text(&mut self, slot: &str, text: &str) -> bool;

    fn toggle_class(&mut self, target: Target<'_>, class: &str, on: bool) -> bool;

    fn set_disabled(&mut self, control: &str, disabled: bool) -> bool;

    /// Turn off the host's built-in constraint validation for the form
    fn disable_native_validation(&mut self);

    /// Ask the host to report `kind` events on `field` back to the validator
    fn subscribe(&mut self, field: &str, kind: EventKind) -> bool;
}
