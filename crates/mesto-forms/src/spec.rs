//! Explicit description of a form: its fields, error slots and submit control

use crate::kind::FieldKind;
use crate::rule::FieldRule;
use serde::{Deserialize, Serialize};

/// Suffix appended to a field id to find its error slot
pub const ERROR_SLOT_SUFFIX: &str = "-error";

/// One field of a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub id: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub error_slot: Option<String>,
    #[serde(default)]
    pub custom_message: Option<String>,
}

impl FieldSpec {
    pub fn new(id: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            kind,
            error_slot: None,
            custom_message: None,
        }
    }

    pub fn error_slot(mut self, slot: impl Into<String>) -> Self {
        self.error_slot = Some(slot.into());
        self
    }

    pub fn custom_message(mut self, message: impl Into<String>) -> Self {
        self.custom_message = Some(message.into());
        self
    }

    /// Error slot id, `"{id}-error"` unless overridden
    pub fn slot_id(&self) -> String {
        self.error_slot
            .clone()
            .unwrap_or_else(|| format!("{}{}", self.id, ERROR_SLOT_SUFFIX))
    }

    /// Kind rules with this field's message override applied
    pub fn rule(&self) -> FieldRule {
        let rule = FieldRule::for_kind(self.kind);
        match &self.custom_message {
            Some(message) => rule.with_message(message.clone()),
            None => rule,
        }
    }
}

/// Ordered fields of one form plus its submit control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSpec {
    pub form_id: String,
    pub fields: Vec<FieldSpec>,
    pub submit_control: String,
}

impl FormSpec {
    pub fn new(form_id: impl Into<String>, submit_control: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
            fields: Vec::new(),
            submit_control: submit_control.into(),
        }
    }

    /// Append a field; a field with an id already present replaces it
    pub fn field(mut self, field: FieldSpec) -> Self {
        match self.fields.iter_mut().find(|f| f.id == field.id) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    pub fn get(&self, id: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// The profile popup: name and description
    pub fn edit_profile() -> Self {
        Self::new("edit-profile", "edit-profile-submit")
            .field(FieldSpec::new("user-name", FieldKind::ProfileName))
            .field(FieldSpec::new("user-description", FieldKind::ProfileDescription))
    }

    /// The new card popup: place name and image link
    pub fn new_place() -> Self {
        Self::new("new-place", "new-place-submit")
            .field(FieldSpec::new("place-name", FieldKind::CardName))
            .field(FieldSpec::new("place-link", FieldKind::CardUrl))
    }

    /// The avatar popup: image link
    pub fn edit_avatar() -> Self {
        Self::new("edit-avatar", "edit-avatar-submit")
            .field(FieldSpec::new("user-avatar", FieldKind::AvatarUrl))
    }
}
