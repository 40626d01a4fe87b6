// File: src/validator.rs
// Purpose: Live validation of one form: attach, dispatch, evaluate, reset

use crate::check::{check_field, FieldState};
use crate::config::ValidationConfig;
use crate::spec::{FieldSpec, FormSpec};
use crate::surface::{EventKind, FieldEvent, FormSurface, Target};
use crate::rule::FieldRule;

/// Attribute that carries a field's pattern message in the markup
pub const ERROR_MESSAGE_ATTR: &str = "data-error-message";

/// Where a field stands since the form was attached or reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Untouched,
    Valid,
    Invalid,
}

impl From<&FieldState> for FieldStatus {
    fn from(state: &FieldState) -> Self {
        if state.is_valid {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid
        }
    }
}

#[derive(Debug, Clone)]
struct BoundField {
    spec: FieldSpec,
    rule: FieldRule,
    slot: String,
    status: FieldStatus,
}

/// Validator bound to one form.
///
/// The validator owns the rules and per-field status; the surface owns the
/// values and the visible state. Every painting operation takes the surface
/// explicitly, so a form is only ever touched by its own validator.
#[derive(Debug, Clone)]
pub struct FormValidator {
    form_id: String,
    submit_control: String,
    fields: Vec<BoundField>,
    config: ValidationConfig,
}

impl FormValidator {
    /// Wire a form for live validation.
    ///
    /// Turns off native validation, writes the rule attributes onto each
    /// field, disables the submit control and subscribes every field to
    /// input events (and blur events when `validate_on_blur` is set).
    pub fn attach<S>(surface: &mut S, spec: FormSpec, config: ValidationConfig) -> Self
    where
        S: FormSurface + ?Sized,
    {
        surface.disable_native_validation();

        let fields = spec
            .fields
            .into_iter()
            .map(|field| bind_field(surface, field))
            .collect();

        let mut validator = Self {
            form_id: spec.form_id,
            submit_control: spec.submit_control,
            fields,
            config,
        };

        validator.set_submit(surface, false);

        for field in &validator.fields {
            if !surface.subscribe(&field.spec.id, EventKind::Input) {
                tracing::debug!("Field {} not found in form {}", field.spec.id, validator.form_id);
            }
            if validator.config.validate_on_blur {
                surface.subscribe(&field.spec.id, EventKind::Blur);
            }
        }

        tracing::debug!(
            "Attached validation to form {} ({} fields)",
            validator.form_id,
            validator.fields.len()
        );

        if validator.config.validate_on_attach {
            validator.evaluate_form(surface);
        }

        validator
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Field ids in form order
    pub fn field_ids(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.spec.id.as_str())
    }

    pub fn status(&self, field: &str) -> Option<FieldStatus> {
        self.fields.iter().find(|f| f.spec.id == field).map(|f| f.status)
    }

    /// Effective rule of a field, after markup and `FieldSpec` overrides
    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|f| f.spec.id == field).map(|f| &f.rule)
    }

    /// Check one field's current value without painting anything.
    ///
    /// Returns `None` for unknown fields and fields missing from the surface.
    pub fn check<S>(&self, surface: &S, field: &str) -> Option<FieldState>
    where
        S: FormSurface + ?Sized,
    {
        let bound = self.fields.iter().find(|f| f.spec.id == field)?;
        self.check_bound(surface, bound)
    }

    /// Check every field, paint each result and gate the submit control.
    ///
    /// Returns whether the whole form is valid.
    pub fn evaluate_form<S>(&mut self, surface: &mut S) -> bool
    where
        S: FormSurface + ?Sized,
    {
        let mut all_valid = true;
        for index in 0..self.fields.len() {
            if let Some(state) = self.check_bound(&*surface, &self.fields[index]) {
                all_valid &= state.is_valid;
                self.apply(surface, index, &state);
            }
        }
        self.set_submit(surface, all_valid);
        all_valid
    }

    /// Handle a subscribed event: re-check and repaint every field, then
    /// re-gate submit.
    ///
    /// Returns the form's validity, or `None` when the event names a field
    /// this validator does not own.
    pub fn dispatch<S>(&mut self, surface: &mut S, event: &FieldEvent) -> Option<bool>
    where
        S: FormSurface + ?Sized,
    {
        if !self.fields.iter().any(|f| f.spec.id == event.field) {
            return None;
        }
        let valid = self.evaluate_form(surface);
        tracing::trace!("Form {} valid after {:?} on {}: {}", self.form_id, event.kind, event.field, valid);
        Some(valid)
    }

    /// Clear every error and disable submission. Field values stay as they are.
    pub fn reset<S>(&mut self, surface: &mut S)
    where
        S: FormSurface + ?Sized,
    {
        for field in &mut self.fields {
            hide_error(surface, &field.spec.id, &field.slot, &self.config);
            field.status = FieldStatus::Untouched;
        }
        self.set_submit(surface, false);
        tracing::debug!("Reset validation of form {}", self.form_id);
    }

    /// Whether every field is currently valid (nothing is painted)
    pub fn is_form_valid<S>(&self, surface: &S) -> bool
    where
        S: FormSurface + ?Sized,
    {
        self.fields
            .iter()
            .filter_map(|f| self.check_bound(surface, f))
            .all(|state| state.is_valid)
    }

    fn check_bound<S>(&self, surface: &S, field: &BoundField) -> Option<FieldState>
    where
        S: FormSurface + ?Sized,
    {
        let value = surface.value(&field.spec.id)?;
        Some(check_field(&value, &field.rule, self.config.locale))
    }

    fn apply<S>(&mut self, surface: &mut S, index: usize, state: &FieldState)
    where
        S: FormSurface + ?Sized,
    {
        let field = &mut self.fields[index];
        let status = FieldStatus::from(state);
        if field.status != status {
            tracing::debug!("Field {}: {:?} -> {:?}", field.spec.id, field.status, status);
            field.status = status;
        }

        if state.is_valid {
            hide_error(surface, &field.spec.id, &field.slot, &self.config);
        } else {
            show_error(surface, &field.spec.id, &field.slot, &state.error_message, &self.config);
        }
    }

    fn set_submit<S>(&self, surface: &mut S, enabled: bool)
    where
        S: FormSurface + ?Sized,
    {
        if surface.set_disabled(&self.submit_control, !enabled) {
            surface.toggle_class(
                Target::Submit(&self.submit_control),
                &self.config.inactive_button_class,
                !enabled,
            );
        } else {
            tracing::debug!(
                "Submit control {} not found in form {}",
                self.submit_control,
                self.form_id
            );
        }
    }
}

/// Resolve a field's rule and write its attributes onto the surface
fn bind_field<S>(surface: &mut S, spec: FieldSpec) -> BoundField
where
    S: FormSurface + ?Sized,
{
    let mut rule = spec.rule();

    // Markup message wins over the kind default; the field spec wins over both.
    if spec.custom_message.is_none() {
        if let Some(message) = surface.attribute(&spec.id, ERROR_MESSAGE_ATTR) {
            rule.custom_message = Some(message);
        }
    }

    for (name, value) in rule.html_attrs() {
        surface.set_attribute(&spec.id, name, &value);
    }
    if let Some(message) = &rule.custom_message {
        if surface.attribute(&spec.id, ERROR_MESSAGE_ATTR).is_none() {
            surface.set_attribute(&spec.id, ERROR_MESSAGE_ATTR, message);
        }
    }

    BoundField {
        slot: spec.slot_id(),
        spec,
        rule,
        status: FieldStatus::Untouched,
    }
}

fn show_error<S>(surface: &mut S, field: &str, slot: &str, message: &str, config: &ValidationConfig)
where
    S: FormSurface + ?Sized,
{
    if !surface.set_text(slot, message) {
        tracing::debug!("Error slot {} not found", slot);
        return;
    }
    surface.toggle_class(Target::Field(field), &config.input_error_class, true);
    surface.toggle_class(Target::ErrorSlot(slot), &config.error_class, true);
}

fn hide_error<S>(surface: &mut S, field: &str, slot: &str, config: &ValidationConfig)
where
    S: FormSurface + ?Sized,
{
    if !surface.set_text(slot, "") {
        return;
    }
    surface.toggle_class(Target::Field(field), &config.input_error_class, false);
    surface.toggle_class(Target::ErrorSlot(slot), &config.error_class, false);
}
