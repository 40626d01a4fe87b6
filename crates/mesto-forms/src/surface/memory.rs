//! In-memory form surface

use crate::spec::FormSpec;
use crate::surface::{EventKind, FormSurface, Target};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// One element of an in-memory form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    pub value: String,
    pub text: String,
    pub disabled: bool,
    pub attrs: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
}

/// Form surface backed by plain maps.
///
/// Used by tests and by hosts that render the form themselves.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    elements: HashMap<String, MemoryElement>,
    subscriptions: Vec<(String, EventKind)>,
    native_validation: bool,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self {
            elements: HashMap::new(),
            subscriptions: Vec::new(),
            native_validation: true,
        }
    }

    /// Surface with every field, error slot and the submit control of `spec`
    pub fn for_spec(spec: &FormSpec) -> Self {
        let mut surface = Self::new();
        for field in &spec.fields {
            surface.insert(&field.id);
            surface.insert(&field.slot_id());
        }
        surface.insert(&spec.submit_control);
        surface
    }

    pub fn insert(&mut self, id: &str) -> &mut MemoryElement {
        self.elements.entry(id.to_string()).or_default()
    }

    /// Drop an element, as if it were missing from the markup
    pub fn remove(&mut self, id: &str) -> Option<MemoryElement> {
        self.elements.remove(id)
    }

    pub fn element(&self, id: &str) -> Option<&MemoryElement> {
        self.elements.get(id)
    }

    pub fn set_value(&mut self, field: &str, value: &str) -> bool {
        match self.elements.get_mut(field) {
            Some(element) => {
                element.value = value.to_string();
                true
            }
            None => false,
        }
    }

    pub fn text(&self, id: &str) -> &str {
        self.elements.get(id).map(|e| e.text.as_str()).unwrap_or("")
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements
            .get(id)
            .is_some_and(|e| e.classes.contains(class))
    }

    pub fn is_disabled(&self, id: &str) -> bool {
        self.elements.get(id).is_some_and(|e| e.disabled)
    }

    pub fn subscriptions(&self) -> &[(String, EventKind)] {
        &self.subscriptions
    }

    pub fn is_subscribed(&self, field: &str, kind: EventKind) -> bool {
        self.subscriptions
            .iter()
            .any(|(f, k)| f == field && *k == kind)
    }

    pub fn native_validation(&self) -> bool {
        self.native_validation
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSurface for MemorySurface {
    fn value(&self, field: &str) -> Option<String> {
        self.elements.get(field).map(|e| e.value.clone())
    }

    fn attribute(&self, field: &str, name: &str) -> Option<String> {
        self.elements.get(field)?.attrs.get(name).cloned()
    }

    fn set_attribute(&mut self, field: &str, name: &str, value: &str) -> bool {
        match self.elements.get_mut(field) {
            Some(element) => {
                element.attrs.insert(name.to_string(), value.to_string());
                true
            }
            None => false,
        }
    }

    fn set_text(&mut self, slot: &str, text: &str) -> bool {
        match self.elements.get_mut(slot) {
            Some(element) => {
                element.text = text.to_string();
                true
            }
            None => false,
        }
    }

    fn toggle_class(&mut self, target: Target<'_>, class: &str, on: bool) -> bool {
        let id = match target {
            Target::Field(id) | Target::ErrorSlot(id) | Target::Submit(id) => id,
        };
        match self.elements.get_mut(id) {
            Some(element) => {
                if on {
                    element.classes.insert(class.to_string());
                } else {
                    element.classes.remove(class);
                }
                true
            }
            None => false,
        }
    }

    fn set_disabled(&mut self, control: &str, disabled: bool) -> bool {
        match self.elements.get_mut(control) {
            Some(element) => {
                element.disabled = disabled;
                true
            }
            None => false,
        }
    }

    fn disable_native_validation(&mut self) {
        self.native_validation = false;
    }

    fn subscribe(&mut self, field: &str, kind: EventKind) -> bool {
        if !self.elements.contains_key(field) {
            return false;
        }
        if !self.is_subscribed(field, kind) {
            self.subscriptions.push((field.to_string(), kind));
        }
        true
    }
}
