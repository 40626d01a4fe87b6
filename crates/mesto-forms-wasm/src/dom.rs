//! Form surface backed by a live `<form>` element

use mesto_forms::{EventKind, FieldKind, FieldSpec, FormSpec, FormSurface, Target, ValidationConfig};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

/// DOM implementation of [`FormSurface`].
///
/// Fields and error slots are looked up by id inside the form; the submit
/// control is looked up by selector.
pub struct DomSurface {
    form: HtmlFormElement,
    subscriptions: Vec<(String, EventKind)>,
}

impl DomSurface {
    pub fn new(form: HtmlFormElement) -> Self {
        Self {
            form,
            subscriptions: Vec::new(),
        }
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    /// Element with the given id inside this form
    pub fn find(&self, id: &str) -> Option<Element> {
        let selector = format!("[id=\"{}\"]", id.replace('"', "\\\""));
        self.form.query_selector(&selector).ok().flatten()
    }

    fn resolve(&self, target: Target<'_>) -> Option<Element> {
        match target {
            Target::Field(id) | Target::ErrorSlot(id) => self.find(id),
            Target::Submit(selector) => self.form.query_selector(selector).ok().flatten(),
        }
    }

    /// Hand over the listeners requested since the last call
    pub fn take_subscriptions(&mut self) -> Vec<(String, EventKind)> {
        std::mem::take(&mut self.subscriptions)
    }

    /// Describe the form from its markup.
    ///
    /// Inputs matching `input_selector` are classified by their marker class
    /// or `type="url"`; inputs without an id or a known kind are skipped.
    pub fn form_spec(&self, config: &ValidationConfig) -> Result<FormSpec, JsValue> {
        let form_id = [self.form.name(), self.form.id()]
            .into_iter()
            .find(|s| !s.is_empty())
            .unwrap_or_else(|| "form".to_string());

        let mut spec = FormSpec::new(form_id, config.submit_button_selector.clone());

        let inputs = self.form.query_selector_all(&config.input_selector)?;
        for index in 0..inputs.length() {
            let Some(element) = inputs.item(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };

            let id = element.id();
            let input_type = element.get_attribute("type").unwrap_or_default();
            let class_name = element.class_name();
            let kind = FieldKind::classify(class_name.split_whitespace(), &input_type);

            match (id.is_empty(), kind) {
                (false, Some(kind)) => spec = spec.field(FieldSpec::new(id, kind)),
                (true, Some(_)) => warn("Skipping input without id"),
                _ => {}
            }
        }

        Ok(spec)
    }
}

impl FormSurface for DomSurface {
    fn value(&self, field: &str) -> Option<String> {
        let element = self.find(field)?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        element
            .dyn_ref::<HtmlTextAreaElement>()
            .map(HtmlTextAreaElement::value)
    }

    fn attribute(&self, field: &str, name: &str) -> Option<String> {
        self.find(field)?.get_attribute(name)
    }

    fn set_attribute(&mut self, field: &str, name: &str, value: &str) -> bool {
        self.find(field)
            .is_some_and(|element| element.set_attribute(name, value).is_ok())
    }

    fn set_text(&mut self, slot: &str, text: &str) -> bool {
        match self.find(slot) {
            Some(element) => {
                element.set_text_content(Some(text));
                true
            }
            None => false,
        }
    }

    fn toggle_class(&mut self, target: Target<'_>, class: &str, on: bool) -> bool {
        self.resolve(target).is_some_and(|element| {
            element
                .class_list()
                .toggle_with_force(class, on)
                .is_ok()
        })
    }

    fn set_disabled(&mut self, control: &str, disabled: bool) -> bool {
        let Some(element) = self.resolve(Target::Submit(control)) else {
            return false;
        };
        let result = if disabled {
            element.set_attribute("disabled", "")
        } else {
            element.remove_attribute("disabled")
        };
        result.is_ok()
    }

    fn disable_native_validation(&mut self) {
        self.form.set_no_validate(true);
    }

    fn subscribe(&mut self, field: &str, kind: EventKind) -> bool {
        if self.find(field).is_none() {
            return false;
        }
        self.subscriptions.push((field.to_string(), kind));
        true
    }
}

/// DOM event that carries a given [`EventKind`]
pub fn event_name(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Input => "input",
        EventKind::Blur => "blur",
    }
}

pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}
