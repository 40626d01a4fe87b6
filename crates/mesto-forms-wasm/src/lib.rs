//! Mesto Forms WASM
//!
//! WebAssembly bindings for the gallery's form validation.
//! Attaches live validation to every popup form on the page using the same
//! rules as the native crate.

use mesto_forms::kind::ParseKindError;
use mesto_forms::{check_field, FieldEvent, FieldKind, FieldRule, FormValidator, ValidationConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::HtmlFormElement;

pub mod dom;

use dom::{event_name, warn, DomSurface};

/// A form with its validator and the surface it paints
struct AttachedForm {
    validator: FormValidator,
    surface: DomSurface,
}

thread_local! {
    static FORMS: RefCell<Vec<Rc<RefCell<AttachedForm>>>> = const { RefCell::new(Vec::new()) };
}

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Parse a JS config object, falling back to defaults for missing keys
fn parse_config(config: JsValue) -> Result<ValidationConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(ValidationConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))
}

/// Attach live validation to every form matching `formSelector`
///
/// # Example (JavaScript)
/// ```javascript
/// enableValidation({
///     formSelector: '.popup__form',
///     inputSelector: '.popup__input',
///     submitButtonSelector: '.popup__button',
///     inactiveButtonClass: 'popup__button_disabled',
///     inputErrorClass: 'popup__input_type_error',
///     errorClass: 'popup__error_visible'
/// });
/// ```
#[wasm_bindgen(js_name = enableValidation)]
pub fn enable_validation(config: JsValue) -> Result<(), JsValue> {
    let config = parse_config(config)?;
    if config.clone().install().is_err() {
        warn("Validation config was already installed; keeping the first one for checkField");
    }

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document available"))?;

    let forms = document.query_selector_all(&config.form_selector)?;
    for index in 0..forms.length() {
        let Some(form) = forms.item(index).and_then(|n| n.dyn_into::<HtmlFormElement>().ok()) else {
            continue;
        };
        if find_attached(&form).is_some() {
            continue;
        }
        attach_form(form, config.clone())?;
    }

    Ok(())
}

/// The form as attached by `enableValidation`, if it was
fn find_attached(form: &HtmlFormElement) -> Option<Rc<RefCell<AttachedForm>>> {
    FORMS.with(|forms| {
        forms
            .borrow()
            .iter()
            .find(|f| f.borrow().surface.form() == form)
            .cloned()
    })
}

fn attach_form(form: HtmlFormElement, config: ValidationConfig) -> Result<(), JsValue> {
    let mut surface = DomSurface::new(form);
    let spec = surface.form_spec(&config)?;
    let validator = FormValidator::attach(&mut surface, spec, config);
    let subscriptions = surface.take_subscriptions();

    let attached = Rc::new(RefCell::new(AttachedForm { validator, surface }));

    for (field, kind) in subscriptions {
        let Some(element) = attached.borrow().surface.find(&field) else {
            continue;
        };

        let event = FieldEvent { field, kind };
        let handle = Rc::clone(&attached);
        let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            let Ok(mut form) = handle.try_borrow_mut() else {
                warn("Validation is already running for this form");
                return;
            };
            let AttachedForm { validator, surface } = &mut *form;
            validator.dispatch(surface, &event);
        });

        element.add_event_listener_with_callback(event_name(kind), listener.as_ref().unchecked_ref())?;
        // The listener lives as long as the page.
        listener.forget();
    }

    FORMS.with(|forms| forms.borrow_mut().push(attached));
    Ok(())
}

/// Clear every error of `form` and disable its submit button
///
/// Field values are left alone; call `form.reset()` for that.
#[wasm_bindgen(js_name = clearValidation)]
pub fn clear_validation(form: HtmlFormElement, config: JsValue) -> Result<(), JsValue> {
    if let Some(attached) = find_attached(&form) {
        let mut attached = attached.borrow_mut();
        let AttachedForm { validator, surface } = &mut *attached;
        validator.reset(surface);
        return Ok(());
    }

    // Not attached through enableValidation: build a one-off validator.
    let config = ValidationConfig {
        validate_on_attach: false,
        ..parse_config(config)?
    };
    let mut surface = DomSurface::new(form);
    let spec = surface.form_spec(&config)?;
    let mut validator = FormValidator::attach(&mut surface, spec, config);
    validator.reset(&mut surface);
    Ok(())
}

/// Check one value against the rules of a field kind
///
/// # Returns
/// `{ isValid, errorMessage, failure }`
///
/// # Example (JavaScript)
/// ```javascript
/// const state = checkField('card-url', 'https://example.com/x.png');
/// ```
#[wasm_bindgen(js_name = checkField)]
pub fn check_field_js(kind: &str, value: &str) -> Result<JsValue, JsValue> {
    let kind: FieldKind = kind
        .parse()
        .map_err(|e: ParseKindError| JsValue::from_str(&e.to_string()))?;
    let state = check_field(value, &FieldRule::for_kind(kind), ValidationConfig::global().locale);
    Ok(serde_wasm_bindgen::to_value(&state)?)
}

/// Quick URL validation
#[wasm_bindgen(js_name = isValidUrl)]
pub fn is_valid_url_js(url: &str) -> bool {
    mesto_forms::check::is_absolute_url(url)
}
