// File: src/config.rs
// Purpose: Validation settings (selectors and state classes) from JS or forms.toml

use anyhow::{bail, Context, Result};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

static GLOBAL: OnceCell<ValidationConfig> = OnceCell::new();

/// Language of the built-in messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

/// Selectors and class names used to find forms and mark their state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default = "default_form_selector", alias = "formSelector")]
    pub form_selector: String,

    #[serde(default = "default_input_selector", alias = "inputSelector")]
    pub input_selector: String,

    #[serde(default = "default_submit_button_selector", alias = "submitButtonSelector")]
    pub submit_button_selector: String,

    /// Added to the submit control while it is disabled
    #[serde(default = "default_inactive_button_class", alias = "inactiveButtonClass")]
    pub inactive_button_class: String,

    /// Added to an input whose value is invalid
    #[serde(default = "default_input_error_class", alias = "inputErrorClass")]
    pub input_error_class: String,

    /// Added to an error slot while it shows a message
    #[serde(default = "default_error_class", alias = "errorClass")]
    pub error_class: String,

    /// Also re-check a field when it loses focus
    #[serde(default = "default_false", alias = "validateOnBlur")]
    pub validate_on_blur: bool,

    /// Run one full evaluation right after attaching
    #[serde(default = "default_true", alias = "validateOnAttach")]
    pub validate_on_attach: bool,

    #[serde(default)]
    pub locale: Locale,
}

// Default values
fn default_form_selector() -> String {
    ".popup__form".to_string()
}

fn default_input_selector() -> String {
    ".popup__input".to_string()
}

fn default_submit_button_selector() -> String {
    ".popup__button".to_string()
}

fn default_inactive_button_class() -> String {
    "popup__button_disabled".to_string()
}

fn default_input_error_class() -> String {
    "popup__input_type_error".to_string()
}

fn default_error_class() -> String {
    "popup__error_visible".to_string()
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            form_selector: default_form_selector(),
            input_selector: default_input_selector(),
            submit_button_selector: default_submit_button_selector(),
            inactive_button_class: default_inactive_button_class(),
            input_error_class: default_input_error_class(),
            error_class: default_error_class(),
            validate_on_blur: false,
            validate_on_attach: true,
            locale: Locale::default(),
        }
    }
}

impl ValidationConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ValidationConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./forms.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("forms.toml")
    }

    /// Make this the process-wide configuration. Only the first call succeeds.
    pub fn install(self) -> Result<&'static ValidationConfig> {
        if GLOBAL.set(self).is_err() {
            bail!("Validation config is already installed");
        }
        tracing::debug!("Validation config installed");
        Ok(Self::global())
    }

    /// The installed configuration, or the defaults if none was installed
    pub fn global() -> &'static ValidationConfig {
        GLOBAL.get_or_init(ValidationConfig::default)
    }

    /// Whether the global configuration is set, by `install` or by a
    /// first `global()` falling back to the defaults
    pub fn is_initialized() -> bool {
        GLOBAL.get().is_some()
    }
}
