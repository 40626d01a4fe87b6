// File: src/rule.rs
// Purpose: Per-field rule sets derived from the field kind

use crate::failure::DEFAULT_PATTERN_MESSAGE;
use crate::kind::FieldKind;
use once_cell::sync::Lazy;
use regex::Regex;

/// Latin and Cyrillic letters (including Ё/ё), whitespace and hyphens
pub static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-zА-Яа-яЁё\s\-]+$").expect("name pattern is valid"));

/// Rules applied to a single field
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub kind: FieldKind,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Regex>,
    pub custom_message: Option<String>,
}

impl FieldRule {
    /// Rule set the gallery uses for each kind
    pub fn for_kind(kind: FieldKind) -> Self {
        let rule = Self::bare(kind).required();
        match kind {
            FieldKind::ProfileName => rule.length(2, 40).name_pattern(),
            FieldKind::ProfileDescription => rule.length(2, 200),
            FieldKind::CardName => rule.length(2, 30).name_pattern(),
            FieldKind::CardUrl | FieldKind::AvatarUrl => rule,
        }
    }

    /// A rule with no constraints besides what the kind implies
    pub fn bare(kind: FieldKind) -> Self {
        Self {
            kind,
            required: false,
            min_length: None,
            max_length: None,
            pattern: None,
            custom_message: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn length(self, min: usize, max: usize) -> Self {
        self.min_length(min).max_length(max)
    }

    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Letters-only pattern with the default message as the custom one
    fn name_pattern(self) -> Self {
        self.pattern(NAME_PATTERN.clone())
            .with_message(DEFAULT_PATTERN_MESSAGE)
    }

    /// Message shown on a pattern mismatch
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.custom_message = Some(message.into());
        self
    }

    /// Markup attributes that mirror this rule (`required`, `minlength`, ...)
    pub fn html_attrs(&self) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::new();
        if self.required {
            attrs.push(("required", "true".to_string()));
        }
        if let Some(min) = self.min_length {
            attrs.push(("minlength", min.to_string()));
        }
        if let Some(max) = self.max_length {
            attrs.push(("maxlength", max.to_string()));
        }
        attrs
    }
}
