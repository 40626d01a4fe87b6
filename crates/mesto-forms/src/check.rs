//! Single-field checks

use crate::config::Locale;
use crate::failure::ValidationFailure;
use crate::rule::FieldRule;
use serde::Serialize;

/// Outcome of checking one field value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldState {
    pub is_valid: bool,
    /// Empty when the field is valid
    pub error_message: String,
    pub failure: Option<ValidationFailure>,
}

impl FieldState {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: String::new(),
            failure: None,
        }
    }

    pub fn invalid(failure: ValidationFailure, locale: Locale) -> Self {
        Self {
            is_valid: false,
            error_message: failure.message(locale),
            failure: Some(failure),
        }
    }
}

/// Check `value` against `rule`, stopping at the first broken rule.
///
/// Order: required, min length, max length, URL format, pattern. Lengths are
/// counted in characters of the raw value; emptiness is judged on the
/// trimmed value.
pub fn check_field(value: &str, rule: &FieldRule, locale: Locale) -> FieldState {
    match first_failure(value, rule) {
        Some(failure) => FieldState::invalid(failure, locale),
        None => FieldState::valid(),
    }
}

fn first_failure(value: &str, rule: &FieldRule) -> Option<ValidationFailure> {
    let blank = value.trim().is_empty();
    let len = value.chars().count();

    if rule.required && blank {
        return Some(ValidationFailure::EmptyRequired);
    }

    if let Some(min) = rule.min_length {
        if len > 0 && len < min {
            return Some(ValidationFailure::TooShort { min });
        }
    }

    if let Some(max) = rule.max_length {
        if len > max {
            return Some(ValidationFailure::TooLong { max });
        }
    }

    if rule.kind.is_url() && !blank && !is_absolute_url(value) {
        return Some(ValidationFailure::InvalidUrl);
    }

    if let Some(pattern) = &rule.pattern {
        if !blank && !pattern.is_match(value) {
            return Some(ValidationFailure::PatternMismatch {
                custom: rule.custom_message.clone(),
            });
        }
    }

    None
}

/// Whether `value` parses as an absolute URL
pub fn is_absolute_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}
