//! Field validation failures and their messages

use crate::config::Locale;
use serde::Serialize;
use thiserror::Error;

/// Default message for a name that contains disallowed characters
pub const DEFAULT_PATTERN_MESSAGE: &str =
    "Разрешены только латинские, кириллические буквы, знаки дефиса и пробелы";

const DEFAULT_PATTERN_MESSAGE_EN: &str =
    "Only Latin or Cyrillic letters, hyphens and spaces are allowed.";

/// Why a field value was rejected.
///
/// At most one failure is reported per field; the variants follow the order
/// in which [`check_field`](crate::check_field) tries the rules. `Display`
/// renders the Russian message the gallery shows by default.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ValidationFailure {
    #[error("Это поле обязательно для заполнения")]
    EmptyRequired,

    #[error("Минимальная длина: {min} символа")]
    TooShort { min: usize },

    #[error("Максимальная длина: {max} символов")]
    TooLong { max: usize },

    #[error("Введите корректный URL")]
    InvalidUrl,

    #[error("{}", .custom.as_deref().unwrap_or(DEFAULT_PATTERN_MESSAGE))]
    PatternMismatch { custom: Option<String> },
}

impl ValidationFailure {
    /// Short machine-readable name of the failure
    pub fn code(&self) -> &'static str {
        match self {
            ValidationFailure::EmptyRequired => "emptyRequired",
            ValidationFailure::TooShort { .. } => "tooShort",
            ValidationFailure::TooLong { .. } => "tooLong",
            ValidationFailure::InvalidUrl => "invalidUrl",
            ValidationFailure::PatternMismatch { .. } => "patternMismatch",
        }
    }

    /// Message text for the given locale.
    ///
    /// A custom pattern message is shown verbatim in every locale.
    pub fn message(&self, locale: Locale) -> String {
        match locale {
            Locale::Ru => self.to_string(),
            Locale::En => match self {
                ValidationFailure::EmptyRequired => "This field is required.".to_string(),
                ValidationFailure::TooShort { min } => {
                    format!("Minimum length: {} characters.", min)
                }
                ValidationFailure::TooLong { max } => {
                    format!("Maximum length: {} characters.", max)
                }
                ValidationFailure::InvalidUrl => "Enter a valid URL.".to_string(),
                ValidationFailure::PatternMismatch { custom } => custom
                    .clone()
                    .unwrap_or_else(|| DEFAULT_PATTERN_MESSAGE_EN.to_string()),
            },
        }
    }
}
