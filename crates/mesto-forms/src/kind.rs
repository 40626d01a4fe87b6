//! Semantic field kinds used by the gallery forms

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A string that names none of the field kinds
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown field kind: {0}")]
pub struct ParseKindError(pub String);

/// The role a field plays in one of the gallery forms.
///
/// The kind decides which rules apply: name kinds get the letters-only
/// pattern, URL kinds must hold an absolute URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    ProfileName,
    ProfileDescription,
    CardName,
    CardUrl,
    AvatarUrl,
}

impl FieldKind {
    pub const ALL: [FieldKind; 5] = [
        FieldKind::ProfileName,
        FieldKind::ProfileDescription,
        FieldKind::CardName,
        FieldKind::CardUrl,
        FieldKind::AvatarUrl,
    ];

    /// Marker class that tags an input of this kind in the page markup
    pub fn marker_class(self) -> &'static str {
        match self {
            FieldKind::ProfileName => "popup__input_type_name",
            FieldKind::ProfileDescription => "popup__input_type_description",
            FieldKind::CardName => "popup__input_type_card-name",
            FieldKind::CardUrl => "popup__input_type_url",
            FieldKind::AvatarUrl => "popup__input_type_avatar",
        }
    }

    /// Classify an input from its class list and `type` attribute.
    ///
    /// Marker classes win over the input type; a bare `type="url"` input is
    /// treated as a card link.
    pub fn classify<'a, I>(classes: I, input_type: &str) -> Option<FieldKind>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let classes: Vec<&str> = classes.into_iter().collect();
        Self::ALL
            .into_iter()
            .find(|kind| classes.contains(&kind.marker_class()))
            .or_else(|| input_type.eq_ignore_ascii_case("url").then_some(FieldKind::CardUrl))
    }

    pub fn is_name(self) -> bool {
        matches!(self, FieldKind::ProfileName | FieldKind::CardName)
    }

    pub fn is_url(self) -> bool {
        matches!(self, FieldKind::CardUrl | FieldKind::AvatarUrl)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::ProfileName => "profile-name",
            FieldKind::ProfileDescription => "profile-description",
            FieldKind::CardName => "card-name",
            FieldKind::CardUrl => "card-url",
            FieldKind::AvatarUrl => "avatar-url",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_marker_class() {
        assert_eq!(
            FieldKind::classify(["popup__input", "popup__input_type_name"], "text"),
            Some(FieldKind::ProfileName)
        );
        assert_eq!(
            FieldKind::classify(["popup__input", "popup__input_type_card-name"], "text"),
            Some(FieldKind::CardName)
        );
        assert_eq!(
            FieldKind::classify(["popup__input_type_avatar"], "url"),
            Some(FieldKind::AvatarUrl)
        );
    }

    #[test]
    fn test_classify_bare_url_input() {
        assert_eq!(FieldKind::classify(["popup__input"], "url"), Some(FieldKind::CardUrl));
        assert_eq!(FieldKind::classify(["popup__input"], "text"), None);
    }

    #[test]
    fn test_kind_groups() {
        assert!(FieldKind::ProfileName.is_name());
        assert!(FieldKind::CardName.is_name());
        assert!(!FieldKind::ProfileDescription.is_name());
        assert!(FieldKind::CardUrl.is_url());
        assert!(FieldKind::AvatarUrl.is_url());
        assert!(!FieldKind::CardName.is_url());
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("card-url".parse::<FieldKind>().unwrap(), FieldKind::CardUrl);
        assert_eq!(
            "email".parse::<FieldKind>(),
            Err(ParseKindError("email".to_string()))
        );
        for kind in FieldKind::ALL {
            assert_eq!(kind.to_string().parse::<FieldKind>().unwrap(), kind);
        }
    }
}
