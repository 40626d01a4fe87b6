//! Integration tests for mesto-forms
//!
//! Cover the rule chain through the public API and the live behaviour of the
//! validator against an in-memory surface:
//! - Required, length, URL and name pattern rules
//! - Submit gating and idempotent evaluation
//! - Event dispatch and listener registration
//! - Reset

use mesto_forms::validator::ERROR_MESSAGE_ATTR;
use mesto_forms::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

const INVALID: &str = "popup__input_type_error";
const VISIBLE: &str = "popup__error_visible";
const INACTIVE: &str = "popup__button_disabled";

fn attached(spec: FormSpec, values: &[(&str, &str)]) -> (FormValidator, MemorySurface) {
    let mut surface = MemorySurface::for_spec(&spec);
    for (field, value) in values {
        surface.set_value(field, value);
    }
    let validator = FormValidator::attach(&mut surface, spec, ValidationConfig::default());
    (validator, surface)
}

fn failure_of(kind: FieldKind, value: &str) -> Option<ValidationFailure> {
    check_field(value, &FieldRule::for_kind(kind), Locale::Ru).failure
}

#[rstest]
#[case(FieldKind::ProfileName)]
#[case(FieldKind::ProfileDescription)]
#[case(FieldKind::CardName)]
#[case(FieldKind::CardUrl)]
#[case(FieldKind::AvatarUrl)]
fn test_required_kinds_reject_blank(#[case] kind: FieldKind) {
    assert_eq!(failure_of(kind, ""), Some(ValidationFailure::EmptyRequired));
    assert_eq!(failure_of(kind, " \t "), Some(ValidationFailure::EmptyRequired));
}

#[rstest]
#[case(FieldKind::ProfileName, 40)]
#[case(FieldKind::ProfileDescription, 200)]
#[case(FieldKind::CardName, 30)]
fn test_max_length_boundary(#[case] kind: FieldKind, #[case] max: usize) {
    assert_eq!(failure_of(kind, &"a".repeat(max)), None);
    assert_eq!(
        failure_of(kind, &"a".repeat(max + 1)),
        Some(ValidationFailure::TooLong { max })
    );
}

#[rstest]
#[case(FieldKind::ProfileName)]
#[case(FieldKind::ProfileDescription)]
#[case(FieldKind::CardName)]
fn test_min_length_boundary(#[case] kind: FieldKind) {
    assert_eq!(failure_of(kind, "a"), Some(ValidationFailure::TooShort { min: 2 }));
    assert_eq!(failure_of(kind, "ab"), None);
}

#[test]
fn test_optional_field_accepts_empty_value() {
    let rule = FieldRule::for_kind(FieldKind::ProfileDescription).optional();
    assert!(check_field("", &rule, Locale::Ru).is_valid);
}

#[rstest]
#[case("https://example.com/x.png", None)]
#[case("http://localhost:8080/a.jpg", None)]
#[case("not a url", Some(ValidationFailure::InvalidUrl))]
#[case("example.com/x.png", Some(ValidationFailure::InvalidUrl))]
fn test_url_fields(#[case] value: &str, #[case] expected: Option<ValidationFailure>) {
    assert_eq!(failure_of(FieldKind::CardUrl, value), expected);
    assert_eq!(failure_of(FieldKind::AvatarUrl, value), expected);
}

#[rstest]
#[case("Ann-Marie", true)]
#[case("Жак-Ив Кусто", true)]
#[case("Ann123", false)]
#[case("Ann_Marie", false)]
fn test_name_fields(#[case] value: &str, #[case] valid: bool) {
    let state = check_field(value, &FieldRule::for_kind(FieldKind::ProfileName), Locale::Ru);
    assert_eq!(state.is_valid, valid);
}

#[test]
fn test_name_mismatch_messages() {
    let custom = FieldRule::for_kind(FieldKind::CardName).with_message("Только буквы, пробел и дефис");
    assert_eq!(
        check_field("Ann123", &custom, Locale::Ru).error_message,
        "Только буквы, пробел и дефис"
    );

    let mut plain = FieldRule::for_kind(FieldKind::CardName);
    plain.custom_message = None;
    assert_eq!(
        check_field("Ann123", &plain, Locale::Ru).error_message,
        "Разрешены только латинские, кириллические буквы, знаки дефиса и пробелы"
    );
}

#[test]
fn test_english_locale() {
    let state = check_field("", &FieldRule::for_kind(FieldKind::CardUrl), Locale::En);
    assert_eq!(state.error_message, "This field is required.");
}

#[test]
fn test_attach_prepares_form() {
    let (_, surface) = attached(FormSpec::new_place(), &[]);

    assert!(!surface.native_validation());
    assert_eq!(surface.attribute("place-name", "required").as_deref(), Some("true"));
    assert_eq!(surface.attribute("place-name", "minlength").as_deref(), Some("2"));
    assert_eq!(surface.attribute("place-name", "maxlength").as_deref(), Some("30"));
    assert!(surface.attribute("place-name", ERROR_MESSAGE_ATTR).is_some());
    assert_eq!(surface.attribute("place-link", "required").as_deref(), Some("true"));
    assert_eq!(surface.attribute("place-link", "minlength"), None);
    assert!(surface.is_subscribed("place-name", EventKind::Input));
    assert!(surface.is_subscribed("place-link", EventKind::Input));
    assert!(!surface.is_subscribed("place-link", EventKind::Blur));
    assert!(surface.is_disabled("new-place-submit"));
    assert!(surface.has_class("new-place-submit", INACTIVE));
}

#[test]
fn test_attach_subscribes_blur_when_configured() {
    let spec = FormSpec::edit_avatar();
    let mut surface = MemorySurface::for_spec(&spec);
    let config = ValidationConfig {
        validate_on_blur: true,
        ..ValidationConfig::default()
    };
    FormValidator::attach(&mut surface, spec, config);
    assert!(surface.is_subscribed("user-avatar", EventKind::Blur));
}

#[test]
fn test_attach_evaluates_prefilled_form() {
    let (validator, surface) = attached(
        FormSpec::edit_profile(),
        &[("user-name", "Jacques Cousteau"), ("user-description", "Sailor, researcher")],
    );
    assert!(!surface.is_disabled("edit-profile-submit"));
    assert!(!surface.has_class("edit-profile-submit", INACTIVE));
    assert_eq!(validator.status("user-name"), Some(FieldStatus::Valid));
}

#[test]
fn test_aggregate_scenario() {
    let (mut validator, mut surface) =
        attached(FormSpec::edit_profile(), &[("user-name", "Jo"), ("user-description", "")]);

    assert!(!validator.evaluate_form(&mut surface));
    assert_eq!(validator.status("user-name"), Some(FieldStatus::Valid));
    assert_eq!(validator.status("user-description"), Some(FieldStatus::Invalid));
    assert_eq!(surface.text("user-name-error"), "");
    assert_eq!(
        surface.text("user-description-error"),
        "Это поле обязательно для заполнения"
    );
    assert!(surface.has_class("user-description", INVALID));
    assert!(surface.has_class("user-description-error", VISIBLE));
    assert!(!surface.has_class("user-name", INVALID));
    assert!(surface.is_disabled("edit-profile-submit"));
}

#[test]
fn test_evaluate_is_idempotent() {
    let (mut validator, mut surface) =
        attached(FormSpec::new_place(), &[("place-name", "Ann123"), ("place-link", "https://example.com/x.png")]);

    let first = validator.evaluate_form(&mut surface);
    let before = (
        surface.element("place-name").cloned(),
        surface.element("place-name-error").cloned(),
        surface.element("new-place-submit").cloned(),
    );
    let second = validator.evaluate_form(&mut surface);
    let after = (
        surface.element("place-name").cloned(),
        surface.element("place-name-error").cloned(),
        surface.element("new-place-submit").cloned(),
    );

    assert_eq!(first, second);
    assert_eq!(before, after);
    assert_eq!(
        validator.check(&surface, "place-name"),
        validator.check(&surface, "place-name")
    );
}

#[test]
fn test_submit_enabled_iff_form_valid() {
    let (mut validator, mut surface) = attached(FormSpec::new_place(), &[]);
    assert!(surface.is_disabled("new-place-submit"));

    surface.set_value("place-name", "Байкал");
    assert_eq!(validator.dispatch(&mut surface, &FieldEvent::input("place-name")), Some(false));
    assert!(surface.is_disabled("new-place-submit"));

    surface.set_value("place-link", "https://example.com/baikal.jpg");
    assert_eq!(validator.dispatch(&mut surface, &FieldEvent::input("place-link")), Some(true));
    assert!(!surface.is_disabled("new-place-submit"));
    assert!(!surface.has_class("new-place-submit", INACTIVE));

    surface.set_value("place-link", "baikal");
    assert_eq!(validator.dispatch(&mut surface, &FieldEvent::input("place-link")), Some(false));
    assert!(surface.is_disabled("new-place-submit"));
    assert_eq!(surface.text("place-link-error"), "Введите корректный URL");
}

#[test]
fn test_dispatch_transitions_are_reentrant() {
    let spec = FormSpec::edit_avatar();
    let mut surface = MemorySurface::for_spec(&spec);
    let config = ValidationConfig {
        validate_on_attach: false,
        ..ValidationConfig::default()
    };
    let mut validator = FormValidator::attach(&mut surface, spec, config);
    assert_eq!(validator.status("user-avatar"), Some(FieldStatus::Untouched));

    for (value, status) in [
        ("x", FieldStatus::Invalid),
        ("https://example.com/me.png", FieldStatus::Valid),
        ("", FieldStatus::Invalid),
        ("https://example.com/me.png", FieldStatus::Valid),
    ] {
        surface.set_value("user-avatar", value);
        validator.dispatch(&mut surface, &FieldEvent::input("user-avatar"));
        assert_eq!(validator.status("user-avatar"), Some(status));
    }
    assert_eq!(surface.text("user-avatar-error"), "");
}

#[test]
fn test_dispatch_paints_every_field() {
    let spec = FormSpec::edit_profile();
    let mut surface = MemorySurface::for_spec(&spec);
    let config = ValidationConfig {
        validate_on_attach: false,
        ..ValidationConfig::default()
    };
    let mut validator = FormValidator::attach(&mut surface, spec, config);

    surface.set_value("user-name", "J");
    assert_eq!(validator.dispatch(&mut surface, &FieldEvent::blur("user-name")), Some(false));
    assert_eq!(surface.text("user-name-error"), "Минимальная длина: 2 символа");
    assert_eq!(
        surface.text("user-description-error"),
        "Это поле обязательно для заполнения"
    );
    assert!(surface.has_class("user-description", INVALID));
    assert_eq!(validator.status("user-description"), Some(FieldStatus::Invalid));
}

#[test]
fn test_typing_after_reset_shows_the_blocking_field() {
    let (mut validator, mut surface) = attached(
        FormSpec::edit_profile(),
        &[("user-name", "Jacques"), ("user-description", "")],
    );
    validator.reset(&mut surface);
    assert_eq!(surface.text("user-description-error"), "");

    surface.set_value("user-name", "Jacques C");
    assert_eq!(validator.dispatch(&mut surface, &FieldEvent::input("user-name")), Some(false));
    assert_eq!(
        surface.text("user-description-error"),
        "Это поле обязательно для заполнения"
    );
    assert!(surface.has_class("user-description-error", VISIBLE));
    assert_eq!(surface.text("user-name-error"), "");
    assert!(surface.is_disabled("edit-profile-submit"));
    assert!(!validator.is_form_valid(&surface));
}

#[test]
fn test_dispatch_ignores_unknown_fields() {
    let (mut validator, mut surface) = attached(FormSpec::edit_avatar(), &[]);
    assert_eq!(validator.dispatch(&mut surface, &FieldEvent::input("user-name")), None);
}

#[test]
fn test_missing_error_slot_degrades_silently() {
    let spec = FormSpec::edit_profile();
    let mut surface = MemorySurface::for_spec(&spec);
    surface.remove("user-name-error");
    surface.remove("edit-profile-submit");

    let mut validator = FormValidator::attach(&mut surface, spec, ValidationConfig::default());
    assert!(!validator.evaluate_form(&mut surface));
    assert!(!surface.has_class("user-name", INVALID));
    assert_eq!(validator.status("user-name"), Some(FieldStatus::Invalid));
    assert!(surface.has_class("user-description", INVALID));
}

#[test]
fn test_reset_clears_errors_and_disables_submit() {
    let (mut validator, mut surface) = attached(
        FormSpec::new_place(),
        &[("place-name", "R2-D2"), ("place-link", "nope")],
    );
    assert!(!surface.text("place-name-error").is_empty());
    assert!(!surface.text("place-link-error").is_empty());

    validator.reset(&mut surface);

    for field in ["place-name", "place-link"] {
        let slot = format!("{}-error", field);
        assert_eq!(surface.text(&slot), "");
        assert!(!surface.has_class(&slot, VISIBLE));
        assert!(!surface.has_class(field, INVALID));
        assert_eq!(validator.status(field), Some(FieldStatus::Untouched));
    }
    assert!(surface.is_disabled("new-place-submit"));
    assert_eq!(surface.value("place-name").as_deref(), Some("R2-D2"));
}

#[test]
fn test_reset_disables_submit_even_when_valid() {
    let (mut validator, mut surface) = attached(
        FormSpec::edit_avatar(),
        &[("user-avatar", "https://example.com/me.png")],
    );
    assert!(!surface.is_disabled("edit-avatar-submit"));

    validator.reset(&mut surface);
    assert!(surface.is_disabled("edit-avatar-submit"));
    assert!(surface.has_class("edit-avatar-submit", INACTIVE));
}
