use super::*;

#[test]
fn defaults_are_primary_medium_button() {
    assert_eq!(button_class(ButtonVariant::default(), ButtonSize::default()), "btn btn--primary btn--medium");
    assert_eq!(ButtonType::default().as_str(), "button");
}

#[test]
fn class_reflects_variant_and_size() {
    assert_eq!(button_class(ButtonVariant::Outlined, ButtonSize::Small), "btn btn--outlined btn--small");
    assert_eq!(ButtonType::Submit.as_str(), "submit");
}
