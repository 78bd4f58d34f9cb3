use super::*;

#[test]
fn contact_methods_in_display_order() {
    let labels: Vec<_> = CONTACT_METHODS.iter().map(|m| m.label).collect();
    assert_eq!(labels, vec!["Email", "Phone", "Location"]);
    assert_eq!(CONTACT_METHODS[0].value, "hardin@example.com");
}

#[test]
fn contact_items_are_interactive_on_this_page() {
    let config = InteractionConfig::contact();
    assert!(config.extra_interactive.iter().any(|selector| selector == ".contact-item"));
    assert!(config.freeze_on_focus);
}

#[test]
fn socials_listed() {
    assert_eq!(SOCIALS, ["LinkedIn", "Instagram", "GitHub"]);
}
