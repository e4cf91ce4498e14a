use super::*;

#[test]
fn enter_and_space_activate_controls() {
    assert!(is_activation_key("Enter"));
    assert!(is_activation_key(" "));
}

#[test]
fn other_keys_do_not_activate_controls() {
    assert!(!is_activation_key("Tab"));
    assert!(!is_activation_key("Spacebar"));
    assert!(!is_activation_key(""));
}

#[test]
fn escape_is_recognized_exactly() {
    assert!(is_escape_key("Escape"));
    assert!(!is_escape_key("Esc"));
    assert!(!is_escape_key("escape"));
}
