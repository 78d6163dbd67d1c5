use super::*;

#[test]
fn default_is_light() {
    assert!(!ThemeState::default().dark_mode);
}

#[test]
fn glyph_points_at_other_palette() {
    assert_eq!(ThemeState { dark_mode: false }.toggle_glyph(), "☾");
    assert_eq!(ThemeState { dark_mode: true }.toggle_glyph(), "☀");
}

#[test]
fn title_describes_action() {
    assert_eq!(ThemeState { dark_mode: true }.toggle_title(), "Switch to light mode");
    assert_eq!(ThemeState::default().toggle_title(), "Switch to dark mode");
}
