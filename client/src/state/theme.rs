//! Theme preference state.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Whether the dark palette is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub dark_mode: bool,
}

impl ThemeState {
    /// Glyph for the toggle button: the palette a click switches to.
    pub fn toggle_glyph(self) -> &'static str {
        if self.dark_mode { "☀" } else { "☾" }
    }

    pub fn toggle_title(self) -> &'static str {
        if self.dark_mode { "Switch to light mode" } else { "Switch to dark mode" }
    }
}
