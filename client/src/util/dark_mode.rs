//! Dark mode initialization and toggle.
//!
//! Reads the visitor's preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back to
//! `localStorage` and updates that attribute. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "tastebud_dark";

/// Interpret a stored preference value.
pub(crate) fn parse_stored(raw: &str) -> bool {
    raw.trim() == "true"
}

pub(crate) fn stored_value(enabled: bool) -> &'static str {
    if enabled { "true" } else { "false" }
}

pub(crate) fn theme_attribute(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Read the dark mode preference from localStorage.
///
/// Returns `true` if the visitor previously enabled dark mode, or if the
/// system prefers dark mode and no preference is stored.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        // Check localStorage first.
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return parse_stored(&val);
            }
        }

        // Fall back to system preference.
        matches!(window.match_media("(prefers-color-scheme: dark)"), Ok(Some(mq)) if mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element());
        if let Some(el) = root {
            if let Err(e) = el.set_attribute("data-theme", theme_attribute(enabled)) {
                leptos::logging::warn!("failed to apply theme: {e:?}");
            }
        }
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn persist(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Err(e) = storage.set_item(STORAGE_KEY, stored_value(enabled)) {
                    leptos::logging::warn!("failed to persist theme: {e:?}");
                }
            }
        }
    }
}

/// Toggle dark mode and persist the new preference to localStorage.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    persist(next);
    next
}
