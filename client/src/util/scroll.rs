//! Viewport scroll observation with owner-scoped listener cleanup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation bar and the back-to-top control both react to the window
//! scroll offset. Each registers one `scroll` listener while mounted; the
//! listener is removed in `on_cleanup`, so unmounting (including an early
//! unmount before the first event) never leaks a handler.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Offset at which the floating back-to-top control appears.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

pub fn past_threshold(offset_px: f64, threshold_px: f64) -> bool {
    offset_px.is_finite() && offset_px >= threshold_px
}

/// Current vertical scroll offset, or `0.0` outside the browser.
pub fn current_offset() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        match web_sys::window().map(|w| w.scroll_y()) {
            Some(Ok(y)) => y,
            _ => 0.0,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Call `on_offset` with the current offset once the component has mounted
/// and on every scroll event until the reactive owner is cleaned up.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn watch_scroll<F>(on_offset: F)
where
    F: Fn(f64) + Send + Sync + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;

        use leptos::prelude::{Effect, on_cleanup, untrack, window_event_listener};

        let on_offset = Arc::new(on_offset);
        let initial = Arc::clone(&on_offset);
        // First read waits for hydration so the initial markup matches SSR.
        Effect::new(move |_| untrack(|| initial(current_offset())));
        let handle = window_event_listener(leptos::ev::scroll, move |_| on_offset(current_offset()));
        on_cleanup(move || handle.remove());
    }
}

/// Scroll the window back to the top of the page.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}
