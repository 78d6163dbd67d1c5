//! Floating control that returns the viewport to the top of the page.

use leptos::prelude::*;

use crate::util::scroll::{BACK_TO_TOP_THRESHOLD_PX, past_threshold, scroll_to_top, watch_scroll};

/// Appears once the page is scrolled past the threshold.
#[component]
pub fn BackToTopControl() -> impl IntoView {
    let visible = RwSignal::new(false);

    watch_scroll(move |offset| {
        visible.maybe_update(|shown| {
            let next = past_threshold(offset, BACK_TO_TOP_THRESHOLD_PX);
            let changed = *shown != next;
            *shown = next;
            changed
        });
    });

    view! {
        <Show when=move || visible.get()>
            <button class="back-to-top" on:click=move |_| scroll_to_top() title="Back to top">
                "↑"
            </button>
        </Show>
    }
}
