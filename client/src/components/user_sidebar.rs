//! Slide-out panel with the customer account destinations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Besides plain links this panel hosts the Spin & Win entry point. It does
//! not navigate: it publishes `AppEvent::OpenSpinPromo` on the event bus and
//! whichever promotion feature is subscribed reacts.

#[cfg(test)]
#[path = "user_sidebar_test.rs"]
mod user_sidebar_test;

use leptos::prelude::*;

use crate::components::sidebar::{SidebarLink, SidebarPanel};
use crate::net::types::Session;
use crate::routes::USER_LINKS;
use crate::util::event_bus::{AppEvent, EventBus};

/// Spin & Win: announce the promotion, then dismiss the panel.
pub(crate) fn spin_and_win(events: &EventBus, on_close: Callback<()>) {
    events.publish(AppEvent::OpenSpinPromo);
    on_close.run(());
}

/// Customer navigation panel.
#[component]
pub fn UserSidebar(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] session: Signal<Option<Session>>,
    on_close: Callback<()>,
    on_logout: Callback<()>,
    events: EventBus,
) -> impl IntoView {
    let on_spin = Callback::new(move |()| spin_and_win(&events, on_close));

    view! {
        <SidebarPanel
            open=open
            session=session
            title="My account"
            modifier="user"
            on_close=on_close
            on_logout=on_logout
        >
            {USER_LINKS
                .iter()
                .map(|destination| view! { <SidebarLink destination=*destination on_close=on_close/> })
                .collect_view()}
            <button
                class="sidebar__link sidebar__link--promo"
                on:click=move |_| on_spin.run(())
            >
                <span class="sidebar__icon" aria-hidden="true">"🎡"</span>
                <span class="sidebar__label">"Spin & Win"</span>
            </button>
        </SidebarPanel>
    }
}
