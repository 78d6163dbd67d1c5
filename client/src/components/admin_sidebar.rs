//! Slide-out panel with the back-office destinations.

use leptos::prelude::*;

use crate::components::sidebar::{SidebarLink, SidebarPanel};
use crate::net::types::Session;
use crate::routes::ADMIN_LINKS;

/// Admin navigation panel. Every link closes the panel after navigating.
#[component]
pub fn AdminSidebar(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] session: Signal<Option<Session>>,
    on_close: Callback<()>,
    on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <SidebarPanel
            open=open
            session=session
            title="Admin panel"
            modifier="admin"
            on_close=on_close
            on_logout=on_logout
        >
            {ADMIN_LINKS
                .iter()
                .map(|destination| view! { <SidebarLink destination=*destination on_close=on_close/> })
                .collect_view()}
        </SidebarPanel>
    }
}
