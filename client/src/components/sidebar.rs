//! Shared slide-out panel used by the admin and customer sidebars.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both role sidebars are pure functions of `(open, session)` plus the close
//! and logout callbacks. This module owns the parts they share: backdrop,
//! identity header, link rows and the terminal logout control.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::types::Session;
use crate::routes::Destination;

/// Terminal logout control: end the session, then dismiss the panel.
pub(crate) fn logout_then_close(on_logout: Callback<()>, on_close: Callback<()>) {
    on_logout.run(());
    on_close.run(());
}

/// Backdrop plus fixed panel; renders nothing at all while `open` is false.
#[component]
pub fn SidebarPanel(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] session: Signal<Option<Session>>,
    /// Accessible name of the panel.
    title: &'static str,
    /// BEM modifier selecting the role palette (`admin` / `user`).
    modifier: &'static str,
    on_close: Callback<()>,
    on_logout: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let name = move || session.get().map(|s| s.name).unwrap_or_default();
    let initial = move || session.get().map(|s| s.initial()).unwrap_or_default();
    let role = move || session.get().map(|s| s.role_label()).unwrap_or_default();
    let panel_class = format!("sidebar sidebar--{modifier}");

    view! {
        <Show when=move || open.get()>
            <div class="sidebar__backdrop" on:click=move |_| on_close.run(())></div>
            <aside class=panel_class.clone() role="dialog" aria-label=title>
                <header class="sidebar__header">
                    <span class="sidebar__avatar" aria-hidden="true">{initial}</span>
                    <div class="sidebar__identity">
                        <span class="sidebar__name">{name}</span>
                        <span class="sidebar__role">{role}</span>
                    </div>
                    <button class="sidebar__close" on:click=move |_| on_close.run(()) title="Close">
                        "✕"
                    </button>
                </header>
                <nav class="sidebar__links">{children()}</nav>
                <button
                    class="sidebar__logout"
                    on:click=move |_| logout_then_close(on_logout, on_close)
                >
                    "Logout"
                </button>
            </aside>
        </Show>
    }
}

/// A navigation row: navigates first, then closes the panel.
#[component]
pub fn SidebarLink(destination: Destination, on_close: Callback<()>) -> impl IntoView {
    let pathname = use_location().pathname;
    let navigate = use_navigate();
    let active = move || pathname.with(|path| destination.is_active(path));
    let class = move || {
        if active() { "sidebar__link sidebar__link--active" } else { "sidebar__link" }
    };

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        navigate(destination.path(), NavigateOptions::default());
        on_close.run(());
    };

    view! {
        <a
            href=destination.path()
            class=class
            aria-current=move || active().then_some("page")
            on:click=on_click
        >
            <span class="sidebar__icon" aria-hidden="true">{destination.icon()}</span>
            <span class="sidebar__label">{destination.label()}</span>
        </a>
    }
}
