//! Fixed top navigation bar and owner of the page's disclosure state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads identity, cart and theme through the injected providers and keeps
//! one local `NavState`. That state alone decides whether the mobile menu,
//! the admin sidebar or the customer sidebar is showing.
//!
//! LIFECYCLE
//! =========
//! The scroll listener lives exactly as long as this component's owner.
//! Logout resets every disclosure before redirecting home.

#[cfg(test)]
#[path = "navigation_bar_test.rs"]
mod navigation_bar_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::admin_sidebar::AdminSidebar;
use crate::components::cart_link::CartLink;
use crate::components::user_sidebar::UserSidebar;
use crate::providers::{IdentityProvider, Providers};
use crate::routes::{Destination, MAIN_LINKS};
use crate::state::nav::{NavState, SidebarKind};
use crate::state::theme::ThemeState;
use crate::util::scroll::watch_scroll;

/// Avatar click: toggle whichever sidebar the session's role selects.
pub(crate) fn avatar_clicked(nav: &mut NavState, identity: &dyn IdentityProvider) {
    nav.toggle_account_panel(identity.session().as_ref());
}

/// Logout from anywhere: close everything, end the session, go home.
pub(crate) fn logout_requested<F>(nav: &mut NavState, identity: &dyn IdentityProvider, go_to: F)
where
    F: FnOnce(&str),
{
    nav.close_all();
    identity.logout();
    go_to(Destination::Home.path());
}

pub(crate) fn header_class(scrolled: bool) -> &'static str {
    if scrolled { "navbar navbar--scrolled" } else { "navbar" }
}

/// Top navigation bar with brand, links, theme toggle, cart and account
/// controls, plus the two account sidebars.
#[component]
pub fn NavigationBar(providers: Providers) -> impl IntoView {
    let Providers { identity, cart, theme, events } = providers;
    let nav = RwSignal::new(NavState::default());
    let navigate = use_navigate();

    watch_scroll(move |offset| {
        nav.maybe_update(|state| state.observe_scroll(offset));
    });

    // A role change must not leave the other role's panel on screen.
    let identity_watch = identity.clone();
    Effect::new(move || {
        let session = identity_watch.session();
        nav.maybe_update(|state| {
            let before = state.disclosure;
            state.reconcile(session.as_ref());
            before != state.disclosure
        });
    });

    let identity_avatar = identity.clone();
    let on_avatar = Callback::new(move |()| {
        let mut next = nav.get_untracked();
        avatar_clicked(&mut next, identity_avatar.as_ref());
        nav.set(next);
    });

    let identity_logout = identity.clone();
    let on_logout = Callback::new(move |()| {
        let mut next = nav.get_untracked();
        logout_requested(&mut next, identity_logout.as_ref(), |path| {
            navigate(path, NavigateOptions::default());
        });
        nav.set(next);
    });

    let close_admin = Callback::new(move |()| nav.update(|state| state.close_sidebar(SidebarKind::Admin)));
    let close_user = Callback::new(move |()| nav.update(|state| state.close_sidebar(SidebarKind::User)));
    let close_mobile = Callback::new(move |()| nav.update(NavState::close_mobile_menu));

    let theme_toggle = theme.clone();
    let theme_state = Memo::new(move |_| ThemeState { dark_mode: theme.is_dark_mode() });

    let session_for_panels = {
        let identity = identity.clone();
        Signal::derive(move || identity.session())
    };
    let admin_open = Signal::derive(move || nav.with(|state| state.disclosure.is_sidebar_open(SidebarKind::Admin)));
    let user_open = Signal::derive(move || nav.with(|state| state.disclosure.is_sidebar_open(SidebarKind::User)));
    let mobile_open = move || nav.with(|state| state.disclosure.is_mobile_menu_open());

    let identity_account = identity.clone();
    let account_area = move || {
        if identity_account.loading() {
            return view! { <span class="navbar__avatar navbar__avatar--pending" aria-hidden="true"></span> }
                .into_any();
        }
        match identity_account.session() {
            Some(session) => {
                let label = if session.is_admin { "Open admin panel" } else { "Open account panel" };
                view! {
                    <button class="navbar__avatar" on:click=move |_| on_avatar.run(()) title=label>
                        {session.initial()}
                    </button>
                }
                    .into_any()
            }
            None => {
                view! {
                    <a href=Destination::Login.path() class="navbar__auth-link">{Destination::Login.label()}</a>
                    <a href=Destination::Signup.path() class="navbar__auth-link navbar__auth-link--primary">
                        {Destination::Signup.label()}
                    </a>
                }
                    .into_any()
            }
        }
    };

    let identity_mobile = identity.clone();
    let mobile_account = move || {
        if identity_mobile.session().is_some() {
            view! {
                <button
                    class="navbar__mobile-link navbar__mobile-link--logout"
                    on:click=move |_| on_logout.run(())
                >
                    "Logout"
                </button>
            }
                .into_any()
        } else {
            view! {
                <a href=Destination::Login.path() class="navbar__mobile-link" on:click=move |_| close_mobile.run(())>
                    {Destination::Login.label()}
                </a>
                <a href=Destination::Signup.path() class="navbar__mobile-link" on:click=move |_| close_mobile.run(())>
                    {Destination::Signup.label()}
                </a>
            }
                .into_any()
        }
    };

    view! {
        <header class=move || header_class(nav.with(|state| state.scrolled))>
            <div class="navbar__inner">
                <a href=Destination::Home.path() class="navbar__brand">
                    <span class="navbar__logo" aria-hidden="true">"🍜"</span>
                    <span class="navbar__name">"Tastebud"</span>
                </a>

                <nav class="navbar__links">
                    {MAIN_LINKS
                        .iter()
                        .map(|destination| view! { <NavLink destination=*destination/> })
                        .collect_view()}
                </nav>

                <div class="navbar__actions">
                    <button
                        class="navbar__icon-btn"
                        on:click=move |_| theme_toggle.toggle_dark_mode()
                        title=move || theme_state.get().toggle_title()
                    >
                        {move || theme_state.get().toggle_glyph()}
                    </button>
                    <a href=Destination::Wishlist.path() class="navbar__icon-link" title="Wishlist">
                        {Destination::Wishlist.icon()}
                    </a>
                    <CartLink cart=cart/>
                    {account_area}
                    <button
                        class="navbar__menu-toggle"
                        on:click=move |_| nav.update(NavState::toggle_mobile_menu)
                        aria-expanded=move || if mobile_open() { "true" } else { "false" }
                        title="Menu"
                    >
                        {move || if mobile_open() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=mobile_open>
                <nav class="navbar__mobile">
                    {MAIN_LINKS
                        .iter()
                        .map(|destination| {
                            view! {
                                <a
                                    href=destination.path()
                                    class="navbar__mobile-link"
                                    on:click=move |_| close_mobile.run(())
                                >
                                    {destination.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                    {mobile_account.clone()}
                </nav>
            </Show>
        </header>

        <AdminSidebar open=admin_open session=session_for_panels on_close=close_admin on_logout=on_logout/>
        <UserSidebar
            open=user_open
            session=session_for_panels
            on_close=close_user
            on_logout=on_logout
            events=events
        />
    }
}

/// Header link with active-page highlighting.
#[component]
fn NavLink(destination: Destination) -> impl IntoView {
    let pathname = use_location().pathname;
    let active = move || pathname.with(|path| destination.is_active(path));
    let class = move || if active() { "navbar__link navbar__link--active" } else { "navbar__link" };

    view! {
        <a href=destination.path() class=class aria-current=move || active().then_some("page")>
            {destination.label()}
        </a>
    }
}
