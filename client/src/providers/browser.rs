//! Signal-backed provider implementations for the running app.
//!
//! Client-side (hydrate): `load` spawns the REST fetch and resolves the
//! signal when it lands. Elsewhere `load` settles immediately on the
//! unavailable fallback so SSR output never waits on the network.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use leptos::prelude::*;

use super::{CartProvider, IdentityProvider, ThemeProvider};
use crate::net::types::Session;
use crate::state::auth::AuthState;
use crate::state::cart::CartState;
use crate::state::theme::ThemeState;
use crate::util::dark_mode;

/// Identity backed by `RwSignal<AuthState>` and `/api/auth/*`.
#[derive(Clone, Copy, Debug)]
pub struct SignalIdentity {
    state: RwSignal<AuthState>,
}

impl SignalIdentity {
    pub fn new(state: RwSignal<AuthState>) -> Self {
        Self { state }
    }

    /// Resolve the session from the server.
    pub fn load(&self) {
        let state = self.state;
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_session().await;
                state.update(|s| {
                    if let Some(e) = s.resolve(result) {
                        leptos::logging::warn!("identity provider unavailable: {e}");
                    }
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            state.update(|s| s.loading = false);
        }
    }
}

impl IdentityProvider for SignalIdentity {
    fn session(&self) -> Option<Session> {
        self.state.with(|s| s.session.clone())
    }

    fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    fn logout(&self) {
        self.state.update(AuthState::clear);
        leptos::logging::log!("session cleared");
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(crate::net::api::logout());
        }
    }
}

/// Cart summary backed by `RwSignal<CartState>` and `/api/cart/count`.
#[derive(Clone, Copy, Debug)]
pub struct SignalCart {
    state: RwSignal<CartState>,
}

impl SignalCart {
    pub fn new(state: RwSignal<CartState>) -> Self {
        Self { state }
    }

    pub fn load(&self) {
        let state = self.state;
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_cart_count().await;
                state.update(|s| {
                    if let Some(e) = s.resolve(result) {
                        leptos::logging::warn!("cart provider unavailable: {e}");
                    }
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            state.update(|s| s.loading = false);
        }
    }
}

impl CartProvider for SignalCart {
    fn cart_count(&self) -> u32 {
        self.state.with(|s| s.count)
    }

    fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }
}

/// Theme backed by `RwSignal<ThemeState>` and persisted via `dark_mode`.
#[derive(Clone, Copy, Debug)]
pub struct SignalTheme {
    state: RwSignal<ThemeState>,
}

impl SignalTheme {
    pub fn new(state: RwSignal<ThemeState>) -> Self {
        Self { state }
    }

    /// Adopt the stored (or system) preference and apply it to the document.
    pub fn load(&self) {
        let enabled = dark_mode::read_preference();
        dark_mode::apply(enabled);
        self.state.set(ThemeState { dark_mode: enabled });
    }
}

impl ThemeProvider for SignalTheme {
    fn is_dark_mode(&self) -> bool {
        self.state.with(|s| s.dark_mode)
    }

    fn toggle_dark_mode(&self) {
        let current = self.state.with_untracked(|s| s.dark_mode);
        let next = dark_mode::toggle(current);
        self.state.set(ThemeState { dark_mode: next });
    }
}
