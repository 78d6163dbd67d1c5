//! Provider interfaces injected into the navigation chrome.
//!
//! SYSTEM CONTEXT
//! ==============
//! Identity, cart and theme are owned outside the chrome. Components receive
//! a `Providers` bundle as a prop and talk to these traits only, so tests can
//! substitute fakes and the browser build can back them with signals.
//!
//! Reads made inside reactive closures track whatever signals the
//! implementation touches.

pub mod browser;

use std::sync::Arc;

use crate::net::types::Session;
use crate::util::event_bus::EventBus;

/// Source of the signed-in actor.
pub trait IdentityProvider: Send + Sync {
    fn session(&self) -> Option<Session>;
    fn loading(&self) -> bool;
    /// End the session. Returns immediately; any server round trip is
    /// fire-and-forget.
    fn logout(&self);
}

/// Source of the cart summary.
pub trait CartProvider: Send + Sync {
    fn cart_count(&self) -> u32;
    fn loading(&self) -> bool;
}

/// Source and sink of the theme preference.
pub trait ThemeProvider: Send + Sync {
    fn is_dark_mode(&self) -> bool;
    fn toggle_dark_mode(&self);
}

/// Everything the page chrome consumes from outside.
#[derive(Clone)]
pub struct Providers {
    pub identity: Arc<dyn IdentityProvider>,
    pub cart: Arc<dyn CartProvider>,
    pub theme: Arc<dyn ThemeProvider>,
    pub events: EventBus,
}

impl Providers {
    pub fn new(
        identity: impl IdentityProvider + 'static,
        cart: impl CartProvider + 'static,
        theme: impl ThemeProvider + 'static,
        events: EventBus,
    ) -> Self {
        Self {
            identity: Arc::new(identity),
            cart: Arc::new(cart),
            theme: Arc::new(theme),
            events,
        }
    }
}

impl std::fmt::Debug for Providers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Providers").field("events", &self.events).finish_non_exhaustive()
    }
}
