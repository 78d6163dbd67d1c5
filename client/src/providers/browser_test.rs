#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn identity_load_settles_without_browser() {
    leptos::prelude::Owner::new().with(|| {
        let identity = SignalIdentity::new(RwSignal::new(AuthState::pending()));
        assert!(IdentityProvider::loading(&identity));
        identity.load();
        assert!(!IdentityProvider::loading(&identity));
        assert_eq!(identity.session(), None);
    });
}

#[test]
fn identity_logout_clears_session() {
    leptos::prelude::Owner::new().with(|| {
        let session = Session { name: "Ada".to_owned(), is_admin: true, email: None };
        let identity = SignalIdentity::new(RwSignal::new(AuthState { session: Some(session), loading: false }));
        assert!(identity.session().is_some_and(|s| s.is_admin));
        identity.logout();
        assert_eq!(identity.session(), None);
        assert!(!IdentityProvider::loading(&identity));
    });
}

#[test]
fn cart_reads_signal_state() {
    leptos::prelude::Owner::new().with(|| {
        let state = RwSignal::new(CartState { count: 4, loading: false });
        let cart = SignalCart::new(state);
        assert_eq!(cart.cart_count(), 4);
        assert!(!CartProvider::loading(&cart));
        state.update(|s| s.count = 11);
        assert_eq!(cart.cart_count(), 11);
    });
}

#[test]
fn cart_load_settles_without_browser() {
    leptos::prelude::Owner::new().with(|| {
        let cart = SignalCart::new(RwSignal::new(CartState::pending()));
        cart.load();
        assert!(!CartProvider::loading(&cart));
        assert_eq!(cart.cart_count(), 0);
    });
}

#[test]
fn theme_toggle_flips_state() {
    leptos::prelude::Owner::new().with(|| {
        let theme = SignalTheme::new(RwSignal::new(ThemeState::default()));
        assert!(!theme.is_dark_mode());
        theme.toggle_dark_mode();
        assert!(theme.is_dark_mode());
        theme.toggle_dark_mode();
        assert!(!theme.is_dark_mode());
    });
}

#[test]
fn theme_load_uses_light_default_without_browser() {
    leptos::prelude::Owner::new().with(|| {
        let theme = SignalTheme::new(RwSignal::new(ThemeState { dark_mode: true }));
        theme.load();
        assert!(!theme.is_dark_mode());
    });
}
