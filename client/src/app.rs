//! Root application component with routing and provider wiring.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::destination::DestinationPage;
use crate::providers::Providers;
use crate::providers::browser::{SignalCart, SignalIdentity, SignalTheme};
use crate::routes::Destination;
use crate::state::auth::AuthState;
use crate::state::cart::CartState;
use crate::state::theme::ThemeState;
use crate::util::event_bus::EventBus;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the provider bundle once and hands it to every page explicitly.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let identity = SignalIdentity::new(RwSignal::new(AuthState::pending()));
    let cart = SignalCart::new(RwSignal::new(CartState::pending()));
    let theme = SignalTheme::new(RwSignal::new(ThemeState::default()));
    let providers = Providers::new(identity, cart, theme, EventBus::new());

    // Effects only run in the browser, so SSR renders the pending state.
    Effect::new(move || {
        theme.load();
        identity.load();
        cart.load();
    });

    let page = move |destination: Destination| {
        let providers = providers.clone();
        move || view! { <DestinationPage destination=destination providers=providers.clone()/> }
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/tastebud.css"/>
        <Title text="Tastebud"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=page(Destination::Home)/>
                <Route path=path!("/menu") view=page(Destination::Menu)/>
                <Route path=path!("/offers") view=page(Destination::Offers)/>
                <Route path=path!("/about") view=page(Destination::About)/>
                <Route path=path!("/contact") view=page(Destination::Contact)/>
                <Route path=path!("/cart") view=page(Destination::Cart)/>
                <Route path=path!("/wishlist") view=page(Destination::Wishlist)/>
                <Route path=path!("/login") view=page(Destination::Login)/>
                <Route path=path!("/signup") view=page(Destination::Signup)/>
                <Route path=path!("/profile") view=page(Destination::Profile)/>
                <Route path=path!("/orders") view=page(Destination::Orders)/>
                <Route path=path!("/addresses") view=page(Destination::Addresses)/>
                <Route path=path!("/admin") view=page(Destination::AdminDashboard)/>
                <Route path=path!("/admin/orders") view=page(Destination::AdminOrders)/>
                <Route path=path!("/admin/menu") view=page(Destination::AdminMenu)/>
                <Route path=path!("/admin/users") view=page(Destination::AdminUsers)/>
                <Route path=path!("/admin/coupons") view=page(Destination::AdminCoupons)/>
                <Route path=path!("/admin/reports") view=page(Destination::AdminReports)/>
                <Route path=path!("/privacy") view=page(Destination::Privacy)/>
                <Route path=path!("/terms") view=page(Destination::Terms)/>
            </Routes>
        </Router>
    }
}
