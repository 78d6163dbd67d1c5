//! Page frame shared by every route.

use leptos::prelude::*;

use crate::components::back_to_top::BackToTopControl;
use crate::components::footer::FooterView;
use crate::components::navigation_bar::NavigationBar;
use crate::providers::Providers;

/// Header, growable content area, footer and the floating back-to-top
/// control, in that order.
#[component]
pub fn PageLayout(providers: Providers, children: Children) -> impl IntoView {
    view! {
        <div class="page-layout">
            <NavigationBar providers=providers/>
            <main class="page-layout__content">{children()}</main>
            <FooterView/>
            <BackToTopControl/>
        </div>
    }
}
