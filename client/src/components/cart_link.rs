//! Cart icon link with its count badge.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::providers::CartProvider;
use crate::routes::Destination;
use crate::state::cart::CartBadge;

/// Header link to the cart; shows a spinner while the count loads.
#[component]
pub fn CartLink(cart: Arc<dyn CartProvider>) -> impl IntoView {
    let badge = move || CartBadge::from_parts(cart.cart_count(), cart.loading());

    view! {
        <a href=Destination::Cart.path() class="navbar__icon-link" title="Cart">
            <span aria-hidden="true">{Destination::Cart.icon()}</span>
            {move || match badge() {
                CartBadge::Hidden => view! { <></> }.into_any(),
                CartBadge::Loading => {
                    view! {
                        <span class="navbar__badge navbar__badge--loading" aria-label="Loading cart">
                            "⟳"
                        </span>
                    }
                        .into_any()
                }
                CartBadge::Count(label) => view! { <span class="navbar__badge">{label}</span> }.into_any(),
            }}
        </a>
    }
}
