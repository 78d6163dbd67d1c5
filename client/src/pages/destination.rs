//! Placeholder body for a named destination.

#[cfg(test)]
#[path = "destination_test.rs"]
mod destination_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::page_layout::PageLayout;
use crate::providers::Providers;
use crate::routes::Destination;

pub(crate) fn page_title(destination: Destination) -> String {
    match destination {
        Destination::Home => "Tastebud".to_owned(),
        other => format!("{} · Tastebud", other.label()),
    }
}

pub(crate) fn is_admin_area(destination: Destination) -> bool {
    destination.path().starts_with("/admin")
}

/// Framed page with the destination's heading.
#[component]
pub fn DestinationPage(destination: Destination, providers: Providers) -> impl IntoView {
    let section_class = if is_admin_area(destination) { "page page--admin" } else { "page" };

    view! {
        <Title text=page_title(destination)/>
        <PageLayout providers=providers>
            <section class=section_class>
                <h1 class="page__title">{destination.label()}</h1>
            </section>
        </PageLayout>
    }
}
