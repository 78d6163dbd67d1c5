//! Static site footer.

use leptos::prelude::*;

use crate::routes::{Destination, FOOTER_LINKS};

/// Informational footer: brand blurb, quick links and contact details.
#[component]
pub fn FooterView() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__columns">
                <section class="footer__column">
                    <h3 class="footer__brand">"Tastebud"</h3>
                    <p class="footer__blurb">
                        "Fresh meals from local kitchens, delivered hot to your door."
                    </p>
                </section>
                <section class="footer__column">
                    <h4 class="footer__heading">"Quick links"</h4>
                    <ul class="footer__links">
                        {FOOTER_LINKS
                            .iter()
                            .map(|destination| {
                                view! {
                                    <li>
                                        <a href=destination.path() class="footer__link">
                                            {destination.label()}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
                <section class="footer__column">
                    <h4 class="footer__heading">"Contact"</h4>
                    <ul class="footer__contact">
                        <li>"support@tastebud.app"</li>
                        <li>"Open daily 10:00 – 23:00"</li>
                    </ul>
                </section>
            </div>
            <p class="footer__copyright">
                "© Tastebud. "
                <a href=Destination::Terms.path() class="footer__link">"Terms"</a>
                " · "
                <a href=Destination::Privacy.path() class="footer__link">"Privacy"</a>
            </p>
        </footer>
    }
}
