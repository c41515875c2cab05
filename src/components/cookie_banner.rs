//! One-shot cookie consent banner.

use leptos::prelude::*;

use crate::state::controller::PageController;
use crate::state::modal::LegalDoc;

/// Consent gate shown until the visitor accepts. Accepting is the only exit
/// path; leaving the page keeps the banner for the next visit.
#[component]
pub fn CookieBanner() -> impl IntoView {
    let controller = expect_context::<PageController>();
    let visible = controller.cookie_banner_visible();

    view! {
        <Show when=move || visible.get()>
            <div class="cookie-banner">
                <p class="cookie-banner__text">
                    "We use cookies to remember your preferences and improve the quality of this site. By continuing you agree to our "
                    <button
                        class="cookie-banner__link"
                        on:click=move |_| controller.open_modal(LegalDoc::Privacy)
                    >
                        "privacy policy"
                    </button>
                    "."
                </p>
                <button
                    class="btn btn--accent cookie-banner__accept"
                    on:click=move |_| controller.accept_cookies()
                >
                    "Accept"
                </button>
            </div>
        </Show>
    }
}
