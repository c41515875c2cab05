//! Page footer with the legal-document triggers.

use leptos::prelude::*;

use crate::state::controller::PageController;
use crate::state::modal::LegalDoc;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let controller = expect_context::<PageController>();

    view! {
        <footer class="site-footer">
            <div class="site-footer__inner">
                <div class="site-footer__identity">
                    <span class="site-footer__name">"O. Valiyev"</span>
                    <span class="site-footer__copyright">"\u{a9} 2024 All rights reserved."</span>
                </div>
                <div class="site-footer__legal">
                    <button on:click=move |_| controller.open_modal(LegalDoc::Terms)>
                        "Terms of use"
                    </button>
                    <button on:click=move |_| controller.open_modal(LegalDoc::DataPolicy)>
                        "Data processing"
                    </button>
                    <button on:click=move |_| controller.open_modal(LegalDoc::Privacy)>
                        "Privacy"
                    </button>
                </div>
            </div>
        </footer>
    }
}
