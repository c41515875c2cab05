//! The single page: section stack plus floating overlays.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::cookie_banner::CookieBanner;
use crate::components::hero::Hero;
use crate::components::modal::Modal;
use crate::components::practice::PracticeGrid;
use crate::components::scroll_top::ScrollTopButton;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::content;
use crate::state::controller::PageController;

/// Composes the whole view. The legal dialog is mounted only while a
/// document is active, so a closed dialog leaves no DOM behind.
#[component]
pub fn HomePage() -> impl IntoView {
    let controller = expect_context::<PageController>();
    let active_modal = controller.active_modal();
    let on_close = Callback::new(move |()| controller.close_modal());

    view! {
        <div class="page">
            <SiteHeader/>
            <main>
                <Hero/>
                <PracticeGrid/>
                <About/>
                <Contact/>
            </main>
            <SiteFooter/>
            <ScrollTopButton/>
            <CookieBanner/>

            {move || {
                active_modal.get().map(|doc| {
                    view! {
                        <Modal title=content::doc_title(doc) on_close=on_close>
                            <div class="legal-doc">
                                <p class="legal-doc__intro">{content::doc_intro(doc)}</p>
                                {content::doc_sections(doc)
                                    .iter()
                                    .map(|section| {
                                        view! {
                                            <h5 class="legal-doc__heading">{section.heading}</h5>
                                            <p class="legal-doc__body">{section.body}</p>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </Modal>
                    }
                })
            }}
        </div>
    }
}
