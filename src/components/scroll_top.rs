//! Floating back-to-top button.

use leptos::prelude::*;

use crate::components::icons::ArrowUpIcon;
use crate::state::controller::PageController;

/// Shown once the page scrolls past the large threshold. Stays in the tree
/// and slides in and out via its modifier class.
#[component]
pub fn ScrollTopButton() -> impl IntoView {
    let controller = expect_context::<PageController>();
    let scroll = controller.scroll();

    let class = move || {
        if scroll.get().past_scroll_top {
            "scroll-top scroll-top--shown"
        } else {
            "scroll-top"
        }
    };

    let on_click = move |_| {
        #[cfg(feature = "web")]
        {
            crate::util::viewport::scroll_to_top();
        }
    };

    view! {
        <button class=class aria-label="Back to top" on:click=on_click>
            <ArrowUpIcon/>
        </button>
    }
}
