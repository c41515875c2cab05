//! Fixed page header with navigation and the theme toggle.

use leptos::prelude::*;

use crate::components::icons::{MoonIcon, SunIcon};
use crate::state::controller::PageController;
use crate::state::theme::Theme;

/// Fixed header. Condenses once the page scrolls past the header threshold
/// and hosts the light/dark toggle.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let controller = expect_context::<PageController>();
    let scroll = controller.scroll();
    let theme = controller.theme();

    let header_class = move || {
        if scroll.get().past_header {
            "site-header site-header--condensed"
        } else {
            "site-header"
        }
    };

    let on_brand = move |_| {
        #[cfg(feature = "web")]
        {
            crate::util::viewport::scroll_to_top();
        }
    };

    view! {
        <header class=header_class>
            <div class="site-header__inner">
                <div class="site-header__brand" on:click=on_brand>
                    <span class="site-header__name">"O. Valiyev"</span>
                    <span class="site-header__tagline">"Advocate \u{b7} Baku"</span>
                </div>

                <nav class="site-header__nav">
                    <a href="#practice">"Practice"</a>
                    <a href="#about">"About"</a>
                    <a href="#contacts">"Contacts"</a>
                </nav>

                <button
                    class="site-header__theme-toggle"
                    aria-label="Toggle theme"
                    on:click=move |_| controller.toggle_theme()
                >
                    {move || {
                        if theme.get() == Theme::Dark {
                            view! { <SunIcon/> }.into_any()
                        } else {
                            view! { <MoonIcon/> }.into_any()
                        }
                    }}
                </button>
            </div>
        </header>
    }
}
