//! Hero section with the headline and primary calls to action.

use leptos::prelude::*;

/// Full-height opening section. Visible from the first paint, so it carries
/// the revealed state statically instead of being observed.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__inner reveal reveal--visible">
                <span class="hero__kicker">"Private practice in Azerbaijan"</span>
                <h1 class="hero__title">
                    "Uncompromising "
                    <span class="hero__title-accent">"legal defense."</span>
                </h1>
                <p class="hero__lead">
                    "Fundamental knowledge of the law combined with strategic thinking, applied to the most demanding legal challenges."
                </p>
                <div class="hero__actions">
                    <a href="#contacts" class="btn btn--accent">"Consultation"</a>
                    <a href="#practice" class="btn btn--outline">"Practice areas"</a>
                </div>
            </div>
            <div class="hero__scroll-hint" aria-hidden="true"></div>
        </section>
    }
}
