//! Practice-area grid.

use leptos::prelude::*;

use crate::components::icons::PracticeIcon;
use crate::components::reveal::Reveal;
use crate::content::PRACTICE_AREAS;
use crate::state::reveal::Region;

#[component]
pub fn PracticeGrid() -> impl IntoView {
    view! {
        <section id="practice" class="practice">
            <div class="practice__container">
                <Reveal region=Region::PracticeIntro class="practice__intro">
                    <div class="practice__intro-heading">
                        <span class="section-kicker">"Areas of expertise"</span>
                        <h2 class="section-title">"Legal practice"</h2>
                    </div>
                    <p class="practice__note">
                        "Years of work across adjoining branches of law make it possible to find effective solutions at their intersection."
                    </p>
                </Reveal>

                <div class="practice__grid">
                    {PRACTICE_AREAS
                        .iter()
                        .map(|area| {
                            view! {
                                <div class="practice__card">
                                    <div class="practice__icon">
                                        <PracticeIcon name=area.icon/>
                                    </div>
                                    <h3 class="practice__card-title">{area.title}</h3>
                                    <p class="practice__card-text">{area.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
