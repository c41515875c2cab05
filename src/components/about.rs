//! Professional profile section.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::state::reveal::Region;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="about__inner">
                <Reveal region=Region::AboutText class="about__text">
                    <span class="section-kicker">"Professional profile"</span>
                    <h2 class="section-title">"Advocate Orkhan Valiyev"</h2>
                    <p>
                        "Law, for me, is not merely a profession but the craft of defending rights and interests inside a complex system of legal relations. Template solutions are excluded; every case demands deep immersion in its details and its own tactics."
                    </p>
                    <div class="about__facts">
                        <div class="about__fact">
                            <h4>"Media expertise"</h4>
                            <p>"Regular appearances as a legal expert on national television."</p>
                        </div>
                        <div class="about__fact">
                            <h4>"Project scale"</h4>
                            <p>"Transactions accompanied for a total above 20 million EUR."</p>
                        </div>
                    </div>
                    <p>
                        "Today I offer my clients certainty in the legal field of Azerbaijan, built on fifteen years of practice and a reputation earned in the professional community."
                    </p>
                </Reveal>

                <Reveal region=Region::AboutPortrait class="about__portrait">
                    <div class="about__frame">
                        <blockquote class="about__quote">
                            "The law must be an instrument of success."
                        </blockquote>
                        <span class="about__quote-caption">"Working principle"</span>
                    </div>
                    <div class="about__stat">
                        <span class="about__stat-value">"15+"</span>
                        <span class="about__stat-label">"Years of practice"</span>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
