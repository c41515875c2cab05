//! Contact section with the direct line and office details.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::state::reveal::Region;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contacts" class="contact">
            <div class="contact__inner">
                <Reveal region=Region::ContactIntro class="contact__intro">
                    <span class="section-kicker">"Confidential contact"</span>
                    <h2 class="section-title">"Begin the engagement"</h2>
                    <p>
                        "To arrange a consultation, please call the number below. A direct call keeps your inquiry fast and confidential."
                    </p>
                    <a href="tel:+994501234567" class="contact__phone">
                        <span class="contact__phone-label">"Direct line"</span>
                        <span class="contact__phone-number">"+994 50 123 45 67"</span>
                    </a>
                </Reveal>

                <Reveal region=Region::ContactCard class="contact__card">
                    <div class="contact__block">
                        <h4>"Office in Baku"</h4>
                        <p>"28 Nizami Street, AZ 1000, Baku, Azerbaijan"</p>
                    </div>
                    <div class="contact__block">
                        <h4>"Consulting hours"</h4>
                        <p>"By prior appointment; confirm the schedule by phone."</p>
                    </div>
                    <div class="contact__social">
                        <a
                            href="https://www.instagram.com/valiyev.legal/"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            "Instagram"
                        </a>
                        <a
                            href="https://www.facebook.com/valiyev.legal/"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            "Facebook"
                        </a>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
