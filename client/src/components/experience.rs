//! Experience section: reverse-chronological timeline.

use leptos::prelude::*;

use crate::content::SiteContent;

#[component]
pub fn ExperienceTimeline() -> impl IntoView {
    let content = expect_context::<StoredValue<SiteContent>>();
    let entries = content.with_value(|c| c.experience.clone());

    let items = entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            // Alternate sides on wide layouts.
            let class = if i % 2 == 0 {
                "timeline__item reveal-left"
            } else {
                "timeline__item reveal-right"
            };
            let highlights = entry
                .highlights
                .into_iter()
                .map(|h| view! { <li>{h}</li> })
                .collect_view();
            view! {
                <li class=class>
                    <span class="timeline__period">{entry.period}</span>
                    <h3 class="timeline__role">{entry.role}</h3>
                    <p class="timeline__company">{entry.company}</p>
                    <ul class="timeline__highlights">{highlights}</ul>
                </li>
            }
        })
        .collect_view();

    view! {
        <section id="experience" class="section experience">
            <h2 class="section__title reveal">"Experience"</h2>
            <ol class="timeline">{items}</ol>
        </section>
    }
}
