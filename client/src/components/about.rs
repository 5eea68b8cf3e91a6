//! About section: biography paragraphs and headline stats.

use leptos::prelude::*;

use crate::content::SiteContent;

#[component]
pub fn About() -> impl IntoView {
    let content = expect_context::<StoredValue<SiteContent>>();
    let (about, initials) = content.with_value(|c| (c.about.clone(), c.profile.initials()));

    let paragraphs = about
        .paragraphs
        .into_iter()
        .map(|text| view! { <p>{text}</p> })
        .collect_view();

    let stats = about
        .stats
        .into_iter()
        .enumerate()
        .map(|(i, stat)| {
            let delay = (i * 100).to_string();
            view! {
                <div class="stat reveal-scale" data-reveal-delay=delay>
                    <span class="stat__value">{stat.value}</span>
                    <span class="stat__label">{stat.label}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="about" class="section about">
            <h2 class="section__title reveal">"About me"</h2>
            <div class="about__grid">
                <div class="about__avatar reveal-left" aria-hidden="true">{initials}</div>
                <div class="about__text reveal-right">{paragraphs}</div>
            </div>
            <div class="about__stats">{stats}</div>
        </section>
    }
}
