//! Skills section: grouped proficiency bars.

use leptos::prelude::*;

use crate::content::SiteContent;

#[component]
pub fn Skills() -> impl IntoView {
    let content = expect_context::<StoredValue<SiteContent>>();
    let groups = content.with_value(|c| c.skills.clone());

    let cards = groups
        .into_iter()
        .enumerate()
        .map(|(i, group)| {
            let bars = group
                .skills
                .into_iter()
                .map(|skill| {
                    let width = format!("width: {}%;", skill.level.min(100));
                    let level = format!("{}%", skill.level);
                    view! {
                        <li class="skill">
                            <div class="skill__head">
                                <span>{skill.name}</span>
                                <span class="skill__level">{level}</span>
                            </div>
                            <div class="skill__track">
                                <div class="skill__bar" style=width></div>
                            </div>
                        </li>
                    }
                })
                .collect_view();
            let delay = (i * 150).to_string();
            view! {
                <div class="skills__group reveal" data-reveal-delay=delay>
                    <h3>{group.name}</h3>
                    <ul>{bars}</ul>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="skills" class="section skills">
            <h2 class="section__title reveal">"Skills"</h2>
            <div class="skills__grid">{cards}</div>
        </section>
    }
}
