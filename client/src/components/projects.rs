//! Projects section: category chips over a filtered card grid.

use leptos::prelude::*;

use crate::content::{Project, SiteContent};
use crate::state::projects::{ProjectFilter, filter_options, visible_projects};

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let tags = project
        .tags
        .into_iter()
        .map(|tag| view! { <li class="tag">{tag}</li> })
        .collect_view();
    let repo = project.repo_url.map(|url| {
        view! {
            <a href=url class="project__link" target="_blank" rel="noopener">
                "Source"
            </a>
        }
    });
    let live = project.live_url.map(|url| {
        view! {
            <a href=url class="project__link" target="_blank" rel="noopener">
                "Live"
            </a>
        }
    });

    view! {
        <article class="project">
            <span class="project__category">{project.category}</span>
            <h3 class="project__title">{project.title}</h3>
            <p class="project__description">{project.description}</p>
            <ul class="project__tags">{tags}</ul>
            <div class="project__links">{repo}{live}</div>
        </article>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let content = expect_context::<StoredValue<SiteContent>>();
    let projects = StoredValue::new(content.with_value(|c| c.projects.clone()));
    let options = projects.with_value(|p| filter_options(p));
    let filter = RwSignal::new(ProjectFilter::All);

    let chips = options
        .into_iter()
        .map(|option| {
            let label = option.label().to_owned();
            let selected = {
                let option = option.clone();
                move || filter.with(|f| *f == option)
            };
            view! {
                <button
                    class="chip btn"
                    class:active=selected.clone()
                    aria-pressed=move || selected().to_string()
                    on:click=move |_| filter.set(option.clone())
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let visible = move || {
        filter.with(|f| {
            projects.with_value(|all| visible_projects(all, f).into_iter().cloned().collect::<Vec<_>>())
        })
    };

    view! {
        <section id="projects" class="section projects">
            <h2 class="section__title reveal">"Projects"</h2>
            <div class="projects__filters reveal" role="group" aria-label="Filter projects">
                {chips}
            </div>
            <div class="projects__grid reveal" data-reveal-delay="100">
                <For
                    each=visible
                    key=|project| project.title.clone()
                    children=|project| view! { <ProjectCard project=project/> }
                />
            </div>
        </section>
    }
}
