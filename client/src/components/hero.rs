//! Landing section: name, cycling role line, and calls to action.

use leptos::prelude::*;

use crate::components::navbar::scroll_to_section;
use crate::content::SiteContent;
use crate::state::nav::NavState;

/// Drive the typewriter into `role` until the component is disposed.
#[cfg(feature = "csr")]
fn run_typewriter(role: RwSignal<String>, roles: Vec<String>, timing: crate::config::EffectsConfig) {
    use crate::util::typewriter::Typewriter;

    if crate::util::dom::prefers_reduced_motion() {
        role.set(roles.first().cloned().unwrap_or_default());
        return;
    }
    leptos::task::spawn_local(async move {
        let mut writer = Typewriter::new(&roles, timing);
        while let Some(step) = writer.tick() {
            // Disposed signal: the hero is gone.
            if role.try_set(step.text).is_some() {
                break;
            }
            gloo_timers::future::TimeoutFuture::new(step.delay_ms).await;
        }
    });
}

#[component]
pub fn Hero() -> impl IntoView {
    let content = expect_context::<StoredValue<SiteContent>>();
    let nav = expect_context::<RwSignal<NavState>>();

    let (profile, timing) = content.with_value(|c| (c.profile.clone(), c.config.effects.clone()));
    let role = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    run_typewriter(role, profile.roles.clone(), timing);
    #[cfg(not(feature = "csr"))]
    {
        let _ = timing;
        role.set(profile.roles.first().cloned().unwrap_or_default());
    }

    let resume = profile.resume_url.clone().map(|url| {
        view! {
            <a href=url class="btn btn--ghost" target="_blank" rel="noopener">
                "Résumé"
            </a>
        }
    });

    view! {
        <section id="home" class="hero">
            <div class="hero__inner">
                <p class="hero__greeting reveal">"Hi, I'm"</p>
                <h1 class="hero__name reveal" data-reveal-delay="100">{profile.name.clone()}</h1>
                <p class="hero__role reveal" data-reveal-delay="200" aria-live="polite">
                    <span class="hero__role-text">{move || role.get()}</span>
                    <span class="hero__cursor" aria-hidden="true">"|"</span>
                </p>
                <p class="hero__tagline reveal" data-reveal-delay="300">{profile.tagline.clone()}</p>
                <div class="hero__actions reveal" data-reveal-delay="400">
                    <a
                        href="#projects"
                        class="btn btn--primary"
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.prevent_default();
                            scroll_to_section(nav, "projects");
                        }
                    >
                        "View my work"
                    </a>
                    <a
                        href="#contact"
                        class="btn btn--outline"
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.prevent_default();
                            scroll_to_section(nav, "contact");
                        }
                    >
                        "Get in touch"
                    </a>
                    {resume}
                </div>
            </div>
        </section>
    }
}
