//! Root application component and the instances it owns.
//!
//! ARCHITECTURE
//! ============
//! `App` builds every stateful controller once (theme resolver, scheme
//! observer, navigation state, contact form, submitter) and provides them via
//! context. Components never reach for globals; browser listeners are
//! attached after the first render.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::components::{
    about::About, back_to_top::BackToTop, contact::Contact, experience::ExperienceTimeline,
    footer::Footer, hero::Hero, navbar::Navbar, projects::Projects, skills::Skills,
};
use crate::components::theme_toggle::ToggleAction;
use crate::content::{SiteContent, page_sections};
use crate::net::submit::{ContactSubmitter, submitter_for};
use crate::state::form::ContactForm;
use crate::state::nav::NavState;
use crate::state::theme::{ThemeResolver, ThemeView};
use crate::util::preference_store::{LocalStorageStore, PreferenceStore};
use crate::util::surface::DomSurface;
use crate::util::system_scheme::{MediaQueryObserver, SchemeObserver};

/// Theme resolver bound to the browser's storage and document.
pub type SiteTheme = ThemeResolver<LocalStorageStore, DomSurface>;

/// Context handle for the theme: the resolver plus a reactive snapshot.
#[derive(Clone, Copy)]
pub struct ThemeHandle {
    resolver: StoredValue<SiteTheme, LocalStorage>,
    view: RwSignal<ThemeView>,
}

impl ThemeHandle {
    /// Build, initialize, and subscribe the resolver to ambient changes.
    fn install(content: &SiteContent) -> Self {
        let observer = MediaQueryObserver::new();
        let mut resolver = ThemeResolver::new(
            PreferenceStore::new(LocalStorageStore),
            DomSurface,
            content.config.theme.clone(),
            observer.current(),
        );
        resolver.initialize();

        let view = RwSignal::new(resolver.view());
        resolver.subscribe(move |snapshot| view.set(snapshot));
        let resolver = StoredValue::new_local(resolver);

        observer.subscribe(Box::new(move |scheme| {
            resolver.update_value(|r| {
                if let Some(next) = r.on_ambient_change(scheme) {
                    log::debug!("ambient scheme changed, now {next}");
                }
            });
        }));
        // Dropping the observer would detach its listener.
        let observer = StoredValue::new_local(observer);
        on_cleanup(move || observer.dispose());

        Self { resolver, view }
    }

    pub fn view(&self) -> ThemeView {
        self.view.get()
    }

    pub fn click(&self, action: ToggleAction) {
        self.resolver.update_value(|r| {
            let next = action.perform(r);
            log::info!("theme {action:?} -> {next}");
        });
    }
}

/// Contact submitter shared with the contact section.
#[derive(Clone, Copy)]
pub struct SubmitterHandle(pub StoredValue<std::rc::Rc<dyn ContactSubmitter>, LocalStorage>);

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let content = SiteContent::embedded();
    let config = content.config.clone();

    let theme = ThemeHandle::install(&content);
    let nav = RwSignal::new(NavState::new(page_sections(), config.nav.clone()));
    let form = RwSignal::new(ContactForm::new());
    let submitter = SubmitterHandle(StoredValue::new_local(submitter_for(&config.contact)));

    provide_context(theme);
    provide_context(nav);
    provide_context(form);
    provide_context(submitter);
    provide_context(StoredValue::new(content.clone()));

    let reveal_config = config.reveal.clone();
    let ripple_ms = config.effects.ripple_duration_ms;
    Effect::new(move || {
        let tracked = crate::util::reveal_observer::install(&reveal_config);
        log::debug!("scroll reveal tracking {tracked} elements");
        crate::util::ripple::install(ripple_ms);
    });

    let title = format!("{} | {}", content.profile.name, content.profile.title);
    let description = content.profile.tagline.clone();

    view! {
        <Title text=title/>
        <Meta name="description" content=description/>
        <Navbar/>
        <main id="main">
            <Hero/>
            <About/>
            <Skills/>
            <Projects/>
            <ExperienceTimeline/>
            <Contact/>
        </main>
        <Footer/>
        <BackToTop/>
    }
}
