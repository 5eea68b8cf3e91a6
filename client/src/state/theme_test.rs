use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::util::preference_store::{MemoryStore, StorageError};
use crate::util::surface::MemorySurface;
use crate::util::system_scheme::{ManualSchemeObserver, SchemeObserver};

const KEY: &str = crate::config::DEFAULT_THEME_STORAGE_KEY;

fn resolver_with(store: MemoryStore, ambient: Scheme) -> ThemeResolver<MemoryStore, MemorySurface> {
    let surface = MemorySurface::new().with_element(THEME_COLOR_META);
    ThemeResolver::new(PreferenceStore::new(store), surface, ThemeConfig::default(), ambient)
}

fn rendered(resolver: &ThemeResolver<MemoryStore, MemorySurface>) -> Option<String> {
    resolver.surface().attribute(Target::Root, THEME_ATTRIBUTE)
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn preference_parses_known_values() {
    assert_eq!("light".parse(), Ok(ThemePreference::Light));
    assert_eq!(" Dark ".parse(), Ok(ThemePreference::Dark));
    assert_eq!("SYSTEM".parse(), Ok(ThemePreference::System));
}

#[test]
fn preference_rejects_unknown_values() {
    let err = "sepia".parse::<ThemePreference>().unwrap_err();
    assert_eq!(err, ParsePreferenceError("sepia".to_owned()));
}

#[test]
fn preference_string_form_matches_storage_format() {
    for pref in [ThemePreference::Light, ThemePreference::Dark, ThemePreference::System] {
        assert_eq!(pref.as_str().parse(), Ok(pref));
    }
}

// =============================================================
// effective_theme
// =============================================================

#[test]
fn concrete_preference_ignores_ambient() {
    for ambient in [Scheme::Light, Scheme::Dark] {
        assert_eq!(effective_theme(ThemePreference::Light, ambient), Scheme::Light);
        assert_eq!(effective_theme(ThemePreference::Dark, ambient), Scheme::Dark);
    }
}

#[test]
fn system_preference_follows_ambient() {
    assert_eq!(effective_theme(ThemePreference::System, Scheme::Light), Scheme::Light);
    assert_eq!(effective_theme(ThemePreference::System, Scheme::Dark), Scheme::Dark);
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_with_empty_store_defaults_to_system() {
    let mut resolver = resolver_with(MemoryStore::new(), Scheme::Dark);
    assert_eq!(resolver.initialize(), Scheme::Dark);
    assert_eq!(resolver.preference(), ThemePreference::System);
    assert_eq!(rendered(&resolver), Some("dark".to_owned()));
}

#[test]
fn initialize_with_invalid_value_treats_it_as_system() {
    let mut resolver = resolver_with(MemoryStore::with_entry(KEY, "purple"), Scheme::Light);
    assert_eq!(resolver.initialize(), Scheme::Light);
    assert_eq!(resolver.preference(), ThemePreference::System);
}

#[test]
fn initialize_with_stored_value_uses_it() {
    let mut resolver = resolver_with(MemoryStore::with_entry(KEY, "dark"), Scheme::Light);
    assert_eq!(resolver.initialize(), Scheme::Dark);
    assert_eq!(resolver.preference(), ThemePreference::Dark);
}

// =============================================================
// toggle / set / reset
// =============================================================

#[test]
fn toggle_stores_concrete_opposite_of_effective() {
    let mut resolver = resolver_with(MemoryStore::new(), Scheme::Dark);
    resolver.initialize();
    assert_eq!(resolver.toggle(), Scheme::Light);
    assert_eq!(resolver.preference(), ThemePreference::Light);
    assert_eq!(resolver.store().get(KEY), Some("light".to_owned()));
    assert_eq!(rendered(&resolver), Some("light".to_owned()));
}

#[test]
fn toggle_never_produces_system() {
    let mut resolver = resolver_with(MemoryStore::new(), Scheme::Light);
    resolver.initialize();
    for _ in 0..5 {
        resolver.toggle();
        assert_ne!(resolver.preference(), ThemePreference::System);
    }
}

#[test]
fn toggling_twice_returns_to_original_effective_theme() {
    for ambient in [Scheme::Light, Scheme::Dark] {
        for stored in [None, Some("light"), Some("dark"), Some("system")] {
            let store = stored.map_or_else(MemoryStore::new, |v| MemoryStore::with_entry(KEY, v));
            let mut resolver = resolver_with(store, ambient);
            let original = resolver.initialize();
            resolver.toggle();
            assert_eq!(resolver.toggle(), original);
        }
    }
}

#[test]
fn reset_removes_stored_preference() {
    let mut resolver = resolver_with(MemoryStore::with_entry(KEY, "light"), Scheme::Dark);
    resolver.initialize();
    assert_eq!(resolver.reset(), Scheme::Dark);
    assert_eq!(resolver.preference(), ThemePreference::System);
    assert_eq!(resolver.store().get(KEY), None);
}

#[test]
fn set_preference_system_persists_literal_string() {
    let mut resolver = resolver_with(MemoryStore::new(), Scheme::Light);
    resolver.initialize();
    resolver.set_preference(ThemePreference::System);
    assert_eq!(resolver.store().get(KEY), Some("system".to_owned()));
}

// =============================================================
// Ambient changes
// =============================================================

#[test]
fn ambient_change_reapplies_when_following_system() {
    let mut resolver = resolver_with(MemoryStore::new(), Scheme::Light);
    resolver.initialize();
    assert_eq!(resolver.on_ambient_change(Scheme::Dark), Some(Scheme::Dark));
    assert_eq!(rendered(&resolver), Some("dark".to_owned()));
    assert_eq!(resolver.store().get(KEY), None);
}

#[test]
fn ambient_change_is_ignored_for_concrete_preference() {
    let mut resolver = resolver_with(MemoryStore::with_entry(KEY, "light"), Scheme::Light);
    resolver.initialize();
    assert_eq!(resolver.on_ambient_change(Scheme::Dark), None);
    assert_eq!(rendered(&resolver), Some("light".to_owned()));
    assert_eq!(resolver.ambient(), Scheme::Dark);
}

#[test]
fn observer_driven_resolver_tracks_system_changes() {
    let observer = ManualSchemeObserver::new(Scheme::Light);
    let resolver = Rc::new(RefCell::new(resolver_with(MemoryStore::new(), observer.current())));
    resolver.borrow_mut().initialize();

    let target = Rc::clone(&resolver);
    observer.subscribe(Box::new(move |scheme| {
        target.borrow_mut().on_ambient_change(scheme);
    }));

    observer.set(Scheme::Dark);
    assert_eq!(resolver.borrow().effective(), Scheme::Dark);
    observer.set(Scheme::Light);
    assert_eq!(resolver.borrow().effective(), Scheme::Light);
}

// =============================================================
// apply
// =============================================================

#[test]
fn apply_updates_theme_color_meta() {
    let mut resolver = resolver_with(MemoryStore::with_entry(KEY, "dark"), Scheme::Light);
    resolver.initialize();
    let meta = resolver.surface().attribute(Target::Selector(THEME_COLOR_META), "content");
    assert_eq!(meta, Some(ThemeConfig::default().dark_color));
}

#[test]
fn apply_sets_color_scheme_without_clobbering_inline_style() {
    let mut resolver = resolver_with(MemoryStore::new(), Scheme::Light);
    resolver.surface().set_style_property(Target::Root, "scroll-padding-top", "4rem");
    resolver.initialize();
    resolver.toggle();

    let surface = resolver.surface();
    assert_eq!(surface.style_property(Target::Root, COLOR_SCHEME_PROPERTY), Some("dark".to_owned()));
    assert_eq!(surface.style_property(Target::Root, "scroll-padding-top"), Some("4rem".to_owned()));
    assert_eq!(surface.attribute(Target::Root, "style"), None);
}

#[test]
fn apply_notifies_subscribers_every_time() {
    let mut resolver = resolver_with(MemoryStore::new(), Scheme::Light);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    resolver.subscribe(move |view| sink.borrow_mut().push(view.effective));

    resolver.initialize();
    resolver.apply();
    resolver.toggle();

    assert_eq!(*seen.borrow(), vec![Scheme::Light, Scheme::Light, Scheme::Dark]);
}

#[test]
fn apply_without_meta_tag_still_renders_root() {
    let mut resolver = ThemeResolver::new(
        PreferenceStore::new(MemoryStore::new()),
        MemorySurface::new(),
        ThemeConfig::default(),
        Scheme::Dark,
    );
    assert_eq!(resolver.initialize(), Scheme::Dark);
    assert_eq!(
        resolver.surface().attribute(Target::Root, THEME_ATTRIBUTE),
        Some("dark".to_owned())
    );
}

// =============================================================
// Persistence across reloads
// =============================================================

/// Backend shared between "page loads" to emulate `localStorage`.
#[derive(Clone, Default)]
struct SharedStore(Rc<RefCell<std::collections::HashMap<String, String>>>);

impl KeyValueStore for SharedStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.0.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.0.borrow_mut().remove(key);
        Ok(())
    }
}

fn load(store: &SharedStore, ambient: Scheme) -> ThemeResolver<SharedStore, MemorySurface> {
    let mut resolver = ThemeResolver::new(
        PreferenceStore::new(store.clone()),
        MemorySurface::new(),
        ThemeConfig::default(),
        ambient,
    );
    resolver.initialize();
    resolver
}

#[test]
fn toggle_then_reload_keeps_concrete_theme_regardless_of_ambient() {
    let store = SharedStore::default();

    let mut first = load(&store, Scheme::Dark);
    assert_eq!(first.effective(), Scheme::Dark);
    first.toggle();
    assert_eq!(store.0.borrow().get(KEY), Some(&"light".to_owned()));

    for ambient in [Scheme::Light, Scheme::Dark] {
        let reloaded = load(&store, ambient);
        assert_eq!(reloaded.effective(), Scheme::Light);
        assert_eq!(reloaded.preference(), ThemePreference::Light);
    }
}

#[test]
fn effective_theme_is_never_persisted() {
    let store = SharedStore::default();
    let mut resolver = load(&store, Scheme::Dark);
    resolver.on_ambient_change(Scheme::Light);
    resolver.apply();
    assert!(store.0.borrow().is_empty());
}
