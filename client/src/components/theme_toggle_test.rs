use super::*;
use crate::config::{DEFAULT_THEME_STORAGE_KEY, ThemeConfig};
use crate::util::preference_store::{MemoryStore, PreferenceStore};
use crate::util::surface::MemorySurface;

fn resolver(stored: Option<&str>, ambient: Scheme) -> ThemeResolver<MemoryStore, MemorySurface> {
    let store = match stored {
        Some(value) => MemoryStore::with_entry(DEFAULT_THEME_STORAGE_KEY, value),
        None => MemoryStore::new(),
    };
    let mut resolver = ThemeResolver::new(
        PreferenceStore::new(store),
        MemorySurface::new(),
        ThemeConfig::default(),
        ambient,
    );
    resolver.initialize();
    resolver
}

#[test]
fn label_names_the_theme_a_click_switches_to() {
    assert_eq!(toggle_label(Scheme::Light), "Switch to dark theme");
    assert_eq!(toggle_label(Scheme::Dark), "Switch to light theme");
}

#[test]
fn shift_selects_follow_system() {
    assert_eq!(ToggleAction::from_click(false), ToggleAction::Flip);
    assert_eq!(ToggleAction::from_click(true), ToggleAction::FollowSystem);
}

#[test]
fn plain_click_flips_and_persists_concrete_theme() {
    let mut r = resolver(None, Scheme::Dark);
    assert_eq!(ToggleAction::from_click(false).perform(&mut r), Scheme::Light);
    assert_eq!(r.view().preference, ThemePreference::Light);
    assert_eq!(r.store().get(DEFAULT_THEME_STORAGE_KEY), Some("light".to_owned()));
}

#[test]
fn shift_click_forgets_choice_and_follows_ambient() {
    let mut r = resolver(Some("light"), Scheme::Dark);
    assert_eq!(r.view().effective, Scheme::Light);
    assert_eq!(ToggleAction::from_click(true).perform(&mut r), Scheme::Dark);
    assert_eq!(r.view().preference, ThemePreference::System);
    assert_eq!(r.store().get(DEFAULT_THEME_STORAGE_KEY), None);
}

#[test]
fn title_mentions_following_system_only_when_it_is() {
    let following = ThemeView {
        preference: ThemePreference::System,
        effective: Scheme::Dark,
    };
    assert_eq!(toggle_title(following), "Switch to light theme (following system)");

    let pinned = ThemeView {
        preference: ThemePreference::Light,
        effective: Scheme::Light,
    };
    assert_eq!(toggle_title(pinned), "Switch to dark theme (Shift+click to follow system)");
}
