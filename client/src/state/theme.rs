//! Theme preference resolution and persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The user picks `light`, `dark`, or `system`; the operating environment
//! reports an ambient scheme. The rendered (effective) theme is derived from
//! both at evaluation time and is never stored, so a stored `system`
//! preference keeps following the OS across sessions.
//!
//! DESIGN
//! ======
//! `ThemeResolver` owns its preference store and presentation surface. The
//! ambient scheme is pushed in by whoever observes it (see
//! `util::system_scheme`), which keeps the resolver free of browser types.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::config::ThemeConfig;
use crate::util::preference_store::{KeyValueStore, PreferenceStore};
use crate::util::surface::{PresentationSurface, Target};

pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const THEME_COLOR_META: &str = "meta[name=\"theme-color\"]";
/// Inline style property that hints native form controls and scrollbars.
pub const COLOR_SCHEME_PROPERTY: &str = "color-scheme";

/// A concrete light/dark appearance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Scheme {
    #[default]
    Light,
    Dark,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's stored choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the ambient scheme.
    #[default]
    System,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

impl From<Scheme> for ThemePreference {
    fn from(scheme: Scheme) -> Self {
        match scheme {
            Scheme::Light => Self::Light,
            Scheme::Dark => Self::Dark,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme preference: {0:?}")]
pub struct ParsePreferenceError(pub String);

impl FromStr for ThemePreference {
    type Err = ParsePreferenceError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            _ => Err(ParsePreferenceError(raw.to_owned())),
        }
    }
}

/// Effective scheme for `preference` under `ambient`.
pub fn effective_theme(preference: ThemePreference, ambient: Scheme) -> Scheme {
    match preference {
        ThemePreference::Light => Scheme::Light,
        ThemePreference::Dark => Scheme::Dark,
        ThemePreference::System => ambient,
    }
}

/// Snapshot of resolver state for reactive rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeView {
    pub preference: ThemePreference,
    pub effective: Scheme,
}

type Subscriber = Box<dyn Fn(ThemeView)>;

/// Combines the stored preference with the ambient scheme and renders the
/// result onto a presentation surface.
pub struct ThemeResolver<S, P> {
    store: PreferenceStore<S>,
    surface: P,
    config: ThemeConfig,
    preference: ThemePreference,
    ambient: Scheme,
    subscribers: Vec<Subscriber>,
}

impl<S, P> fmt::Debug for ThemeResolver<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeResolver")
            .field("preference", &self.preference)
            .field("ambient", &self.ambient)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl<S: KeyValueStore, P: PresentationSurface> ThemeResolver<S, P> {
    /// Build a resolver; nothing is read or rendered until [`Self::initialize`].
    pub fn new(store: PreferenceStore<S>, surface: P, config: ThemeConfig, ambient: Scheme) -> Self {
        Self {
            store,
            surface,
            config,
            preference: ThemePreference::System,
            ambient,
            subscribers: Vec::new(),
        }
    }

    /// Load the stored preference (absent or invalid → `System`) and render.
    pub fn initialize(&mut self) -> Scheme {
        self.preference = match self.store.get(&self.config.storage_key) {
            None => ThemePreference::System,
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                log::warn!("ignoring stored theme: {err}");
                ThemePreference::System
            }),
        };
        self.apply()
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn ambient(&self) -> Scheme {
        self.ambient
    }

    pub fn effective(&self) -> Scheme {
        effective_theme(self.preference, self.ambient)
    }

    pub fn view(&self) -> ThemeView {
        ThemeView {
            preference: self.preference,
            effective: self.effective(),
        }
    }

    pub fn surface(&self) -> &P {
        &self.surface
    }

    pub fn store(&self) -> &PreferenceStore<S> {
        &self.store
    }

    /// Switch to the concrete opposite of the current effective theme.
    pub fn toggle(&mut self) -> Scheme {
        let next = self.effective().opposite();
        self.set_preference(next.into())
    }

    /// Store and render an explicit preference.
    pub fn set_preference(&mut self, preference: ThemePreference) -> Scheme {
        self.preference = preference;
        if !self.store.set(&self.config.storage_key, preference.as_str()) {
            log::debug!("theme preference {preference} kept for this session only");
        }
        self.apply()
    }

    /// Forget the stored preference and follow the ambient scheme again.
    pub fn reset(&mut self) -> Scheme {
        self.store.remove(&self.config.storage_key);
        self.preference = ThemePreference::System;
        self.apply()
    }

    /// Record a new ambient scheme. Re-renders only when following the system.
    pub fn on_ambient_change(&mut self, ambient: Scheme) -> Option<Scheme> {
        self.ambient = ambient;
        if self.preference == ThemePreference::System {
            Some(self.apply())
        } else {
            None
        }
    }

    /// Register a callback invoked after every render.
    pub fn subscribe(&mut self, callback: impl Fn(ThemeView) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    /// Render the effective theme. Safe to call redundantly.
    pub fn apply(&mut self) -> Scheme {
        let scheme = self.effective();
        if !self.surface.set_attribute(Target::Root, THEME_ATTRIBUTE, scheme.as_str()) {
            log::warn!("document root missing; theme {scheme} not rendered");
        }
        self.surface
            .set_style_property(Target::Root, COLOR_SCHEME_PROPERTY, scheme.as_str());
        let color = match scheme {
            Scheme::Light => &self.config.light_color,
            Scheme::Dark => &self.config.dark_color,
        };
        if !self.surface.set_attribute(Target::Selector(THEME_COLOR_META), "content", color) {
            log::warn!("no theme-color meta tag; browser chrome color unchanged");
        }
        let view = self.view();
        for subscriber in &self.subscribers {
            subscriber(view);
        }
        scheme
    }
}
