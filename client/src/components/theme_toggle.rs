//! Theme toggle button.
//!
//! Click flips between light and dark; Shift+click forgets the stored choice
//! and follows the operating system again.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::app::ThemeHandle;
use crate::state::theme::{Scheme, ThemePreference, ThemeResolver, ThemeView};
use crate::util::preference_store::KeyValueStore;
use crate::util::surface::PresentationSurface;

/// What a click on the toggle does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    /// Flip to the opposite concrete theme and remember it.
    Flip,
    /// Forget the stored choice and follow the operating system.
    FollowSystem,
}

impl ToggleAction {
    pub fn from_click(shift_held: bool) -> Self {
        if shift_held { Self::FollowSystem } else { Self::Flip }
    }

    /// Run the action against a resolver and return the new effective theme.
    pub fn perform<S: KeyValueStore, P: PresentationSurface>(self, resolver: &mut ThemeResolver<S, P>) -> Scheme {
        match self {
            Self::Flip => resolver.toggle(),
            Self::FollowSystem => resolver.reset(),
        }
    }
}

/// Accessible label describing what a click will do.
pub fn toggle_label(effective: Scheme) -> &'static str {
    match effective {
        Scheme::Light => "Switch to dark theme",
        Scheme::Dark => "Switch to light theme",
    }
}

/// Tooltip: the click label plus how the preference is currently held.
pub fn toggle_title(view: ThemeView) -> String {
    let label = toggle_label(view.effective);
    if view.preference == ThemePreference::System {
        format!("{label} (following system)")
    } else {
        format!("{label} (Shift+click to follow system)")
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeHandle>();

    let on_click = move |ev: leptos::ev::MouseEvent| theme.click(ToggleAction::from_click(ev.shift_key()));

    let label = move || toggle_label(theme.view().effective);
    let title = move || toggle_title(theme.view());

    view! {
        <button
            class="theme-toggle"
            class:following-system=move || theme.view().preference == ThemePreference::System
            aria-label=label
            title=title
            on:click=on_click
        >
            <span class="theme-toggle__icon" aria-hidden="true">
                {move || match theme.view().effective {
                    Scheme::Light => "☾",
                    Scheme::Dark => "☀",
                }}
            </span>
        </button>
    }
}
