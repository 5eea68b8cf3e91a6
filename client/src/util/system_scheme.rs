//! Operating-system light/dark preference observation.
//!
//! Reads `(prefers-color-scheme: dark)` and forwards its `change` events.
//! Requires a browser environment; elsewhere the ambient scheme is fixed at
//! light and never changes.

#[cfg(test)]
#[path = "system_scheme_test.rs"]
mod system_scheme_test;

use std::cell::{Cell, RefCell};

use crate::state::theme::Scheme;

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Source of the ambient scheme.
pub trait SchemeObserver {
    /// Ambient scheme right now.
    fn current(&self) -> Scheme;

    /// Invoke `callback` with the new scheme on every ambient change.
    fn subscribe(&self, callback: Box<dyn Fn(Scheme)>);
}

/// Map a `matches` flag of the dark-scheme query to a scheme.
pub fn scheme_from_dark_match(matches: bool) -> Scheme {
    if matches { Scheme::Dark } else { Scheme::Light }
}

/// Browser media-query observer. Listeners are detached on drop.
#[derive(Default)]
pub struct MediaQueryObserver {
    #[cfg(feature = "csr")]
    query: Option<web_sys::MediaQueryList>,
    #[cfg(feature = "csr")]
    listeners: RefCell<Vec<Closure<dyn FnMut(web_sys::MediaQueryListEvent)>>>,
}

impl std::fmt::Debug for MediaQueryObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaQueryObserver").finish_non_exhaustive()
    }
}

impl MediaQueryObserver {
    /// Attach to the dark-scheme media query.
    pub fn new() -> Self {
        #[cfg(feature = "csr")]
        {
            let query = web_sys::window()
                .and_then(|w| w.match_media(DARK_SCHEME_QUERY).unwrap_or_default());
            if query.is_none() {
                log::warn!("matchMedia unavailable; ambient scheme fixed at light");
            }
            Self {
                query,
                listeners: RefCell::new(Vec::new()),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}

impl SchemeObserver for MediaQueryObserver {
    fn current(&self) -> Scheme {
        #[cfg(feature = "csr")]
        {
            scheme_from_dark_match(self.query.as_ref().is_some_and(web_sys::MediaQueryList::matches))
        }
        #[cfg(not(feature = "csr"))]
        {
            Scheme::Light
        }
    }

    fn subscribe(&self, callback: Box<dyn Fn(Scheme)>) {
        #[cfg(feature = "csr")]
        {
            let Some(query) = self.query.as_ref() else {
                return;
            };
            let listener = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
                move |ev: web_sys::MediaQueryListEvent| callback(scheme_from_dark_match(ev.matches())),
            );
            if let Err(err) =
                query.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
            {
                log::warn!("failed to watch color scheme changes: {err:?}");
                return;
            }
            self.listeners.borrow_mut().push(listener);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = callback;
        }
    }
}

#[cfg(feature = "csr")]
impl Drop for MediaQueryObserver {
    fn drop(&mut self) {
        let Some(query) = self.query.as_ref() else {
            return;
        };
        for listener in self.listeners.get_mut().drain(..) {
            if let Err(err) =
                query.remove_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
            {
                log::debug!("color scheme listener already detached: {err:?}");
            }
        }
    }
}

/// Observer driven by explicit [`ManualSchemeObserver::set`] calls.
pub struct ManualSchemeObserver {
    current: Cell<Scheme>,
    subscribers: RefCell<Vec<Box<dyn Fn(Scheme)>>>,
}

impl std::fmt::Debug for ManualSchemeObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualSchemeObserver")
            .field("current", &self.current.get())
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}

impl ManualSchemeObserver {
    pub fn new(initial: Scheme) -> Self {
        Self {
            current: Cell::new(initial),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Change the ambient scheme; subscribers fire only on an actual change.
    pub fn set(&self, scheme: Scheme) {
        if self.current.replace(scheme) == scheme {
            return;
        }
        for subscriber in self.subscribers.borrow().iter() {
            subscriber(scheme);
        }
    }
}

impl SchemeObserver for ManualSchemeObserver {
    fn current(&self) -> Scheme {
        self.current.get()
    }

    fn subscribe(&self, callback: Box<dyn Fn(Scheme)>) {
        self.subscribers.borrow_mut().push(callback);
    }
}
