//! Click ripple geometry and the cleanup map for live ripples.
//!
//! Each ripple is a short-lived span inside a button. Its removal timer is
//! kept in [`RippleRegistry`] so pending ripples can be torn down early when
//! the owning component unmounts.

#[cfg(test)]
#[path = "ripple_test.rs"]
mod ripple_test;

use std::collections::BTreeMap;

/// Button-local placement of a ripple circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    /// Inline style for the ripple span.
    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {left}px; top: {top}px;",
            size = self.size,
            left = self.left,
            top = self.top
        )
    }
}

/// Ripple centered on the click, sized to cover the whole button.
///
/// `client_*` are viewport coordinates of the click; `rect_*` the button's
/// bounding box.
pub fn ripple_geometry(
    client_x: f64,
    client_y: f64,
    rect_left: f64,
    rect_top: f64,
    rect_width: f64,
    rect_height: f64,
) -> RippleGeometry {
    let size = rect_width.max(rect_height);
    RippleGeometry {
        size,
        left: client_x - rect_left - size / 2.0,
        top: client_y - rect_top - size / 2.0,
    }
}

/// Live ripples keyed by id, holding whatever handle cancels their cleanup.
#[derive(Debug)]
pub struct RippleRegistry<H> {
    next_id: u64,
    live: BTreeMap<u64, H>,
}

impl<H> Default for RippleRegistry<H> {
    fn default() -> Self {
        Self {
            next_id: 0,
            live: BTreeMap::new(),
        }
    }
}

impl<H> RippleRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve an id for a ripple about to be spawned.
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn insert(&mut self, id: u64, handle: H) {
        self.live.insert(id, handle);
    }

    /// Called by a ripple's own expiry.
    pub fn remove(&mut self, id: u64) -> Option<H> {
        self.live.remove(&id)
    }

    /// Take every pending handle for early disposal.
    pub fn drain(&mut self) -> Vec<H> {
        std::mem::take(&mut self.live).into_values().collect()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

/// Attach a delegated click handler that spawns ripples inside `.btn`
/// elements. Live ripples are dropped early when the page is hidden so a
/// back/forward cache restore never shows a frozen ripple.
pub fn install(duration_ms: u32) {
    #[cfg(feature = "csr")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use wasm_bindgen::{JsCast, closure::Closure};

        let Some(window) = web_sys::window() else {
            return;
        };
        let registry: Rc<RefCell<RippleRegistry<web_sys::Element>>> = Rc::default();

        let click_registry = Rc::clone(&registry);
        let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
            let Some(button) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.closest(".btn").unwrap_or_default())
            else {
                return;
            };
            spawn(&click_registry, &button, &ev, duration_ms);
        });

        let hide_registry = Rc::clone(&registry);
        let on_hide = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            for span in hide_registry.borrow_mut().drain() {
                span.remove();
            }
        });

        for (event, listener) in [
            ("click", on_click.as_ref().unchecked_ref::<js_sys::Function>()),
            ("pagehide", on_hide.as_ref().unchecked_ref::<js_sys::Function>()),
        ] {
            if let Err(err) = window.add_event_listener_with_callback(event, listener) {
                log::warn!("ripple {event} listener not attached: {err:?}");
            }
        }
        on_click.forget();
        on_hide.forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = duration_ms;
    }
}

#[cfg(feature = "csr")]
fn spawn(
    registry: &std::rc::Rc<std::cell::RefCell<RippleRegistry<web_sys::Element>>>,
    button: &web_sys::Element,
    ev: &web_sys::MouseEvent,
    duration_ms: u32,
) {
    let Some(document) = button.owner_document() else {
        return;
    };
    let Ok(span) = document.create_element("span") else {
        return;
    };
    let rect = button.get_bounding_client_rect();
    let geometry = ripple_geometry(
        f64::from(ev.client_x()),
        f64::from(ev.client_y()),
        rect.left(),
        rect.top(),
        rect.width(),
        rect.height(),
    );
    if span.set_attribute("class", "ripple").is_err()
        || span.set_attribute("style", &geometry.style()).is_err()
        || button.append_child(&span).is_err()
    {
        log::debug!("ripple element could not be attached");
        return;
    }

    let id = registry.borrow_mut().next_id();
    registry.borrow_mut().insert(id, span);
    let expiry_registry = std::rc::Rc::clone(registry);
    gloo_timers::callback::Timeout::new(duration_ms, move || {
        if let Some(span) = expiry_registry.borrow_mut().remove(id) {
            span.remove();
        }
    })
    .forget();
}
