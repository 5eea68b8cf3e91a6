//! Browser wiring for the scroll reveal engine.
//!
//! Scans the document for reveal-marked elements, observes them with an
//! `IntersectionObserver`, and adds the revealed class once per element after
//! its configured delay. Without `IntersectionObserver`, or when the user
//! prefers reduced motion, everything is revealed immediately.

use crate::config::RevealConfig;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

#[cfg(feature = "csr")]
use crate::state::reveal::{
    REVEAL_DELAY_ATTR, REVEAL_ID_ATTR, REVEAL_SELECTOR, REVEALED_CLASS, RevealEngine, RevealId,
    RevealTask, parse_delay,
};

/// Start observing reveal targets currently in the document.
///
/// Returns the number of tracked elements.
pub fn install(config: &RevealConfig) -> usize {
    #[cfg(feature = "csr")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::warn!("no document; scroll reveal inactive");
            return 0;
        };
        let nodes = match document.query_selector_all(REVEAL_SELECTOR) {
            Ok(nodes) => nodes,
            Err(err) => {
                log::warn!("reveal selector rejected: {err:?}");
                return 0;
            }
        };

        let mut engine = RevealEngine::new();
        let mut elements = Vec::new();
        for i in 0..nodes.length() {
            let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
                continue;
            };
            let id = engine.register(parse_delay(el.get_attribute(REVEAL_DELAY_ATTR).as_deref()));
            if let Err(err) = el.set_attribute(REVEAL_ID_ATTR, &id.0.to_string()) {
                log::debug!("could not tag reveal element: {err:?}");
            }
            elements.push(el);
        }
        let tracked = engine.len();
        if tracked == 0 {
            return 0;
        }

        if crate::util::dom::prefers_reduced_motion() {
            reveal_now(&mut engine, &elements);
            return tracked;
        }

        let engine = Rc::new(RefCell::new(engine));
        let callback_engine = Rc::clone(&engine);
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let Some(id) = target
                        .get_attribute(REVEAL_ID_ATTR)
                        .and_then(|raw| raw.parse::<usize>().ok())
                    else {
                        continue;
                    };
                    let task = callback_engine.borrow_mut().on_intersect(RevealId(id));
                    if let Some(task) = task {
                        observer.unobserve(&target);
                        schedule(target, task);
                    }
                }
            },
        );

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config.threshold));
        init.set_root_margin(&config.root_margin);
        match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                for el in &elements {
                    observer.observe(el);
                }
                // Lives for the page; the observer holds the only reference.
                callback.forget();
            }
            Err(err) => {
                log::warn!("IntersectionObserver unavailable, revealing all: {err:?}");
                reveal_now(&mut engine.borrow_mut(), &elements);
            }
        }
        tracked
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        0
    }
}

#[cfg(feature = "csr")]
fn reveal_now(engine: &mut RevealEngine, elements: &[web_sys::Element]) {
    for task in engine.reveal_all() {
        if let Some(el) = elements.get(task.id.0) {
            schedule(el.clone(), task);
        }
    }
}

#[cfg(feature = "csr")]
fn schedule(el: web_sys::Element, task: RevealTask) {
    let add = move || {
        if let Err(err) = el.class_list().add_1(REVEALED_CLASS) {
            log::debug!("reveal class not applied: {err:?}");
        }
    };
    if task.delay_ms == 0 {
        add();
    } else {
        gloo_timers::callback::Timeout::new(task.delay_ms, add).forget();
    }
}
