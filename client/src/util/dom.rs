//! Small read/scroll helpers over the live window.
//!
//! Requires a browser environment; native builds return neutral values
//! (zero offsets, unknown sections) so callers need no cfg of their own.

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

use crate::state::nav::ScrollMetrics;

/// Milliseconds since the epoch from the browser clock.
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Current calendar year for the footer.
pub fn current_year() -> u32 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::new_0().get_full_year()
    }
    #[cfg(not(feature = "csr"))]
    {
        2026
    }
}

/// Vertical scroll offset and page geometry.
pub fn scroll_metrics() -> ScrollMetrics {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return ScrollMetrics::default();
        };
        let offset = window.scroll_y().unwrap_or(0.0);
        let viewport_height = window
            .inner_height()
            .map_or(0.0, |v| v.as_f64().unwrap_or(0.0));
        let document_height = window
            .document()
            .and_then(|d| d.document_element())
            .map_or(f64::INFINITY, |el| f64::from(el.scroll_height()));
        ScrollMetrics {
            offset,
            viewport_height,
            document_height,
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        ScrollMetrics::default()
    }
}

/// Inner viewport width in CSS pixels.
pub fn viewport_width() -> Option<f64> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()?.inner_width().map_or(None, |v| v.as_f64())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Document-relative top of the element with `id`, if present.
pub fn element_top(id: &str) -> Option<f64> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        let el = window.document()?.get_element_by_id(id)?;
        Some(el.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        None
    }
}

/// Tops for `ids` in order; missing elements map to `f64::INFINITY`.
pub fn section_tops<'a>(ids: impl IntoIterator<Item = &'a str>) -> Vec<f64> {
    ids.into_iter()
        .map(|id| {
            element_top(id).unwrap_or_else(|| {
                log::debug!("section #{id} not in document");
                f64::INFINITY
            })
        })
        .collect()
}

/// Smoothly scroll the window to `top`.
pub fn scroll_to(top: f64) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(if prefers_reduced_motion() {
            web_sys::ScrollBehavior::Auto
        } else {
            web_sys::ScrollBehavior::Smooth
        });
        window.scroll_to_with_scroll_to_options(&opts);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = top;
    }
}

/// Whether the user asked the OS to minimise motion.
pub fn prefers_reduced_motion() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").unwrap_or_default())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Move keyboard focus to the contact form control named `name`.
pub fn focus_field(name: &str) {
    #[cfg(feature = "csr")]
    {
        let selector = format!("#contact-form [name=\"{name}\"]");
        let el = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&selector).unwrap_or_default())
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        match el {
            Some(el) => {
                if let Err(err) = el.focus() {
                    log::debug!("focus on {name} failed: {err:?}");
                }
            }
            None => log::warn!("contact field {name:?} missing from document"),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = name;
    }
}
