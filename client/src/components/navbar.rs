//! Fixed header with section links, the theme toggle, and the mobile drawer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar is the only writer of scroll-derived navigation state. A
//! throttled window scroll listener feeds [`NavState::update_scroll`]; link
//! clicks, the hamburger, Escape, outside clicks, and resizes feed the drawer
//! state machine.
//!
//! TRADE-OFFS
//! ==========
//! Section tops are re-measured on every evaluated scroll rather than cached,
//! so content that reflows (fonts, images) never leaves a stale highlight.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::content::SiteContent;
use crate::state::nav::{DrawerEvent, NavState};
#[cfg(feature = "csr")]
use crate::util::dom;

/// Body class that locks page scroll while the drawer is open.
pub const NAV_OPEN_CLASS: &str = "nav-open";

/// Measure the page and push the result into navigation state.
#[cfg(feature = "csr")]
fn refresh_scroll(nav: RwSignal<NavState>) {
    let metrics = dom::scroll_metrics();
    let tops = nav.with_untracked(|n| dom::section_tops(n.sections().iter().map(|s| s.id.as_str())));
    nav.maybe_update(|n| {
        let update = n.update_scroll(&tops, metrics);
        if let Some(change) = update.active {
            log::debug!("active section {:?} -> {:?}", change.previous, change.current);
        }
        !update.is_empty()
    });
}

#[cfg(feature = "csr")]
fn install_scroll_tracking(nav: RwSignal<NavState>, throttle_ms: u32) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::util::throttle::{Throttle, ThrottleDecision};

    let throttle = Rc::new(RefCell::new(Throttle::new(f64::from(throttle_ms))));
    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        let decision = throttle.borrow_mut().offer(dom::now_ms());
        match decision {
            ThrottleDecision::Run => refresh_scroll(nav),
            ThrottleDecision::Defer { delay_ms } => {
                let trailing = Rc::clone(&throttle);
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let delay = delay_ms.ceil() as u32;
                gloo_timers::callback::Timeout::new(delay, move || {
                    trailing.borrow_mut().complete_trailing(dom::now_ms());
                    refresh_scroll(nav);
                })
                .forget();
            }
            ThrottleDecision::Skip => {}
        }
    });
    on_cleanup(move || handle.remove());

    // Initial evaluation once sections are in the document.
    Effect::new(move || refresh_scroll(nav));
}

#[cfg(feature = "csr")]
fn install_drawer_listeners(nav: RwSignal<NavState>) {
    let drawer = move |event: DrawerEvent| {
        nav.maybe_update(|n| n.handle_drawer(event));
    };

    // Clicks inside the nav and on the toggle stop propagation, so anything
    // reaching the window is outside.
    let click = window_event_listener(leptos::ev::click, move |_| drawer(DrawerEvent::OutsideClick));
    let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            drawer(DrawerEvent::Escape);
        }
    });
    let resize = window_event_listener(leptos::ev::resize, move |_| {
        if let Some(width) = dom::viewport_width() {
            drawer(DrawerEvent::Resized { width });
        }
    });
    on_cleanup(move || {
        click.remove();
        keydown.remove();
        resize.remove();
    });

    Effect::new(move || {
        let open = nav.with(NavState::is_drawer_open);
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        if let Some(body) = body {
            let classes = body.class_list();
            let result = if open {
                classes.add_1(NAV_OPEN_CLASS)
            } else {
                classes.remove_1(NAV_OPEN_CLASS)
            };
            if let Err(err) = result {
                log::debug!("body class update failed: {err:?}");
            }
        }
    });
}

/// Scroll smoothly to section `id`, landing below the fixed header.
pub fn scroll_to_section(nav: RwSignal<NavState>, id: &str) {
    #[cfg(feature = "csr")]
    {
        match dom::element_top(id) {
            Some(top) => dom::scroll_to(nav.with_untracked(|n| n.scroll_target(top))),
            None => log::warn!("anchor target #{id} not found"),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (nav, id);
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let content = expect_context::<StoredValue<SiteContent>>();

    let (brand, throttle_ms) = content.with_value(|c| (c.profile.initials(), c.config.nav.scroll_throttle_ms));
    let sections = nav.with_untracked(|n| n.sections().to_vec());

    #[cfg(feature = "csr")]
    {
        install_scroll_tracking(nav, throttle_ms);
        install_drawer_listeners(nav);
    }
    #[cfg(not(feature = "csr"))]
    let _ = throttle_ms;

    let drawer_open = Memo::new(move |_| nav.with(NavState::is_drawer_open));
    let scrolled = Memo::new(move |_| nav.with(NavState::is_scrolled));
    let active_id = Memo::new(move |_| nav.with(|n| n.active().map(|s| s.id.clone())));

    let on_toggle = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        nav.maybe_update(|n| n.handle_drawer(DrawerEvent::Toggle));
    };

    let links = sections
        .into_iter()
        .map(|section| {
            let id = section.id.clone();
            let href = section.href();
            let is_active = {
                let id = id.clone();
                move || active_id.get().as_deref() == Some(id.as_str())
            };
            let on_click = move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                nav.maybe_update(|n| n.handle_drawer(DrawerEvent::LinkClicked));
                scroll_to_section(nav, &id);
            };
            view! {
                <li>
                    <a
                        href=href
                        class="nav__link"
                        class:active=is_active.clone()
                        aria-current=move || is_active().then_some("true")
                        on:click=on_click
                    >
                        {section.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <header id="navbar" class="header" class:scrolled=move || scrolled.get()>
            <nav class="nav" on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()>
                <a
                    href="#home"
                    class="nav__brand"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        scroll_to_section(nav, "home");
                    }
                >
                    {brand}
                </a>
                <ul class="nav__menu" class:open=move || drawer_open.get() id="nav-menu">
                    {links}
                </ul>
                <div class="nav__actions">
                    <ThemeToggle/>
                    <button
                        class="nav__toggle"
                        class:open=move || drawer_open.get()
                        aria-label="Toggle navigation"
                        aria-controls="nav-menu"
                        aria-expanded=move || drawer_open.get().to_string()
                        on:click=on_toggle
                    >
                        <span class="nav__toggle-bar"></span>
                        <span class="nav__toggle-bar"></span>
                        <span class="nav__toggle-bar"></span>
                    </button>
                </div>
            </nav>
        </header>
    }
}
