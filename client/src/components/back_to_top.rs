//! Floating button that returns to the top of the page.

use leptos::prelude::*;

use crate::state::nav::NavState;

#[component]
pub fn BackToTop() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let visible = Memo::new(move |_| nav.with(NavState::shows_back_to_top));

    view! {
        <button
            class="back-to-top"
            class:visible=move || visible.get()
            aria-label="Back to top"
            aria-hidden=move || (!visible.get()).to_string()
            tabindex=move || if visible.get() { "0" } else { "-1" }
            on:click=move |_| crate::util::dom::scroll_to(0.0)
        >
            "↑"
        </button>
    }
}
