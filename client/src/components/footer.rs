//! Page footer with socials and the current year.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

use crate::content::SiteContent;

pub fn copyright(name: &str, year: u32) -> String {
    format!("© {year} {name}. All rights reserved.")
}

#[component]
pub fn Footer() -> impl IntoView {
    let content = expect_context::<StoredValue<SiteContent>>();
    let (name, socials) = content.with_value(|c| (c.profile.name.clone(), c.contact.socials.clone()));
    let year = crate::util::dom::current_year();

    let links = socials
        .into_iter()
        .map(|link| {
            view! {
                <a href=link.url class="footer__link" target="_blank" rel="noopener">
                    {link.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <footer class="footer">
            <div class="footer__links">{links}</div>
            <p class="footer__copy">{copyright(&name, year)}</p>
        </footer>
    }
}
