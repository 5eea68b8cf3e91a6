//! Contact section: details sidebar and the validated message form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Field state lives in the shared `RwSignal<ContactForm>`. Blur validates a
//! single field, typing clears that field's error, and submit validates all
//! fields before handing the message to the injected [`ContactSubmitter`].
//!
//! DESIGN
//! ======
//! The submit handler is the only place that awaits. It never holds a borrow
//! of form state across the await; the outcome is written back with
//! `try_update` so a disposed form is simply skipped.
//!
//! [`ContactSubmitter`]: crate::net::submit::ContactSubmitter

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use crate::app::SubmitterHandle;
use crate::content::SiteContent;
use crate::state::form::{
    ContactForm, FIELD_EMAIL, FIELD_MESSAGE, FIELD_NAME, FIELD_SUBJECT, MESSAGE_MAX_CHARS, SubmitRejection,
    SubmitStatus,
};

pub const SUCCESS_MESSAGE: &str = "Thanks! Your message has been sent. I'll get back to you soon.";

/// Banner text and CSS modifier for a finished submission.
pub fn banner_for(status: &SubmitStatus) -> Option<(&'static str, String)> {
    match status {
        SubmitStatus::Succeeded => Some(("success", SUCCESS_MESSAGE.to_owned())),
        SubmitStatus::Failed(message) => Some(("error", message.clone())),
        SubmitStatus::Idle | SubmitStatus::Submitting => None,
    }
}

#[component]
fn Field(
    name: &'static str,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] multiline: bool,
    #[prop(optional)] autocomplete: Option<&'static str>,
) -> impl IntoView {
    let form = expect_context::<RwSignal<ContactForm>>();

    let value = move || form.with(|f| f.validator().value(name).to_owned());
    let error = move || form.with(|f| f.validator().error(name).map(str::to_owned));
    let has_error = move || form.with(|f| f.validator().error(name).is_some());

    let on_input = move |ev: leptos::ev::Event| {
        let next = event_target_value(&ev);
        form.update(|f| {
            f.validator_mut().on_input(name, &next);
        });
    };
    let on_blur = move |_: leptos::ev::FocusEvent| {
        form.update(|f| {
            f.validator_mut().validate_field(name);
        });
    };

    let id = format!("contact-{name}");
    let error_id = format!("contact-{name}-error");
    let control = if multiline {
        view! {
            <textarea
                id=id.clone()
                name=name
                rows="6"
                class="form__control"
                aria-invalid=move || has_error().to_string()
                aria-describedby=error_id.clone()
                prop:value=value
                on:input=on_input
                on:blur=on_blur
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id.clone()
                name=name
                type=kind
                autocomplete=autocomplete
                class="form__control"
                aria-invalid=move || has_error().to_string()
                aria-describedby=error_id.clone()
                prop:value=value
                on:input=on_input
                on:blur=on_blur
            />
        }
        .into_any()
    };

    view! {
        <div class="form__group" class:has-error=has_error>
            <label for=id>{label}</label>
            {control}
            <p id=error_id class="form__error" role="alert">
                {move || error().unwrap_or_default()}
            </p>
        </div>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let form = expect_context::<RwSignal<ContactForm>>();
    let submitter = expect_context::<SubmitterHandle>();
    let content = expect_context::<StoredValue<SiteContent>>();
    let (info, dismiss_ms) = content.with_value(|c| (c.contact.clone(), c.config.contact.banner_dismiss_ms));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(attempt) = form.try_update(ContactForm::begin_submit) else {
            return;
        };
        match attempt {
            Err(SubmitRejection::InFlight) => log::debug!("contact submit ignored while in flight"),
            Err(SubmitRejection::Invalid { first_invalid }) => crate::util::dom::focus_field(&first_invalid),
            Ok(message) => {
                let pending = submitter.0.with_value(|s| s.submit(message));
                #[cfg(feature = "csr")]
                leptos::task::spawn_local(async move {
                    let outcome = pending.await;
                    let Some(seq) = form.try_update(|f| f.finish_submit(outcome)) else {
                        return;
                    };
                    gloo_timers::future::TimeoutFuture::new(dismiss_ms).await;
                    form.try_update(|f| f.dismiss_banner(seq));
                });
                #[cfg(not(feature = "csr"))]
                {
                    let _ = (pending, dismiss_ms);
                }
            }
        }
    };

    let submitting = Memo::new(move |_| form.with(ContactForm::is_submitting));
    let banner = Memo::new(move |_| form.with(|f| banner_for(f.status())));
    let chars = move || form.with(ContactForm::message_chars);
    let over_limit = move || chars() > MESSAGE_MAX_CHARS;

    let socials = info
        .socials
        .into_iter()
        .map(|link| {
            view! {
                <li>
                    <a href=link.url target="_blank" rel="noopener">
                        {link.label}
                    </a>
                </li>
            }
        })
        .collect_view();
    let mailto = format!("mailto:{}", info.email);

    view! {
        <section id="contact" class="section contact">
            <h2 class="section__title reveal">"Get in touch"</h2>
            <div class="contact__grid">
                <aside class="contact__info reveal-left">
                    <p>
                        <a href=mailto>{info.email}</a>
                    </p>
                    <p>{info.location}</p>
                    <ul class="contact__socials">{socials}</ul>
                </aside>
                <form id="contact-form" class="form reveal-right" novalidate on:submit=on_submit>
                    <Field name=FIELD_NAME label="Name" autocomplete="name"/>
                    <Field name=FIELD_EMAIL label="Email" kind="email" autocomplete="email"/>
                    <Field name=FIELD_SUBJECT label="Subject"/>
                    <Field name=FIELD_MESSAGE label="Message" multiline=true/>
                    <p
                        class="form__counter"
                        class:over-limit=over_limit
                        aria-live="polite"
                    >
                        {move || format!("{} / {MESSAGE_MAX_CHARS}", chars())}
                    </p>
                    <button
                        type="submit"
                        class="btn btn--primary form__submit"
                        class:loading=move || submitting.get()
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Sending..." } else { "Send message" }}
                    </button>
                    {move || {
                        banner
                            .get()
                            .map(|(kind, text)| {
                                let class = format!("form__banner form__banner--{kind}");
                                view! {
                                    <div class=class role="status">
                                        {text}
                                    </div>
                                }
                            })
                    }}
                </form>
            </div>
        </section>
    }
}
