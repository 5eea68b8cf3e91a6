//! Contact form validation and submission state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The contact section renders one input per field and reads error text and
//! submission status from `ContactForm`. Validation is synchronous; the
//! submission itself is handed to an injected `ContactSubmitter` and its
//! eventual outcome is fed back through `finish_submit`.
//!
//! DESIGN
//! ======
//! Rules run in declared order and stop at the first failure. Input events
//! only clear the field's error; re-validation happens on blur and submit so
//! users are not scolded mid-keystroke.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::submit::{ContactMessage, SubmitError};

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_SUBJECT: &str = "subject";
pub const FIELD_MESSAGE: &str = "message";
pub const MESSAGE_MAX_CHARS: usize = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    Required,
    Email,
    MinLength(usize),
    MaxLength(usize),
}

impl Rule {
    /// User-facing message shown when this rule fails.
    pub fn message(self) -> String {
        match self {
            Self::Required => "This field is required.".to_owned(),
            Self::Email => "Please enter a valid email address.".to_owned(),
            Self::MinLength(n) => format!("Must be at least {n} characters."),
            Self::MaxLength(n) => format!("Must be at most {n} characters."),
        }
    }

    /// Check `value`. Rules other than `Required` pass on empty input.
    pub fn check(self, value: &str) -> Result<(), String> {
        let trimmed = value.trim();
        let ok = match self {
            Self::Required => !trimmed.is_empty(),
            _ if trimmed.is_empty() => true,
            Self::Email => is_valid_email(trimmed),
            Self::MinLength(n) => trimmed.chars().count() >= n,
            Self::MaxLength(n) => trimmed.chars().count() <= n,
        };
        if ok { Ok(()) } else { Err(self.message()) }
    }
}

/// `local@domain.tld` with no whitespace and non-empty dot-separated labels.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || !domain.contains('.') {
        return false;
    }
    domain.split('.').all(|label| !label.is_empty())
}

/// Run `rules` in order, returning the first failure.
pub fn first_error(rules: &[Rule], value: &str) -> Option<String> {
    rules.iter().find_map(|rule| rule.check(value).err())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFieldState {
    pub name: String,
    pub value: String,
    pub error: Option<String>,
    /// Set once the field has been validated at least once.
    pub touched: bool,
}

#[derive(Clone, Debug)]
struct Field {
    rules: Vec<Rule>,
    state: FormFieldState,
}

/// Ordered set of fields with per-field rule lists.
#[derive(Clone, Debug, Default)]
pub struct FormValidator {
    fields: Vec<Field>,
}

impl FormValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field; declaration order is focus order.
    #[must_use]
    pub fn field(mut self, name: &str, rules: &[Rule]) -> Self {
        self.fields.push(Field {
            rules: rules.to_vec(),
            state: FormFieldState {
                name: name.to_owned(),
                ..FormFieldState::default()
            },
        });
        self
    }

    fn find(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.state.name == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.state.name == name)
    }

    pub fn state(&self, name: &str) -> Option<&FormFieldState> {
        self.find(name).map(|f| &f.state)
    }

    pub fn value(&self, name: &str) -> &str {
        self.find(name).map_or("", |f| f.state.value.as_str())
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.find(name).and_then(|f| f.state.error.as_deref())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.state.name.as_str())
    }

    /// Record new input and clear the field's error. Returns `true` when an
    /// error was cleared. Unknown fields are ignored.
    pub fn on_input(&mut self, name: &str, value: &str) -> bool {
        let Some(field) = self.find_mut(name) else {
            log::warn!("input for unregistered field {name:?}");
            return false;
        };
        field.state.value = value.to_owned();
        field.state.error.take().is_some()
    }

    /// Validate one field (blur). Returns `true` when valid.
    pub fn validate_field(&mut self, name: &str) -> bool {
        let Some(field) = self.find_mut(name) else {
            return true;
        };
        field.state.touched = true;
        field.state.error = first_error(&field.rules, &field.state.value);
        field.state.error.is_none()
    }

    /// Validate every field so all errors render; `Err` carries the first
    /// invalid field in declaration order.
    pub fn validate_all(&mut self) -> Result<(), String> {
        let mut first_invalid = None;
        for field in &mut self.fields {
            field.state.touched = true;
            field.state.error = first_error(&field.rules, &field.state.value);
            if field.state.error.is_some() && first_invalid.is_none() {
                first_invalid = Some(field.state.name.clone());
            }
        }
        first_invalid.map_or(Ok(()), Err)
    }

    pub fn is_valid(&self) -> bool {
        self.fields
            .iter()
            .all(|f| first_error(&f.rules, &f.state.value).is_none())
    }

    /// Clear values, errors, and touched flags.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.state = FormFieldState {
                name: std::mem::take(&mut field.state.name),
                ..FormFieldState::default()
            };
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejection {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("field {first_invalid:?} is invalid")]
    Invalid { first_invalid: String },
}

/// The contact form: four validated fields plus submission status.
#[derive(Clone, Debug)]
pub struct ContactForm {
    validator: FormValidator,
    status: SubmitStatus,
    /// Bumped on every finished submission so a stale dismiss timer cannot
    /// hide a newer banner.
    banner_seq: u64,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        let validator = FormValidator::new()
            .field(FIELD_NAME, &[Rule::Required, Rule::MinLength(2)])
            .field(FIELD_EMAIL, &[Rule::Required, Rule::Email])
            .field(FIELD_SUBJECT, &[Rule::Required, Rule::MinLength(3)])
            .field(
                FIELD_MESSAGE,
                &[Rule::Required, Rule::MinLength(10), Rule::MaxLength(MESSAGE_MAX_CHARS)],
            );
        Self {
            validator,
            status: SubmitStatus::Idle,
            banner_seq: 0,
        }
    }

    pub fn validator(&self) -> &FormValidator {
        &self.validator
    }

    pub fn validator_mut(&mut self) -> &mut FormValidator {
        &mut self.validator
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Characters typed into the message field, for the counter.
    pub fn message_chars(&self) -> usize {
        self.validator.value(FIELD_MESSAGE).chars().count()
    }

    /// Validate and enter `Submitting`. The returned message is what the
    /// submitter receives.
    ///
    /// # Errors
    ///
    /// Rejects while a submission is in flight, or with the first invalid
    /// field so focus can move there.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, SubmitRejection> {
        if self.is_submitting() {
            return Err(SubmitRejection::InFlight);
        }
        self.validator
            .validate_all()
            .map_err(|first_invalid| SubmitRejection::Invalid { first_invalid })?;
        self.status = SubmitStatus::Submitting;
        let v = &self.validator;
        Ok(ContactMessage {
            name: v.value(FIELD_NAME).trim().to_owned(),
            email: v.value(FIELD_EMAIL).trim().to_owned(),
            subject: v.value(FIELD_SUBJECT).trim().to_owned(),
            message: v.value(FIELD_MESSAGE).trim().to_owned(),
        })
    }

    /// Record the submitter's outcome. Success clears the fields; failure
    /// keeps them so the user can retry. Returns the banner sequence to pass
    /// to [`Self::dismiss_banner`].
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) -> u64 {
        self.banner_seq += 1;
        match outcome {
            Ok(()) => {
                self.validator.reset();
                self.status = SubmitStatus::Succeeded;
            }
            Err(err) => {
                log::warn!("contact submission failed: {err}");
                self.status = SubmitStatus::Failed(err.user_message());
            }
        }
        self.banner_seq
    }

    /// Hide the banner shown by submission `seq`. Returns `true` when hidden.
    pub fn dismiss_banner(&mut self, seq: u64) -> bool {
        if seq == self.banner_seq && matches!(self.status, SubmitStatus::Succeeded | SubmitStatus::Failed(_)) {
            self.status = SubmitStatus::Idle;
            return true;
        }
        false
    }
}
