//! Contact form validation and the message character counter.

use thiserror::Error;

/// Outcome of checking a single field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    pub message: &'static str,
}

impl Validation {
    const OK: Validation = Validation {
        valid: true,
        message: "",
    };

    const fn fail(message: &'static str) -> Self {
        Self {
            valid: false,
            message,
        }
    }
}

/// Form fields the page validates while typing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// A status line shown above the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub is_error: bool,
}

impl Feedback {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }
}

/// Submit-time failures, worded as the alert the page shows.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Name field cannot be empty!")]
    EmptyName,
    #[error("Email field cannot be empty!")]
    EmptyEmail,
    #[error("Please enter a valid email address!")]
    InvalidEmail,
    #[error("{0}")]
    Message(&'static str),
}

impl FormError {
    /// Field that should receive focus.
    pub fn field(&self) -> Field {
        match self {
            FormError::EmptyName => Field::Name,
            FormError::EmptyEmail | FormError::InvalidEmail => Field::Email,
            FormError::Message(_) => Field::Message,
        }
    }
}

/// Length in UTF-16 code units, the unit browsers count for `maxlength`
/// and string length. Characters outside the Basic Multilingual Plane count
/// as two.
pub fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

pub fn validate_name(name: &str) -> Validation {
    if name.trim().is_empty() {
        return Validation::fail("Name cannot be empty");
    }
    if text_length(name) < 2 {
        return Validation::fail("Name must be at least 2 characters");
    }
    Validation::OK
}

pub fn validate_email(email: &str) -> Validation {
    if email.trim().is_empty() {
        return Validation::fail("Email cannot be empty");
    }
    if !is_email(email) {
        return Validation::fail("Please enter a valid email address");
    }
    Validation::OK
}

pub fn validate_message(message: &str) -> Validation {
    if message.trim().is_empty() {
        return Validation::fail("Message cannot be empty");
    }
    if text_length(message) < 10 {
        return Validation::fail("Message must be at least 10 characters");
    }
    Validation::OK
}

/// Matches `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
pub fn is_email(input: &str) -> bool {
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    let plain = |part: &str| !part.is_empty() && !part.chars().any(|c| c.is_whitespace() || c == '@');
    if !plain(local) || domain.contains('@') || domain.chars().any(char::is_whitespace) {
        return false;
    }
    // Some dot must have non-empty text on both sides.
    domain
        .char_indices()
        .filter(|&(_, c)| c == '.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

/// Feedback after a keystroke in `field`. Nothing is shown for an empty
/// field that has not been typed into.
pub fn keystroke_feedback(field: Field, value: &str) -> Option<Feedback> {
    let (validation, ok_text) = match field {
        Field::Name => (validate_name(value), "Name looks good!"),
        Field::Email => (validate_email(value), "Email looks good!"),
        Field::Message => (validate_message(value), "Message looks good!"),
    };
    if validation.valid {
        Some(Feedback::success(ok_text))
    } else if !value.is_empty() {
        Some(Feedback::error(validation.message))
    } else {
        None
    }
}

/// Contents of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Check required fields and email shape on trimmed input.
    pub fn validate(&self) -> Result<(), FormError> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() {
            return Err(FormError::EmptyName);
        }
        if email.is_empty() {
            return Err(FormError::EmptyEmail);
        }
        if !is_email(email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    /// Validate, then clear the form on success.
    pub fn submit(&mut self) -> Result<Feedback, FormError> {
        self.validate()?;
        let message = validate_message(&self.message);
        if !message.valid {
            return Err(FormError::Message(message.message));
        }
        log::info!("contact form submitted by {}", self.name.trim());
        *self = ContactForm::default();
        Ok(Feedback::success(
            "Form submitted successfully! Thank you for your message.",
        ))
    }
}

/// Urgency of the remaining-characters counter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CounterLevel {
    Normal,
    Warning,
    Critical,
}

/// Remaining characters for a message of `length` against `max`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CharCounter {
    pub remaining: i64,
    pub level: CounterLevel,
}

impl CharCounter {
    pub fn new(length: usize, max: usize) -> Self {
        let remaining = max as i64 - length as i64;
        let level = if remaining < 20 {
            CounterLevel::Critical
        } else if remaining < 50 {
            CounterLevel::Warning
        } else {
            CounterLevel::Normal
        };
        Self { remaining, level }
    }
}
