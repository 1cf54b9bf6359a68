//! Field validation shared by every entity form.

use serde::Serialize;
use std::collections::BTreeMap;

pub const EMAIL_MAX_LEN: usize = 255;
pub const PHONE_MIN_DIGITS: usize = 7;
pub const PHONE_MAX_DIGITS: usize = 15;

/// Error key used for failures that are not tied to one field, such as a
/// commit that threw.
pub const SUBMIT_FIELD: &str = "submit";

/// Messages keyed by field path (`"email"`, `"address.city"`,
/// `"lines.0.quantity"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Drop the error for a field the user just touched. A stale submit
    /// banner is dropped along with it.
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
        self.0.remove(SUBMIT_FIELD);
    }

    pub fn submit(&self) -> Option<&str> {
        self.get(SUBMIT_FIELD)
    }

    pub fn set_submit(&mut self, message: impl Into<String>) {
        self.insert(SUBMIT_FIELD, message);
    }

    /// Record "{label} is required" when `value` is blank.
    pub fn require(&mut self, field: &str, value: &str, label: &str) {
        if value.trim().is_empty() {
            self.insert(field, format!("{label} is required"));
        }
    }

    /// Check an optional email field. Blank values are allowed.
    pub fn check_email(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            return;
        }
        if let Some(message) = validate_email(value).error_message() {
            self.insert(field, message);
        }
    }

    /// Check an optional phone field. Blank values are allowed.
    pub fn check_phone(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            return;
        }
        if let Some(message) = validate_phone(value).error_message() {
            self.insert(field, message);
        }
    }
}

/// Validation result for email addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailValidation {
    Valid,
    Empty,
    TooLong,
    MissingAt,
    InvalidLocalPart,
    InvalidDomain,
}

impl EmailValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Empty => Some("Email is required"),
            Self::TooLong => Some("Email must be at most 255 characters"),
            Self::MissingAt | Self::InvalidLocalPart | Self::InvalidDomain => {
                Some("Please enter a valid email address")
            }
        }
    }
}

/// Validate an email address.
///
/// Rules:
/// - exactly one `@`
/// - non-empty local part without whitespace
/// - domain of at least two dot-separated labels; labels are ASCII
///   letters, digits and inner hyphens
pub fn validate_email(email: &str) -> EmailValidation {
    let email = email.trim();
    if email.is_empty() {
        return EmailValidation::Empty;
    }
    if email.len() > EMAIL_MAX_LEN {
        return EmailValidation::TooLong;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return EmailValidation::MissingAt;
    };

    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return EmailValidation::InvalidLocalPart;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return EmailValidation::InvalidDomain;
    }
    let valid_label = |label: &&str| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    };
    if !labels.iter().all(valid_label) {
        return EmailValidation::InvalidDomain;
    }

    EmailValidation::Valid
}

/// Validation result for E.164 phone numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneValidation {
    Valid,
    Empty,
    MissingPlus,
    InvalidDigits,
    WrongLength,
}

impl PhoneValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Empty => Some("Phone number is required"),
            Self::MissingPlus => Some(
                "Phone number must be in international format, e.g. +442079460958",
            ),
            Self::InvalidDigits => {
                Some("Phone number can only contain digits after the +")
            }
            Self::WrongLength => {
                Some("Phone number must have between 7 and 15 digits")
            }
        }
    }
}

/// Validate a phone number in E.164 form: `+`, a non-zero digit, then
/// digits only, 7-15 digits in total.
pub fn validate_phone(phone: &str) -> PhoneValidation {
    if phone.is_empty() {
        return PhoneValidation::Empty;
    }
    let Some(digits) = phone.strip_prefix('+') else {
        return PhoneValidation::MissingPlus;
    };
    if digits.starts_with('0') || !digits.chars().all(|c| c.is_ascii_digit())
    {
        return PhoneValidation::InvalidDigits;
    }
    if !(PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits.len()) {
        return PhoneValidation::WrongLength;
    }
    PhoneValidation::Valid
}

/// Rewrite a phone number as typed by a user into E.164.
///
/// Separators (spaces, dashes, dots, parentheses) are dropped. An
/// international `00` prefix becomes `+`. A national number gets the
/// default country code, replacing its trunk `0`. Returns `None` when the
/// result is still not a valid E.164 number.
pub fn normalize_phone(input: &str, default_country_code: &str) -> Option<String> {
    let mut compact = String::with_capacity(input.len());
    for (i, c) in input.trim().chars().enumerate() {
        match c {
            '0'..='9' => compact.push(c),
            '+' if i == 0 => compact.push(c),
            ' ' | '-' | '.' | '(' | ')' => {}
            _ => return None,
        }
    }

    let country_code = default_country_code.trim().trim_start_matches('+');
    let candidate = if compact.starts_with('+') {
        compact
    } else if let Some(rest) = compact.strip_prefix("00") {
        format!("+{rest}")
    } else if let Some(rest) = compact.strip_prefix('0') {
        format!("+{country_code}{rest}")
    } else {
        format!("+{country_code}{compact}")
    };

    validate_phone(&candidate).is_valid().then_some(candidate)
}
