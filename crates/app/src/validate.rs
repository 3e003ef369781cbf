//! Field-level validation primitives.
//!
//! Every write operation validates its input before any SQL executes and
//! reports failures as a map of field name to messages, which the HTTP layer
//! renders verbatim as the 400 response body.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

/// Validation failures keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A single failure on one field.
    #[must_use]
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_owned()).or_default().push(message.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    #[must_use]
    pub fn into_map(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }

    /// Resolve to the validated value when no failures were recorded.
    ///
    /// # Errors
    ///
    /// Returns the accumulated failures otherwise.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

pub const REQUIRED: &str = "This field is required.";
pub const BLANK: &str = "This field may not be blank.";
pub const INVALID_EMAIL: &str = "Enter a valid email address.";
pub const NOT_UNIQUE: &str = "This field must be unique.";
pub const NEGATIVE: &str = "Ensure this value is greater than or equal to 0.";
pub const NOT_POSITIVE: &str = "Ensure this value is greater than 0.";
pub const BAD_DATETIME: &str = "Datetime has wrong format. Use ISO 8601.";

/// Syntactic email check: one `@`, non-empty local part, dotted domain, no
/// whitespace. Deliverability is not our problem.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let mut labels = domain.split('.');

    domain.contains('.') && labels.all(|label| !label.is_empty())
}

/// Record a failure unless `value` is present and non-blank; passes the
/// trimmed-nonempty string through.
pub fn require_string(errors: &mut FieldErrors, field: &str, value: Option<String>) -> Option<String> {
    match value {
        None => {
            errors.push(field, REQUIRED);
            None
        }
        Some(value) if value.trim().is_empty() => {
            errors.push(field, BLANK);
            None
        }
        Some(value) => Some(value),
    }
}

/// Record a failure unless the amount is present and non-negative.
pub fn require_amount(errors: &mut FieldErrors, field: &str, value: Option<Decimal>) -> Option<Decimal> {
    match value {
        None => {
            errors.push(field, REQUIRED);
            None
        }
        Some(value) => check_amount(errors, field, value),
    }
}

/// Record a failure when a supplied amount is negative.
pub fn check_amount(errors: &mut FieldErrors, field: &str, value: Decimal) -> Option<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        errors.push(field, NEGATIVE);
        None
    } else {
        Some(value)
    }
}
