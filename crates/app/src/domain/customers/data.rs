//! Customer input data.

use crate::validate::{FieldErrors, INVALID_EMAIL, is_valid_email, require_string};

/// Raw customer input, straight off the wire. Field presence is part of the
/// payload, so everything is optional until validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerDraft {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Validated data for a create or full update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
}

/// Validated data for a partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<NewCustomer> for CustomerPatch {
    fn from(new: NewCustomer) -> Self {
        Self {
            name: Some(new.name),
            email: Some(new.email),
        }
    }
}

impl CustomerDraft {
    /// Validate all writable fields for a create or full update.
    ///
    /// # Errors
    ///
    /// Returns per-field messages for missing, blank, or malformed fields.
    pub fn into_new(self) -> Result<NewCustomer, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = require_string(&mut errors, "name", self.name);
        let email = require_string(&mut errors, "email", self.email).and_then(|email| {
            if is_valid_email(&email) {
                Some(email)
            } else {
                errors.push("email", INVALID_EMAIL);
                None
            }
        });

        match (name, email) {
            (Some(name), Some(email)) => errors.into_result(NewCustomer { name, email }),
            _ => Err(errors),
        }
    }

    /// Validate only the supplied fields for a partial update.
    ///
    /// # Errors
    ///
    /// Returns per-field messages for blank or malformed supplied fields.
    pub fn into_patch(self) -> Result<CustomerPatch, FieldErrors> {
        let mut errors = FieldErrors::new();

        let mut patch = CustomerPatch::default();

        if let Some(name) = self.name {
            patch.name = require_string(&mut errors, "name", Some(name));
        }

        if let Some(email) = self.email {
            patch.email = require_string(&mut errors, "email", Some(email)).and_then(|email| {
                if is_valid_email(&email) {
                    Some(email)
                } else {
                    errors.push("email", INVALID_EMAIL);
                    None
                }
            });
        }

        errors.into_result(patch)
    }
}
