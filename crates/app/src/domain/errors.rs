//! Service errors shared by every entity.

use sqlx::error::{DatabaseError, ErrorKind};
use thiserror::Error;

use crate::validate::{FieldErrors, NOT_UNIQUE};

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input rejected before or during the write; carries the per-field
    /// messages the API returns as the 400 body.
    #[error("validation failed")]
    Validation(FieldErrors),

    #[error("record not found")]
    NotFound,

    #[error("storage error")]
    Sql(#[source] sqlx::Error),
}

impl From<sqlx::Error> for ServiceError {
    fn from(error: sqlx::Error) -> Self {
        if matches!(error, sqlx::Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::Sql(error)
    }
}

impl From<FieldErrors> for ServiceError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

/// Re-key a unique-constraint violation onto the entity's unique field.
///
/// The database is the sole authority on uniqueness; this keeps duplicate
/// `email`/`sku`/`number` rows surfacing as field-level conflicts instead of
/// storage errors.
#[must_use]
pub fn unique_violation(error: sqlx::Error, field: &str) -> ServiceError {
    match error.as_database_error().map(DatabaseError::kind) {
        Some(ErrorKind::UniqueViolation) => {
            ServiceError::Validation(FieldErrors::single(field, NOT_UNIQUE))
        }
        _ => ServiceError::from(error),
    }
}

/// A dangling reference, reported as a validation error on the reference
/// field. Also used when the store's foreign-key enforcement catches a row
/// deleted concurrently with the write.
#[must_use]
pub fn missing_reference(field: &str) -> ServiceError {
    ServiceError::Validation(FieldErrors::single(
        field,
        format!("Referenced {field} does not exist."),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let error = ServiceError::from(sqlx::Error::RowNotFound);

        assert!(matches!(error, ServiceError::NotFound));
    }

    #[test]
    fn field_errors_map_to_validation() {
        let error = ServiceError::from(FieldErrors::single("email", NOT_UNIQUE));

        let ServiceError::Validation(errors) = error else {
            panic!("expected Validation");
        };

        assert!(errors.contains("email"));
    }

    #[test]
    fn unique_violation_passes_other_errors_through() {
        let error = unique_violation(sqlx::Error::RowNotFound, "email");

        assert!(matches!(error, ServiceError::NotFound));
    }
}
