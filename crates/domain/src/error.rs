//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HbnbError`]
//! via `#[from]` / `From` impls. No `String` catch-all variants at the top.

use crate::record::Record;

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum HbnbError {
    /// Input rejected before touching storage.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A referenced record does not exist.
    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    /// The storage backend failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Malformed or incomplete input.
///
/// The `Display` output is the message sent back to API clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The request body is missing or is not JSON.
    #[error("Not a JSON")]
    NotJson,

    /// A required field is absent.
    #[error("Missing {0}")]
    MissingField(&'static str),

    /// A required field is present but empty.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// A recognised field carries a value of the wrong type.
    #[error("Invalid value for {field}: expected {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

impl NotFoundError {
    /// Build the error for a missing record of type `T`.
    #[must_use]
    pub fn of<T: Record>(id: T::Id) -> Self {
        Self {
            entity: T::KIND,
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::PlaceId;
    use crate::place::Place;

    #[test]
    fn should_render_client_messages() {
        assert_eq!(ValidationError::NotJson.to_string(), "Not a JSON");
        assert_eq!(
            ValidationError::MissingField("user_id").to_string(),
            "Missing user_id"
        );
        assert_eq!(
            ValidationError::InvalidField {
                field: "max_guest",
                expected: "a non-negative integer",
            }
            .to_string(),
            "Invalid value for max_guest: expected a non-negative integer"
        );
    }

    #[test]
    fn should_name_record_kind_in_not_found() {
        let id = PlaceId::new();
        let err = NotFoundError::of::<Place>(id);
        assert_eq!(err.entity, "Place");
        assert_eq!(err.id, id.to_string());
    }

    #[test]
    fn should_convert_validation_error_into_hbnb_error() {
        let err: HbnbError = ValidationError::MissingField("name").into();
        assert!(matches!(
            err,
            HbnbError::Validation(ValidationError::MissingField("name"))
        ));
    }
}
