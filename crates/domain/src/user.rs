//! User: owner of places.

use serde::{Deserialize, Serialize};

use crate::error::{HbnbError, ValidationError};
use crate::id::UserId;
use crate::record::Record;
use crate::time::{Timestamp, now};

/// A registered user. Credentials are handled outside this service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Create a builder for constructing a [`User`].
    #[must_use]
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }
}

impl Record for User {
    type Id = UserId;

    const KIND: &'static str = "User";

    fn id(&self) -> UserId {
        self.id
    }

    fn validate(&self) -> Result<(), HbnbError> {
        if self.email.is_empty() {
            return Err(ValidationError::EmptyField("email").into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`User`].
#[derive(Debug, Default)]
pub struct UserBuilder {
    id: Option<UserId>,
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl UserBuilder {
    #[must_use]
    pub fn id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Consume the builder, validate, and return a [`User`].
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if `email` is missing or empty.
    pub fn build(self) -> Result<User, HbnbError> {
        let ts = now();
        let user = User {
            id: self.id.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            first_name: self.first_name,
            last_name: self.last_name,
            created_at: ts,
            updated_at: ts,
        };
        user.validate()?;
        Ok(user)
    }
}
