//! Amenity: a feature a place can offer (wifi, pool, …).

use serde::{Deserialize, Serialize};

use crate::error::{HbnbError, ValidationError};
use crate::id::AmenityId;
use crate::record::Record;
use crate::time::{Timestamp, now};

/// A named feature that places link to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    pub id: AmenityId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Amenity {
    /// Create a new amenity named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, HbnbError> {
        let ts = now();
        let amenity = Self {
            id: AmenityId::new(),
            name: name.into(),
            created_at: ts,
            updated_at: ts,
        };
        amenity.validate()?;
        Ok(amenity)
    }
}

impl Record for Amenity {
    type Id = AmenityId;

    const KIND: &'static str = "Amenity";

    fn id(&self) -> AmenityId {
        self.id
    }

    fn validate(&self) -> Result<(), HbnbError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyField("name").into());
        }
        Ok(())
    }
}
