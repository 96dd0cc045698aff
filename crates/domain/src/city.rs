//! City: belongs to a state and owns places.

use serde::{Deserialize, Serialize};

use crate::error::{HbnbError, ValidationError};
use crate::id::{CityId, StateId};
use crate::record::Record;
use crate::time::{Timestamp, now};

/// A city inside a [`State`](crate::state::State).
///
/// Places of a city are not stored on the city itself; they are looked up by
/// `city_id` through the place repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub state_id: StateId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl City {
    /// Create a builder for constructing a [`City`].
    #[must_use]
    pub fn builder() -> CityBuilder {
        CityBuilder::default()
    }
}

impl Record for City {
    type Id = CityId;

    const KIND: &'static str = "City";

    fn id(&self) -> CityId {
        self.id
    }

    fn validate(&self) -> Result<(), HbnbError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyField("name").into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`City`].
#[derive(Debug, Default)]
pub struct CityBuilder {
    id: Option<CityId>,
    state_id: Option<StateId>,
    name: Option<String>,
}

impl CityBuilder {
    #[must_use]
    pub fn id(mut self, id: CityId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn state_id(mut self, state_id: StateId) -> Self {
        self.state_id = Some(state_id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Consume the builder, validate, and return a [`City`].
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if `state_id` is missing or `name`
    /// is missing or empty.
    pub fn build(self) -> Result<City, HbnbError> {
        let state_id = self
            .state_id
            .ok_or(ValidationError::MissingField("state_id"))?;
        let ts = now();
        let city = City {
            id: self.id.unwrap_or_default(),
            state_id,
            name: self.name.unwrap_or_default(),
            created_at: ts,
            updated_at: ts,
        };
        city.validate()?;
        Ok(city)
    }
}
