//! State: top-level geographic grouping of cities.

use serde::{Deserialize, Serialize};

use crate::error::{HbnbError, ValidationError};
use crate::id::StateId;
use crate::record::Record;
use crate::time::{Timestamp, now};

/// A state (or region) that owns cities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub id: StateId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl State {
    /// Create a new state named `name`, stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, HbnbError> {
        let ts = now();
        let state = Self {
            id: StateId::new(),
            name: name.into(),
            created_at: ts,
            updated_at: ts,
        };
        state.validate()?;
        Ok(state)
    }
}

impl Record for State {
    type Id = StateId;

    const KIND: &'static str = "State";

    fn id(&self) -> StateId {
        self.id
    }

    fn validate(&self) -> Result<(), HbnbError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyField("name").into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_state_when_name_provided() {
        let state = State::new("California").unwrap();
        assert_eq!(state.name, "California");
        assert_eq!(state.created_at, state.updated_at);
    }

    #[test]
    fn should_reject_empty_name() {
        let result = State::new("");
        assert!(matches!(
            result,
            Err(HbnbError::Validation(ValidationError::EmptyField("name")))
        ));
    }
}
