//! City service: cities are created and listed under their state.

use std::sync::Arc;

use hbnb_domain::city::City;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{CityId, StateId};
use hbnb_domain::state::State;

use super::require;
use crate::ports::{CityRepository, StateRepository};

/// Application service for cities.
pub struct CityService<C, S> {
    cities: Arc<C>,
    states: Arc<S>,
}

impl<C, S> CityService<C, S>
where
    C: CityRepository,
    S: StateRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(cities: Arc<C>, states: Arc<S>) -> Self {
        Self { cities, states }
    }

    /// Create a city named `name` inside a state.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the state does not exist,
    /// [`HbnbError::Validation`] when `name` is empty, or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn create_city(&self, state_id: StateId, name: String) -> Result<City, HbnbError> {
        require::<State, _>(self.states.as_ref(), state_id).await?;
        let city = City::builder().state_id(state_id).name(name).build()?;
        self.cities.create(city).await
    }

    /// Look up a city by id.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no city with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_city(&self, id: CityId) -> Result<City, HbnbError> {
        require::<City, _>(self.cities.as_ref(), id).await
    }

    /// List the cities of a state.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the state does not exist,
    /// or a storage error from a repository.
    pub async fn list_cities_for_state(&self, state_id: StateId) -> Result<Vec<City>, HbnbError> {
        require::<State, _>(self.states.as_ref(), state_id).await?;
        self.cities.find_by_state(state_id).await
    }
}
