//! Place service: use-cases for managing a single place.

use std::sync::Arc;

use hbnb_domain::city::City;
use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::{CityId, PlaceId, UserId};
use hbnb_domain::place::{NewPlace, Place, PlacePatch};
use hbnb_domain::record::Record;
use hbnb_domain::time::now;
use hbnb_domain::user::User;

use super::require;
use crate::ports::{CityRepository, PlaceRepository, UserRepository};

/// Application service for place CRUD operations.
pub struct PlaceService<P, C, U> {
    places: Arc<P>,
    cities: Arc<C>,
    users: Arc<U>,
}

impl<P, C, U> PlaceService<P, C, U>
where
    P: PlaceRepository,
    C: CityRepository,
    U: UserRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(places: Arc<P>, cities: Arc<C>, users: Arc<U>) -> Self {
        Self {
            places,
            cities,
            users,
        }
    }

    /// List every place owned by a city.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the city does not exist, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_places_for_city(&self, city_id: CityId) -> Result<Vec<Place>, HbnbError> {
        require::<City, _>(self.cities.as_ref(), city_id).await?;
        self.places.find_by_city(city_id).await
    }

    /// Create a place under `city_id`.
    ///
    /// Required fields were checked when `new_place` was parsed, so only
    /// the references are resolved here: the city first, then the owner.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the city or the user does not
    /// exist, or a storage error from the repository.
    #[tracing::instrument(skip(self, new_place))]
    pub async fn create_place(
        &self,
        city_id: CityId,
        new_place: NewPlace,
    ) -> Result<Place, HbnbError> {
        let NewPlace {
            user_id: raw_user_id,
            attributes,
        } = new_place;

        require::<City, _>(self.cities.as_ref(), city_id).await?;
        let user_id: UserId = raw_user_id.parse().map_err(|_| NotFoundError {
            entity: User::KIND,
            id: raw_user_id.clone(),
        })?;
        require::<User, _>(self.users.as_ref(), user_id).await?;

        let place = Place::builder()
            .city_id(city_id)
            .user_id(user_id)
            .patch(attributes)
            .build()?;
        let created = self.places.create(place).await?;
        tracing::info!(place_id = %created.id, "place created");
        Ok(created)
    }

    /// Look up a place by id.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no place with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_place(&self, id: PlaceId) -> Result<Place, HbnbError> {
        require::<Place, _>(self.places.as_ref(), id).await
    }

    /// Apply a patch to a place loaded with [`PlaceService::get_place`] and
    /// persist its attributes. Amenity links are left as stored.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] when the patched place breaks an
    /// invariant, or a storage error from the repository.
    #[tracing::instrument(skip_all, fields(place_id = %place.id))]
    pub async fn update_place(
        &self,
        mut place: Place,
        patch: PlacePatch,
    ) -> Result<Place, HbnbError> {
        place.apply(patch);
        place.validate()?;
        place.touch(now());
        self.places.update_details(place).await
    }

    /// Delete a place by id.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the place does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_place(&self, id: PlaceId) -> Result<(), HbnbError> {
        self.get_place(id).await?;
        self.places.delete(id).await?;
        tracing::info!(place_id = %id, "place deleted");
        Ok(())
    }
}
