//! Storage port: repository traits for persistence.
//!
//! [`Repository`] is parameterized by the record type, so every record gets
//! the same CRUD surface. Records with extra query needs get a sub-trait.

use std::future::Future;

use hbnb_domain::amenity::Amenity;
use hbnb_domain::city::City;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{CityId, StateId};
use hbnb_domain::place::Place;
use hbnb_domain::record::Record;
use hbnb_domain::state::State;
use hbnb_domain::user::User;

/// Generic persistence for records of type `T`.
///
/// Every mutation is flushed before the returned future resolves.
pub trait Repository<T: Record>: Send + Sync {
    /// Persist a new record.
    fn create(&self, record: T) -> impl Future<Output = Result<T, HbnbError>> + Send;

    /// Get a record by its unique identifier.
    fn get_by_id(&self, id: T::Id) -> impl Future<Output = Result<Option<T>, HbnbError>> + Send;

    /// Get all records, in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<T>, HbnbError>> + Send;

    /// Overwrite an existing record.
    fn update(&self, record: T) -> impl Future<Output = Result<T, HbnbError>> + Send;

    /// Delete a record by its unique identifier. Deleting a missing record
    /// is not an error at this level.
    fn delete(&self, id: T::Id) -> impl Future<Output = Result<(), HbnbError>> + Send;
}

/// Repository for [`Place`]s, including their amenity links.
pub trait PlaceRepository: Repository<Place> {
    /// All places owned by a city, in insertion order.
    fn find_by_city(
        &self,
        city_id: CityId,
    ) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send;

    /// Overwrite the attributes of an existing place and leave its amenity
    /// links as stored. The returned place carries the stored links.
    fn update_details(
        &self,
        place: Place,
    ) -> impl Future<Output = Result<Place, HbnbError>> + Send;
}

/// Repository for [`City`]s.
pub trait CityRepository: Repository<City> {
    /// All cities of a state, in insertion order.
    fn find_by_state(
        &self,
        state_id: StateId,
    ) -> impl Future<Output = Result<Vec<City>, HbnbError>> + Send;
}

/// Repository for [`State`]s.
pub trait StateRepository: Repository<State> {}

impl<R: Repository<State>> StateRepository for R {}

/// Repository for [`User`]s.
pub trait UserRepository: Repository<User> {}

impl<R: Repository<User>> UserRepository for R {}

/// Repository for [`Amenity`]s.
pub trait AmenityRepository: Repository<Amenity> {}

impl<R: Repository<Amenity>> AmenityRepository for R {}
