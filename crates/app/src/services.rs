//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.
//! Repositories are shared between services through `Arc`.

pub mod catalog_service;
pub mod city_service;
pub mod place_amenity_service;
pub mod place_search_service;
pub mod place_service;

#[cfg(test)]
pub(crate) mod fakes;

use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::record::Record;

use crate::ports::Repository;

/// Fetch a record that must exist.
///
/// # Errors
///
/// Returns [`HbnbError::NotFound`] when no record with `id` exists, or a
/// storage error from the repository.
pub(crate) async fn require<T, R>(repo: &R, id: T::Id) -> Result<T, HbnbError>
where
    T: Record,
    R: Repository<T> + ?Sized,
{
    repo.get_by_id(id)
        .await?
        .ok_or_else(|| NotFoundError::of::<T>(id).into())
}
