//! Catalog service: create, get and list for records without relations
//! (states, users, amenities).

use std::marker::PhantomData;
use std::sync::Arc;

use hbnb_domain::error::HbnbError;
use hbnb_domain::record::Record;

use super::require;
use crate::ports::Repository;

/// Generic application service over one record type.
pub struct CatalogService<T, R> {
    repo: Arc<R>,
    _record: PhantomData<fn() -> T>,
}

impl<T, R> CatalogService<T, R>
where
    T: Record,
    R: Repository<T>,
{
    /// Create a new service backed by the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            _record: PhantomData,
        }
    }

    /// Persist a new record after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, record), fields(kind = T::KIND))]
    pub async fn create(&self, record: T) -> Result<T, HbnbError> {
        record.validate()?;
        self.repo.create(record).await
    }

    /// Look up a record by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no record with `id` exists,
    /// or a storage error from the repository.
    pub async fn get(&self, id: T::Id) -> Result<T, HbnbError> {
        require::<T, _>(self.repo.as_ref(), id).await
    }

    /// List all records.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list(&self) -> Result<Vec<T>, HbnbError> {
        self.repo.get_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fakes::InMemoryRepo;
    use hbnb_domain::amenity::Amenity;
    use hbnb_domain::error::ValidationError;
    use hbnb_domain::id::UserId;
    use hbnb_domain::user::User;

    #[tokio::test]
    async fn should_create_get_and_list() {
        let svc = CatalogService::new(Arc::new(InMemoryRepo::<Amenity>::default()));
        let wifi = svc.create(Amenity::new("Wifi").unwrap()).await.unwrap();
        svc.create(Amenity::new("Pool").unwrap()).await.unwrap();

        assert_eq!(svc.get(wifi.id).await.unwrap(), wifi);
        assert_eq!(svc.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_reject_invalid_record() {
        let svc = CatalogService::new(Arc::new(InMemoryRepo::<User>::default()));
        let mut user = User::builder().email("a@b.c").build().unwrap();
        user.email = String::new();

        let result = svc.create(user).await;
        assert!(matches!(
            result,
            Err(HbnbError::Validation(ValidationError::EmptyField("email")))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_missing() {
        let svc = CatalogService::new(Arc::new(InMemoryRepo::<User>::default()));
        let result = svc.get(UserId::new()).await;
        assert!(matches!(result, Err(HbnbError::NotFound(e)) if e.entity == "User"));
    }
}
