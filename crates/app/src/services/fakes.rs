//! In-memory repository fakes shared by the service tests.

use std::future::Future;
use std::sync::Mutex;

use hbnb_domain::city::City;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{CityId, StateId};
use hbnb_domain::place::Place;
use hbnb_domain::record::Record;

use crate::ports::{CityRepository, PlaceRepository, Repository};

/// Insertion-ordered store for any record type.
pub(crate) struct InMemoryRepo<T> {
    store: Mutex<Vec<T>>,
}

impl<T> Default for InMemoryRepo<T> {
    fn default() -> Self {
        Self {
            store: Mutex::new(Vec::new()),
        }
    }
}

impl<T: Record> InMemoryRepo<T> {
    pub(crate) fn with(records: impl IntoIterator<Item = T>) -> Self {
        Self {
            store: Mutex::new(records.into_iter().collect()),
        }
    }

    pub(crate) fn snapshot(&self) -> Vec<T> {
        self.store.lock().unwrap().clone()
    }
}

impl<T: Record> Repository<T> for InMemoryRepo<T> {
    fn create(&self, record: T) -> impl Future<Output = Result<T, HbnbError>> + Send {
        self.store.lock().unwrap().push(record.clone());
        async move { Ok(record) }
    }

    fn get_by_id(&self, id: T::Id) -> impl Future<Output = Result<Option<T>, HbnbError>> + Send {
        let store = self.store.lock().unwrap();
        let result = store.iter().find(|r| r.id() == id).cloned();
        async move { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<T>, HbnbError>> + Send {
        let result = self.store.lock().unwrap().clone();
        async move { Ok(result) }
    }

    fn update(&self, record: T) -> impl Future<Output = Result<T, HbnbError>> + Send {
        let mut store = self.store.lock().unwrap();
        if let Some(slot) = store.iter_mut().find(|r| r.id() == record.id()) {
            *slot = record.clone();
        }
        async move { Ok(record) }
    }

    fn delete(&self, id: T::Id) -> impl Future<Output = Result<(), HbnbError>> + Send {
        self.store.lock().unwrap().retain(|r| r.id() != id);
        async { Ok(()) }
    }
}

impl PlaceRepository for InMemoryRepo<Place> {
    fn find_by_city(
        &self,
        city_id: CityId,
    ) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send {
        let store = self.store.lock().unwrap();
        let result: Vec<Place> = store.iter().filter(|p| p.city_id == city_id).cloned().collect();
        async move { Ok(result) }
    }

    fn update_details(
        &self,
        mut place: Place,
    ) -> impl Future<Output = Result<Place, HbnbError>> + Send {
        let mut store = self.store.lock().unwrap();
        if let Some(slot) = store.iter_mut().find(|p| p.id == place.id) {
            place.amenity_ids.clone_from(&slot.amenity_ids);
            *slot = place.clone();
        }
        async move { Ok(place) }
    }
}

impl CityRepository for InMemoryRepo<City> {
    fn find_by_state(
        &self,
        state_id: StateId,
    ) -> impl Future<Output = Result<Vec<City>, HbnbError>> + Send {
        let store = self.store.lock().unwrap();
        let result: Vec<City> = store
            .iter()
            .filter(|c| c.state_id == state_id)
            .cloned()
            .collect();
        async move { Ok(result) }
    }
}
