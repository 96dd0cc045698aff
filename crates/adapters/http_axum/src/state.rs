//! Shared application state for axum handlers.

use std::sync::Arc;

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, StateRepository, UserRepository,
};
use hbnb_app::services::catalog_service::CatalogService;
use hbnb_app::services::city_service::CityService;
use hbnb_app::services::place_amenity_service::PlaceAmenityService;
use hbnb_app::services::place_search_service::PlaceSearchService;
use hbnb_app::services::place_service::PlaceService;
use hbnb_domain::amenity::Amenity;
use hbnb_domain::state::State;
use hbnb_domain::user::User;

/// Application state shared across all axum handlers.
///
/// Generic over the place, city, state, user and amenity repositories to
/// avoid dynamic dispatch. `Clone` is implemented manually so the
/// repositories themselves do not need to be `Clone`.
pub struct AppState<P, C, S, U, A> {
    /// Place CRUD service.
    pub place_service: Arc<PlaceService<P, C, U>>,
    /// Place search service.
    pub search_service: Arc<PlaceSearchService<P, C, S, A>>,
    /// Place ↔ amenity link service.
    pub place_amenity_service: Arc<PlaceAmenityService<P, A>>,
    /// City service.
    pub city_service: Arc<CityService<C, S>>,
    /// State catalog.
    pub state_service: Arc<CatalogService<State, S>>,
    /// User catalog.
    pub user_service: Arc<CatalogService<User, U>>,
    /// Amenity catalog.
    pub amenity_service: Arc<CatalogService<Amenity, A>>,
}

impl<P, C, S, U, A> Clone for AppState<P, C, S, U, A> {
    fn clone(&self) -> Self {
        Self {
            place_service: Arc::clone(&self.place_service),
            search_service: Arc::clone(&self.search_service),
            place_amenity_service: Arc::clone(&self.place_amenity_service),
            city_service: Arc::clone(&self.city_service),
            state_service: Arc::clone(&self.state_service),
            user_service: Arc::clone(&self.user_service),
            amenity_service: Arc::clone(&self.amenity_service),
        }
    }
}

impl<P, C, S, U, A> AppState<P, C, S, U, A>
where
    P: PlaceRepository + 'static,
    C: CityRepository + 'static,
    S: StateRepository + 'static,
    U: UserRepository + 'static,
    A: AmenityRepository + 'static,
{
    /// Build every service on top of one shared set of repositories.
    pub fn new(places: P, cities: C, states: S, users: U, amenities: A) -> Self {
        Self::from_arcs(
            Arc::new(places),
            Arc::new(cities),
            Arc::new(states),
            Arc::new(users),
            Arc::new(amenities),
        )
    }

    /// Same as [`AppState::new`] for repositories that are already shared.
    pub fn from_arcs(
        places: Arc<P>,
        cities: Arc<C>,
        states: Arc<S>,
        users: Arc<U>,
        amenities: Arc<A>,
    ) -> Self {
        Self {
            place_service: Arc::new(PlaceService::new(
                Arc::clone(&places),
                Arc::clone(&cities),
                Arc::clone(&users),
            )),
            search_service: Arc::new(PlaceSearchService::new(
                Arc::clone(&places),
                Arc::clone(&cities),
                Arc::clone(&states),
                Arc::clone(&amenities),
            )),
            place_amenity_service: Arc::new(PlaceAmenityService::new(
                places,
                Arc::clone(&amenities),
            )),
            city_service: Arc::new(CityService::new(cities, Arc::clone(&states))),
            state_service: Arc::new(CatalogService::new(states)),
            user_service: Arc::new(CatalogService::new(users)),
            amenity_service: Arc::new(CatalogService::new(amenities)),
        }
    }
}
