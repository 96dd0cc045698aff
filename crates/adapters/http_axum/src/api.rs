//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod amenities;
#[allow(clippy::missing_errors_doc)]
pub mod cities;
#[allow(clippy::missing_errors_doc)]
pub mod place_amenities;
#[allow(clippy::missing_errors_doc)]
pub mod places;
#[allow(clippy::missing_errors_doc)]
pub mod places_search;
#[allow(clippy::missing_errors_doc)]
pub mod states;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use axum::Json;
use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use serde_json::{Map, Value};

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, StateRepository, UserRepository,
};

use crate::state::AppState;

/// Body of a successful delete: an empty JSON object with `200 OK`.
pub struct Deleted;

impl IntoResponse for Deleted {
    fn into_response(self) -> Response {
        Json(Value::Object(Map::new())).into_response()
    }
}

/// Build the `/api/v1` sub-router.
pub fn routes<P, C, S, U, A>() -> Router<AppState<P, C, S, U, A>>
where
    P: PlaceRepository + 'static,
    C: CityRepository + 'static,
    S: StateRepository + 'static,
    U: UserRepository + 'static,
    A: AmenityRepository + 'static,
{
    Router::new()
        // Places
        .route(
            "/cities/{city_id}/places",
            get(places::list::<P, C, S, U, A>).post(places::create::<P, C, S, U, A>),
        )
        .route(
            "/places/{place_id}",
            get(places::get::<P, C, S, U, A>)
                .put(places::update::<P, C, S, U, A>)
                .delete(places::delete::<P, C, S, U, A>),
        )
        .route(
            "/places_search",
            post(places_search::search::<P, C, S, U, A>),
        )
        // Place ↔ amenity links
        .route(
            "/places/{place_id}/amenities",
            get(place_amenities::list::<P, C, S, U, A>),
        )
        .route(
            "/places/{place_id}/amenities/{amenity_id}",
            get(place_amenities::get::<P, C, S, U, A>)
                .post(place_amenities::link::<P, C, S, U, A>)
                .delete(place_amenities::unlink::<P, C, S, U, A>),
        )
        // Reference data
        .route(
            "/states",
            get(states::list::<P, C, S, U, A>).post(states::create::<P, C, S, U, A>),
        )
        .route("/states/{state_id}", get(states::get::<P, C, S, U, A>))
        .route(
            "/states/{state_id}/cities",
            get(cities::list::<P, C, S, U, A>).post(cities::create::<P, C, S, U, A>),
        )
        .route("/cities/{city_id}", get(cities::get::<P, C, S, U, A>))
        .route(
            "/amenities",
            get(amenities::list::<P, C, S, U, A>).post(amenities::create::<P, C, S, U, A>),
        )
        .route(
            "/amenities/{amenity_id}",
            get(amenities::get::<P, C, S, U, A>),
        )
        .route(
            "/users",
            get(users::list::<P, C, S, U, A>).post(users::create::<P, C, S, U, A>),
        )
        .route("/users/{user_id}", get(users::get::<P, C, S, U, A>))
}
