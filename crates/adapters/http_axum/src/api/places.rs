//! JSON REST handlers for places.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, StateRepository, UserRepository,
};
use hbnb_domain::city::City;
use hbnb_domain::id::{CityId, PlaceId};
use hbnb_domain::place::{NewPlace, Place, PlacePatch};
use hbnb_domain::record::Record;

use super::Deleted;
use crate::error::ApiError;
use crate::extract::{JsonObject, path_id};
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Place>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Place>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Place>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/v1/cities/{city_id}/places`
pub async fn list<P, C, S, U, A>(
    State(state): State<AppState<P, C, S, U, A>>,
    Path(city_id): Path<String>,
) -> Result<ListResponse, ApiError>
where
    P: PlaceRepository + 'static,
    C: CityRepository + 'static,
    S: StateRepository + 'static,
    U: UserRepository + 'static,
    A: AmenityRepository + 'static,
{
    let city_id: CityId = path_id(City::KIND, &city_id)?;
    let places = state.place_service.list_places_for_city(city_id).await?;
    Ok(ListResponse::Ok(Json(places)))
}

/// `POST /api/v1/cities/{city_id}/places`
///
/// The body is checked for `user_id` and `name` before the city is looked
/// up, so an incomplete body is a `400` whatever the path says.
pub async fn create<P, C, S, U, A>(
    State(state): State<AppState<P, C, S, U, A>>,
    Path(city_id): Path<String>,
    JsonObject(body): JsonObject,
) -> Result<CreateResponse, ApiError>
where
    P: PlaceRepository + 'static,
    C: CityRepository + 'static,
    S: StateRepository + 'static,
    U: UserRepository + 'static,
    A: AmenityRepository + 'static,
{
    let new_place = NewPlace::from_json(body)?;
    let city_id: CityId = path_id(City::KIND, &city_id)?;
    let created = state.place_service.create_place(city_id, new_place).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `GET /api/v1/places/{place_id}`
pub async fn get<P, C, S, U, A>(
    State(state): State<AppState<P, C, S, U, A>>,
    Path(place_id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    P: PlaceRepository + 'static,
    C: CityRepository + 'static,
    S: StateRepository + 'static,
    U: UserRepository + 'static,
    A: AmenityRepository + 'static,
{
    let place_id: PlaceId = path_id(Place::KIND, &place_id)?;
    let place = state.place_service.get_place(place_id).await?;
    Ok(GetResponse::Ok(Json(place)))
}

/// `PUT /api/v1/places/{place_id}`
///
/// An unknown place is reported before a bad body.
pub async fn update<P, C, S, U, A>(
    State(state): State<AppState<P, C, S, U, A>>,
    Path(place_id): Path<String>,
    body: Result<JsonObject, ApiError>,
) -> Result<GetResponse, ApiError>
where
    P: PlaceRepository + 'static,
    C: CityRepository + 'static,
    S: StateRepository + 'static,
    U: UserRepository + 'static,
    A: AmenityRepository + 'static,
{
    let place_id: PlaceId = path_id(Place::KIND, &place_id)?;
    let place = state.place_service.get_place(place_id).await?;

    let JsonObject(body) = body?;
    let patch = PlacePatch::from_json(body)?;
    let updated = state.place_service.update_place(place, patch).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/v1/places/{place_id}`
pub async fn delete<P, C, S, U, A>(
    State(state): State<AppState<P, C, S, U, A>>,
    Path(place_id): Path<String>,
) -> Result<Deleted, ApiError>
where
    P: PlaceRepository + 'static,
    C: CityRepository + 'static,
    S: StateRepository + 'static,
    U: UserRepository + 'static,
    A: AmenityRepository + 'static,
{
    let place_id: PlaceId = path_id(Place::KIND, &place_id)?;
    state.place_service.delete_place(place_id).await?;
    Ok(Deleted)
}
