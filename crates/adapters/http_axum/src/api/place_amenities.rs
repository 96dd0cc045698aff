//! JSON REST handlers for the amenities linked to a place.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, StateRepository, UserRepository,
};
use hbnb_app::services::place_amenity_service::LinkOutcome;
use hbnb_domain::amenity::Amenity;
use hbnb_domain::id::{AmenityId, PlaceId};
use hbnb_domain::place::Place;
use hbnb_domain::record::Record;

use super::Deleted;
use crate::error::ApiError;
use crate::extract::path_id;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Amenity>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Amenity>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the link endpoint.
pub enum LinkResponse {
    /// The link was created.
    Created(Json<Amenity>),
    /// The link already existed.
    Ok(Json<Amenity>),
}

impl IntoResponse for LinkResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
            Self::Ok(json) => json.into_response(),
        }
    }
}

impl From<LinkOutcome> for LinkResponse {
    fn from(outcome: LinkOutcome) -> Self {
        match outcome {
            LinkOutcome::Created(amenity) => Self::Created(Json(amenity)),
            LinkOutcome::AlreadyLinked(amenity) => Self::Ok(Json(amenity)),
        }
    }
}

fn link_ids(place_id: &str, amenity_id: &str) -> Result<(PlaceId, AmenityId), ApiError> {
    Ok((
        path_id(Place::KIND, place_id)?,
        path_id(Amenity::KIND, amenity_id)?,
    ))
}

/// `GET /api/v1/places/{place_id}/amenities`
pub async fn list<P, C, S, U, A>(
    State(state): State<AppState<P, C, S, U, A>>,
    Path(place_id): Path<String>,
) -> Result<ListResponse, ApiError>
where
    P: PlaceRepository + 'static,
    C: CityRepository + 'static,
    S: StateRepository + 'static,
    U: UserRepository + 'static,
    A: AmenityRepository + 'static,
{
    let place_id: PlaceId = path_id(Place::KIND, &place_id)?;
    let amenities = state.place_amenity_service.list_amenities(place_id).await?;
    Ok(ListResponse::Ok(Json(amenities)))
}

/// `GET /api/v1/places/{place_id}/amenities/{amenity_id}`
pub async fn get<P, C, S, U, A>(
    State(state): State<AppState<P, C, S, U, A>>,
    Path((place_id, amenity_id)): Path<(String, String)>,
) -> Result<GetResponse, ApiError>
where
    P: PlaceRepository + 'static,
    C: CityRepository + 'static,
    S: StateRepository + 'static,
    U: UserRepository + 'static,
    A: AmenityRepository + 'static,
{
    let (place_id, amenity_id) = link_ids(&place_id, &amenity_id)?;
    let amenity = state
        .place_amenity_service
        .get_amenity(place_id, amenity_id)
        .await?;
    Ok(GetResponse::Ok(Json(amenity)))
}

/// `POST /api/v1/places/{place_id}/amenities/{amenity_id}`
pub async fn link<P, C, S, U, A>(
    State(state): State<AppState<P, C, S, U, A>>,
    Path((place_id, amenity_id)): Path<(String, String)>,
) -> Result<LinkResponse, ApiError>
where
    P: PlaceRepository + 'static,
    C: CityRepository + 'static,
    S: StateRepository + 'static,
    U: UserRepository + 'static,
    A: AmenityRepository + 'static,
{
    let (place_id, amenity_id) = link_ids(&place_id, &amenity_id)?;
    let outcome = state
        .place_amenity_service
        .link_amenity(place_id, amenity_id)
        .await?;
    Ok(outcome.into())
}

/// `DELETE /api/v1/places/{place_id}/amenities/{amenity_id}`
pub async fn unlink<P, C, S, U, A>(
    State(state): State<AppState<P, C, S, U, A>>,
    Path((place_id, amenity_id)): Path<(String, String)>,
) -> Result<Deleted, ApiError>
where
    P: PlaceRepository + 'static,
    C: CityRepository + 'static,
    S: StateRepository + 'static,
    U: UserRepository + 'static,
    A: AmenityRepository + 'static,
{
    let (place_id, amenity_id) = link_ids(&place_id, &amenity_id)?;
    state
        .place_amenity_service
        .unlink_amenity(place_id, amenity_id)
        .await?;
    Ok(Deleted)
}
