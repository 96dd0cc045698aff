//! JSON REST handlers for amenities.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, StateRepository, UserRepository,
};
use hbnb_domain::amenity::Amenity;
use hbnb_domain::id::AmenityId;
use hbnb_domain::record::Record;

use crate::error::ApiError;
use crate::extract::{JsonObject, path_id, required_string};
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

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Amenity>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/v1/amenities`
pub async fn list<P, C, S, U, A>(
    State(state): State<AppState<P, C, S, U, A>>,
) -> Result<ListResponse, ApiError>
where
    P: PlaceRepository + 'static,
    C: CityRepository + 'static,
    S: StateRepository + 'static,
    U: UserRepository + 'static,
    A: AmenityRepository + 'static,
{
    let amenities = state.amenity_service.list().await?;
    Ok(ListResponse::Ok(Json(amenities)))
}

/// `GET /api/v1/amenities/{amenity_id}`
pub async fn get<P, C, S, U, A>(
    State(state): State<AppState<P, C, S, U, A>>,
    Path(amenity_id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    P: PlaceRepository + 'static,
    C: CityRepository + 'static,
    S: StateRepository + 'static,
    U: UserRepository + 'static,
    A: AmenityRepository + 'static,
{
    let amenity_id: AmenityId = path_id(Amenity::KIND, &amenity_id)?;
    let amenity = state.amenity_service.get(amenity_id).await?;
    Ok(GetResponse::Ok(Json(amenity)))
}

/// `POST /api/v1/amenities`
pub async fn create<P, C, S, U, A>(
    State(state): State<AppState<P, C, S, U, A>>,
    JsonObject(mut body): JsonObject,
) -> Result<CreateResponse, ApiError>
where
    P: PlaceRepository + 'static,
    C: CityRepository + 'static,
    S: StateRepository + 'static,
    U: UserRepository + 'static,
    A: AmenityRepository + 'static,
{
    let name = required_string(&mut body, "name")?;
    let created = state.amenity_service.create(Amenity::new(name)?).await?;
    Ok(CreateResponse::Created(Json(created)))
}
