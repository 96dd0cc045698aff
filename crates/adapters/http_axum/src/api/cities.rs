//! JSON REST handlers for cities.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, StateRepository, UserRepository,
};
use hbnb_domain::city::City;
use hbnb_domain::id::{CityId, StateId};
use hbnb_domain::record::Record;
use hbnb_domain::state::State as StateRecord;

use crate::error::ApiError;
use crate::extract::{JsonObject, path_id, required_string};
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<City>>),
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
    Ok(Json<City>),
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
    Created(Json<City>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/v1/states/{state_id}/cities`
pub async fn list<P, C, S, U, A>(
    State(state): State<AppState<P, C, S, U, A>>,
    Path(state_id): Path<String>,
) -> Result<ListResponse, ApiError>
where
    P: PlaceRepository + 'static,
    C: CityRepository + 'static,
    S: StateRepository + 'static,
    U: UserRepository + 'static,
    A: AmenityRepository + 'static,
{
    let state_id: StateId = path_id(StateRecord::KIND, &state_id)?;
    let cities = state.city_service.list_cities_for_state(state_id).await?;
    Ok(ListResponse::Ok(Json(cities)))
}

/// `GET /api/v1/cities/{city_id}`
pub async fn get<P, C, S, U, A>(
    State(state): State<AppState<P, C, S, U, A>>,
    Path(city_id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    P: PlaceRepository + 'static,
    C: CityRepository + 'static,
    S: StateRepository + 'static,
    U: UserRepository + 'static,
    A: AmenityRepository + 'static,
{
    let city_id: CityId = path_id(City::KIND, &city_id)?;
    let city = state.city_service.get_city(city_id).await?;
    Ok(GetResponse::Ok(Json(city)))
}

/// `POST /api/v1/states/{state_id}/cities`
pub async fn create<P, C, S, U, A>(
    State(state): State<AppState<P, C, S, U, A>>,
    Path(state_id): Path<String>,
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
    let state_id: StateId = path_id(StateRecord::KIND, &state_id)?;
    let created = state.city_service.create_city(state_id, name).await?;
    Ok(CreateResponse::Created(Json(created)))
}
