//! JSON REST handlers for states.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, StateRepository, UserRepository,
};
use hbnb_domain::id::StateId;
use hbnb_domain::record::Record;
use hbnb_domain::state::State as StateRecord;

use crate::error::ApiError;
use crate::extract::{JsonObject, path_id, required_string};
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<StateRecord>>),
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
    Ok(Json<StateRecord>),
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
    Created(Json<StateRecord>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/v1/states`
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
    let states = state.state_service.list().await?;
    Ok(ListResponse::Ok(Json(states)))
}

/// `GET /api/v1/states/{state_id}`
pub async fn get<P, C, S, U, A>(
    State(state): State<AppState<P, C, S, U, A>>,
    Path(state_id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    P: PlaceRepository + 'static,
    C: CityRepository + 'static,
    S: StateRepository + 'static,
    U: UserRepository + 'static,
    A: AmenityRepository + 'static,
{
    let state_id: StateId = path_id(StateRecord::KIND, &state_id)?;
    let found = state.state_service.get(state_id).await?;
    Ok(GetResponse::Ok(Json(found)))
}

/// `POST /api/v1/states`
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
    let created = state.state_service.create(StateRecord::new(name)?).await?;
    Ok(CreateResponse::Created(Json(created)))
}
