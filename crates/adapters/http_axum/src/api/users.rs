//! JSON REST handlers for users.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, StateRepository, UserRepository,
};
use hbnb_domain::id::UserId;
use hbnb_domain::record::Record;
use hbnb_domain::user::User;

use crate::error::ApiError;
use crate::extract::{JsonObject, optional_string, path_id, required_string};
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<User>>),
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
    Ok(Json<User>),
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
    Created(Json<User>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/v1/users`
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
    let users = state.user_service.list().await?;
    Ok(ListResponse::Ok(Json(users)))
}

/// `GET /api/v1/users/{user_id}`
pub async fn get<P, C, S, U, A>(
    State(state): State<AppState<P, C, S, U, A>>,
    Path(user_id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    P: PlaceRepository + 'static,
    C: CityRepository + 'static,
    S: StateRepository + 'static,
    U: UserRepository + 'static,
    A: AmenityRepository + 'static,
{
    let user_id: UserId = path_id(User::KIND, &user_id)?;
    let user = state.user_service.get(user_id).await?;
    Ok(GetResponse::Ok(Json(user)))
}

/// `POST /api/v1/users`
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
    let email = required_string(&mut body, "email")?;
    let mut builder = User::builder().email(email);
    if let Some(first_name) = optional_string(&mut body, "first_name")? {
        builder = builder.first_name(first_name);
    }
    if let Some(last_name) = optional_string(&mut body, "last_name")? {
        builder = builder.last_name(last_name);
    }

    let created = state.user_service.create(builder.build()?).await?;
    Ok(CreateResponse::Created(Json(created)))
}
