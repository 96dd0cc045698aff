//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, StateRepository, UserRepository,
};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the API routes under `/api/v1` next to a `/health` endpoint.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<P, C, S, U, A>(state: AppState<P, C, S, U, A>) -> Router
where
    P: PlaceRepository + 'static,
    C: CityRepository + 'static,
    S: StateRepository + 'static,
    U: UserRepository + 'static,
    A: AmenityRepository + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use hbnb_app::ports::Repository;
    use hbnb_domain::amenity::Amenity;
    use hbnb_domain::city::City;
    use hbnb_domain::error::HbnbError;
    use hbnb_domain::id::{CityId, PlaceId, StateId};
    use hbnb_domain::place::Place;
    use hbnb_domain::record::Record;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    /// Repository that stores nothing.
    struct EmptyRepo;

    impl<T: Record> Repository<T> for EmptyRepo {
        async fn create(&self, record: T) -> Result<T, HbnbError> {
            Ok(record)
        }
        async fn get_by_id(&self, _id: T::Id) -> Result<Option<T>, HbnbError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<T>, HbnbError> {
            Ok(vec![])
        }
        async fn update(&self, record: T) -> Result<T, HbnbError> {
            Ok(record)
        }
        async fn delete(&self, _id: T::Id) -> Result<(), HbnbError> {
            Ok(())
        }
    }

    impl PlaceRepository for EmptyRepo {
        async fn find_by_city(&self, _city_id: CityId) -> Result<Vec<Place>, HbnbError> {
            Ok(vec![])
        }
        async fn update_details(&self, place: Place) -> Result<Place, HbnbError> {
            Ok(place)
        }
    }

    impl CityRepository for EmptyRepo {
        async fn find_by_state(&self, _state_id: StateId) -> Result<Vec<City>, HbnbError> {
            Ok(vec![])
        }
    }

    fn app() -> Router {
        build(AppState::new(EmptyRepo, EmptyRepo, EmptyRepo, EmptyRepo, EmptyRepo))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_place() {
        let (status, body) = send(
            Request::builder()
                .uri(format!("/api/v1/places/{}", PlaceId::new()))
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Not found"}));
    }

    #[tokio::test]
    async fn should_return_not_found_for_malformed_place_id() {
        let (status, _) = send(
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/places/not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_search_without_json_body() {
        let (status, body) = send(
            Request::builder()
                .method("POST")
                .uri("/api/v1/places_search")
                .body(Body::from("states=all"))
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Not a JSON"}));
    }

    #[tokio::test]
    async fn should_return_empty_search_result() {
        let (status, body) = send(
            Request::builder()
                .method("POST")
                .uri("/api/v1/places_search")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn should_report_missing_name_before_unknown_city() {
        let (status, body) = send(
            Request::builder()
                .method("POST")
                .uri(format!("/api/v1/cities/{}/places", CityId::new()))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"user_id": "someone"}"#))
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Missing name"}));
    }

    #[tokio::test]
    async fn should_report_missing_email_for_user() {
        let (status, body) = send(
            Request::builder()
                .method("POST")
                .uri("/api/v1/users")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"first_name": "Ada"}"#))
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Missing email"}));
    }

    #[tokio::test]
    async fn should_create_amenity() {
        let (status, body) = send(
            Request::builder()
                .method("POST")
                .uri("/api/v1/amenities")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name": "Wifi"}"#))
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let amenity: Amenity = serde_json::from_value(body).unwrap();
        assert_eq!(amenity.name, "Wifi");
    }
}
