//! Request extractors shared by the API handlers.

use std::str::FromStr;

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde_json::{Map, Value};

use hbnb_domain::error::{NotFoundError, ValidationError};

use crate::error::ApiError;

/// A request body that must be a JSON object.
///
/// Anything else (no body, wrong content type, malformed JSON, a JSON
/// array or scalar) is rejected with `"Not a JSON"`.
#[derive(Debug)]
pub struct JsonObject(pub Map<String, Value>);

impl<S: Send + Sync> FromRequest<S> for JsonObject {
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(Value::Object(map))) => Ok(Self(map)),
            Ok(_) => Err(ValidationError::NotJson.into()),
            Err(rejection) => {
                tracing::debug!(%rejection, "rejected request body");
                Err(ValidationError::NotJson.into())
            }
        }
    }
}

/// Parse an identifier taken from the request path.
///
/// A malformed identifier cannot name anything, so it is reported as
/// not found rather than as a bad request.
pub(crate) fn path_id<I: FromStr>(entity: &'static str, raw: &str) -> Result<I, ApiError> {
    raw.parse().map_err(|_| {
        ApiError::from(NotFoundError {
            entity,
            id: raw.to_string(),
        })
    })
}

/// Read a required string field of a creation body.
pub(crate) fn required_string(
    body: &mut Map<String, Value>,
    field: &'static str,
) -> Result<String, ApiError> {
    match body.remove(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(field).into()),
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(ValidationError::InvalidField {
            field,
            expected: "a string",
        }
        .into()),
    }
}

/// Read an optional string field of a creation body.
pub(crate) fn optional_string(
    body: &mut Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, ApiError> {
    match body.remove(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(_) => Err(ValidationError::InvalidField {
            field,
            expected: "a string",
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;
    use hbnb_domain::id::PlaceId;

    async fn extract(content_type: Option<&str>, body: &'static str) -> Result<JsonObject, ApiError> {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        let req = builder.body(Body::from(body)).unwrap();
        JsonObject::from_request(req, &()).await
    }

    #[tokio::test]
    async fn should_accept_json_object() {
        let JsonObject(map) = extract(Some("application/json"), r#"{"name":"Loft"}"#)
            .await
            .unwrap();
        assert_eq!(map.get("name"), Some(&Value::String("Loft".to_string())));
    }

    #[tokio::test]
    async fn should_reject_non_object_bodies() {
        for (content_type, body) in [
            (Some("application/json"), "[1, 2]"),
            (Some("application/json"), "not json"),
            (Some("text/plain"), r#"{"name":"Loft"}"#),
            (None, ""),
        ] {
            let err = extract(content_type, body).await.unwrap_err();
            assert!(
                format!("{err:?}").contains("NotJson"),
                "{content_type:?} {body}"
            );
        }
    }

    #[test]
    fn should_report_malformed_path_id_as_not_found() {
        let err = path_id::<PlaceId>("Place", "nope").unwrap_err();
        assert!(format!("{err:?}").contains("NotFound"));
    }

    #[test]
    fn should_distinguish_missing_and_mistyped_fields() {
        let mut body = serde_json::json!({"email": 3})
            .as_object()
            .cloned()
            .unwrap();
        let missing = required_string(&mut body, "name").unwrap_err();
        assert!(format!("{missing:?}").contains("MissingField(\"name\")"));
        let mistyped = required_string(&mut body, "email").unwrap_err();
        assert!(format!("{mistyped:?}").contains("InvalidField"));
    }
}
