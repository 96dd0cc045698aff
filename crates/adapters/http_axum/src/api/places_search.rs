//! `POST /api/v1/places_search`: filter places by state, city and amenity.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Map, Value};

use hbnb_app::ports::{
    AmenityRepository, CityRepository, PlaceRepository, StateRepository, UserRepository,
};
use hbnb_domain::error::ValidationError;
use hbnb_domain::id::{CityId, PlaceId, UserId};
use hbnb_domain::place::Place;
use hbnb_domain::search::SearchCriteria;
use hbnb_domain::time::Timestamp;

use crate::error::ApiError;
use crate::extract::JsonObject;
use crate::state::AppState;

/// A place as returned by the search: every attribute except its
/// relationships.
#[derive(Debug, Serialize)]
pub struct PlaceSummary {
    pub id: PlaceId,
    pub city_id: CityId,
    pub user_id: UserId,
    pub name: String,
    pub description: String,
    pub number_rooms: u32,
    pub number_bathrooms: u32,
    pub max_guest: u32,
    pub price_by_night: u32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<Place> for PlaceSummary {
    fn from(place: Place) -> Self {
        Self {
            id: place.id,
            city_id: place.city_id,
            user_id: place.user_id,
            name: place.name,
            description: place.description,
            number_rooms: place.number_rooms,
            number_bathrooms: place.number_bathrooms,
            max_guest: place.max_guest,
            price_by_night: place.price_by_night,
            latitude: place.latitude,
            longitude: place.longitude,
            created_at: place.created_at,
            updated_at: place.updated_at,
            extra: place.extra,
        }
    }
}

/// Possible responses from the search endpoint.
pub enum SearchResponse {
    Ok(Json<Vec<PlaceSummary>>),
}

impl IntoResponse for SearchResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/v1/places_search`
pub async fn search<P, C, S, U, A>(
    State(state): State<AppState<P, C, S, U, A>>,
    JsonObject(body): JsonObject,
) -> Result<SearchResponse, ApiError>
where
    P: PlaceRepository + 'static,
    C: CityRepository + 'static,
    S: StateRepository + 'static,
    U: UserRepository + 'static,
    A: AmenityRepository + 'static,
{
    let criteria = criteria(&body)?;
    let places = state.search_service.search(&criteria).await?;
    let summaries = places.into_iter().map(PlaceSummary::from).collect();
    Ok(SearchResponse::Ok(Json(summaries)))
}

fn criteria(body: &Map<String, Value>) -> Result<SearchCriteria, ApiError> {
    let states = id_list(body, "states")?;
    let cities = id_list(body, "cities")?;
    let amenities = id_list(body, "amenities")?;
    Ok(SearchCriteria::from_raw(&states, &cities, &amenities))
}

/// Read an optional array of ids. Non-string items are kept in their JSON
/// form: they still scope a search but name nothing.
fn id_list(body: &Map<String, Value>, field: &'static str) -> Result<Vec<String>, ApiError> {
    match body.get(field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items
            .iter()
            .map(|item| match item {
                Value::String(id) => id.clone(),
                other => other.to_string(),
            })
            .collect()),
        Some(_) => Err(ValidationError::InvalidField {
            field,
            expected: "an array of ids",
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hbnb_domain::id::AmenityId;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn should_build_unscoped_criteria_from_empty_body() {
        let criteria = criteria(&Map::new()).unwrap();
        assert_eq!(criteria, SearchCriteria::default());
    }

    #[test]
    fn should_reject_non_array_filter() {
        let result = criteria(&object(json!({"cities": "c1"})));
        assert!(result.is_err());
    }

    #[test]
    fn should_ignore_non_string_amenity_ids() {
        let amenity = AmenityId::new();
        let criteria = criteria(&object(json!({"amenities": [amenity.to_string(), 3]}))).unwrap();
        assert_eq!(criteria.amenities(), &[amenity]);
    }

    #[test]
    fn should_stay_scoped_when_city_ids_are_not_strings() {
        let criteria = criteria(&object(json!({"cities": [12]}))).unwrap();
        assert!(criteria.is_scoped());
        assert!(criteria.cities().is_empty());
    }

    #[test]
    fn should_serialize_summary_without_relationships() {
        let mut place = Place::builder()
            .city_id(CityId::new())
            .user_id(UserId::new())
            .name("Loft")
            .build()
            .unwrap();
        place.link_amenity(AmenityId::new());
        place.extra.insert("view".to_string(), json!("sea"));

        let value = serde_json::to_value(PlaceSummary::from(place)).unwrap();
        let keys = value.as_object().unwrap();
        assert!(!keys.contains_key("amenity_ids"));
        assert!(!keys.contains_key("amenities"));
        assert!(!keys.contains_key("reviews"));
        assert_eq!(keys.get("view"), Some(&json!("sea")));
        assert_eq!(keys.get("name"), Some(&json!("Loft")));
    }
}
