//! Typed view of the JSON bodies that create or update a place.

use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Keys a client can never change on an existing place.
const PROTECTED_KEYS: [&str; 5] = ["id", "user_id", "city_id", "created_at", "updated_at"];

/// Relationship keys. Links are managed through their own endpoints.
const RELATIONSHIP_KEYS: [&str; 3] = ["amenity_ids", "amenities", "reviews"];

const STRING: &str = "a string";
const COUNT: &str = "a non-negative integer";
const COORDINATE: &str = "a number or null";

/// Allow-list of the mutable place attributes.
///
/// `None` means "leave unchanged". Coordinates are doubly optional so that
/// an explicit `null` clears them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub number_rooms: Option<u32>,
    pub number_bathrooms: Option<u32>,
    pub max_guest: Option<u32>,
    pub price_by_night: Option<u32>,
    pub latitude: Option<Option<f64>>,
    pub longitude: Option<Option<f64>>,
    /// Unknown keys, kept verbatim.
    pub extra: Map<String, Value>,
}

impl PlacePatch {
    /// Sort a JSON object into typed fields and the extension map.
    ///
    /// Protected and relationship keys are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidField`] when a recognised key holds
    /// a value of the wrong JSON type.
    pub fn from_json(body: Map<String, Value>) -> Result<Self, ValidationError> {
        let mut patch = Self::default();
        for (key, value) in body {
            match key.as_str() {
                "name" => patch.name = Some(string("name", value)?),
                "description" => patch.description = Some(string("description", value)?),
                "number_rooms" => patch.number_rooms = Some(count("number_rooms", value)?),
                "number_bathrooms" => {
                    patch.number_bathrooms = Some(count("number_bathrooms", value)?);
                }
                "max_guest" => patch.max_guest = Some(count("max_guest", value)?),
                "price_by_night" => patch.price_by_night = Some(count("price_by_night", value)?),
                "latitude" => patch.latitude = Some(coordinate("latitude", value)?),
                "longitude" => patch.longitude = Some(coordinate("longitude", value)?),
                other if PROTECTED_KEYS.contains(&other) || RELATIONSHIP_KEYS.contains(&other) => {}
                _ => {
                    patch.extra.insert(key, value);
                }
            }
        }
        Ok(patch)
    }

    /// Overlay the fields set in `other` onto `self`.
    pub(crate) fn merge(&mut self, other: Self) {
        self.name = other.name.or(self.name.take());
        self.description = other.description.or(self.description.take());
        self.number_rooms = other.number_rooms.or(self.number_rooms);
        self.number_bathrooms = other.number_bathrooms.or(self.number_bathrooms);
        self.max_guest = other.max_guest.or(self.max_guest);
        self.price_by_night = other.price_by_night.or(self.price_by_night);
        self.latitude = other.latitude.or(self.latitude);
        self.longitude = other.longitude.or(self.longitude);
        self.extra.extend(other.extra);
    }
}

/// Body of a place creation request, before references are resolved.
///
/// `user_id` is kept raw: whether it names an existing user is decided by
/// the service, which reports a malformed id as an unknown one.
/// `attributes.name` is always set.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlace {
    pub user_id: String,
    pub attributes: PlacePatch,
}

impl NewPlace {
    /// Split a creation body into the owner reference and the attributes.
    ///
    /// Required fields are checked before any attribute is parsed, owner
    /// first. A `null` value counts as absent. Any `city_id` in the body is
    /// dropped; the owning city always comes from the request path.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for `user_id`, then `name`,
    /// and [`ValidationError::InvalidField`] when `user_id` is not a string
    /// or an attribute has the wrong JSON type.
    pub fn from_json(mut body: Map<String, Value>) -> Result<Self, ValidationError> {
        let user_id = match body.remove("user_id") {
            None | Some(Value::Null) => return Err(ValidationError::MissingField("user_id")),
            Some(value) => string("user_id", value)?,
        };
        if matches!(body.get("name"), None | Some(Value::Null)) {
            return Err(ValidationError::MissingField("name"));
        }
        Ok(Self {
            user_id,
            attributes: PlacePatch::from_json(body)?,
        })
    }
}

fn string(field: &'static str, value: Value) -> Result<String, ValidationError> {
    match value {
        Value::String(s) => Ok(s),
        _ => Err(ValidationError::InvalidField {
            field,
            expected: STRING,
        }),
    }
}

fn count(field: &'static str, value: Value) -> Result<u32, ValidationError> {
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or(ValidationError::InvalidField {
            field,
            expected: COUNT,
        })
}

fn coordinate(field: &'static str, value: Value) -> Result<Option<f64>, ValidationError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n.as_f64().map(Some).ok_or(ValidationError::InvalidField {
            field,
            expected: COORDINATE,
        }),
        _ => Err(ValidationError::InvalidField {
            field,
            expected: COORDINATE,
        }),
    }
}
