//! Place: a rental listing owned by a user, located in a city.
//!
//! A place links to any number of amenities. The link set is kept on the
//! place itself as an ordered list of [`AmenityId`]s with set semantics:
//! linking twice never duplicates an entry.

mod patch;

pub use patch::{NewPlace, PlacePatch};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{HbnbError, ValidationError};
use crate::id::{AmenityId, CityId, PlaceId, UserId};
use crate::record::Record;
use crate::time::{Timestamp, now};

/// A rental listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
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
    pub amenity_ids: Vec<AmenityId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Keys the typed model does not know about, echoed back verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Place {
    /// Create a builder for constructing a [`Place`].
    #[must_use]
    pub fn builder() -> PlaceBuilder {
        PlaceBuilder::default()
    }

    /// Apply every field set in `patch`. Identity, ownership and timestamps
    /// are never touched.
    pub fn apply(&mut self, patch: PlacePatch) {
        let PlacePatch {
            name,
            description,
            number_rooms,
            number_bathrooms,
            max_guest,
            price_by_night,
            latitude,
            longitude,
            extra,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(number_rooms) = number_rooms {
            self.number_rooms = number_rooms;
        }
        if let Some(number_bathrooms) = number_bathrooms {
            self.number_bathrooms = number_bathrooms;
        }
        if let Some(max_guest) = max_guest {
            self.max_guest = max_guest;
        }
        if let Some(price_by_night) = price_by_night {
            self.price_by_night = price_by_night;
        }
        if let Some(latitude) = latitude {
            self.latitude = latitude;
        }
        if let Some(longitude) = longitude {
            self.longitude = longitude;
        }
        self.extra.extend(extra);
    }

    /// Whether `amenity_id` is linked to this place.
    #[must_use]
    pub fn has_amenity(&self, amenity_id: AmenityId) -> bool {
        self.amenity_ids.contains(&amenity_id)
    }

    /// Whether every id in `amenity_ids` is linked to this place.
    ///
    /// Trivially true for an empty slice.
    #[must_use]
    pub fn has_amenities(&self, amenity_ids: &[AmenityId]) -> bool {
        amenity_ids.iter().all(|id| self.has_amenity(*id))
    }

    /// Link an amenity. Returns `false` when it was already linked.
    pub fn link_amenity(&mut self, amenity_id: AmenityId) -> bool {
        if self.has_amenity(amenity_id) {
            return false;
        }
        self.amenity_ids.push(amenity_id);
        true
    }

    /// Unlink an amenity. Returns `false` when it was not linked.
    pub fn unlink_amenity(&mut self, amenity_id: AmenityId) -> bool {
        let before = self.amenity_ids.len();
        self.amenity_ids.retain(|id| *id != amenity_id);
        self.amenity_ids.len() != before
    }

    /// Refresh `updated_at` before persisting a mutation.
    pub fn touch(&mut self, at: Timestamp) {
        self.updated_at = at;
    }
}

impl Record for Place {
    type Id = PlaceId;

    const KIND: &'static str = "Place";

    fn id(&self) -> PlaceId {
        self.id
    }

    fn validate(&self) -> Result<(), HbnbError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyField("name").into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Place`].
#[derive(Debug, Default)]
pub struct PlaceBuilder {
    id: Option<PlaceId>,
    city_id: Option<CityId>,
    user_id: Option<UserId>,
    patch: PlacePatch,
}

impl PlaceBuilder {
    #[must_use]
    pub fn id(mut self, id: PlaceId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn city_id(mut self, city_id: CityId) -> Self {
        self.city_id = Some(city_id);
        self
    }

    #[must_use]
    pub fn user_id(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.patch.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.patch.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn max_guest(mut self, max_guest: u32) -> Self {
        self.patch.max_guest = Some(max_guest);
        self
    }

    #[must_use]
    pub fn price_by_night(mut self, price_by_night: u32) -> Self {
        self.patch.price_by_night = Some(price_by_night);
        self
    }

    /// Seed the remaining attributes from a parsed request body. Fields set
    /// earlier on the builder are overridden by those present in `patch`.
    #[must_use]
    pub fn patch(mut self, patch: PlacePatch) -> Self {
        self.patch.merge(patch);
        self
    }

    /// Consume the builder, validate, and return a [`Place`].
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if `city_id` or `user_id` is missing,
    /// or `name` is missing or empty.
    pub fn build(self) -> Result<Place, HbnbError> {
        let city_id = self.city_id.ok_or(ValidationError::MissingField("city_id"))?;
        let user_id = self.user_id.ok_or(ValidationError::MissingField("user_id"))?;
        let ts = now();
        let mut place = Place {
            id: self.id.unwrap_or_default(),
            city_id,
            user_id,
            name: String::new(),
            description: String::new(),
            number_rooms: 0,
            number_bathrooms: 0,
            max_guest: 0,
            price_by_night: 0,
            latitude: None,
            longitude: None,
            amenity_ids: Vec::new(),
            created_at: ts,
            updated_at: ts,
            extra: Map::new(),
        };
        place.apply(self.patch);
        place.validate()?;
        Ok(place)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn place() -> Place {
        Place::builder()
            .city_id(CityId::new())
            .user_id(UserId::new())
            .name("Cozy loft")
            .build()
            .unwrap()
    }

    #[test]
    fn should_build_place_with_defaults() {
        let place = place();
        assert_eq!(place.name, "Cozy loft");
        assert_eq!(place.description, "");
        assert_eq!(place.number_rooms, 0);
        assert!(place.latitude.is_none());
        assert!(place.amenity_ids.is_empty());
        assert_eq!(place.created_at, place.updated_at);
    }

    #[test]
    fn should_reject_build_without_name() {
        let result = Place::builder()
            .city_id(CityId::new())
            .user_id(UserId::new())
            .build();
        assert!(matches!(
            result,
            Err(HbnbError::Validation(ValidationError::EmptyField("name")))
        ));
    }

    #[test]
    fn should_reject_build_without_owner() {
        let result = Place::builder()
            .city_id(CityId::new())
            .name("Orphan")
            .build();
        assert!(matches!(
            result,
            Err(HbnbError::Validation(ValidationError::MissingField(
                "user_id"
            )))
        ));
    }

    #[test]
    fn should_link_amenity_only_once() {
        let mut place = place();
        let wifi = AmenityId::new();

        assert!(place.link_amenity(wifi));
        assert!(!place.link_amenity(wifi));
        assert_eq!(place.amenity_ids, vec![wifi]);
    }

    #[test]
    fn should_unlink_amenity() {
        let mut place = place();
        let wifi = AmenityId::new();
        place.link_amenity(wifi);

        assert!(place.unlink_amenity(wifi));
        assert!(!place.unlink_amenity(wifi));
        assert!(place.amenity_ids.is_empty());
    }

    #[test]
    fn should_keep_link_order() {
        let mut place = place();
        let first = AmenityId::new();
        let second = AmenityId::new();
        place.link_amenity(second);
        place.link_amenity(first);
        assert_eq!(place.amenity_ids, vec![second, first]);
    }

    #[test]
    fn should_match_amenity_superset() {
        let mut place = place();
        let wifi = AmenityId::new();
        let pool = AmenityId::new();
        place.link_amenity(wifi);

        assert!(place.has_amenities(&[]));
        assert!(place.has_amenities(&[wifi]));
        assert!(!place.has_amenities(&[wifi, pool]));
    }

    #[test]
    fn should_apply_patch_without_touching_identity() {
        let mut place = place();
        let id = place.id;
        let owner = place.user_id;

        let body = json!({
            "id": "ignored",
            "user_id": "ignored",
            "name": "Sunny loft",
            "max_guest": 4,
            "latitude": 37.77,
            "pets": "allowed",
        });
        let patch = PlacePatch::from_json(body.as_object().unwrap().clone()).unwrap();
        place.apply(patch);

        assert_eq!(place.id, id);
        assert_eq!(place.user_id, owner);
        assert_eq!(place.name, "Sunny loft");
        assert_eq!(place.max_guest, 4);
        assert_eq!(place.latitude, Some(37.77));
        assert_eq!(place.extra.get("pets"), Some(&json!("allowed")));
    }

    #[test]
    fn should_flatten_extra_keys_when_serializing() {
        let mut place = place();
        place.extra.insert("pets".to_string(), json!(true));

        let value = serde_json::to_value(&place).unwrap();
        assert_eq!(value["pets"], json!(true));
        assert_eq!(value["name"], json!("Cozy loft"));
        assert!(value.get("extra").is_none());
        assert!(value["amenity_ids"].is_array());
    }
}
