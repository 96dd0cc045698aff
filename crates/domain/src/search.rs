//! Place search criteria.
//!
//! Criteria are built from the raw identifier strings a client sends.
//! Identifiers that do not parse are dropped, exactly like identifiers that
//! name nothing in storage are skipped by the search.

use std::str::FromStr;

use crate::id::{AmenityId, CityId, StateId};

/// Filter applied by the place search.
///
/// - `states` / `cities` scope the candidate set. When neither was given,
///   every place is a candidate.
/// - `amenities` narrows the candidates to places linked to all of them.
///   Amenities that do not exist are not required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    states: Vec<StateId>,
    cities: Vec<CityId>,
    amenities: Vec<AmenityId>,
    scoped: bool,
}

impl SearchCriteria {
    /// Build criteria from client-supplied identifier strings.
    #[must_use]
    pub fn from_raw<S: AsRef<str>>(states: &[S], cities: &[S], amenities: &[S]) -> Self {
        Self {
            scoped: !states.is_empty() || !cities.is_empty(),
            states: parse_all(states),
            cities: parse_all(cities),
            amenities: parse_all(amenities),
        }
    }

    /// Restrict the candidates to places in these states.
    #[must_use]
    pub fn with_states(mut self, states: impl IntoIterator<Item = StateId>) -> Self {
        self.states.extend(states);
        self.scoped = self.scoped || !self.states.is_empty();
        self
    }

    /// Restrict the candidates to places in these cities.
    #[must_use]
    pub fn with_cities(mut self, cities: impl IntoIterator<Item = CityId>) -> Self {
        self.cities.extend(cities);
        self.scoped = self.scoped || !self.cities.is_empty();
        self
    }

    /// Require every one of these amenities.
    #[must_use]
    pub fn with_amenities(mut self, amenities: impl IntoIterator<Item = AmenityId>) -> Self {
        self.amenities.extend(amenities);
        self
    }

    #[must_use]
    pub fn states(&self) -> &[StateId] {
        &self.states
    }

    #[must_use]
    pub fn cities(&self) -> &[CityId] {
        &self.cities
    }

    #[must_use]
    pub fn amenities(&self) -> &[AmenityId] {
        &self.amenities
    }

    /// Whether states or cities were given. Unscoped criteria start from
    /// every stored place.
    #[must_use]
    pub fn is_scoped(&self) -> bool {
        self.scoped
    }
}

fn parse_all<T: FromStr, S: AsRef<str>>(raw: &[S]) -> Vec<T> {
    raw.iter()
        .filter_map(|value| value.as_ref().parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_be_unscoped_when_empty() {
        let criteria = SearchCriteria::from_raw::<String>(&[], &[], &[]);
        assert!(!criteria.is_scoped());
        assert!(criteria.amenities().is_empty());
    }

    #[test]
    fn should_stay_scoped_when_ids_do_not_parse() {
        let criteria = SearchCriteria::from_raw(&["nope"], &[], &[]);
        assert!(criteria.is_scoped());
        assert!(criteria.states().is_empty());
    }

    #[test]
    fn should_parse_valid_ids() {
        let city = CityId::new();
        let city_raw = city.to_string();
        let criteria = SearchCriteria::from_raw(&[], &[city_raw.as_str()], &[]);
        assert_eq!(criteria.cities(), &[city]);
    }

    #[test]
    fn should_drop_malformed_amenity_ids() {
        let wifi = AmenityId::new();
        let wifi_raw = wifi.to_string();
        let criteria = SearchCriteria::from_raw(&[], &[], &[wifi_raw.as_str(), "garbage"]);
        assert_eq!(criteria.amenities(), &[wifi]);
        assert!(!criteria.is_scoped());
    }

    #[test]
    fn should_accumulate_builder_filters() {
        let state = StateId::new();
        let wifi = AmenityId::new();
        let criteria = SearchCriteria::default()
            .with_states([state])
            .with_amenities([wifi]);
        assert!(criteria.is_scoped());
        assert_eq!(criteria.states(), &[state]);
        assert_eq!(criteria.amenities(), &[wifi]);
    }
}
