//! Place search: filter places by state, city and amenities.

use std::collections::HashSet;
use std::sync::Arc;

use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{AmenityId, PlaceId};
use hbnb_domain::place::Place;
use hbnb_domain::search::SearchCriteria;

use crate::ports::{AmenityRepository, CityRepository, PlaceRepository, StateRepository};

/// Application service answering place searches.
pub struct PlaceSearchService<P, C, S, A> {
    places: Arc<P>,
    cities: Arc<C>,
    states: Arc<S>,
    amenities: Arc<A>,
}

impl<P, C, S, A> PlaceSearchService<P, C, S, A>
where
    P: PlaceRepository,
    C: CityRepository,
    S: StateRepository,
    A: AmenityRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(places: Arc<P>, cities: Arc<C>, states: Arc<S>, amenities: Arc<A>) -> Self {
        Self {
            places,
            cities,
            states,
            amenities,
        }
    }

    /// Return the places matching `criteria`.
    ///
    /// Unscoped criteria start from every place. Otherwise places of the
    /// requested states come first, then places of the requested cities,
    /// each place at most once. Unknown states and cities are skipped.
    /// The amenity requirement is applied last, in both cases, and only
    /// for amenities that exist.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from a repository.
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Place>, HbnbError> {
        let required = self.known_amenities(criteria).await?;
        let candidates = if criteria.is_scoped() {
            self.scoped_candidates(criteria).await?
        } else {
            self.places.get_all().await?
        };

        let matches: Vec<Place> = candidates
            .into_iter()
            .filter(|place| place.has_amenities(&required))
            .collect();
        tracing::debug!(matches = matches.len(), "place search done");
        Ok(matches)
    }

    async fn known_amenities(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<AmenityId>, HbnbError> {
        let mut known = Vec::with_capacity(criteria.amenities().len());
        for amenity_id in criteria.amenities() {
            if self.amenities.get_by_id(*amenity_id).await?.is_none() {
                tracing::debug!(%amenity_id, "skipping unknown amenity");
                continue;
            }
            known.push(*amenity_id);
        }
        Ok(known)
    }

    async fn scoped_candidates(&self, criteria: &SearchCriteria) -> Result<Vec<Place>, HbnbError> {
        let mut candidates = Candidates::default();

        for state_id in criteria.states() {
            if self.states.get_by_id(*state_id).await?.is_none() {
                tracing::debug!(%state_id, "skipping unknown state");
                continue;
            }
            for city in self.cities.find_by_state(*state_id).await? {
                candidates.extend(self.places.find_by_city(city.id).await?);
            }
        }

        for city_id in criteria.cities() {
            if self.cities.get_by_id(*city_id).await?.is_none() {
                tracing::debug!(%city_id, "skipping unknown city");
                continue;
            }
            candidates.extend(self.places.find_by_city(*city_id).await?);
        }

        Ok(candidates.places)
    }
}

/// Ordered, duplicate-free accumulation of places.
#[derive(Default)]
struct Candidates {
    seen: HashSet<PlaceId>,
    places: Vec<Place>,
}

impl Candidates {
    fn extend(&mut self, places: Vec<Place>) {
        for place in places {
            if self.seen.insert(place.id) {
                self.places.push(place);
            }
        }
    }
}
