//! Place amenity service: manage the links between a place and amenities.

use std::sync::Arc;

use hbnb_domain::amenity::Amenity;
use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::{AmenityId, PlaceId};
use hbnb_domain::place::Place;
use hbnb_domain::time::now;

use super::require;
use crate::ports::{AmenityRepository, PlaceRepository};

/// Result of linking an amenity to a place.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkOutcome {
    /// The link did not exist and was created.
    Created(Amenity),
    /// The amenity was already linked; nothing changed.
    AlreadyLinked(Amenity),
}

/// Application service for place ↔ amenity links.
pub struct PlaceAmenityService<P, A> {
    places: Arc<P>,
    amenities: Arc<A>,
}

impl<P, A> PlaceAmenityService<P, A>
where
    P: PlaceRepository,
    A: AmenityRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(places: Arc<P>, amenities: Arc<A>) -> Self {
        Self { places, amenities }
    }

    /// List the amenities linked to a place, in link order.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the place does not exist,
    /// or a storage error from a repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_amenities(&self, place_id: PlaceId) -> Result<Vec<Amenity>, HbnbError> {
        let place = require::<Place, _>(self.places.as_ref(), place_id).await?;
        let mut linked = Vec::with_capacity(place.amenity_ids.len());
        for amenity_id in place.amenity_ids {
            match self.amenities.get_by_id(amenity_id).await? {
                Some(amenity) => linked.push(amenity),
                None => tracing::warn!(%amenity_id, "place links a missing amenity"),
            }
        }
        Ok(linked)
    }

    /// Get one amenity through its link with a place.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the place, the amenity, or the
    /// link does not exist, or a storage error from a repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_amenity(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> Result<Amenity, HbnbError> {
        let (place, amenity) = self.resolve(place_id, amenity_id).await?;
        if !place.has_amenity(amenity_id) {
            return Err(missing_link(place_id, amenity_id).into());
        }
        Ok(amenity)
    }

    /// Link an amenity to a place. Linking twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the place or the amenity does not
    /// exist, or a storage error from a repository.
    #[tracing::instrument(skip(self))]
    pub async fn link_amenity(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> Result<LinkOutcome, HbnbError> {
        let (mut place, amenity) = self.resolve(place_id, amenity_id).await?;
        if !place.link_amenity(amenity_id) {
            return Ok(LinkOutcome::AlreadyLinked(amenity));
        }
        place.touch(now());
        self.places.update(place).await?;
        tracing::info!(%place_id, %amenity_id, "amenity linked");
        Ok(LinkOutcome::Created(amenity))
    }

    /// Remove the link between a place and an amenity.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the place, the amenity, or the
    /// link does not exist, or a storage error from a repository.
    #[tracing::instrument(skip(self))]
    pub async fn unlink_amenity(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> Result<(), HbnbError> {
        let (mut place, _) = self.resolve(place_id, amenity_id).await?;
        if !place.unlink_amenity(amenity_id) {
            return Err(missing_link(place_id, amenity_id).into());
        }
        place.touch(now());
        self.places.update(place).await?;
        tracing::info!(%place_id, %amenity_id, "amenity unlinked");
        Ok(())
    }

    async fn resolve(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> Result<(Place, Amenity), HbnbError> {
        let place = require::<Place, _>(self.places.as_ref(), place_id).await?;
        let amenity = require::<Amenity, _>(self.amenities.as_ref(), amenity_id).await?;
        Ok((place, amenity))
    }
}

fn missing_link(place_id: PlaceId, amenity_id: AmenityId) -> NotFoundError {
    NotFoundError {
        entity: "Amenity link",
        id: format!("{place_id}/{amenity_id}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fakes::InMemoryRepo;
    use hbnb_domain::id::{CityId, UserId};

    type Service = PlaceAmenityService<InMemoryRepo<Place>, InMemoryRepo<Amenity>>;

    struct Fixture {
        svc: Service,
        places: Arc<InMemoryRepo<Place>>,
        place: Place,
        wifi: Amenity,
        pool: Amenity,
    }

    fn fixture() -> Fixture {
        let place = Place::builder()
            .city_id(CityId::new())
            .user_id(UserId::new())
            .name("Loft")
            .build()
            .unwrap();
        let wifi = Amenity::new("Wifi").unwrap();
        let pool = Amenity::new("Pool").unwrap();

        let places = Arc::new(InMemoryRepo::with([place.clone()]));
        let amenities = Arc::new(InMemoryRepo::with([wifi.clone(), pool.clone()]));
        Fixture {
            svc: PlaceAmenityService::new(Arc::clone(&places), amenities),
            places,
            place,
            wifi,
            pool,
        }
    }

    fn stored_links(f: &Fixture) -> Vec<AmenityId> {
        f.places.snapshot()[0].amenity_ids.clone()
    }

    #[tokio::test]
    async fn should_create_link_then_report_existing() {
        let f = fixture();

        let first = f.svc.link_amenity(f.place.id, f.wifi.id).await.unwrap();
        assert_eq!(first, LinkOutcome::Created(f.wifi.clone()));

        let second = f.svc.link_amenity(f.place.id, f.wifi.id).await.unwrap();
        assert_eq!(second, LinkOutcome::AlreadyLinked(f.wifi.clone()));

        assert_eq!(stored_links(&f), vec![f.wifi.id]);
    }

    #[tokio::test]
    async fn should_list_amenities_in_link_order() {
        let f = fixture();
        f.svc.link_amenity(f.place.id, f.pool.id).await.unwrap();
        f.svc.link_amenity(f.place.id, f.wifi.id).await.unwrap();

        let listed = f.svc.list_amenities(f.place.id).await.unwrap();
        assert_eq!(listed, vec![f.pool.clone(), f.wifi.clone()]);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_place_or_amenity() {
        let f = fixture();
        assert!(matches!(
            f.svc.list_amenities(PlaceId::new()).await,
            Err(HbnbError::NotFound(_))
        ));
        assert!(matches!(
            f.svc.link_amenity(PlaceId::new(), f.wifi.id).await,
            Err(HbnbError::NotFound(e)) if e.entity == "Place"
        ));
        assert!(matches!(
            f.svc.link_amenity(f.place.id, AmenityId::new()).await,
            Err(HbnbError::NotFound(e)) if e.entity == "Amenity"
        ));
    }

    #[tokio::test]
    async fn should_get_linked_amenity_only() {
        let f = fixture();
        f.svc.link_amenity(f.place.id, f.wifi.id).await.unwrap();

        let amenity = f.svc.get_amenity(f.place.id, f.wifi.id).await.unwrap();
        assert_eq!(amenity, f.wifi);

        let result = f.svc.get_amenity(f.place.id, f.pool.id).await;
        assert!(matches!(result, Err(HbnbError::NotFound(e)) if e.entity == "Amenity link"));
    }

    #[tokio::test]
    async fn should_unlink_amenity() {
        let f = fixture();
        f.svc.link_amenity(f.place.id, f.wifi.id).await.unwrap();
        f.svc.link_amenity(f.place.id, f.pool.id).await.unwrap();

        f.svc.unlink_amenity(f.place.id, f.wifi.id).await.unwrap();

        assert_eq!(stored_links(&f), vec![f.pool.id]);
    }

    #[tokio::test]
    async fn should_return_not_found_when_unlinking_absent_link() {
        let f = fixture();
        let result = f.svc.unlink_amenity(f.place.id, f.wifi.id).await;
        assert!(matches!(result, Err(HbnbError::NotFound(_))));
    }
}
