//! `SQLite` implementation of [`PlaceRepository`].
//!
//! A place is stored as one `places` row plus its `place_amenity` link rows.
//! [`Repository::update`] replaces the whole link set inside the same
//! transaction as the row. [`PlaceRepository::update_details`] touches the
//! row only.

use std::collections::HashMap;

use serde_json::{Map, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, Sqlite, SqlitePool, Transaction};

use hbnb_app::ports::{PlaceRepository, Repository};
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{AmenityId, CityId, PlaceId};
use hbnb_domain::place::Place;
use hbnb_domain::time::to_rfc3339;

use crate::decode;
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Place`].
///
/// Rows carry no links; they are attached from a second query.
struct Wrapper(Place);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let extra_json: String = row.try_get("extra")?;
        let extra: Map<String, Value> =
            serde_json::from_str(&extra_json).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Place {
            id: decode::id(row, "id")?,
            city_id: decode::id(row, "city_id")?,
            user_id: decode::id(row, "user_id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            number_rooms: row.try_get("number_rooms")?,
            number_bathrooms: row.try_get("number_bathrooms")?,
            max_guest: row.try_get("max_guest")?,
            price_by_night: row.try_get("price_by_night")?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
            amenity_ids: Vec::new(),
            created_at: decode::timestamp(row, "created_at")?,
            updated_at: decode::timestamp(row, "updated_at")?,
            extra,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO places (
        id, city_id, user_id, name, description, number_rooms, number_bathrooms,
        max_guest, price_by_night, latitude, longitude, extra, created_at, updated_at
    )
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
";

const SELECT_BY_ID: &str = "SELECT * FROM places WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM places ORDER BY rowid";
const SELECT_BY_CITY: &str = "SELECT * FROM places WHERE city_id = ? ORDER BY rowid";

const UPDATE: &str = r"
    UPDATE places
    SET name = ?, description = ?, number_rooms = ?, number_bathrooms = ?,
        max_guest = ?, price_by_night = ?, latitude = ?, longitude = ?, extra = ?,
        updated_at = ?
    WHERE id = ?
";

const DELETE_BY_ID: &str = "DELETE FROM places WHERE id = ?";

const SELECT_LINKS_OF_PLACE: &str = r"
    SELECT place_id, amenity_id FROM place_amenity
    WHERE place_id = ?
    ORDER BY position
";
const SELECT_LINKS_OF_CITY: &str = r"
    SELECT pa.place_id, pa.amenity_id FROM place_amenity pa
    JOIN places p ON p.id = pa.place_id
    WHERE p.city_id = ?
    ORDER BY pa.position
";
const SELECT_ALL_LINKS: &str = "SELECT place_id, amenity_id FROM place_amenity ORDER BY position";
const DELETE_LINKS: &str = "DELETE FROM place_amenity WHERE place_id = ?";
const INSERT_LINK: &str =
    "INSERT INTO place_amenity (place_id, amenity_id, position) VALUES (?, ?, ?)";

/// Amenity ids per place, each list in link order.
type Links = HashMap<PlaceId, Vec<AmenityId>>;

/// `SQLite`-backed place repository.
pub struct SqlitePlaceRepository {
    pool: SqlitePool,
}

impl SqlitePlaceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn links(&self, sql: &'static str, key: Option<String>) -> Result<Links, StorageError> {
        let mut query = sqlx::query_as::<Sqlite, (String, String)>(sql);
        if let Some(key) = key {
            query = query.bind(key);
        }
        group_links(query.fetch_all(&self.pool).await?)
    }

    fn attach(rows: Vec<Wrapper>, mut links: Links) -> Vec<Place> {
        rows.into_iter()
            .map(|Wrapper(mut place)| {
                place.amenity_ids = links.remove(&place.id).unwrap_or_default();
                place
            })
            .collect()
    }
}

fn group_links(rows: Vec<(String, String)>) -> Result<Links, StorageError> {
    let mut links = Links::new();
    for (place_id, amenity_id) in rows {
        links
            .entry(decode::parse_id(&place_id)?)
            .or_default()
            .push(decode::parse_id(&amenity_id)?);
    }
    Ok(links)
}

async fn write_row(tx: &mut Transaction<'_, Sqlite>, place: &Place) -> Result<(), StorageError> {
    let extra_json = serde_json::to_string(&place.extra)?;
    sqlx::query(UPDATE)
        .bind(&place.name)
        .bind(&place.description)
        .bind(place.number_rooms)
        .bind(place.number_bathrooms)
        .bind(place.max_guest)
        .bind(place.price_by_night)
        .bind(place.latitude)
        .bind(place.longitude)
        .bind(&extra_json)
        .bind(to_rfc3339(place.updated_at))
        .bind(place.id.to_string())
        .execute(&mut **tx)
        .await?;
    Ok(())
}

async fn write_links(
    tx: &mut Transaction<'_, Sqlite>,
    place: &Place,
) -> Result<(), StorageError> {
    let place_id = place.id.to_string();
    sqlx::query(DELETE_LINKS)
        .bind(&place_id)
        .execute(&mut **tx)
        .await?;
    for (position, amenity_id) in (0_i64..).zip(&place.amenity_ids) {
        sqlx::query(INSERT_LINK)
            .bind(&place_id)
            .bind(amenity_id.to_string())
            .bind(position)
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}

impl Repository<Place> for SqlitePlaceRepository {
    async fn create(&self, place: Place) -> Result<Place, HbnbError> {
        let extra_json = serde_json::to_string(&place.extra).map_err(StorageError::from)?;

        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;
        sqlx::query(INSERT)
            .bind(place.id.to_string())
            .bind(place.city_id.to_string())
            .bind(place.user_id.to_string())
            .bind(&place.name)
            .bind(&place.description)
            .bind(place.number_rooms)
            .bind(place.number_bathrooms)
            .bind(place.max_guest)
            .bind(place.price_by_night)
            .bind(place.latitude)
            .bind(place.longitude)
            .bind(&extra_json)
            .bind(to_rfc3339(place.created_at))
            .bind(to_rfc3339(place.updated_at))
            .execute(&mut *tx)
            .await
            .map_err(StorageError::from)?;
        write_links(&mut tx, &place).await?;
        tx.commit().await.map_err(StorageError::from)?;

        Ok(place)
    }

    async fn get_by_id(&self, id: PlaceId) -> Result<Option<Place>, HbnbError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;
        let Some(row) = row else {
            return Ok(None);
        };

        let links = self
            .links(SELECT_LINKS_OF_PLACE, Some(id.to_string()))
            .await?;
        Ok(Self::attach(vec![row], links).pop())
    }

    async fn get_all(&self) -> Result<Vec<Place>, HbnbError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        let links = self.links(SELECT_ALL_LINKS, None).await?;
        Ok(Self::attach(rows, links))
    }

    async fn update(&self, place: Place) -> Result<Place, HbnbError> {
        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;
        write_row(&mut tx, &place).await?;
        write_links(&mut tx, &place).await?;
        tx.commit().await.map_err(StorageError::from)?;

        Ok(place)
    }

    async fn delete(&self, id: PlaceId) -> Result<(), HbnbError> {
        sqlx::query(DELETE_BY_ID)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }
}

impl PlaceRepository for SqlitePlaceRepository {
    async fn find_by_city(&self, city_id: CityId) -> Result<Vec<Place>, HbnbError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_CITY)
            .bind(city_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        let links = self
            .links(SELECT_LINKS_OF_CITY, Some(city_id.to_string()))
            .await?;
        Ok(Self::attach(rows, links))
    }

    async fn update_details(&self, mut place: Place) -> Result<Place, HbnbError> {
        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;
        write_row(&mut tx, &place).await?;
        let rows = sqlx::query_as::<Sqlite, (String, String)>(SELECT_LINKS_OF_PLACE)
            .bind(place.id.to_string())
            .fetch_all(&mut *tx)
            .await
            .map_err(StorageError::from)?;
        tx.commit().await.map_err(StorageError::from)?;

        place.amenity_ids = group_links(rows)?.remove(&place.id).unwrap_or_default();
        Ok(place)
    }
}
