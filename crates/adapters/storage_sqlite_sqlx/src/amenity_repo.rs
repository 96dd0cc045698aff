//! `SQLite` implementation of [`Repository`] for [`Amenity`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hbnb_app::ports::Repository;
use hbnb_domain::amenity::Amenity;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::AmenityId;
use hbnb_domain::time::to_rfc3339;

use crate::decode;
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Amenity`].
struct Wrapper(Amenity);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Amenity {
            id: decode::id(row, "id")?,
            name: row.try_get("name")?,
            created_at: decode::timestamp(row, "created_at")?,
            updated_at: decode::timestamp(row, "updated_at")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO amenities (id, name, created_at, updated_at) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM amenities WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM amenities ORDER BY rowid";
const UPDATE: &str = "UPDATE amenities SET name = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM amenities WHERE id = ?";

/// `SQLite`-backed amenity repository.
pub struct SqliteAmenityRepository {
    pool: SqlitePool,
}

impl SqliteAmenityRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl Repository<Amenity> for SqliteAmenityRepository {
    async fn create(&self, amenity: Amenity) -> Result<Amenity, HbnbError> {
        sqlx::query(INSERT)
            .bind(amenity.id.to_string())
            .bind(&amenity.name)
            .bind(to_rfc3339(amenity.created_at))
            .bind(to_rfc3339(amenity.updated_at))
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(amenity)
    }

    async fn get_by_id(&self, id: AmenityId) -> Result<Option<Amenity>, HbnbError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.map(|w| w.0))
    }

    async fn get_all(&self) -> Result<Vec<Amenity>, HbnbError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, amenity: Amenity) -> Result<Amenity, HbnbError> {
        sqlx::query(UPDATE)
            .bind(&amenity.name)
            .bind(to_rfc3339(amenity.updated_at))
            .bind(amenity.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(amenity)
    }

    async fn delete(&self, id: AmenityId) -> Result<(), HbnbError> {
        sqlx::query(DELETE_BY_ID)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::memory_pool;

    #[tokio::test]
    async fn should_create_and_retrieve_amenity() {
        let repo = SqliteAmenityRepository::new(memory_pool().await);
        let amenity = Amenity::new("Wifi").unwrap();

        repo.create(amenity.clone()).await.unwrap();

        let fetched = repo.get_by_id(amenity.id).await.unwrap().unwrap();
        assert_eq!(fetched, amenity);
    }

    #[tokio::test]
    async fn should_return_none_when_amenity_not_found() {
        let repo = SqliteAmenityRepository::new(memory_pool().await);
        assert!(repo.get_by_id(AmenityId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_delete_amenity() {
        let repo = SqliteAmenityRepository::new(memory_pool().await);
        let amenity = Amenity::new("Pool").unwrap();
        repo.create(amenity.clone()).await.unwrap();

        repo.delete(amenity.id).await.unwrap();

        assert!(repo.get_all().await.unwrap().is_empty());
    }
}
