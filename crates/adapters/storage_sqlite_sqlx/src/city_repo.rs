//! `SQLite` implementation of [`CityRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hbnb_app::ports::{CityRepository, Repository};
use hbnb_domain::city::City;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{CityId, StateId};
use hbnb_domain::time::to_rfc3339;

use crate::decode;
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`City`].
struct Wrapper(City);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(City {
            id: decode::id(row, "id")?,
            state_id: decode::id(row, "state_id")?,
            name: row.try_get("name")?,
            created_at: decode::timestamp(row, "created_at")?,
            updated_at: decode::timestamp(row, "updated_at")?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO cities (id, state_id, name, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM cities WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM cities ORDER BY rowid";
const SELECT_BY_STATE: &str = "SELECT * FROM cities WHERE state_id = ? ORDER BY rowid";
const UPDATE: &str = "UPDATE cities SET name = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM cities WHERE id = ?";

/// `SQLite`-backed city repository.
pub struct SqliteCityRepository {
    pool: SqlitePool,
}

impl SqliteCityRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl Repository<City> for SqliteCityRepository {
    async fn create(&self, city: City) -> Result<City, HbnbError> {
        sqlx::query(INSERT)
            .bind(city.id.to_string())
            .bind(city.state_id.to_string())
            .bind(&city.name)
            .bind(to_rfc3339(city.created_at))
            .bind(to_rfc3339(city.updated_at))
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(city)
    }

    async fn get_by_id(&self, id: CityId) -> Result<Option<City>, HbnbError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.map(|w| w.0))
    }

    async fn get_all(&self) -> Result<Vec<City>, HbnbError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, city: City) -> Result<City, HbnbError> {
        sqlx::query(UPDATE)
            .bind(&city.name)
            .bind(to_rfc3339(city.updated_at))
            .bind(city.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(city)
    }

    async fn delete(&self, id: CityId) -> Result<(), HbnbError> {
        sqlx::query(DELETE_BY_ID)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }
}

impl CityRepository for SqliteCityRepository {
    async fn find_by_state(&self, state_id: StateId) -> Result<Vec<City>, HbnbError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_STATE)
            .bind(state_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::memory_pool;
    use crate::state_repo::SqliteStateRepository;
    use hbnb_domain::state::State;

    async fn setup() -> (SqliteCityRepository, State, State) {
        let pool = memory_pool().await;
        let states = SqliteStateRepository::new(pool.clone());
        let california = states.create(State::new("California").unwrap()).await.unwrap();
        let nevada = states.create(State::new("Nevada").unwrap()).await.unwrap();
        (SqliteCityRepository::new(pool), california, nevada)
    }

    fn city(state: &State, name: &str) -> City {
        City::builder().state_id(state.id).name(name).build().unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_city() {
        let (repo, california, _) = setup().await;
        let sf = city(&california, "San Francisco");

        repo.create(sf.clone()).await.unwrap();

        assert_eq!(repo.get_by_id(sf.id).await.unwrap(), Some(sf));
    }

    #[tokio::test]
    async fn should_find_cities_by_state() {
        let (repo, california, nevada) = setup().await;
        let sf = repo.create(city(&california, "San Francisco")).await.unwrap();
        repo.create(city(&nevada, "Reno")).await.unwrap();
        let la = repo.create(city(&california, "Los Angeles")).await.unwrap();

        let found = repo.find_by_state(california.id).await.unwrap();
        assert_eq!(found, vec![sf, la]);
        assert_eq!(repo.get_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn should_reject_city_of_unknown_state() {
        let (repo, _, _) = setup().await;
        let orphan = City::builder()
            .state_id(StateId::new())
            .name("Nowhere")
            .build()
            .unwrap();

        let result = repo.create(orphan).await;
        assert!(matches!(result, Err(HbnbError::Storage(_))));
    }
}
