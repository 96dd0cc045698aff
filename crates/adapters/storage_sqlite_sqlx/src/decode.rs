//! Column decoding helpers shared by the repositories.

use std::str::FromStr;

use hbnb_domain::time::{Timestamp, parse_rfc3339};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Decode a text column holding a typed identifier.
pub(crate) fn id<I>(row: &SqliteRow, column: &str) -> Result<I, sqlx::Error>
where
    I: FromStr,
    I::Err: std::error::Error + Send + Sync + 'static,
{
    let raw: String = row.try_get(column)?;
    parse_id(&raw)
}

/// Parse a stored identifier.
pub(crate) fn parse_id<I>(raw: &str) -> Result<I, sqlx::Error>
where
    I: FromStr,
    I::Err: std::error::Error + Send + Sync + 'static,
{
    I::from_str(raw).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

/// Decode a text column holding an RFC 3339 timestamp.
pub(crate) fn timestamp(row: &SqliteRow, column: &str) -> Result<Timestamp, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    parse_rfc3339(&raw).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}
