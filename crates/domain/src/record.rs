//! Common shape of every persisted record.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::error::HbnbError;

/// A domain object with a unique identifier that the storage ports persist.
///
/// The repository port in `hbnb-app` is parameterized by this trait, so a
/// single generic interface covers every record type.
pub trait Record: Clone + Send + Sync + 'static {
    /// Typed identifier of the record.
    type Id: Copy + Eq + Hash + fmt::Debug + fmt::Display + FromStr + Send + Sync + 'static;

    /// Human-readable kind, used in not-found errors and logs.
    const KIND: &'static str;

    /// The record's identifier.
    fn id(&self) -> Self::Id;

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] when an invariant does not hold.
    fn validate(&self) -> Result<(), HbnbError>;
}
