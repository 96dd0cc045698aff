//! # hbnb-domain
//!
//! Pure domain model for the hbnb rental listing service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Places** (rental listings) and their amenity links
//! - Define the reference data places hang off: **Cities**, **States**,
//!   **Users**, **Amenities**
//! - Define the typed update patch applied to places
//! - Define the **search criteria** used to filter places
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod record;
pub mod time;

pub mod amenity;
pub mod city;
pub mod place;
pub mod search;
pub mod state;
pub mod user;
