//! # hbnb-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** under `/api/v1`: places, place search,
//!   place ↔ amenity links, plus the reference data (states, cities,
//!   users, amenities) they depend on
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and [`hbnb_domain::error::HbnbError`]s into
//!   HTTP responses
//!
//! ## Dependency rule
//! Depends on `hbnb-app` (for port traits and services) and `hbnb-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;
