//! # hbnb-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `Repository<T>`: generic CRUD for any [`Record`](hbnb_domain::record::Record)
//!   - `PlaceRepository`: places, plus lookup by city
//!   - `CityRepository`: cities, plus lookup by state
//! - Define **driving/inbound ports** as use-case structs:
//!   - `PlaceService`: create, read, update, delete places; list by city
//!   - `PlaceSearchService`: filter places by state, city and amenities
//!   - `PlaceAmenityService`: link and unlink amenities on a place
//!   - `CityService` and `CatalogService`: reference data
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `hbnb-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
