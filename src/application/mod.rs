//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::breed_service::BreedService`] - Paginated breed aggregation and grouping

pub mod services;
