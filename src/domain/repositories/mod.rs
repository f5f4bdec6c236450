//! Repository trait definitions for the domain layer.
//!
//! # Available Repositories
//!
//! - [`BreedRepository`] - Paged access to upstream breed records
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod breed_repository;

pub use breed_repository::BreedRepository;

#[cfg(test)]
pub use breed_repository::MockBreedRepository;
