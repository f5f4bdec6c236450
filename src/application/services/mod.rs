//! Business logic services for the application layer.

pub mod breed_service;

pub use breed_service::BreedService;
