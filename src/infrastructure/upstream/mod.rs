//! HTTP client for the upstream breed API.

mod http_breed_repository;

pub use http_breed_repository::HttpBreedRepository;
