//! Domain layer containing business entities and the upstream data contract.
//!
//! # Architecture
//!
//! - [`entities`] - Breed records, grouping and the word-count verdict
//! - [`repositories`] - Trait for fetching breed pages from the upstream source
//!
//! The domain layer has no dependency on HTTP clients or the file system;
//! concrete adapters live in [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
