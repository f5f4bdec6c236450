//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures. The only logic kept here is the pure
//! regrouping of breeds and the word-count verdict policy, neither of which
//! touches I/O.
//!
//! # Entity Types
//!
//! - [`BreedRecord`] - A single breed as reported by the upstream API
//! - [`BreedPage`] - One decoded page of upstream results
//! - [`GroupedBreeds`] - Breeds keyed by country of origin
//! - [`Verdict`] - Accept/reject outcome of the word counter

pub mod breed;
pub mod verdict;

pub use breed::{BreedPage, BreedRecord, GroupedBreeds, group_by_country};
pub use verdict::{MIN_ACCEPTED_WORDS, Verdict};
