//! # Cat Breeds
//!
//! A small Axum service with two endpoints:
//!
//! - `GET /cat-breeds` walks every page of the catfact.ninja breed listing and
//!   returns the breeds grouped by country.
//! - `POST /post-words` counts the words in `{"str": "..."}` and answers
//!   `200 OK` for eight or more words, `406 Not Acceptable` otherwise.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Breed entities, grouping, verdict policy, repository trait
//! - **Application Layer** ([`application`]) - Paginated breed aggregation
//! - **Infrastructure Layer** ([`infrastructure`]) - Upstream HTTP client and response log
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export UPSTREAM_BASE_URL="https://catfact.ninja"  # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{AppError, UpstreamError};
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::BreedService;
    pub use crate::domain::entities::{BreedRecord, GroupedBreeds, Verdict};
    pub use crate::error::{AppError, UpstreamError};
    pub use crate::state::AppState;
}
