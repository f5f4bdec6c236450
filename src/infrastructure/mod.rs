//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`upstream`] - HTTP implementation of the breed repository
//! - [`audit`] - Append-only log of raw upstream responses

pub mod audit;
pub mod upstream;
