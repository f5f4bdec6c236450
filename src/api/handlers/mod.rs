//! HTTP request handlers for API endpoints.

pub mod breeds;
pub mod health;
pub mod words;

pub use breeds::cat_breeds_handler;
pub use health::health_handler;
pub use words::post_words_handler;
