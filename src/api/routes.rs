//! API route configuration.

use crate::api::handlers::{cat_breeds_handler, post_words_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public API routes.
///
/// # Endpoints
///
/// - `GET  /cat-breeds` - Upstream breeds grouped by country
/// - `POST /post-words` - Word count verdict for a text payload
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/cat-breeds", get(cat_breeds_handler))
        .route("/post-words", post(post_words_handler))
}
