//! Handler for the grouped breed listing.

use axum::{Json, extract::State};

use crate::domain::entities::GroupedBreeds;
use crate::error::AppError;
use crate::state::AppState;

/// Returns every upstream breed grouped by country.
///
/// # Endpoint
///
/// `GET /cat-breeds`
///
/// # Response
///
/// ```json
/// {
///   "Egypt": [
///     { "breed": "Abyssinian", "origin": "Natural/Standard", "coat": "Short", "pattern": "Ticked" }
///   ],
///   "United States": [ ... ]
/// }
/// ```
///
/// # Errors
///
/// Returns 500 with `{"error": "Failed to retrieve cat breeds"}` if any
/// upstream page fails. The cause is logged, not returned.
pub async fn cat_breeds_handler(
    State(state): State<AppState>,
) -> Result<Json<GroupedBreeds>, AppError> {
    let grouped = state.breed_service.breeds_by_country().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to retrieve cat breeds");
        AppError::internal("Failed to retrieve cat breeds")
    })?;

    Ok(Json(grouped))
}
