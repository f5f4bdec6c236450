//! Handler for health check endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Reports that the service is up.
///
/// # Endpoint
///
/// `GET /health`
///
/// The upstream API is deliberately not probed here; every probe would add a
/// line to the response log.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
