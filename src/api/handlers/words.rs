//! Handler for the word-count endpoint.

use axum::{Json, extract::rejection::JsonRejection, http::StatusCode};

use crate::api::dto::words::{MessageResponse, WordsRequest};
use crate::domain::entities::Verdict;
use crate::error::AppError;
use crate::utils::word_counter::count_words;

/// Counts the words in the submitted text and accepts or rejects it.
///
/// # Endpoint
///
/// `POST /post-words`
///
/// # Request Body
///
/// ```json
/// { "str": "the quick brown fox jumps over the lazy dog" }
/// ```
///
/// # Response Codes
///
/// - **200 OK** `{"message": "OK"}`: at least 8 words
/// - **406 Not Acceptable** `{"message": "Not Acceptable"}`: fewer than 8 words
/// - **400 Bad Request** `{"error": "Invalid payload"}`: body missing or malformed
pub async fn post_words_handler(
    payload: Result<Json<WordsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected word payload");
        AppError::bad_request("Invalid payload")
    })?;

    let count = count_words(&payload.text);
    let verdict = Verdict::from_count(count);
    tracing::debug!(count, ?verdict, "Counted words");

    Ok((
        verdict_status(verdict),
        Json(MessageResponse {
            message: verdict.message(),
        }),
    ))
}

fn verdict_status(verdict: Verdict) -> StatusCode {
    match verdict {
        Verdict::Accepted => StatusCode::OK,
        Verdict::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
    }
}
