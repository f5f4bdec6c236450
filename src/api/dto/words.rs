//! DTOs for the word-count endpoint.

use serde::{Deserialize, Serialize};

/// Text submitted for counting.
#[derive(Debug, Deserialize)]
pub struct WordsRequest {
    #[serde(rename = "str")]
    pub text: String,
}

/// Verdict message returned for a counted payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
