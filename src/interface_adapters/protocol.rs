use serde::{Deserialize, Serialize};

// Request payload for a profile lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileRequest {
    pub token: String,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
