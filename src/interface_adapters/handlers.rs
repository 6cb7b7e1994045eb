use crate::domain::entities::Profile;
use crate::domain::errors::AuthError;
use crate::interface_adapters::protocol::{ErrorResponse, ProfileRequest};
use crate::interface_adapters::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

// Handler resolving a bearer token to its profile.
pub async fn get_profile(
    State(state): State<AppState>,
    Json(payload): Json<ProfileRequest>,
) -> Result<Json<Profile>, (StatusCode, Json<ErrorResponse>)> {
    let profile = state
        .client
        .get_profile(&payload.token)
        .map_err(map_auth_error)?;

    Ok(Json(profile))
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}

// Both rejection causes are authentication failures to the caller.
fn map_auth_error(err: AuthError) -> (StatusCode, Json<ErrorResponse>) {
    error_response(StatusCode::UNAUTHORIZED, err.message())
}
