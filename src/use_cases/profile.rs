use crate::domain::entities::{EXPIRED_TOKEN, Profile, VALID_TOKEN};
use crate::domain::errors::AuthError;

// Resolve a token to the profile it authenticates. Classification is by
// exact string match: the valid token, the expired token, everything else.
pub fn get_profile(token: &str) -> Result<Profile, AuthError> {
    if token == VALID_TOKEN {
        return Ok(Profile {
            name: "Mike".to_string(),
            country: "US".to_string(),
        });
    }

    if token == EXPIRED_TOKEN {
        return Err(AuthError::ExpiredToken);
    }

    Err(AuthError::InvalidToken)
}
