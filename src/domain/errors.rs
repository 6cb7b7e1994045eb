use std::fmt;

// Domain-level errors for profile lookups.
#[derive(Debug)]
pub enum AuthError {
    ExpiredToken,
    InvalidToken,
}

impl AuthError {
    // Exact message text callers assert on; also the wire error payload.
    pub fn message(&self) -> &'static str {
        match self {
            AuthError::ExpiredToken => "expired token",
            AuthError::InvalidToken => "invalid token",
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for AuthError {}
