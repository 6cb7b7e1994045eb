use crate::domain::entities::Profile;
use crate::domain::errors::AuthError;
use crate::interface_adapters::protocol::{ErrorResponse, ProfileRequest};
use crate::use_cases::profile;
use reqwest::StatusCode;
use std::fmt;
use std::time::Duration;

// Longest body slice included in a response snapshot log line.
const SNAPSHOT_BODY_LIMIT: usize = 256;

// In-process fake of the profile API. Holds the base URL it was handed but
// answers every lookup locally; nothing ever goes over the wire.
#[derive(Clone)]
pub struct FakeApiClient {
    pub base_url: String,
}

impl FakeApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn get_profile(&self, token: &str) -> Result<Profile, AuthError> {
        profile::get_profile(token)
    }
}

#[derive(Debug)]
pub enum ProfileApiError {
    Auth(AuthError),
    Transport(reqwest::Error),
    Upstream {
        status: StatusCode,
        message: Option<String>,
    },
    Decode(serde_json::Error),
}

impl fmt::Display for ProfileApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileApiError::Auth(err) => write!(f, "authentication failed: {err}"),
            ProfileApiError::Transport(err) => write!(f, "profile transport error: {err}"),
            ProfileApiError::Upstream { status, message } => {
                if let Some(message) = message {
                    write!(f, "profile upstream error {status}: {message}")
                } else {
                    write!(f, "profile upstream error {status}")
                }
            }
            ProfileApiError::Decode(err) => write!(f, "profile response decode error: {err}"),
        }
    }
}

impl std::error::Error for ProfileApiError {}

// Thin reqwest client for the served profile API.
#[derive(Clone)]
pub struct ProfileApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProfileApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub async fn get_profile(&self, token: &str) -> Result<Profile, ProfileApiError> {
        let url = format!("{}/auth/profile", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&ProfileRequest {
                token: token.to_string(),
            })
            .send()
            .await
            .map_err(ProfileApiError::Transport)?;
        let status = response.status();

        // Read the body as text so the snapshot can be logged before decoding.
        let body = response.text().await.map_err(ProfileApiError::Transport)?;
        tracing::debug!(
            %status,
            url = %url,
            body = truncate_snapshot(&body),
            "received response"
        );

        if status.is_success() {
            return serde_json::from_str::<Profile>(&body).map_err(ProfileApiError::Decode);
        }

        if status == StatusCode::UNAUTHORIZED {
            let envelope =
                serde_json::from_str::<ErrorResponse>(&body).map_err(ProfileApiError::Decode)?;

            // TODO: match on machine-readable error codes once the served fake grows them.
            if envelope.message == "expired token" {
                return Err(ProfileApiError::Auth(AuthError::ExpiredToken));
            }
            return Err(ProfileApiError::Auth(AuthError::InvalidToken));
        }

        let message = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .map(|envelope| envelope.message);
        Err(ProfileApiError::Upstream { status, message })
    }
}

fn truncate_snapshot(body: &str) -> &str {
    if body.len() <= SNAPSHOT_BODY_LIMIT {
        return body;
    }
    let mut end = SNAPSHOT_BODY_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
