use serde::{Deserialize, Serialize};

// The two sentinel tokens the fake recognizes. They must stay distinct:
// classification checks the valid token first, then the expired one.
pub const VALID_TOKEN: &str = "VALID";
pub const EXPIRED_TOKEN: &str = "EXPIRED";

// Profile record returned for the valid token. Doubles as the wire
// response body for the served API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub country: String,
}
