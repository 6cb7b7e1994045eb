pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use domain::entities::{EXPIRED_TOKEN, Profile, VALID_TOKEN};
pub use domain::errors::AuthError;
pub use frameworks::config::http_port;
pub use frameworks::server::{run, run_with_config};
pub use interface_adapters::clients::{FakeApiClient, ProfileApiClient, ProfileApiError};
