use crate::interface_adapters::clients::FakeApiClient;

// Shared application state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    // The in-process fake the HTTP surface exposes.
    pub client: FakeApiClient,
}
