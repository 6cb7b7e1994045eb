use crate::interface_adapters::handlers::get_profile;
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::post};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/auth/profile", post(get_profile))
        .with_state(state)
}
