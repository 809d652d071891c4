use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(handlers::addresses::routes())
        .merge(handlers::nameservers::routes())
        .merge(handlers::mailservers::routes())
        .merge(handlers::pointers::routes())
        .merge(handlers::texts::routes())
        .merge(handlers::zones::routes())
        .merge(handlers::utility::routes())
        .merge(handlers::firewall::routes())
        .with_state(state)
}
