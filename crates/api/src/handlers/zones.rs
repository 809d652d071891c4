use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use tracing::debug;

use crate::{
    dto::{KeyResponse, OwnerQuery, ZoneResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/zones", get(get_zones))
        .route("/zones/{zone}", get(get_zone))
        .route("/keys", get(get_keys))
        .route("/keys/{keyname}", get(get_key))
}

async fn get_zones(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<Vec<ZoneResponse>>, ApiError> {
    let zones = state.zones.get_all(query.username.as_deref()).await?;
    debug!(count = zones.len(), "Zones retrieved");
    Ok(Json(zones.into_iter().map(Into::into).collect()))
}

async fn get_zone(
    State(state): State<AppState>,
    Path(zone): Path<String>,
) -> Result<Json<ZoneResponse>, ApiError> {
    let zone = state.zones.get(&zone).await?;
    Ok(Json(zone.into()))
}

async fn get_keys(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<Vec<KeyResponse>>, ApiError> {
    let keys = state.keys.get_all(query.username.as_deref()).await?;
    Ok(Json(keys.into_iter().map(Into::into).collect()))
}

async fn get_key(
    State(state): State<AppState>,
    Path(keyname): Path<String>,
) -> Result<Json<KeyResponse>, ApiError> {
    let key = state.keys.get(&keyname).await?;
    Ok(Json(key.into()))
}
