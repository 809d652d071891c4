//! CNAME and SRV records. Both come back from the same pointer lookup and
//! are told apart by alias and type.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{delete, post},
    Router,
};

use super::created;
use crate::{
    dto::{
        CreateCnameRequest, CreateSrvRequest, ModifyRequest, PointerHostQuery,
        PointerRecordResponse,
    },
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/cnames", post(create_cname))
        .route(
            "/zones/{zone}/cnames/{alias}",
            delete(remove_cname).patch(modify_cname),
        )
        .route("/srv", post(create_srv))
        .route(
            "/zones/{zone}/srv/{alias}",
            delete(remove_srv).patch(modify_srv),
        )
}

async fn create_cname(
    State(state): State<AppState>,
    Json(req): Json<CreateCnameRequest>,
) -> Result<(StatusCode, Json<PointerRecordResponse>), ApiError> {
    let found = state.records.create.cname(req.into()).await?;
    created(found, "CNAME")
}

async fn remove_cname(
    State(state): State<AppState>,
    Path((zone, alias)): Path<(String, String)>,
    Query(query): Query<PointerHostQuery>,
) -> Result<StatusCode, ApiError> {
    state
        .records
        .remove
        .cname(&alias, &query.hostname, &zone)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn modify_cname(
    State(state): State<AppState>,
    Path((zone, alias)): Path<(String, String)>,
    Json(req): Json<ModifyRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .records
        .modify
        .cname(&alias, &zone, &req.field, &req.value)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn create_srv(
    State(state): State<AppState>,
    Json(req): Json<CreateSrvRequest>,
) -> Result<(StatusCode, Json<PointerRecordResponse>), ApiError> {
    let found = state.records.create.srv(req.into()).await?;
    created(found, "SRV record")
}

async fn remove_srv(
    State(state): State<AppState>,
    Path((zone, alias)): Path<(String, String)>,
    Query(query): Query<PointerHostQuery>,
) -> Result<StatusCode, ApiError> {
    state
        .records
        .remove
        .srv(&alias, &query.hostname, &zone)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn modify_srv(
    State(state): State<AppState>,
    Path((zone, alias)): Path<(String, String)>,
    Json(req): Json<ModifyRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .records
        .modify
        .srv(&alias, &zone, &req.field, &req.value)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
