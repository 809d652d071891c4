use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, post},
    Router,
};

use super::created;
use crate::{
    dto::{CreateNameserverRequest, ModifyRequest, NsRecordResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/nameservers", post(create_nameserver))
        .route(
            "/zones/{zone}/nameservers/{hostname}",
            delete(remove_nameserver).patch(modify_nameserver),
        )
}

async fn create_nameserver(
    State(state): State<AppState>,
    Json(req): Json<CreateNameserverRequest>,
) -> Result<(StatusCode, Json<NsRecordResponse>), ApiError> {
    let found = state.records.create.nameserver(req.into()).await?;
    created(found, "Nameserver")
}

async fn remove_nameserver(
    State(state): State<AppState>,
    Path((zone, hostname)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    state.records.remove.nameserver(&hostname, &zone).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn modify_nameserver(
    State(state): State<AppState>,
    Path((zone, hostname)): Path<(String, String)>,
    Json(req): Json<ModifyRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .records
        .modify
        .nameserver(&hostname, &zone, &req.field, &req.value)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
