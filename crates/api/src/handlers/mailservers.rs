use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, post},
    Router,
};

use super::created;
use crate::{
    dto::{CreateMailserverRequest, ModifyRequest, MxRecordResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/mailservers", post(create_mailserver))
        .route(
            "/zones/{zone}/mailservers/{hostname}",
            delete(remove_mailserver).patch(modify_mailserver),
        )
}

async fn create_mailserver(
    State(state): State<AppState>,
    Json(req): Json<CreateMailserverRequest>,
) -> Result<(StatusCode, Json<MxRecordResponse>), ApiError> {
    let found = state.records.create.mailserver(req.into()).await?;
    created(found, "Mailserver")
}

async fn remove_mailserver(
    State(state): State<AppState>,
    Path((zone, hostname)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    state.records.remove.mailserver(&hostname, &zone).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn modify_mailserver(
    State(state): State<AppState>,
    Path((zone, hostname)): Path<(String, String)>,
    Json(req): Json<ModifyRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .records
        .modify
        .mailserver(&hostname, &zone, &req.field, &req.value)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
