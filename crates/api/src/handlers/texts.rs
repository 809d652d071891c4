use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, post},
    Router,
};
use impulse_dns_domain::NewText;

use super::created;
use crate::{
    dto::{parse_text_type, CreateTextRequest, ModifyRequest, TextRecordResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/texts", post(create_text)).route(
        "/zones/{zone}/texts/{hostname}/{record_type}",
        delete(remove_text).patch(modify_text),
    )
}

async fn create_text(
    State(state): State<AppState>,
    Json(req): Json<CreateTextRequest>,
) -> Result<(StatusCode, Json<TextRecordResponse>), ApiError> {
    let record = NewText::try_from(req)?;
    let found = state.records.create.text(record).await?;
    created(found, "Text record")
}

async fn remove_text(
    State(state): State<AppState>,
    Path((zone, hostname, record_type)): Path<(String, String, String)>,
) -> Result<StatusCode, ApiError> {
    let record_type = parse_text_type(&record_type)?;
    state
        .records
        .remove
        .text(&hostname, &zone, record_type)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn modify_text(
    State(state): State<AppState>,
    Path((zone, hostname, record_type)): Path<(String, String, String)>,
    Json(req): Json<ModifyRequest>,
) -> Result<StatusCode, ApiError> {
    let record_type = parse_text_type(&record_type)?;
    state
        .records
        .modify
        .text(&hostname, &zone, record_type, &req.field, &req.value)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
