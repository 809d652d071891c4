use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use impulse_dns_domain::NewAddressRecord;
use tracing::debug;

use crate::{
    dto::{
        parse_address, AddressRecordResponse, CreateAddressRequest, ModifyRequest,
        MxRecordResponse, NsRecordResponse, PointerRecordResponse, TextRecordResponse,
    },
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/addresses", post(create_address))
        .route(
            "/addresses/{address}",
            get(get_address).delete(remove_address).patch(modify_address),
        )
        .route("/addresses/{address}/pointers", get(get_pointers))
        .route("/addresses/{address}/texts", get(get_texts))
        .route("/addresses/{address}/nameservers", get(get_nameservers))
        .route("/addresses/{address}/mailserver", get(get_mailserver))
}

async fn create_address(
    State(state): State<AppState>,
    Json(req): Json<CreateAddressRequest>,
) -> Result<(StatusCode, Json<AddressRecordResponse>), ApiError> {
    let record = NewAddressRecord {
        address: parse_address(&req.address)?,
        hostname: req.hostname,
        zone: req.zone,
        ttl: req.ttl,
        owner: req.owner,
    };

    let created = state.records.create.address(record).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

async fn get_address(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<AddressRecordResponse>, ApiError> {
    let address = parse_address(&address)?;
    let record = state.records.get.address(address).await?;
    Ok(Json(record.into()))
}

async fn remove_address(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<StatusCode, ApiError> {
    let address = parse_address(&address)?;
    state.records.remove.address(address).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn modify_address(
    State(state): State<AppState>,
    Path(address): Path<String>,
    Json(req): Json<ModifyRequest>,
) -> Result<StatusCode, ApiError> {
    let address = parse_address(&address)?;
    state
        .records
        .modify
        .address(address, &req.field, &req.value)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_pointers(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<Vec<PointerRecordResponse>>, ApiError> {
    let address = parse_address(&address)?;
    let records = state.records.get.pointers(address).await?;
    debug!(count = records.len(), "Pointer records retrieved");
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

async fn get_texts(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<Vec<TextRecordResponse>>, ApiError> {
    let address = parse_address(&address)?;
    let records = state.records.get.texts(address).await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

async fn get_nameservers(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<Vec<NsRecordResponse>>, ApiError> {
    let address = parse_address(&address)?;
    let records = state.records.get.nameservers(address).await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

async fn get_mailserver(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<MxRecordResponse>, ApiError> {
    let address = parse_address(&address)?;
    let record = state.records.get.mailserver(address).await?;
    Ok(Json(record.into()))
}
