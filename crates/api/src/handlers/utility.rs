use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use impulse_dns_domain::AddressFamily;

use crate::{
    dto::{
        HealthResponse, HostnameCheckQuery, HostnameCheckResponse, RecordTypesResponse,
        ResolveQuery, ResolveResponse,
    },
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/record-types", get(get_record_types))
        .route("/resolve", get(resolve))
        .route("/hostnames/check", get(check_hostname))
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn get_record_types(
    State(state): State<AppState>,
) -> Result<Json<RecordTypesResponse>, ApiError> {
    let record_types = state.record_types.execute().await?;
    Ok(Json(RecordTypesResponse { record_types }))
}

async fn resolve(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> Result<Json<ResolveResponse>, ApiError> {
    let family = AddressFamily::try_from(query.family)?;
    let address = state
        .resolve
        .resolve(&query.hostname, &query.zone, family)
        .await?;

    Ok(Json(ResolveResponse {
        hostname: query.hostname,
        zone: query.zone,
        family: family.as_i32(),
        address: address.map(|a| a.to_string()),
    }))
}

async fn check_hostname(
    State(state): State<AppState>,
    Query(query): Query<HostnameCheckQuery>,
) -> Result<Json<HostnameCheckResponse>, ApiError> {
    let valid = state.resolve.check(&query.hostname, &query.zone).await?;

    Ok(Json(HostnameCheckResponse {
        hostname: query.hostname,
        zone: query.zone,
        valid,
    }))
}
