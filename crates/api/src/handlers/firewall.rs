use axum::{
    response::{Html, Json},
    routing::post,
    Router,
};
use impulse_dns_domain::{FirewallGrid, FirewallRule};

use crate::{
    dto::{parse_address, FirewallGridRequest},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/firewall/grid", post(render_grid))
        .route("/firewall/grid/layout", post(grid_layout))
}

fn build(req: FirewallGridRequest) -> Result<FirewallGrid, ApiError> {
    let address = parse_address(&req.address)?;
    let rules: Vec<FirewallRule> = req.rules.into_iter().map(Into::into).collect();
    Ok(FirewallGrid::build(address, &rules, req.default_deny))
}

async fn render_grid(Json(req): Json<FirewallGridRequest>) -> Result<Html<String>, ApiError> {
    Ok(Html(build(req)?.render_html()))
}

async fn grid_layout(
    Json(req): Json<FirewallGridRequest>,
) -> Result<Json<FirewallGrid>, ApiError> {
    Ok(Json(build(req)?))
}
