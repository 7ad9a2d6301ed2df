// HTTP request handlers
use crate::application::page_session::{PageQuery, PageSession};
use crate::application::token_source::TokenPayload;
use crate::domain::chart::{ChartSpec, water_quality_chart};
use crate::domain::telemetry::{WATER_QUALITY, WaterReading};
use crate::presentation::app_state::AppState;
use crate::presentation::landing::render_landing;
use axum::{
    Json,
    extract::{Query, State},
    response::Html,
};
use chrono::Datelike;
use secrecy::ExposeSecret;
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct WaterQualityResponse {
    pub chart: ChartSpec,
    pub readings: &'static [WaterReading],
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Hand the configured assistant token to the page
pub async fn get_coze_token(State(state): State<Arc<AppState>>) -> Json<TokenPayload> {
    Json(TokenPayload {
        token: state.coze_api_key.expose_secret().to_string(),
    })
}

/// Chart description and mock readings for client-side rendering
pub async fn water_quality() -> Json<WaterQualityResponse> {
    Json(WaterQualityResponse {
        chart: water_quality_chart(),
        readings: &WATER_QUALITY,
    })
}

/// Server-rendered landing page; widget state travels in the query string.
/// A query that fails to parse renders the default page. The assistant token
/// is fetched once per page load; without it the page renders degraded.
pub async fn landing_page(
    State(state): State<Arc<AppState>>,
    query: Option<Query<PageQuery>>,
) -> Html<String> {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let mut session = PageSession::from_query(&query);
    session.bootstrap(state.tokens.as_ref()).await;
    Html(render_landing(&session, chrono::Local::now().year()))
}
