// Route table and middleware stack
use crate::infrastructure::static_files::{has_index_page, hide_dotfiles, static_service};
use crate::infrastructure::token_client::TOKEN_PATH;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_coze_token, health_check, landing_page, water_quality};
use axum::{Router, middleware, routing::get};
use std::path::Path;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: Arc<AppState>, document_root: &Path) -> Router {
    let mut router = Router::new()
        .route("/healthz", get(health_check))
        .route(TOKEN_PATH, get(get_coze_token))
        .route("/api/water-quality", get(water_quality));

    // a shipped index.html takes precedence over the rendered page
    if !has_index_page(document_root) {
        router = router
            .route("/", get(landing_page))
            .route("/index.html", get(landing_page));
    }

    router
        .fallback_service(static_service(document_root))
        .layer(middleware::from_fn(hide_dotfiles))
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
