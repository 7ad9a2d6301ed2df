// Main entry point - configuration, dependency wiring and server startup
use std::sync::Arc;

use ecomimic_site::application::token_source::TokenSource;
use ecomimic_site::infrastructure::config::load_server_config;
use ecomimic_site::infrastructure::token_client::{
    ConfiguredTokenSource, HttpTokenSource, TOKEN_PATH,
};
use ecomimic_site::presentation::app_state::AppState;
use ecomimic_site::presentation::router::build_router;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Missing configuration ends the process here, before any socket is bound
    let config = load_server_config()?;
    let addr = config.listen_addr();
    let port = config.port;

    let tokens: Arc<dyn TokenSource> = match &config.token_endpoint {
        Some(url) => {
            tracing::info!(endpoint = %url, "Pages fetch the assistant token over HTTP");
            Arc::new(HttpTokenSource::new(url.clone()))
        }
        None => Arc::new(ConfiguredTokenSource::new(config.coze_api_key.clone())),
    };
    let state = Arc::new(AppState::new(config.coze_api_key, tokens));
    let router = build_router(state, &config.document_root);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        document_root = %config.document_root.display(),
        "EcoMimic server started"
    );
    tracing::info!("Landing page: http://localhost:{}/index.html", port);
    tracing::info!("Token endpoint: http://localhost:{}{}", port, TOKEN_PATH);

    axum::serve(listener, router).await?;

    Ok(())
}
