//! Docshelf — document upload-and-catalog server.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = docshelf_core::DocshelfConfig::from_env();
    let port = config.port;

    let annotate_config = docshelf_annotate::AnnotateConfig::from_env();
    info!(
        "annotator backend {:?}, model {}, credential {}",
        annotate_config.backend,
        annotate_config.model,
        if annotate_config.api_token.is_some() {
            "configured"
        } else {
            "absent (calls will fall back to defaults)"
        }
    );
    let annotator = docshelf_annotate::Annotator::new(annotate_config);

    let state = Arc::new(AppState::new(config, annotator));
    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Docshelf server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
