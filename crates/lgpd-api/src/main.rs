//! # lgpd-api — Binary Entry Point
//!
//! Starts the Axum HTTP server. Binds to `PORT` (default 8080) and reads
//! presentation settings from `LGPD_CONFIG` plus `LGPD_*` overrides.

use lgpd_api::state::{AppConfig, AppState};
use lgpd_core::TriageConfig;
use metrics_exporter_prometheus::PrometheusBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    let triage = TriageConfig::load(config.config_path.as_deref()).map_err(|e| {
        tracing::error!("Configuration load failed: {e}");
        e
    })?;

    let metrics = match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::warn!("Prometheus recorder not installed: {e}. /metrics will return 404.");
            None
        }
    };

    tracing::info!(
        contact_link = %triage.contact_link,
        manual_link = triage.manual_link.as_deref().unwrap_or("-"),
        template_path = %triage.template_path.display(),
        "LGPD triage configured"
    );
    if lgpd_core::TemplateFile::locate(&triage.template_path).is_available() {
        tracing::info!("Register template available at /v1/template");
    }

    let app = lgpd_api::app(AppState::with_config(triage, metrics));

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("LGPD triage API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
