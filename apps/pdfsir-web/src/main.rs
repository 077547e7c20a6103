//! PDFsir - Document tools service
//!
//! HTTP service exposing PDF tools backed by the PDF.co API.
//! Files are relayed to the provider; nothing is processed or stored locally.

use anyhow::{Context, Result};
use pdfsir_domain::ProcessingService;
use pdfsir_pdfco::PdfCoClient;
use pdfsir_web::{
    config::{AppConfig, LogFormat},
    routes, AppState,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;

    // Initialize tracing
    init_tracing(config.log_format);

    info!("Starting PDFsir web service");

    info!(
        base_url = %config.pdfco.base_url,
        max_upload_size = config.processing.max_upload_size,
        "Initializing PDF.co provider"
    );

    let client = PdfCoClient::new(config.pdfco.clone()).context("Failed to create PDF.co client")?;
    let service = ProcessingService::new(client, config.processing.clone());

    // Build HTTP router
    let app = routes::create_router(AppState::new(service));

    let addr = config.bind_addr();
    info!(addr = %addr, "Starting HTTP server");

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
    }
}
