//! PDFsir Web - HTTP front door
//!
//! Serves the tool catalog and forwards uploaded files to the conversion
//! provider. Stateless: each request is handled on its own and nothing is
//! kept once the response is sent.

pub mod config;
pub mod dto;
pub mod handlers;
pub mod routes;

use std::sync::Arc;

use pdfsir_domain::ProcessingService;
use pdfsir_pdfco::PdfCoClient;

pub use routes::create_router;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub processing_service: Arc<ProcessingService<PdfCoClient>>,
}

impl AppState {
    pub fn new(service: ProcessingService<PdfCoClient>) -> Self {
        Self {
            processing_service: Arc::new(service),
        }
    }
}
