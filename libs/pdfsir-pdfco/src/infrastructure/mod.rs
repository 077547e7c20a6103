//! PDF.co infrastructure

mod config;
mod endpoints;
mod pdfco_client;

pub use config::{PdfCoConfig, DEFAULT_BASE_URL};
pub use endpoints::{endpoint_path, resolve_endpoint, UPLOAD_PATH};
pub use pdfco_client::PdfCoClient;
