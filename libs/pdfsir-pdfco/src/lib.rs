//! # PDFsir PDF.co Adapter
//!
//! Implements the `ConversionProvider` port against the PDF.co REST API:
//! a multipart upload to temporary storage, then one synchronous call to the
//! tool-specific endpoint.

pub mod infrastructure;

pub use infrastructure::{endpoint_path, resolve_endpoint, PdfCoClient, PdfCoConfig};
