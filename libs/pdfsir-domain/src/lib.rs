//! # PDFsir Domain Layer
//!
//! This crate contains the business rules of the PDFsir document tools service.
//! Every tool is executed by an external conversion provider, so the domain is
//! small and follows hexagonal architecture principles:
//!
//! - **Tools**: The immutable tool registry (identifiers, descriptors, catalog search)
//! - **Processing**: Request entities, the error taxonomy and the `ProcessingService`
//! - **Ports**: Trait definitions for the external provider (`ConversionProvider`)
//!
//! ## Architecture
//!
//! This layer has NO dependencies on infrastructure concerns (HTTP clients, axum, PDF.co).
//! The provider is expressed as a trait (port) implemented by adapter crates.
//!
//! ## Example
//!
//! ```rust
//! use pdfsir_domain::processing::{ProcessingService, SourceFile};
//! use pdfsir_domain::ports::ConversionProvider;
//!
//! // The service is generic over any ConversionProvider implementation
//! async fn example<P: ConversionProvider>(service: ProcessingService<P>) {
//!     let file = SourceFile::new("report.pdf", vec![0x25, 0x50, 0x44, 0x46]);
//!     let result = service.process("compress-pdf", Some(file)).await.unwrap();
//!     println!("Result available at: {:?}", result.result_url);
//! }
//! ```

pub mod processing;
pub mod provider;
pub mod tools;

pub use provider::ports;

// Re-export commonly used types
pub use ports::ConversionProvider;
pub use processing::{ProcessingError, ProcessingResult, ProcessingService, SourceFile};
pub use tools::{Category, ToolDescriptor, ToolId};
