//! Processing domain module
//!
//! This module contains the request entities, the error taxonomy and the
//! service that validates a request and drives the provider through the
//! upload and process stages.

mod entity;
pub mod error;
mod ids;
mod service;

pub use entity::{ProcessingResult, ProviderOutput, SourceFile, StorageUrl, SUCCESS_MESSAGE};
pub use error::{ProcessingError, Result};
pub use ids::RequestId;
pub use service::{ProcessingConfig, ProcessingService, DEFAULT_MAX_UPLOAD_SIZE};
