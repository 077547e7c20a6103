//! Ports (trait definitions) for the external conversion provider
//!
//! The domain defines what it needs from a provider, and adapter crates
//! implement it against a concrete API.
//!
//! ## Static Dispatch
//!
//! We use native Rust async traits with `impl Future` return types instead of
//! `async_trait` to ensure zero-cost abstractions and static dispatch.

use std::future::Future;

use crate::processing::{ProcessingError, ProviderOutput, SourceFile, StorageUrl};
use crate::tools::ToolId;

/// Port for the two provider stages of a processing request
///
/// A request always runs `upload` first and feeds its `StorageUrl` to
/// `invoke`. Implementations must:
/// - Convert transport and decoding failures to `ProcessingError::Upstream`
/// - Surface a missing credential as `ProcessingError::ConfigError`
/// - Pass the provider's own error message through unchanged
pub trait ConversionProvider: Send + Sync {
    /// Upload a file to the provider's temporary storage
    ///
    /// # Arguments
    ///
    /// * `file` - The file received from the client
    ///
    /// # Returns
    ///
    /// The provider-side URL of the uploaded file
    ///
    /// # Errors
    ///
    /// - `ProcessingError::ConfigError` if the provider credential is missing
    /// - `ProcessingError::Upstream` if the upload is rejected or fails
    fn upload(
        &self,
        file: &SourceFile,
    ) -> impl Future<Output = Result<StorageUrl, ProcessingError>> + Send;

    /// Run a tool on a previously uploaded file
    ///
    /// # Arguments
    ///
    /// * `tool` - The tool to run
    /// * `source` - Storage URL returned by [`ConversionProvider::upload`]
    ///
    /// # Errors
    ///
    /// - `ProcessingError::ConfigError` if the provider credential is missing
    /// - `ProcessingError::Upstream` if the processing call is rejected or fails
    fn invoke(
        &self,
        tool: ToolId,
        source: &StorageUrl,
    ) -> impl Future<Output = Result<ProviderOutput, ProcessingError>> + Send;
}
