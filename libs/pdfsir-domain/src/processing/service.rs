//! Processing service - Request validation and provider orchestration
//!
//! This module contains the request handling rules of the service. The
//! service validates the request, then drives the provider through its two
//! stages in strict sequence.

use super::{ProcessingError, ProcessingResult, Result, SourceFile};
use crate::ports::ConversionProvider;
use crate::tools::{self, ToolDescriptor, ToolId};

/// Default maximum upload size (50 MiB)
pub const DEFAULT_MAX_UPLOAD_SIZE: u64 = 50 * 1024 * 1024;

/// Configuration for the processing service
#[derive(Debug, Clone)]
pub struct ProcessingConfig {
    /// Maximum accepted file size in bytes (default: 50MB)
    pub max_upload_size: u64,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            max_upload_size: DEFAULT_MAX_UPLOAD_SIZE,
        }
    }
}

/// Service handling tool requests
///
/// This service encapsulates the request rules:
/// - Resolves tool identifiers against the registry
/// - Validates presence and size of the uploaded file
/// - Uploads the file, then invokes the tool, via the provider port
/// - Wraps the provider output into a `ProcessingResult`
///
/// There is no retry or recovery at this level: the first failing stage
/// aborts the request and its error is returned as is. Calling `process`
/// again re-uploads and re-processes from scratch.
///
/// ## Static Dispatch
///
/// The service is generic over any `ConversionProvider` implementation.
pub struct ProcessingService<P> {
    provider: P,
    config: ProcessingConfig,
}

impl<P> ProcessingService<P>
where
    P: ConversionProvider,
{
    /// Create a new ProcessingService with the given provider and configuration
    pub fn new(provider: P, config: ProcessingConfig) -> Self {
        Self { provider, config }
    }

    /// Create a new ProcessingService with default configuration
    pub fn with_provider(provider: P) -> Self {
        Self::new(provider, ProcessingConfig::default())
    }

    /// Look up the descriptor of a tool
    ///
    /// # Errors
    ///
    /// Returns `ProcessingError::ToolNotFound` for unknown identifiers
    pub fn describe(&self, tool_id: &str) -> Result<ToolDescriptor> {
        tools::describe(tool_id)
    }

    /// Validate a request without contacting the provider
    ///
    /// Checks run in this order, so an oversized file is rejected whether or
    /// not the tool exists:
    /// 1. A file is present
    /// 2. The file is within the size limit
    /// 3. The tool identifier resolves
    ///
    /// # Errors
    ///
    /// - `ProcessingError::InvalidInput` if no file was provided
    /// - `ProcessingError::TooLarge` if the file exceeds the limit
    /// - `ProcessingError::ToolNotFound` if the tool is unknown
    pub fn validate<'a>(
        &self,
        tool_id: &str,
        file: Option<&'a SourceFile>,
    ) -> Result<(ToolId, &'a SourceFile)> {
        let file = file.ok_or_else(|| ProcessingError::invalid_input("No file provided"))?;

        if file.size() > self.config.max_upload_size {
            return Err(ProcessingError::too_large(
                file.size(),
                self.config.max_upload_size,
            ));
        }

        let tool = tool_id.parse::<ToolId>()?;
        Ok((tool, file))
    }

    /// Process a file with a tool
    ///
    /// This is the main entry point. It:
    /// 1. Validates the request (see [`ProcessingService::validate`])
    /// 2. Uploads the file to the provider
    /// 3. Invokes the tool on the uploaded file
    /// 4. Returns the normalized result
    ///
    /// # Errors
    ///
    /// Any validation error, or the provider error of the first failing stage
    pub async fn process(
        &self,
        tool_id: &str,
        file: Option<SourceFile>,
    ) -> Result<ProcessingResult> {
        let (tool, file) = self.validate(tool_id, file.as_ref())?;

        let storage_url = self.provider.upload(file).await?;
        let output = self.provider.invoke(tool, &storage_url).await?;

        if output.result_url.is_empty() {
            return Err(ProcessingError::upstream(
                "Processing failed: provider returned no result URL",
            ));
        }

        Ok(ProcessingResult::completed(file, output))
    }

    /// Get the provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Get the service configuration
    pub fn config(&self) -> &ProcessingConfig {
        &self.config
    }
}
