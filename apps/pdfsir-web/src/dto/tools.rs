//! DTOs for tool endpoints

use pdfsir_domain::{ProcessingResult, ToolDescriptor};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Tool metadata
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToolInfoResponse {
    /// Tool identifier used in URLs
    #[schema(example = "merge-pdf")]
    pub id: String,
    #[schema(example = "Merge PDF")]
    pub title: String,
    #[schema(example = "Combine multiple PDF files into one document")]
    pub description: String,
    /// Accepted file extensions with the leading dot, e.g. `.pdf`
    pub accepted_formats: Vec<String>,
    /// One of convert, edit, security, optimize
    #[schema(example = "edit")]
    pub category: String,
}

impl From<ToolDescriptor> for ToolInfoResponse {
    fn from(descriptor: ToolDescriptor) -> Self {
        Self {
            id: descriptor.id.to_string(),
            title: descriptor.title.to_string(),
            description: descriptor.description.to_string(),
            accepted_formats: descriptor
                .accepted_formats
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            category: descriptor.category.to_string(),
        }
    }
}

/// Catalog query parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CatalogQuery {
    /// all, popular, convert, edit, security or optimize
    pub category: Option<String>,
    /// Case-insensitive search in titles and descriptions
    pub q: Option<String>,
}

/// Tool catalog
#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogResponse {
    pub tools: Vec<ToolInfoResponse>,
    pub total: usize,
}

/// Processing envelope, for successes and service-side failures
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResponse {
    pub success: bool,
    /// Download location of the produced file
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "https://pdf-temp-files.s3.amazonaws.com/merged.pdf")]
    pub result_url: Option<String>,
    /// All produced files, when the tool yields more than one
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub result_urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "File processed successfully")]
    pub message: Option<String>,
    /// Provider credits left, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 97)]
    pub remaining_credits: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 2097152)]
    pub original_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "contract.pdf")]
    pub original_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<ProcessingResult> for ProcessResponse {
    fn from(result: ProcessingResult) -> Self {
        Self {
            success: result.success,
            result_url: result.result_url,
            result_urls: result.result_urls,
            message: result.message,
            remaining_credits: result.remaining_credits,
            original_size: result.original_size,
            original_name: result.original_name,
            error: result.error,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error description
    #[schema(example = "No file provided")]
    pub error: String,
}
