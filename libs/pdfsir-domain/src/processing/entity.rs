//! Domain entities for processing requests
//!
//! Every value here lives for one request only. Nothing is persisted.

use bytes::Bytes;
use serde::Serialize;
use std::fmt;

use super::ProcessingError;

/// Message attached to every successful result
pub const SUCCESS_MESSAGE: &str = "File processed successfully";

/// A file uploaded by a client for processing
///
/// The bytes are held in a reference-counted buffer so the provider adapter
/// can resend them on retry without copying.
#[derive(Debug, Clone)]
pub struct SourceFile {
    name: String,
    data: Bytes,
}

impl SourceFile {
    /// Create a SourceFile from its declared name and contents
    pub fn new(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Declared file name, as sent by the client
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw file contents
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Size of the file in bytes
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

/// Temporary provider-side location of an uploaded file
///
/// Produced by the upload stage and consumed by the process stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageUrl(String);

impl StorageUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the provider returned for a processing call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderOutput {
    /// Location of the (first) produced file
    pub result_url: String,
    /// Every produced file when the tool yields several (e.g. split)
    pub result_urls: Vec<String>,
    /// Credits left on the provider account, when reported
    pub remaining_credits: Option<u64>,
}

impl ProviderOutput {
    /// Output with a single produced file
    pub fn single(result_url: impl Into<String>, remaining_credits: Option<u64>) -> Self {
        Self {
            result_url: result_url.into(),
            result_urls: Vec::new(),
            remaining_credits,
        }
    }
}

/// Normalized outcome of a processing request
///
/// Serialized as the JSON envelope returned to API clients. Built once and
/// never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub result_urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_credits: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProcessingResult {
    /// Successful result for `file`, processed into `output`
    pub fn completed(file: &SourceFile, output: ProviderOutput) -> Self {
        Self {
            success: true,
            result_url: Some(output.result_url),
            result_urls: output.result_urls,
            message: Some(SUCCESS_MESSAGE.to_string()),
            remaining_credits: output.remaining_credits,
            original_size: Some(file.size()),
            original_name: Some(file.name().to_string()),
            error: None,
        }
    }

    /// Failed result carrying the client-facing message of `err`
    pub fn failed(err: &ProcessingError) -> Self {
        Self {
            success: false,
            result_url: None,
            result_urls: Vec::new(),
            message: None,
            remaining_credits: None,
            original_size: None,
            original_name: None,
            error: Some(err.user_message()),
        }
    }
}
