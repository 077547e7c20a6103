//! PDF.co Client Implementation
//!
//! This module implements the `ConversionProvider` port on top of the PDF.co
//! REST API. It handles both provider stages and converts HTTP and decoding
//! failures to domain errors.

use std::future::Future;

use reqwest::{multipart, Body, Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, error, info, instrument, warn};

use pdfsir_domain::{
    ports::ConversionProvider,
    processing::{ProcessingError, ProviderOutput, SourceFile, StorageUrl},
    ToolId,
};

use super::{config::PdfCoConfig, endpoints};

const API_KEY_HEADER: &str = "x-api-key";

/// The two provider stages of a request
#[derive(Debug, Clone, Copy)]
enum Stage {
    Upload,
    Process,
}

impl Stage {
    fn failure(&self) -> &'static str {
        match self {
            Stage::Upload => "Upload failed",
            Stage::Process => "Processing failed",
        }
    }
}

/// Reply body shared by the upload and processing endpoints
///
/// Every field may be absent or null. Credits are only reported when they
/// are a non-negative integer.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProviderReply {
    url: Option<String>,
    urls: Option<Vec<String>>,
    error: Option<bool>,
    message: Option<String>,
    remaining_credits: Option<Value>,
}

impl ProviderReply {
    fn is_error(&self) -> bool {
        self.error.unwrap_or(false)
    }

    fn remaining_credits(&self) -> Option<u64> {
        self.remaining_credits.as_ref().and_then(Value::as_u64)
    }
}

/// PDF.co implementation of the ConversionProvider port
///
/// One instance is shared by all requests; the inner `reqwest::Client`
/// pools connections and applies the configured timeout to every call.
///
/// ## Error Handling
///
/// - Missing API key: `ProcessingError::ConfigError`
/// - Transport errors, non-2xx statuses, `error: true` replies and
///   undecodable bodies: `ProcessingError::Upstream`
#[derive(Clone)]
pub struct PdfCoClient {
    http: Client,
    config: PdfCoConfig,
}

impl PdfCoClient {
    /// Create a new PDF.co client
    ///
    /// A missing API key is accepted here: descriptor lookups work without
    /// it, and every processing request reports it instead.
    ///
    /// # Errors
    ///
    /// Returns `ProcessingError::ConfigError` if the HTTP client cannot be built
    pub fn new(config: PdfCoConfig) -> Result<Self, ProcessingError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| {
                ProcessingError::config_error(format!("Failed to build HTTP client: {}", err))
            })?;

        if config.api_key.is_none() {
            warn!("PDF.co API key not configured; processing requests will fail");
        }
        info!(base_url = %config.base_url, timeout = ?config.timeout, max_retries = config.max_retries, "Initializing PdfCoClient");

        Ok(Self { http, config })
    }

    /// Get the client configuration
    pub fn config(&self) -> &PdfCoConfig {
        &self.config
    }

    /// Whether an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Full URL of the endpoint processing `tool`
    pub fn endpoint_url(&self, tool: ToolId) -> String {
        self.url_for(endpoints::endpoint_path(tool))
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn api_key(&self) -> Result<&str, ProcessingError> {
        self.config
            .api_key
            .as_deref()
            .ok_or_else(|| ProcessingError::config_error("PDF.co API key not configured"))
    }

    /// Upload a file to PDF.co temporary storage
    ///
    /// # Errors
    ///
    /// - `ProcessingError::ConfigError` if no API key is configured
    /// - `ProcessingError::Upstream` if the upload fails or is rejected
    #[instrument(skip(self, file), fields(file_name = %file.name(), size = file.size()))]
    pub async fn upload_file(&self, file: &SourceFile) -> Result<StorageUrl, ProcessingError> {
        let api_key = self.api_key()?;
        let url = self.url_for(endpoints::UPLOAD_PATH);

        debug!(url = %url, "Uploading file to PDF.co");

        let response = self
            .send_with_retry(Stage::Upload, || {
                let part = multipart::Part::stream_with_length(
                    Body::from(file.data().clone()),
                    file.size(),
                )
                .file_name(file.name().to_string());

                self.http
                    .post(&url)
                    .header(API_KEY_HEADER, api_key)
                    .multipart(multipart::Form::new().part("file", part))
            })
            .await?;

        let reply = Self::read_reply(Stage::Upload, response).await?;
        let storage_url = reply
            .url
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                ProcessingError::upstream("Upload failed: provider returned no storage URL")
            })?;

        info!(storage_url = %storage_url, "Uploaded file to PDF.co");
        Ok(StorageUrl::new(storage_url))
    }

    /// Call a processing endpoint on an uploaded file
    ///
    /// Sends `{"url": <storage url>, "async": false}` and waits for the result.
    ///
    /// # Errors
    ///
    /// - `ProcessingError::ConfigError` if no API key is configured
    /// - `ProcessingError::Upstream` if the call fails or is rejected
    #[instrument(skip(self, endpoint_url, source), fields(endpoint = %endpoint_url))]
    pub async fn invoke_endpoint(
        &self,
        endpoint_url: &str,
        source: &StorageUrl,
    ) -> Result<ProviderOutput, ProcessingError> {
        let api_key = self.api_key()?;
        let body = json!({
            "url": source.as_str(),
            "async": false,
        });

        debug!(source = %source, "Invoking PDF.co endpoint");

        let response = self
            .send_with_retry(Stage::Process, || {
                self.http
                    .post(endpoint_url)
                    .header(API_KEY_HEADER, api_key)
                    .json(&body)
            })
            .await?;

        let reply = Self::read_reply(Stage::Process, response).await?;

        let remaining_credits = reply.remaining_credits();
        let mut urls = reply.urls.unwrap_or_default();
        let result_url = match reply.url.filter(|url| !url.is_empty()) {
            Some(url) => url,
            None if !urls.is_empty() => urls[0].clone(),
            None => {
                return Err(ProcessingError::upstream(
                    "Processing failed: provider returned no result URL",
                ))
            }
        };
        if urls.len() == 1 {
            urls.clear();
        }

        info!(
            result_url = %result_url,
            result_count = urls.len().max(1),
            remaining_credits = ?remaining_credits,
            "PDF.co processing completed"
        );

        Ok(ProviderOutput {
            result_url,
            result_urls: urls,
            remaining_credits,
        })
    }

    /// Upload a file and run a tool on it, in sequence
    ///
    /// Any failure of either stage aborts the whole operation.
    ///
    /// # Errors
    ///
    /// - `ProcessingError::ToolNotFound` if no endpoint is configured for `tool_id`
    /// - Any error of [`PdfCoClient::upload_file`] or [`PdfCoClient::invoke_endpoint`]
    pub async fn process(
        &self,
        tool_id: &str,
        file: &SourceFile,
    ) -> Result<ProviderOutput, ProcessingError> {
        let path = endpoints::resolve_endpoint(tool_id).ok_or_else(|| {
            warn!(tool = %tool_id, "No endpoint configured for tool");
            ProcessingError::tool_not_found(tool_id)
        })?;

        let storage_url = self.upload_file(file).await?;
        self.invoke_endpoint(&self.url_for(path), &storage_url).await
    }

    /// Send a request, retrying transport errors and 5xx answers
    ///
    /// `build` is called once per attempt because multipart bodies cannot be
    /// cloned. The last response is returned whatever its status.
    async fn send_with_retry<F>(&self, stage: Stage, build: F) -> Result<Response, ProcessingError>
    where
        F: Fn() -> RequestBuilder,
    {
        let mut attempt = 0;

        loop {
            let outcome = build().send().await;

            let retryable = match &outcome {
                Ok(response) => response.status().is_server_error(),
                Err(err) => !err.is_builder(),
            };

            if !retryable || attempt >= self.config.max_retries {
                return outcome.map_err(|err| {
                    error!(error = ?err, "PDF.co request failed");
                    let reason = if err.is_timeout() {
                        format!("request timed out after {:?}", self.config.timeout)
                    } else {
                        err.to_string()
                    };
                    ProcessingError::upstream(format!("{}: {}", stage.failure(), reason))
                });
            }

            attempt += 1;
            let backoff = self.config.backoff_for(attempt);
            warn!(
                stage = ?stage,
                attempt,
                max_retries = self.config.max_retries,
                backoff_ms = backoff.as_millis() as u64,
                "Retrying PDF.co request"
            );
            tokio::time::sleep(backoff).await;
        }
    }

    /// Decode a provider reply, turning error statuses and flags into errors
    async fn read_reply(stage: Stage, response: Response) -> Result<ProviderReply, ProcessingError> {
        let status = response.status();
        let body = response.text().await.map_err(|err| {
            ProcessingError::upstream(format!("{}: {}", stage.failure(), err))
        })?;
        let reply = serde_json::from_str::<ProviderReply>(&body);

        if !status.is_success() {
            let provider_message = reply.ok().and_then(|r| r.message);
            warn!(status = %status, message = ?provider_message, "PDF.co returned an error status");
            return Err(ProcessingError::upstream(
                provider_message.unwrap_or_else(|| format!("{}: {}", stage.failure(), reason(status))),
            ));
        }

        let reply = reply.map_err(|err| {
            error!(error = %err, "Failed to decode PDF.co reply");
            ProcessingError::upstream(format!("{}: invalid provider response", stage.failure()))
        })?;

        if reply.is_error() {
            warn!(message = ?reply.message, "PDF.co reported an error");
            return Err(ProcessingError::upstream(
                reply
                    .message
                    .clone()
                    .unwrap_or_else(|| stage.failure().to_string()),
            ));
        }

        Ok(reply)
    }
}

fn reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string())
}

impl ConversionProvider for PdfCoClient {
    fn upload(
        &self,
        file: &SourceFile,
    ) -> impl Future<Output = Result<StorageUrl, ProcessingError>> + Send {
        self.upload_file(file)
    }

    fn invoke(
        &self,
        tool: ToolId,
        source: &StorageUrl,
    ) -> impl Future<Output = Result<ProviderOutput, ProcessingError>> + Send {
        let endpoint_url = self.endpoint_url(tool);
        async move { self.invoke_endpoint(&endpoint_url, source).await }
    }
}
