//! Service configuration
//!
//! Read from environment variables (a `.env` file is loaded first by the
//! binary). Only the provider credential is required, and only for
//! processing requests.

use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use pdfsir_domain::processing::ProcessingConfig;
use pdfsir_pdfco::PdfCoConfig;

pub const API_KEY_VAR: &str = "PDF_CO_API_KEY";
pub const BASE_URL_VAR: &str = "PDF_CO_BASE_URL";
pub const TIMEOUT_VAR: &str = "PDF_CO_TIMEOUT_SECS";
pub const MAX_RETRIES_VAR: &str = "PDF_CO_MAX_RETRIES";
pub const RETRY_BACKOFF_VAR: &str = "PDF_CO_RETRY_BACKOFF_MS";
pub const MAX_UPLOAD_VAR: &str = "PDFSIR_MAX_UPLOAD_BYTES";
pub const HOST_VAR: &str = "PDFSIR_HOST";
pub const PORT_VAR: &str = "PDFSIR_PORT";
pub const LOG_FORMAT_VAR: &str = "PDFSIR_LOG_FORMAT";

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => anyhow::bail!("Invalid value for {}: {:?}", LOG_FORMAT_VAR, other),
        }
    }
}

/// Complete service configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub pdfco: PdfCoConfig,
    pub processing: ProcessingConfig,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration from an arbitrary key lookup
    ///
    /// Unset or blank variables fall back to their defaults. A set but
    /// malformed value is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let pdfco_defaults = PdfCoConfig::default();
        let processing_defaults = ProcessingConfig::default();

        let mut pdfco = PdfCoConfig {
            api_key: get(API_KEY_VAR).map(|key| key.trim().to_string()),
            timeout: Duration::from_secs(parse_or(
                get(TIMEOUT_VAR),
                TIMEOUT_VAR,
                pdfco_defaults.timeout.as_secs(),
            )?),
            max_retries: parse_or(get(MAX_RETRIES_VAR), MAX_RETRIES_VAR, pdfco_defaults.max_retries)?,
            retry_backoff: Duration::from_millis(parse_or(
                get(RETRY_BACKOFF_VAR),
                RETRY_BACKOFF_VAR,
                pdfco_defaults.retry_backoff.as_millis() as u64,
            )?),
            ..pdfco_defaults
        };
        if let Some(base_url) = get(BASE_URL_VAR) {
            pdfco = pdfco.with_base_url(base_url);
        }

        let processing = ProcessingConfig {
            max_upload_size: parse_or(
                get(MAX_UPLOAD_VAR),
                MAX_UPLOAD_VAR,
                processing_defaults.max_upload_size,
            )?,
        };

        let log_format = match get(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            host: get(HOST_VAR).unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(get(PORT_VAR), PORT_VAR, 3000)?,
            pdfco,
            processing,
            log_format,
        })
    }

    /// Address the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {}: {:?}", key, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert!(config.pdfco.api_key.is_none());
        assert_eq!(config.pdfco.base_url, "https://api.pdf.co");
        assert_eq!(config.pdfco.timeout, Duration::from_secs(60));
        assert_eq!(config.pdfco.max_retries, 0);
        assert_eq!(config.processing.max_upload_size, 50 * 1024 * 1024);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            (API_KEY_VAR, " key-123 "),
            (BASE_URL_VAR, "http://127.0.0.1:9000/"),
            (TIMEOUT_VAR, "5"),
            (MAX_RETRIES_VAR, "2"),
            (RETRY_BACKOFF_VAR, "250"),
            (MAX_UPLOAD_VAR, "1048576"),
            (HOST_VAR, "127.0.0.1"),
            (PORT_VAR, "8080"),
        ])
        .unwrap();

        assert_eq!(config.pdfco.api_key.as_deref(), Some("key-123"));
        assert_eq!(config.pdfco.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.pdfco.timeout, Duration::from_secs(5));
        assert_eq!(config.pdfco.max_retries, 2);
        assert_eq!(config.pdfco.retry_backoff, Duration::from_millis(250));
        assert_eq!(config.processing.max_upload_size, 1_048_576);
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_blank_api_key_is_absent() {
        let config = load(&[(API_KEY_VAR, "   ")]).unwrap();
        assert!(config.pdfco.api_key.is_none());
    }

    #[test]
    fn test_log_format() {
        assert_eq!(load(&[(LOG_FORMAT_VAR, "JSON")]).unwrap().log_format, LogFormat::Json);
        assert_eq!(load(&[(LOG_FORMAT_VAR, "text")]).unwrap().log_format, LogFormat::Text);

        let err = load(&[(LOG_FORMAT_VAR, "xml")]).unwrap_err();
        assert!(err.to_string().contains(LOG_FORMAT_VAR));
    }

    #[test]
    fn test_malformed_number_is_rejected() {
        let err = load(&[(PORT_VAR, "eighty")]).unwrap_err();
        assert!(err.to_string().contains(PORT_VAR));
    }
}
