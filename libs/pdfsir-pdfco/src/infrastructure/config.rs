//! Client configuration

use std::fmt;
use std::time::Duration;

/// Production PDF.co API host
pub const DEFAULT_BASE_URL: &str = "https://api.pdf.co";

/// Configuration of the PDF.co client
///
/// Timeout and retry behaviour are explicit. The defaults keep the
/// single-attempt behaviour: `max_retries` is 0.
#[derive(Clone)]
pub struct PdfCoConfig {
    /// API key sent in the `x-api-key` header. Requests fail without it.
    pub api_key: Option<String>,
    /// Base URL of the API, without trailing slash
    pub base_url: String,
    /// Timeout applied to each HTTP call (default: 60s)
    pub timeout: Duration,
    /// Extra attempts per stage on transport errors and 5xx answers (default: 0)
    pub max_retries: u32,
    /// Delay before the first retry, doubled for each further one (default: 500ms)
    pub retry_backoff: Duration,
}

impl Default for PdfCoConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
            max_retries: 0,
            retry_backoff: Duration::from_millis(500),
        }
    }
}

impl PdfCoConfig {
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retries(mut self, max_retries: u32, backoff: Duration) -> Self {
        self.max_retries = max_retries;
        self.retry_backoff = backoff;
        self
    }

    /// Delay before retry number `attempt` (1-based)
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        self.retry_backoff
            .saturating_mul(2u32.saturating_pow(attempt.saturating_sub(1)))
    }
}

// The API key must never reach the logs
impl fmt::Debug for PdfCoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PdfCoConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff", &self.retry_backoff)
            .finish()
    }
}
