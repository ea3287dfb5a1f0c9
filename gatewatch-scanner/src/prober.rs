use crate::error::{Result, ScanError};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Default per-request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// A fetched page. Absence of a page (network failure, bad URL, timeout)
/// is represented by `None` at the call site, never by an error.
#[derive(Debug, Clone)]
pub struct Page {
    pub body: String,
    pub status: u16,
}

/// Join a probe path onto a base URL. All trailing slashes on the base
/// are stripped first, so `http://a.com`, `http://a.com/` and
/// `http://a.com//` all produce the same probe URL.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Issues the HTTP requests behind a URL check: one body fetch plus any
/// endpoint status probes. One outbound request per call, no retries.
pub struct SiteProber {
    client: Client,
}

impl SiteProber {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent("Gatewatch/0.1 (https://github.com/trapdoorsec/gatewatch)")
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.div_ceil(2)))
            .build()?;

        Ok(Self { client })
    }

    /// Fetch a page body and status. Returns `None` on any failure;
    /// callers degrade to their negative verdicts instead of erroring.
    pub async fn fetch(&self, url: &str) -> Option<Page> {
        match self.try_fetch(url).await {
            Ok(page) => Some(page),
            Err(e) => {
                debug!("Fetch failed for {}: {}", url, e);
                None
            }
        }
    }

    /// Fetch only the status code of a URL. Returns `None` on any failure.
    pub async fn probe_status(&self, url: &str) -> Option<u16> {
        match self.try_probe(url).await {
            Ok(status) => Some(status),
            Err(e) => {
                debug!("Probe failed for {}: {}", url, e);
                None
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<Page> {
        let parsed =
            Url::parse(url).map_err(|e| ScanError::InvalidUrl(format!("{}: {}", url, e)))?;

        let response = self.client.get(parsed).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(Page { body, status })
    }

    async fn try_probe(&self, url: &str) -> Result<u16> {
        let parsed =
            Url::parse(url).map_err(|e| ScanError::InvalidUrl(format!("{}: {}", url, e)))?;

        let response = self.client.get(parsed).send().await?;
        Ok(response.status().as_u16())
    }
}
