// Per-URL check orchestration

use gatewatch_scanner::error::Result;
use gatewatch_scanner::result::StatusReport;
use gatewatch_scanner::{SiteProber, SiteReport};
use tracing::{debug, info};

use crate::checks;
use crate::limiter::RateLimiter;

/// Outcome of a rate-limited check request.
#[derive(Debug, Clone)]
pub enum CheckOutcome {
    Checked(SiteReport),
    RateLimited,
}

/// Runs the full classifier set against a URL and assembles the record.
pub struct UrlChecker {
    prober: SiteProber,
}

impl UrlChecker {
    pub fn new() -> Result<Self> {
        Ok(Self {
            prober: SiteProber::new()?,
        })
    }

    pub fn with_prober(prober: SiteProber) -> Self {
        Self { prober }
    }

    /// Fetch the page once and derive every body verdict from it; the
    /// GraphQL and auth-path probes issue their own requests. A failed
    /// fetch degrades every verdict to its negative default.
    pub async fn check(&self, url: &str) -> SiteReport {
        info!("Checking {}", url);

        let page = self.prober.fetch(url).await;
        let body = page.as_ref().map(|p| p.body.as_str()).unwrap_or_default();

        SiteReport {
            url: url.to_string(),
            payment_gateways: checks::payment_gateways(body),
            has_captcha: checks::has_captcha(body),
            uses_cloud_proxy: checks::uses_cloud_proxy(body),
            has_graphql: checks::detect_graphql(&self.prober, url, page.as_ref()).await,
            auth_path: checks::probe_auth_path(&self.prober, url).await,
            platform: checks::platform(body),
            error_logs_found: checks::has_error_logs(body),
            status: match &page {
                Some(p) => StatusReport::Code(p.status),
                None => StatusReport::Unreachable,
            },
        }
    }

    /// Rate-limited entry point shared by the single-URL and batch
    /// paths. Classification is skipped entirely on a rejection.
    pub async fn check_allowed(
        &self,
        limiter: &RateLimiter,
        requester: u64,
        url: &str,
    ) -> CheckOutcome {
        if !limiter.allow(requester) {
            debug!("Rate limited requester {} for {}", requester, url);
            return CheckOutcome::RateLimited;
        }
        CheckOutcome::Checked(self.check(url).await)
    }
}
