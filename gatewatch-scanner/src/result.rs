use serde::{Deserialize, Serialize};
use std::fmt;

/// CMS platform verdict, first match wins in detection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    WordPress,
    Shopify,
    None,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::WordPress => "WordPress",
            Platform::Shopify => "Shopify",
            Platform::None => "None",
        }
    }
}

/// Whether the payment-method account path answered with a 200.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthPath {
    Present,
    Absent,
}

impl AuthPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthPath::Present => "Auth present",
            AuthPath::Absent => "Auth absent",
        }
    }
}

/// HTTP status of the main fetch, or the error marker when the site
/// could not be reached at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusReport {
    Code(u16),
    Unreachable,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusReport::Code(code) => write!(f, "{}", code),
            StatusReport::Unreachable => write!(f, "Error"),
        }
    }
}

/// One classification record per checked URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteReport {
    pub url: String,
    pub payment_gateways: Vec<String>,
    pub has_captcha: bool,
    pub uses_cloud_proxy: bool,
    pub has_graphql: bool,
    pub auth_path: AuthPath,
    pub platform: Platform,
    pub error_logs_found: bool,
    pub status: StatusReport,
}

impl SiteReport {
    /// The record produced when the site could not be fetched: every
    /// verdict at its negative default.
    pub fn unreachable(url: String) -> Self {
        Self {
            url,
            payment_gateways: Vec::new(),
            has_captcha: false,
            uses_cloud_proxy: false,
            has_graphql: false,
            auth_path: AuthPath::Absent,
            platform: Platform::None,
            error_logs_found: false,
            status: StatusReport::Unreachable,
        }
    }
}
