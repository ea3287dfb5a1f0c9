// Passive content heuristics for fetched pages

use gatewatch_scanner::prober::{Page, SiteProber, endpoint};
use gatewatch_scanner::result::{AuthPath, Platform};

/// Body substrings that indicate a captcha challenge is wired into the
/// page. Matched against the raw body, case-sensitive as listed.
pub const CAPTCHA_MARKERS: &[&str] = &[
    "https://www.google.com/recaptcha/api",
    "captcha",
    "verifyRecaptchaToken",
    "grecaptcha",
    "www.google.com/recaptcha",
];

/// Payment gateway detection table. Each entry maps the raw body tokens
/// to a vendor label; matches are reported in table order. Token casing
/// is significant: `stripe` matches only lower-case, `Cybersource` only
/// capitalized, `adyen` either way.
pub const GATEWAY_MARKERS: &[(&[&str], &str)] = &[
    (&["stripe"], "Stripe"),
    (&["Cybersource"], "Cybersource"),
    (&["paypal"], "Paypal"),
    (&["authorize.net"], "Authorize.net"),
    (&["Bluepay"], "Bluepay"),
    (&["Magento"], "Magento"),
    (&["woo"], "WooCommerce"),
    (&["Shopify"], "Shopify"),
    (&["adyen", "Adyen"], "Adyen"),
    (&["braintree"], "Braintree"),
    (&["square"], "Square"),
    (&["payflow"], "Payflow"),
];

/// CDN provider token, matched against the lowercased body.
pub const CLOUD_PROXY_MARKER: &str = "cloudflare";

/// Probe paths appended after stripping trailing slashes from the URL.
pub const GRAPHQL_PROBE_PATH: &str = "/graphql";
pub const AUTH_PROBE_PATH: &str = "/my-account/add-payment-method/";

pub fn has_captcha(body: &str) -> bool {
    CAPTCHA_MARKERS.iter().any(|marker| body.contains(marker))
}

/// Every matching vendor label, in table order. Empty when nothing
/// matched; the presentation layer renders the "none found" sentinel.
pub fn payment_gateways(body: &str) -> Vec<String> {
    GATEWAY_MARKERS
        .iter()
        .filter(|(tokens, _)| tokens.iter().any(|token| body.contains(token)))
        .map(|(_, label)| (*label).to_string())
        .collect()
}

pub fn uses_cloud_proxy(body: &str) -> bool {
    body.to_lowercase().contains(CLOUD_PROXY_MARKER)
}

/// Body-level GraphQL markers. The `graphql` token is matched
/// case-insensitively; the query/mutation block markers are not.
pub fn mentions_graphql(body: &str) -> bool {
    body.to_lowercase().contains("graphql")
        || body.contains("query {")
        || body.contains("mutation {")
}

/// Platform priority list, first match wins.
pub fn platform(body: &str) -> Platform {
    let lower = body.to_lowercase();
    if lower.contains("wordpress") {
        return Platform::WordPress;
    }
    if lower.contains("shopify") {
        return Platform::Shopify;
    }
    Platform::None
}

pub fn has_error_logs(body: &str) -> bool {
    let lower = body.to_lowercase();
    lower.contains("error") || lower.contains("exception")
}

/// GraphQL verdict for a checked URL. An unavailable page short-circuits
/// to false without probing; a body marker wins without probing; the
/// `/graphql` endpoint probe decides the rest on an exact 200.
pub async fn detect_graphql(prober: &SiteProber, url: &str, page: Option<&Page>) -> bool {
    let Some(page) = page else {
        return false;
    };
    if mentions_graphql(&page.body) {
        return true;
    }
    prober.probe_status(&endpoint(url, GRAPHQL_PROBE_PATH)).await == Some(200)
}

/// Probe the payment-method account path. Present only on an exact 200;
/// any other status or a failed request is Absent.
pub async fn probe_auth_path(prober: &SiteProber, url: &str) -> AuthPath {
    match prober.probe_status(&endpoint(url, AUTH_PROBE_PATH)).await {
        Some(200) => AuthPath::Present,
        _ => AuthPath::Absent,
    }
}
