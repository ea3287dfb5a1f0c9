// Chat reply rendering for site reports

use gatewatch_scanner::SiteReport;
use gatewatch_scanner::result::AuthPath;

const DIVIDER: &str = "━━━━━━━━━━━━━━━━━━━━━━━━";

/// Sentinel shown when no gateway token matched.
pub const NO_GATEWAYS_SENTINEL: &str = "No recognized payment gateway found";

/// Placeholder sent before the report replaces it in place.
pub const LOADING_MESSAGE: &str = "<strong>[~] Loading... 🥸</strong>";

fn verdict_marker(hit: bool) -> &'static str {
    if hit { "😞" } else { "🔥" }
}

fn auth_marker(auth_path: AuthPath) -> &'static str {
    match auth_path {
        AuthPath::Present => "✔️",
        AuthPath::Absent => "❌",
    }
}

/// Render a report as the HTML-formatted chat reply, one line per
/// verdict, values wrapped in `<code>` tags.
pub fn render_report(report: &SiteReport) -> String {
    let gateways = if report.payment_gateways.is_empty() {
        NO_GATEWAYS_SENTINEL.to_string()
    } else {
        report.payment_gateways.join(", ")
    };

    let error_logs = if report.error_logs_found {
        "Error logs found"
    } else {
        "None"
    };

    format!(
        "🔍 Gateways fetched successfully\n\
         {DIVIDER}\n\
         🔗 URL: <code>{url}</code>\n\
         💳 Payment Gateways: <code>{gateways}</code>\n\
         👾 Captcha: <code>{captcha} {captcha_marker}</code>\n\
         ☁️ Cloudflare: <code>{cloud} {cloud_marker}</code>\n\
         📊 GraphQL: <code>{graphql}</code>\n\
         🛤️ Auth Path: <code>{auth} {auth_marker}</code>\n\
         ⭐ Platform: <code>{platform}</code>\n\
         🤖 Error Logs: <code>{error_logs}</code>\n\
         🌡️ Status: <code>{status}</code>",
        url = report.url,
        gateways = gateways,
        captcha = report.has_captcha,
        captcha_marker = verdict_marker(report.has_captcha),
        cloud = report.uses_cloud_proxy,
        cloud_marker = verdict_marker(report.uses_cloud_proxy),
        graphql = report.has_graphql,
        auth = report.auth_path.as_str(),
        auth_marker = auth_marker(report.auth_path),
        platform = report.platform.as_str(),
        error_logs = error_logs,
        status = report.status,
    )
}
