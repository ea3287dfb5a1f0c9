use std::time::Duration;

use gatewatch_core::dispatch::{CheckOutcome, UrlChecker};
use gatewatch_core::limiter::RateLimiter;
use gatewatch_scanner::result::{AuthPath, Platform, StatusReport};
use gatewatch_scanner::{SiteProber, SiteReport};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_root(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

fn checker() -> UrlChecker {
    UrlChecker::new().expect("Failed to build checker")
}

#[tokio::test]
async fn test_end_to_end_shopify_behind_cloudflare() {
    let server = MockServer::start().await;
    mount_root(
        &server,
        200,
        "<html>Welcome to our Shopify shop, fronted by cloudflare.</html>",
    )
    .await;

    let report = checker().check(&server.uri()).await;

    assert!(report.payment_gateways.contains(&"Shopify".to_string()));
    assert_eq!(report.platform, Platform::Shopify);
    assert!(report.uses_cloud_proxy);
    assert!(!report.has_captcha);
    assert_eq!(report.status, StatusReport::Code(200));
    // The /graphql and payment-method probes fall through to 404.
    assert!(!report.has_graphql);
    assert_eq!(report.auth_path, AuthPath::Absent);
}

#[tokio::test]
async fn test_unreachable_site_degrades_every_verdict() {
    let prober = SiteProber::with_timeout(2).expect("Failed to build prober");
    let checker = UrlChecker::with_prober(prober);

    // Port 1 is never bound, so every request fails at connect time.
    let report = checker.check("http://127.0.0.1:1").await;

    let expected = SiteReport::unreachable("http://127.0.0.1:1".to_string());
    assert_eq!(report.payment_gateways, expected.payment_gateways);
    assert_eq!(report.has_captcha, expected.has_captcha);
    assert_eq!(report.uses_cloud_proxy, expected.uses_cloud_proxy);
    assert_eq!(report.has_graphql, expected.has_graphql);
    assert_eq!(report.auth_path, expected.auth_path);
    assert_eq!(report.platform, expected.platform);
    assert_eq!(report.error_logs_found, expected.error_logs_found);
    assert_eq!(report.status, StatusReport::Unreachable);
}

#[tokio::test]
async fn test_graphql_detected_via_endpoint_probe() {
    let server = MockServer::start().await;
    mount_root(&server, 200, "<html>plain storefront</html>").await;

    Mock::given(method("GET"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let report = checker().check(&server.uri()).await;
    assert!(report.has_graphql);
}

#[tokio::test]
async fn test_graphql_probe_non_200_is_negative() {
    let server = MockServer::start().await;
    mount_root(&server, 200, "<html>plain storefront</html>").await;

    Mock::given(method("GET"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let report = checker().check(&server.uri()).await;
    assert!(!report.has_graphql);
}

#[tokio::test]
async fn test_graphql_detected_via_body_token_without_probe_hit() {
    let server = MockServer::start().await;
    // No /graphql mock mounted; the body marker must decide alone.
    mount_root(&server, 200, "<html>Powered by GraphQL</html>").await;

    let report = checker().check(&server.uri()).await;
    assert!(report.has_graphql);
}

#[tokio::test]
async fn test_graphql_detected_via_query_block_marker() {
    let server = MockServer::start().await;
    mount_root(&server, 200, "<script>fetch('query { shop }')</script>").await;

    let report = checker().check(&server.uri()).await;
    assert!(report.has_graphql);
}

#[tokio::test]
async fn test_auth_path_present_with_trailing_slashes_on_url() {
    let server = MockServer::start().await;
    mount_root(&server, 200, "<html>shop</html>").await;

    Mock::given(method("GET"))
        .and(path("/my-account/add-payment-method/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    // Trailing slashes on the checked URL are stripped before the probe
    // suffix is appended, so the probe still hits the mounted path.
    let url = format!("{}//", server.uri());
    let report = checker().check(&url).await;
    assert_eq!(report.auth_path, AuthPath::Present);
}

#[tokio::test]
async fn test_error_page_sets_error_logs_and_status() {
    let server = MockServer::start().await;
    mount_root(&server, 500, "<h1>Internal Server Error</h1>").await;

    let report = checker().check(&server.uri()).await;
    assert!(report.error_logs_found);
    assert_eq!(report.status, StatusReport::Code(500));
    assert_eq!(report.platform, Platform::None);
}

#[tokio::test]
async fn test_check_allowed_rejects_within_interval() {
    let server = MockServer::start().await;
    mount_root(&server, 200, "<html>shop</html>").await;

    let checker = checker();
    let limiter = RateLimiter::new(Duration::from_secs(5));

    let first = checker.check_allowed(&limiter, 7, &server.uri()).await;
    assert!(matches!(first, CheckOutcome::Checked(_)));

    let second = checker.check_allowed(&limiter, 7, &server.uri()).await;
    assert!(matches!(second, CheckOutcome::RateLimited));

    // A different requester is not affected by the first one's window.
    let other = checker.check_allowed(&limiter, 8, &server.uri()).await;
    assert!(matches!(other, CheckOutcome::Checked(_)));
}
