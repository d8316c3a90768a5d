//! Resource accessor tests against a mock server.

use std::time::Duration;

use mockito::Matcher;
use serde_json::json;

use seojuice::data::{Period, ReportType, RiskLevel};
use seojuice::{Config, Error, SeoJuice};

fn client_for(server: &mockito::ServerGuard) -> SeoJuice {
    let config = Config::new().with_base_url(server.url());
    SeoJuice::with_config("test-api-key", config)
}

#[tokio::test]
async fn websites_list_unwraps_results_envelope() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/websites/")
        .with_body(json!({"results": [{"domain": "a.com"}, {"domain": "b.com"}]}).to_string())
        .create_async()
        .await;

    let websites = client_for(&server).websites().list().await.unwrap();
    assert_eq!(websites.len(), 2);
    assert_eq!(websites[0].domain, "a.com");
}

#[tokio::test]
async fn websites_list_accepts_bare_array() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/websites/")
        .with_body(json!([{"domain": "a.com"}]).to_string())
        .create_async()
        .await;

    let websites = client_for(&server).websites().list().await.unwrap();
    assert_eq!(websites.len(), 1);
}

#[tokio::test]
async fn pages_list_hydrates_paginated_result() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/websites/example.com/pages/")
        .match_query(Matcher::Exact("page=2&page_size=5".to_string()))
        .with_body(
            json!({
                "pagination": {"page": 2, "page_size": 5, "total_count": 12, "total_pages": 3},
                "results": [{"id": 1, "url": "https://example.com/"}],
            })
            .to_string(),
        )
        .create_async()
        .await;

    let page = client_for(&server)
        .pages("example.com")
        .list(2, 5)
        .await
        .unwrap();

    assert_eq!(page.pagination.total_pages, 3);
    assert_eq!(page.results[0].url, "https://example.com/");
    assert!(page.has_next_page());
    assert!(page.has_previous_page());
    mock.assert_async().await;
}

#[tokio::test]
async fn intelligence_summary_drops_unset_flags() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/websites/example.com/intelligence/summary/")
        .match_query(Matcher::Exact("period=30d".to_string()))
        .with_body(json!({"domain": "example.com", "seo_score": 80.0}).to_string())
        .create_async()
        .await;

    let summary = client_for(&server)
        .intelligence("example.com")
        .summary(Period::ThirtyDays, false, false)
        .await
        .unwrap();

    assert_eq!(summary.seo_score, 80.0);
    mock.assert_async().await;
}

#[tokio::test]
async fn intelligence_summary_sends_flags_when_set() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/websites/example.com/intelligence/summary/")
        .match_query(Matcher::Exact(
            "period=7d&include_history=true&include_trends=true".to_string(),
        ))
        .with_body(json!({"domain": "example.com", "history": []}).to_string())
        .create_async()
        .await;

    client_for(&server)
        .intelligence("example.com")
        .summary(Period::SevenDays, true, true)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn content_decay_alerts_serialize_tristate_bool() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/websites/example.com/content/decay-alerts/")
        .match_query(Matcher::Exact(
            "is_active=false&page=1&page_size=10".to_string(),
        ))
        .with_body(json!({"results": []}).to_string())
        .create_async()
        .await;

    client_for(&server)
        .content("example.com")
        .list_decay_alerts(Some(false), None, None, 1, 10)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn changes_list_sends_risk_level_wire_value() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/websites/example.com/changes/")
        .match_query(Matcher::Exact(
            "risk_level=safe&page=1&page_size=10".to_string(),
        ))
        .with_body(json!({"results": []}).to_string())
        .create_async()
        .await;

    client_for(&server)
        .changes("example.com")
        .list(None, None, Some(RiskLevel::Safe), 1, 10)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn analysis_submit_posts_url() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/websites/example.com/analysis/")
        .match_body(Matcher::Json(json!({"url": "https://example.com/about"})))
        .with_body(
            json!({"analysis_id": "an-1", "status": "pending", "url": "https://example.com/about"})
                .to_string(),
        )
        .create_async()
        .await;

    let status = client_for(&server)
        .analysis("example.com")
        .submit("https://example.com/about")
        .await
        .unwrap();

    assert_eq!(status.analysis_id, "an-1");
    assert!(status.is_pending());
    mock.assert_async().await;
}

#[tokio::test]
async fn analysis_wait_returns_completed_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/websites/example.com/analysis/an-1/")
        .with_body(
            json!({"analysis_id": "an-1", "status": "complete", "result": {"seo_score": 90}})
                .to_string(),
        )
        .create_async()
        .await;

    let status = client_for(&server)
        .analysis("example.com")
        .wait_for_completion("an-1")
        .await
        .unwrap();

    assert!(status.is_complete());
    assert_eq!(status.result["seo_score"], json!(90));
}

#[tokio::test]
async fn analysis_wait_returns_failed_status_without_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/websites/example.com/analysis/an-2/")
        .with_body(
            json!({"analysis_id": "an-2", "status": "failed", "error_message": "crawl blocked"})
                .to_string(),
        )
        .create_async()
        .await;

    let status = client_for(&server)
        .analysis("example.com")
        .wait_for_completion("an-2")
        .await
        .unwrap();

    assert!(status.is_failed());
    assert_eq!(status.error_message.as_deref(), Some("crawl blocked"));
}

#[tokio::test]
async fn analysis_wait_times_out_after_max_attempts() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/websites/example.com/analysis/an-3/")
        .with_body(json!({"analysis_id": "an-3", "status": "processing"}).to_string())
        .expect(3)
        .create_async()
        .await;

    let err = client_for(&server)
        .analysis("example.com")
        .wait_for_completion_with("an-3", Duration::from_millis(5), 3)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Timeout { .. }));
    assert_eq!(err.error_code(), "timeout");
    assert!(err.message().contains("an-3"));
    mock.assert_async().await;
}

#[tokio::test]
async fn reports_create_posts_type() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/websites/example.com/reports/")
        .match_body(Matcher::Json(json!({"type": "last_month"})))
        .with_body(json!({"id": 7, "status": "queued"}).to_string())
        .create_async()
        .await;

    let ack = client_for(&server)
        .reports("example.com")
        .create(ReportType::LastMonth)
        .await
        .unwrap();

    assert_eq!(ack["status"], json!("queued"));
    mock.assert_async().await;
}

#[tokio::test]
async fn reports_download_pdf_returns_raw_bytes() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/websites/example.com/reports/7/pdf/")
        .with_header("content-type", "application/pdf")
        .with_body("%PDF-1.4 binary-ish")
        .create_async()
        .await;

    let pdf = client_for(&server)
        .reports("example.com")
        .download_pdf(7)
        .await
        .unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}

#[tokio::test]
async fn gbp_reply_posts_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/websites/example.com/gbp/reviews/9/reply/")
        .match_body(Matcher::Json(json!({"reply_text": "Thanks!"})))
        .with_body(json!({"status": "posted"}).to_string())
        .create_async()
        .await;

    let ack = client_for(&server)
        .gbp("example.com")
        .reply_to_review(9, "Thanks!")
        .await
        .unwrap();

    assert_eq!(ack["status"], json!("posted"));
    mock.assert_async().await;
}

#[tokio::test]
async fn similar_find_sends_url_and_limit() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/websites/example.com/similar/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("url".into(), "https://example.com/a".into()),
            Matcher::UrlEncoded("limit".into(), "5".into()),
        ]))
        .with_body(
            json!({
                "source": {"url": "https://example.com/a", "title": "A"},
                "similar_pages": [{"url": "https://example.com/b", "similarity": 0.9}],
            })
            .to_string(),
        )
        .create_async()
        .await;

    let result = client_for(&server)
        .similar("example.com")
        .find("https://example.com/a", 5)
        .await
        .unwrap();

    assert_eq!(result.similar_pages.len(), 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn resource_errors_surface_transport_taxonomy() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/websites/missing.example/")
        .with_status(404)
        .with_body(json!({"detail": "Website not found", "error_code": "not_found"}).to_string())
        .create_async()
        .await;

    let err = client_for(&server)
        .websites()
        .get("missing.example")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NotFound { .. }));
    assert_eq!(err.message(), "Website not found");
    assert_eq!(err.error_code(), "not_found");
}
