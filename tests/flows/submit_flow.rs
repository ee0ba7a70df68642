use axum::http::StatusCode;
use dnslookup_application::use_cases::SubmitOutcome;
use dnslookup_domain::{LookupError, QueryFlag};
use serde_json::json;
use std::time::Duration;

#[path = "../common/mod.rs"]
mod common;
use common::{page_for, MockLookupApi};

fn full_response() -> serde_json::Value {
    json!({
        "status": "success",
        "data": [{
            "answers": [
                { "name": "example.com.", "type": "A", "class": "IN", "ttl": "3600s",
                  "address": "93.184.216.34", "rtt": "21ms", "nameserver": "8.8.8.8:53" }
            ],
            "authorities": [
                { "name": "example.com.", "type": "SOA", "ttl": "1800s",
                  "mname": "ns.icann.org.", "rtt": "21ms" }
            ],
            "additional": null,
            "edns": {
                "nsid": "gpdns-fra",
                "cookie": "",
                "udp_size": 1232,
                "dnssec_ok": true,
                "extended_error": null
            }
        }, {
            "answers": [],
            "authorities": [],
            "additional": [],
            "edns": null
        }]
    })
}

#[tokio::test]
async fn test_full_lookup_round_trip() {
    let api = MockLookupApi::start().await;
    api.reply(StatusCode::OK, full_response());
    let (page, memory) = page_for(&api);

    memory.form.set_domain("  example.com ");
    memory.form.set_record_type("A");
    memory.form.set_flag(QueryFlag::Do, true);
    memory.form.set_ecs("198.51.100.0/24");

    let outcome = page.submit().await;
    tokio::time::sleep(Duration::from_millis(20)).await;

    match outcome {
        SubmitOutcome::Rendered(summary) => {
            assert_eq!(summary.answers, 1);
            assert_eq!(summary.authorities, 1);
            assert_eq!(summary.additional, 0);
            assert_eq!(summary.edns, 3);
        }
        other => panic!("Expected Rendered, got {:?}", other),
    }

    let body = &api.bodies()[0];
    assert_eq!(body["query"], json!(["example.com"]));
    assert_eq!(body["type"], json!(["A"]));
    assert_eq!(body["nameservers"], json!(["udp://8.8.8.8:53"]));
    assert_eq!(body["rd"], true);
    assert_eq!(body["do"], true);
    assert_eq!(body["ecs"], "198.51.100.0/24");

    let snapshot = memory.snapshot();
    assert!(snapshot.results_visible);
    assert!(!snapshot.busy);
    assert!(snapshot.message.is_none());
    assert_eq!(
        snapshot.authorities.rows[0].values(),
        vec!["example.com.", "SOA", "1800s", "ns.icann.org.", "21ms"]
    );
    assert!(snapshot.additional.empty_state_visible);
    assert!(!snapshot.additional.table_visible);

    let edns: Vec<(&str, &str)> = snapshot
        .edns
        .items
        .iter()
        .map(|i| (i.label, i.value.as_str()))
        .collect();
    assert_eq!(
        edns,
        vec![("NSID", "gpdns-fra"), ("UDP Size", "1232"), ("DNSSEC OK", "Yes")]
    );
    assert_eq!(memory.results.scroll_count(), 1);
}

#[tokio::test]
async fn test_server_error_message_reaches_banner() {
    let api = MockLookupApi::start().await;
    api.reply(
        StatusCode::BAD_REQUEST,
        json!({ "status": "error", "message": "bad request" }),
    );
    let (page, memory) = page_for(&api);
    memory.form.set_domain("example.com");

    let outcome = page.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed(LookupError::Server("bad request".to_string()))
    );
    let snapshot = memory.snapshot();
    assert_eq!(snapshot.message.as_deref(), Some("bad request"));
    assert!(!snapshot.busy);
    assert!(!snapshot.results_visible);
}

#[tokio::test]
async fn test_error_without_message_uses_status_text() {
    let api = MockLookupApi::start().await;
    api.reply(StatusCode::SERVICE_UNAVAILABLE, json!({ "status": "error" }));
    let (page, memory) = page_for(&api);
    memory.form.set_domain("example.com");

    page.submit().await;

    assert_eq!(
        memory.snapshot().message.as_deref(),
        Some("Service Unavailable")
    );
}

#[tokio::test]
async fn test_success_without_data_is_no_data_received() {
    let api = MockLookupApi::start().await;
    api.reply(StatusCode::OK, json!({ "status": "success", "data": [] }));
    let (page, memory) = page_for(&api);
    memory.form.set_domain("example.com");

    page.submit().await;

    assert_eq!(
        memory.snapshot().message.as_deref(),
        Some("No data received")
    );
}

#[tokio::test]
async fn test_html_error_page_is_transport_failure() {
    let api = MockLookupApi::start().await;
    api.reply_raw(StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>");
    let (page, memory) = page_for(&api);
    memory.form.set_domain("example.com");

    let outcome = page.submit().await;

    assert!(matches!(
        outcome,
        SubmitOutcome::Failed(LookupError::Transport(_))
    ));
    let snapshot = memory.snapshot();
    assert!(snapshot.message.is_some());
    assert!(!snapshot.busy);
}

#[tokio::test]
async fn test_empty_domain_makes_no_request() {
    let api = MockLookupApi::start().await;
    api.reply(StatusCode::OK, full_response());
    let (page, memory) = page_for(&api);

    page.submit().await;

    assert!(api.bodies().is_empty());
    assert_eq!(
        memory.snapshot().message.as_deref(),
        Some("Invalid query name.")
    );
}

#[tokio::test]
async fn test_error_cleared_by_next_successful_lookup() {
    let api = MockLookupApi::start().await;
    api.reply(
        StatusCode::BAD_REQUEST,
        json!({ "status": "error", "message": "timeout" }),
    )
    .reply(StatusCode::OK, full_response());
    let (page, memory) = page_for(&api);
    memory.form.set_domain("example.com");

    page.submit().await;
    assert_eq!(memory.snapshot().message.as_deref(), Some("timeout"));

    page.submit().await;
    let snapshot = memory.snapshot();
    assert!(snapshot.message.is_none());
    assert_eq!(snapshot.answers.rows.len(), 1);
}

#[tokio::test]
async fn test_rerender_replaces_previous_rows() {
    let api = MockLookupApi::start().await;
    api.reply(StatusCode::OK, full_response());
    let (page, memory) = page_for(&api);
    memory.form.set_domain("example.com");

    page.submit().await;
    page.submit().await;

    let snapshot = memory.snapshot();
    assert_eq!(api.bodies().len(), 2);
    assert_eq!(snapshot.answers.rows.len(), 1);
    assert_eq!(snapshot.authorities.rows.len(), 1);
    assert_eq!(snapshot.edns.items.len(), 3);
}
