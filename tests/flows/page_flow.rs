use axum::http::StatusCode;
use serde_json::json;

#[path = "../common/mod.rs"]
mod common;
use common::{page_for, MockLookupApi};

fn ok_body() -> serde_json::Value {
    json!({ "status": "success", "data": [{ "answers": null }] })
}

#[tokio::test]
async fn test_custom_server_is_sent_verbatim() {
    let api = MockLookupApi::start().await;
    api.reply(StatusCode::OK, ok_body());
    let (page, memory) = page_for(&api);
    memory.form.set_domain("example.com");

    memory.form.set_nameserver("custom");
    page.nameserver_selected("custom");
    memory.form.set_custom_server(" https://dns.google/dns-query ");
    page.custom_nameserver_input("https://dns.google/dns-query");

    let snapshot = memory.snapshot();
    assert!(snapshot.custom_nameserver_visible);
    assert_eq!(snapshot.nameserver_label, "DNS-over-HTTPS: dns.google");

    page.submit().await;
    assert_eq!(
        api.bodies()[0]["nameservers"],
        json!(["https://dns.google/dns-query"])
    );
}

#[tokio::test]
async fn test_blank_custom_server_is_sent_empty() {
    let api = MockLookupApi::start().await;
    api.reply(
        StatusCode::BAD_REQUEST,
        json!({ "status": "error", "message": "invalid nameserver" }),
    );
    let (page, memory) = page_for(&api);
    memory.form.set_domain("example.com");
    memory.form.set_nameserver("custom");
    page.nameserver_selected("custom");

    page.submit().await;

    assert_eq!(api.bodies()[0]["nameservers"], json!([""]));
    assert_eq!(
        memory.snapshot().message.as_deref(),
        Some("invalid nameserver")
    );
}

#[tokio::test]
async fn test_preset_switch_updates_label_and_request() {
    let api = MockLookupApi::start().await;
    api.reply(StatusCode::OK, ok_body());
    let (page, memory) = page_for(&api);
    memory.form.set_domain("example.com");

    memory.form.set_nameserver("quad9");
    page.nameserver_selected("quad9");
    assert_eq!(memory.snapshot().nameserver_label, "UDP: 9.9.9.9:53");
    assert!(!memory.snapshot().custom_nameserver_visible);

    page.submit().await;
    assert_eq!(api.bodies()[0]["nameservers"], json!(["udp://9.9.9.9:53"]));
}

#[tokio::test]
async fn test_tabs_after_lookup() {
    let api = MockLookupApi::start().await;
    api.reply(StatusCode::OK, ok_body());
    let (page, memory) = page_for(&api);
    memory.form.set_domain("example.com");
    page.submit().await;

    for tab in ["additional", "edns", "answers"] {
        page.switch_tab(tab).unwrap();
        let snapshot = memory.snapshot();
        assert_eq!(snapshot.active_tab.as_deref(), Some(tab));
        assert_eq!(snapshot.active_pane.as_deref(), Some(tab));
        assert_eq!(memory.tabs.active_tab_count(), 1);
    }

    assert!(page.switch_tab("raw").is_err());
    assert_eq!(memory.snapshot().active_tab.as_deref(), Some("answers"));
}

#[tokio::test]
async fn test_snapshot_json_after_lookup() {
    let api = MockLookupApi::start().await;
    api.reply(StatusCode::OK, ok_body());
    let (page, memory) = page_for(&api);
    memory.form.set_domain("example.com");

    page.submit().await;
    let json = memory.snapshot().to_json();

    assert_eq!(json["results_visible"], true);
    assert_eq!(json["answers"]["empty_state_visible"], true);
    assert_eq!(json["edns"]["empty_state_visible"], true);
    assert_eq!(json["form"]["flags"]["rd"], true);
}
