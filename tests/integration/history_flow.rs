use crate::support::transport::RecordingTransport;
use crate::support::updates::{command, selection, user};
use crate::IntegrationHarness;
use fakerbot::RecordStore;

#[tokio::test]
async fn empty_history_reports_none_found_without_document() {
    let harness = IntegrationHarness::new();
    let router = harness.router();
    let transport = RecordingTransport::new();
    let cat = user(20);

    router.handle(&transport, command(&cat, "/history")).await;

    assert_eq!(transport.texts(), vec!["No history found."]);
    assert!(transport.documents().is_empty());
}

#[tokio::test]
async fn invalid_limit_warns_and_falls_back_to_default() {
    let harness = IntegrationHarness::new();
    let router = harness.router();
    let transport = RecordingTransport::new();
    let cat = user(21);

    for _ in 0..12 {
        router.handle(&transport, selection(&cat, "generate_sv")).await;
    }
    transport.clear();
    router.handle(&transport, command(&cat, "/history abc")).await;

    let texts = transport.texts();
    assert_eq!(texts[0], "Invalid limit. Using default limit of 10.");
    let listing = texts[1..].concat();
    assert!(listing.starts_with("<b>Last 10 generated details:</b>"));
    assert_eq!(listing.matches("<b>Generated on:</b>").count(), 10);
    assert!(texts[1..].iter().all(|chunk| chunk.chars().count() <= 4096));
    assert!(transport.documents().is_empty());
}

#[tokio::test]
async fn limit_argument_lists_newest_entries_inline() {
    let harness = IntegrationHarness::new();
    let router = harness.router();
    let transport = RecordingTransport::new();
    let cat = user(22);

    router.handle(&transport, selection(&cat, "generate_nl")).await;
    router.handle(&transport, selection(&cat, "generate_da")).await;
    transport.clear();
    router.handle(&transport, command(&cat, "/history 1")).await;

    let texts = transport.texts();
    assert_eq!(texts.len(), 1);
    assert!(texts[0].contains("<code>Danmark</code>"));
    assert!(!texts[0].contains("<code>Nederland</code>"));
}

#[tokio::test]
async fn bare_history_sends_full_html_document() {
    let harness = IntegrationHarness::new();
    let router = harness.router();
    let transport = RecordingTransport::new();
    let cat = user(23);

    for _ in 0..11 {
        router.handle(&transport, selection(&cat, "generate_fi")).await;
    }
    transport.clear();
    router.handle(&transport, command(&cat, "/history")).await;

    let documents = transport.documents();
    assert_eq!(documents.len(), 1);
    let document = &documents[0];
    assert_eq!(document.file_name, "history.html");
    assert_eq!(document.caption.as_deref(), Some("Your fake details history"));
    let html = String::from_utf8(document.bytes.clone()).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches("<article class=\"entry\">").count(), 11);
}

#[tokio::test]
async fn torn_history_line_does_not_hide_history() {
    let harness = IntegrationHarness::new();
    let router = harness.router();
    let cat = user(24);
    let dog = user(25);

    router
        .handle(&RecordingTransport::new(), selection(&cat, "generate_pt"))
        .await;
    let mut raw = std::fs::read_to_string(harness.paths.history_file()).unwrap();
    raw.push_str("{\"record_id\":\"trunc");
    std::fs::write(harness.paths.history_file(), raw).unwrap();
    router
        .handle(&RecordingTransport::new(), selection(&cat, "generate_pt"))
        .await;
    router
        .handle(&RecordingTransport::new(), selection(&dog, "generate_nl"))
        .await;

    let transport = RecordingTransport::new();
    router.handle(&transport, command(&cat, "/history 5")).await;
    let listing = transport.texts().concat();
    assert!(!listing.contains("An error occurred"));
    assert!(listing.starts_with("<b>Last 5 generated details:</b>"));
    assert_eq!(listing.matches("<b>Generated on:</b>").count(), 2);
    assert_eq!(harness.store.query(dog.id, None).await.unwrap().len(), 1);
}
