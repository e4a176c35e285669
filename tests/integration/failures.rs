use std::sync::Arc;

use crate::support::stores::{FailingStore, StalledStore};
use crate::support::transport::{RecordingTransport, Sent};
use crate::support::updates::{command, selection, user};
use crate::IntegrationHarness;

#[tokio::test]
async fn store_failure_on_selection_alerts_and_keeps_session_empty() {
    let harness = IntegrationHarness::new();
    let router = harness.router_with(Arc::new(FailingStore), harness.settings());
    let transport = RecordingTransport::new();
    let eve = user(40);

    router.handle(&transport, selection(&eve, "generate_ru")).await;

    let sent = transport.sent();
    assert_eq!(sent.len(), 1, "no profile may be shown when nothing was stored");
    assert!(matches!(
        &sent[0],
        Sent::Answer { show_alert: true, text: Some(text), .. }
            if text == "An error occurred. Please try again."
    ));
    assert_eq!(router.sessions().last_locale(eve.id), None);

    let log = harness.user_logs().read(eve.id).await.unwrap().unwrap();
    let log = String::from_utf8(log).unwrap();
    assert!(log.contains("ERROR - Error in locale selection: record store failure"));
}

#[tokio::test]
async fn store_failure_on_history_sends_generic_message() {
    let harness = IntegrationHarness::new();
    let router = harness.router_with(Arc::new(FailingStore), harness.settings());
    let transport = RecordingTransport::new();
    let eve = user(41);

    router.handle(&transport, command(&eve, "/history 3")).await;

    assert_eq!(
        transport.texts(),
        vec!["An error occurred. Please try again."]
    );
}

#[tokio::test]
async fn stalled_store_times_out_instead_of_hanging() {
    let harness = IntegrationHarness::new();
    let router = harness.router_with(Arc::new(StalledStore), harness.short_store_timeout());
    let transport = RecordingTransport::new();
    let eve = user(42);

    let handled = tokio::time::timeout(
        std::time::Duration::from_secs(5),
        router.handle(&transport, command(&eve, "/history")),
    )
    .await;

    assert!(handled.is_ok());
    assert_eq!(
        transport.texts(),
        vec!["An error occurred. Please try again."]
    );
    let log = harness.user_logs().read(eve.id).await.unwrap().unwrap();
    assert!(String::from_utf8(log).unwrap().contains("timed out after 50ms"));
}
