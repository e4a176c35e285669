use crate::support::transport::RecordingTransport;
use crate::support::updates::{command, selection, user};
use crate::IntegrationHarness;

#[tokio::test]
async fn log_command_sends_the_users_log_file() {
    let harness = IntegrationHarness::new();
    let router = harness.router();
    let transport = RecordingTransport::new();
    let dan = user(30);

    router.handle(&transport, selection(&dan, "generate_it")).await;
    router.handle(&transport, command(&dan, "/log")).await;

    let documents = transport.documents();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].file_name, "user_30.log");
    assert_eq!(documents[0].caption.as_deref(), Some("Your log file"));
    let log = String::from_utf8(documents[0].bytes.clone()).unwrap();
    assert!(log.contains(" - user_30 - INFO - Generating details for locale: it"));
    assert!(log.contains(" - user_30 - INFO - Received /log command"));
}

#[tokio::test]
async fn failed_upload_is_logged_and_reported() {
    let harness = IntegrationHarness::new();
    let router = harness.router();
    let transport = RecordingTransport::rejecting_documents();
    let dan = user(31);

    router.handle(&transport, command(&dan, "/log")).await;

    assert_eq!(
        transport.texts(),
        vec!["Error sending log file. Please check the server logs."]
    );
    let log = harness.user_logs().read(dan.id).await.unwrap().unwrap();
    let log = String::from_utf8(log).unwrap();
    assert!(log.contains(" - user_31 - ERROR - Error sending log file: "));
}
