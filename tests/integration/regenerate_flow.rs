use crate::support::transport::RecordingTransport;
use crate::support::updates::{command, selection, user};
use crate::IntegrationHarness;
use fakerbot::RecordStore;

#[tokio::test]
async fn regenerate_without_selection_asks_for_generate_first() {
    let harness = IntegrationHarness::new();
    let router = harness.router();
    let transport = RecordingTransport::new();
    let bob = user(10);

    router.handle(&transport, command(&bob, "/regenerate")).await;

    assert_eq!(
        transport.texts(),
        vec!["Please use /generate first to select a country."]
    );
    assert!(harness.store.query(bob.id, None).await.unwrap().is_empty());
}

#[tokio::test]
async fn regenerate_reuses_last_selected_locale() {
    let harness = IntegrationHarness::new();
    let router = harness.router();
    let transport = RecordingTransport::new();
    let bob = user(11);

    router.handle(&transport, selection(&bob, "generate_fr")).await;
    router.handle(&transport, selection(&bob, "generate_ja")).await;
    transport.clear();
    router.handle(&transport, command(&bob, "/regenerate")).await;

    let history = harness.store.query(bob.id, None).await.unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].details.country, "日本");
    let texts = transport.texts();
    assert_eq!(texts.len(), 1);
    assert!(texts[0].contains(&history[0].details.password));
}

#[tokio::test]
async fn sessions_are_per_user() {
    let harness = IntegrationHarness::new();
    let router = harness.router();
    let transport = RecordingTransport::new();
    let (bob, eve) = (user(12), user(13));

    router.handle(&transport, selection(&bob, "generate_ko")).await;
    transport.clear();
    router.handle(&transport, command(&eve, "/regenerate")).await;

    assert_eq!(
        transport.texts(),
        vec!["Please use /generate first to select a country."]
    );
    assert!(harness.store.query(eve.id, None).await.unwrap().is_empty());
}
