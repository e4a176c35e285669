use crate::support::transport::{RecordingTransport, Sent};
use crate::support::updates::{command, detached_selection, selection, user, MENU_MESSAGE_ID};
use crate::IntegrationHarness;
use fakerbot::{Locale, RecordStore};

#[tokio::test]
async fn generate_replies_with_locale_menu() {
    let harness = IntegrationHarness::new();
    let router = harness.router();
    let transport = RecordingTransport::new();
    let ann = user(1);

    router.handle(&transport, command(&ann, "/generate")).await;

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    match &sent[0] {
        Sent::Text {
            text,
            keyboard: Some(keyboard),
            ..
        } => {
            assert_eq!(text, "Select a country to generate fake details:");
            assert!(keyboard.inline_keyboard.iter().all(|row| row.len() <= 2));
            assert_eq!(keyboard.inline_keyboard[0][0].callback_data, "generate_en");
            let buttons: usize = keyboard.inline_keyboard.iter().map(Vec::len).sum();
            assert_eq!(buttons, Locale::ALL.len());
        }
        other => panic!("expected menu, got {other:?}"),
    }
}

#[tokio::test]
async fn selection_edits_menu_into_profile_and_records_it() {
    let harness = IntegrationHarness::new();
    let router = harness.router();
    let transport = RecordingTransport::new();
    let ann = user(2);

    router.handle(&transport, selection(&ann, "generate_de")).await;

    let history = harness.store.query(ann.id, None).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].details.country, "Deutschland");
    assert_eq!(history[0].username.as_deref(), Some("tester2"));
    assert_eq!(router.sessions().last_locale(ann.id), Some(Locale::De));

    let sent = transport.sent();
    match &sent[0] {
        Sent::Edit {
            message_id, text, ..
        } => {
            assert_eq!(*message_id, MENU_MESSAGE_ID);
            assert!(text.starts_with(&format!(
                "<b>Personal Profile: {}</b>",
                history[0].details.full_name
            )));
            assert!(text.contains(" kg</code>"));
            assert!(text.contains(" cm</code>"));
        }
        other => panic!("expected edit, got {other:?}"),
    }
    assert!(matches!(
        &sent[1],
        Sent::Answer { show_alert: false, text: None, .. }
    ));
}

#[tokio::test]
async fn forged_selection_is_answered_with_alert_and_stores_nothing() {
    let harness = IntegrationHarness::new();
    let router = harness.router();
    let transport = RecordingTransport::new();
    let ann = user(3);

    router.handle(&transport, selection(&ann, "generate_tlh")).await;
    router.handle(&transport, selection(&ann, "delete_everything")).await;

    assert!(harness.store.query(ann.id, None).await.unwrap().is_empty());
    assert_eq!(router.sessions().last_locale(ann.id), None);
    let alerts: Vec<_> = transport
        .sent()
        .into_iter()
        .filter(|sent| {
            matches!(sent, Sent::Answer { show_alert: true, text: Some(text), .. }
                if text == "An error occurred. Please try again.")
        })
        .collect();
    assert_eq!(alerts.len(), 2);
}

#[tokio::test]
async fn start_greets_user_and_plain_text_is_ignored() {
    let harness = IntegrationHarness::new();
    let router = harness.router();
    let transport = RecordingTransport::new();
    let ann = user(4);

    router.handle(&transport, command(&ann, "hello bot")).await;
    assert!(transport.sent().is_empty());

    router.handle(&transport, command(&ann, "/start")).await;
    let texts = transport.texts();
    assert_eq!(texts.len(), 1);
    assert!(texts[0].contains("<b>User ID:</b> 4"));
    assert!(texts[0].contains("<b>Last Name:</b> User"));
}

#[tokio::test]
async fn selection_without_menu_message_sends_profile_as_new_message() {
    let harness = IntegrationHarness::new();
    let router = harness.router();
    let transport = RecordingTransport::new();
    let ann = user(70);

    router.handle(&transport, detached_selection(&ann, "generate_it")).await;

    let history = harness.store.query(ann.id, None).await.unwrap();
    assert_eq!(history.len(), 1);
    let sent = transport.sent();
    assert_eq!(sent.len(), 2);
    match &sent[0] {
        Sent::Text { chat_id, text, .. } => {
            assert_eq!(*chat_id, ann.id);
            assert!(text.contains(&history[0].details.full_name));
        }
        other => panic!("expected a new message, got {other:?}"),
    }
    assert!(matches!(
        &sent[1],
        Sent::Answer { show_alert: false, .. }
    ));
    assert_eq!(router.sessions().last_locale(ann.id), Some(Locale::It));
}

#[tokio::test]
async fn failed_edit_alerts_and_leaves_session_untouched() {
    let harness = IntegrationHarness::new();
    let router = harness.router();
    let transport = RecordingTransport::rejecting_edits();
    let ann = user(71);

    router.handle(&transport, selection(&ann, "generate_fr")).await;

    assert_eq!(router.sessions().last_locale(ann.id), None);
    assert_eq!(
        transport.sent(),
        vec![Sent::Answer {
            callback_id: format!("cb-{}", ann.id),
            text: Some("An error occurred. Please try again.".into()),
            show_alert: true,
        }]
    );
}

#[tokio::test]
async fn failed_acknowledgement_keeps_previous_selection() {
    let harness = IntegrationHarness::new();
    let router = harness.router();
    let ann = user(72);

    router
        .handle(&RecordingTransport::new(), selection(&ann, "generate_es"))
        .await;
    assert_eq!(router.sessions().last_locale(ann.id), Some(Locale::Es));

    let transport = RecordingTransport::rejecting_acks();
    router.handle(&transport, selection(&ann, "generate_ko")).await;

    assert_eq!(router.sessions().last_locale(ann.id), Some(Locale::Es));
    assert!(transport.sent().iter().any(|sent| matches!(
        sent,
        Sent::Answer { show_alert: true, text: Some(text), .. }
            if text == "An error occurred. Please try again."
    )));
}
