use fakerbot::chat::transport::{CallbackQuery, ChatUser, IncomingMessage, Update};

pub const MENU_MESSAGE_ID: i64 = 900;

pub fn user(id: i64) -> ChatUser {
    ChatUser {
        id,
        username: Some(format!("tester{id}")),
        first_name: "Test".into(),
        last_name: Some("User".into()),
    }
}

pub fn command(user: &ChatUser, text: &str) -> Update {
    Update::Message(IncomingMessage {
        chat_id: user.id,
        from: user.clone(),
        text: text.into(),
    })
}

pub fn selection(user: &ChatUser, data: &str) -> Update {
    Update::Callback(CallbackQuery {
        id: format!("cb-{}", user.id),
        from: user.clone(),
        message: Some((user.id, MENU_MESSAGE_ID)),
        data: Some(data.into()),
    })
}

/// A selection whose menu message Telegram no longer exposes.
pub fn detached_selection(user: &ChatUser, data: &str) -> Update {
    Update::Callback(CallbackQuery {
        id: format!("cb-{}", user.id),
        from: user.clone(),
        message: None,
        data: Some(data.into()),
    })
}
