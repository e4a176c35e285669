//! Chat-platform boundary. The router only sees these types.

use async_trait::async_trait;

use super::keyboard::InlineKeyboard;
use crate::error::BotResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatUser {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: Option<String>,
}

impl ChatUser {
    /// `@username` when known, otherwise the first name.
    pub fn display_name(&self) -> String {
        match &self.username {
            Some(username) => format!("@{username}"),
            None => self.first_name.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub chat_id: i64,
    pub from: ChatUser,
    pub text: String,
}

/// Button press on an inline keyboard.
#[derive(Debug, Clone)]
pub struct CallbackQuery {
    pub id: String,
    pub from: ChatUser,
    /// Chat and message holding the keyboard; absent when the platform no
    /// longer exposes the original message.
    pub message: Option<(i64, i64)>,
    pub data: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Update {
    Message(IncomingMessage),
    Callback(CallbackQuery),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub caption: Option<String>,
}

/// Outbound operations. Text is sent in HTML parse mode.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send_text(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> BotResult<()>;

    async fn edit_text(&self, chat_id: i64, message_id: i64, text: &str) -> BotResult<()>;

    async fn send_document(&self, chat_id: i64, document: OutgoingDocument) -> BotResult<()>;

    async fn answer_callback(
        &self,
        callback_id: &str,
        text: Option<&str>,
        show_alert: bool,
    ) -> BotResult<()>;
}
