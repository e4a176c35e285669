use std::sync::Mutex;

use async_trait::async_trait;
use fakerbot::chat::keyboard::InlineKeyboard;
use fakerbot::chat::transport::{ChatTransport, OutgoingDocument};
use fakerbot::{BotError, BotResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text {
        chat_id: i64,
        text: String,
        keyboard: Option<InlineKeyboard>,
    },
    Edit {
        chat_id: i64,
        message_id: i64,
        text: String,
    },
    Document {
        chat_id: i64,
        document: OutgoingDocument,
    },
    Answer {
        callback_id: String,
        text: Option<String>,
        show_alert: bool,
    },
}

/// Captures outbound calls in order. Document uploads, edits and plain
/// callback acknowledgements can each be made to fail.
#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<Sent>>,
    reject_documents: bool,
    reject_edits: bool,
    reject_acks: bool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting_documents() -> Self {
        Self {
            reject_documents: true,
            ..Self::default()
        }
    }

    pub fn rejecting_edits() -> Self {
        Self {
            reject_edits: true,
            ..Self::default()
        }
    }

    /// Fails `answer_callback` unless it carries an alert.
    pub fn rejecting_acks() -> Self {
        Self {
            reject_acks: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|sent| match sent {
                Sent::Text { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn documents(&self) -> Vec<OutgoingDocument> {
        self.sent()
            .into_iter()
            .filter_map(|sent| match sent {
                Sent::Document { document, .. } => Some(document),
                _ => None,
            })
            .collect()
    }

    fn push(&self, sent: Sent) {
        self.sent.lock().unwrap().push(sent);
    }
}

#[async_trait]
impl ChatTransport for RecordingTransport {
    async fn send_text(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> BotResult<()> {
        self.push(Sent::Text {
            chat_id,
            text: text.to_string(),
            keyboard: keyboard.cloned(),
        });
        Ok(())
    }

    async fn edit_text(&self, chat_id: i64, message_id: i64, text: &str) -> BotResult<()> {
        if self.reject_edits {
            return Err(BotError::Transport("Bad Request: message to edit not found".into()));
        }
        self.push(Sent::Edit {
            chat_id,
            message_id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_document(&self, chat_id: i64, document: OutgoingDocument) -> BotResult<()> {
        if self.reject_documents {
            return Err(BotError::Transport("Bad Request: file upload rejected".into()));
        }
        self.push(Sent::Document { chat_id, document });
        Ok(())
    }

    async fn answer_callback(
        &self,
        callback_id: &str,
        text: Option<&str>,
        show_alert: bool,
    ) -> BotResult<()> {
        if self.reject_acks && !show_alert {
            return Err(BotError::Transport("Bad Request: query is too old".into()));
        }
        self.push(Sent::Answer {
            callback_id: callback_id.to_string(),
            text: text.map(str::to_string),
            show_alert,
        });
        Ok(())
    }
}
