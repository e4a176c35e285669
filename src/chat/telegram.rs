//! Telegram Bot API client implementing [`ChatTransport`] plus the polling
//! calls the `fakerbot` binary needs.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::keyboard::InlineKeyboard;
use super::transport::{
    CallbackQuery, ChatTransport, ChatUser, IncomingMessage, OutgoingDocument, Update,
};
use crate::error::{BotError, BotResult};

const PARSE_MODE: &str = "HTML";
/// Slack on top of the long-poll wait before the HTTP request gives up.
const POLL_GRACE: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct TgResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TgUser {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

impl From<TgUser> for ChatUser {
    fn from(user: TgUser) -> Self {
        ChatUser {
            id: user.id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TgChat {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TgMessage {
    pub message_id: i64,
    pub from: Option<TgUser>,
    pub chat: TgChat,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TgCallbackQuery {
    pub id: String,
    pub from: TgUser,
    pub message: Option<TgMessage>,
    pub data: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TgUpdate {
    pub update_id: i64,
    pub message: Option<TgMessage>,
    pub callback_query: Option<TgCallbackQuery>,
}

impl TgUpdate {
    /// Text messages from users and callback queries; everything else is
    /// dropped.
    pub fn into_update(self) -> Option<Update> {
        if let Some(callback) = self.callback_query {
            return Some(Update::Callback(CallbackQuery {
                id: callback.id,
                from: callback.from.into(),
                message: callback
                    .message
                    .map(|message| (message.chat.id, message.message_id)),
                data: callback.data,
            }));
        }
        let message = self.message?;
        let text = message.text?;
        let from = message.from?;
        if from.is_bot {
            return None;
        }
        Some(Update::Message(IncomingMessage {
            chat_id: message.chat.id,
            from: from.into(),
            text,
        }))
    }
}

#[derive(Debug, Serialize)]
struct BotCommand<'a> {
    command: &'a str,
    description: &'a str,
}

pub struct TelegramClient {
    http: Client,
    endpoint: String,
    poll_timeout: Duration,
}

impl TelegramClient {
    pub fn new(
        api_base: &str,
        token: &str,
        poll_timeout: Duration,
        request_timeout: Duration,
    ) -> BotResult<Self> {
        if token.trim().is_empty() {
            return Err(BotError::Config("bot token is empty".into()));
        }
        let http = Client::builder().timeout(request_timeout).build()?;
        Ok(Self {
            http,
            endpoint: format!("{}/bot{}", api_base.trim_end_matches('/'), token.trim()),
            poll_timeout,
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{method}", self.endpoint)
    }

    async fn call<P, R>(&self, method: &str, payload: &P) -> BotResult<R>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.method_url(method))
            .json(payload)
            .send()
            .await?;
        decode(method, response).await
    }

    pub async fn get_me(&self) -> BotResult<TgUser> {
        self.call("getMe", &json!({})).await
    }

    /// Long-polls for updates after `offset`.
    pub async fn get_updates(&self, offset: Option<i64>) -> BotResult<Vec<TgUpdate>> {
        let payload = json!({
            "offset": offset,
            "timeout": self.poll_timeout.as_secs(),
            "allowed_updates": ["message", "callback_query"],
        });
        let response = self
            .http
            .post(self.method_url("getUpdates"))
            .timeout(self.poll_timeout + POLL_GRACE)
            .json(&payload)
            .send()
            .await?;
        decode("getUpdates", response).await
    }

    pub async fn set_my_commands(&self, commands: &[(&str, &str)]) -> BotResult<()> {
        let commands: Vec<BotCommand<'_>> = commands
            .iter()
            .map(|&(command, description)| BotCommand {
                command,
                description,
            })
            .collect();
        let _: bool = self
            .call("setMyCommands", &json!({ "commands": commands }))
            .await?;
        Ok(())
    }
}

async fn decode<R: DeserializeOwned>(method: &str, response: reqwest::Response) -> BotResult<R> {
    let status = response.status();
    let body: TgResponse<R> = response.json().await.map_err(|err| {
        BotError::Transport(format!("{method}: unreadable response ({status}): {err}"))
    })?;
    if !body.ok {
        return Err(BotError::Transport(format!(
            "{method}: {}",
            body.description
                .unwrap_or_else(|| format!("request failed with status {status}"))
        )));
    }
    body.result
        .ok_or_else(|| BotError::Transport(format!("{method}: response carried no result")))
}

fn mime_for(file_name: &str) -> &'static str {
    if file_name.ends_with(".html") {
        "text/html"
    } else {
        "text/plain"
    }
}

#[async_trait]
impl ChatTransport for TelegramClient {
    async fn send_text(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> BotResult<()> {
        let mut payload = json!({
            "chat_id": chat_id,
            "text": text,
            "parse_mode": PARSE_MODE,
        });
        if let Some(keyboard) = keyboard {
            payload["reply_markup"] = serde_json::to_value(keyboard)
                .map_err(|err| BotError::Transport(err.to_string()))?;
        }
        let _: serde_json::Value = self.call("sendMessage", &payload).await?;
        Ok(())
    }

    async fn edit_text(&self, chat_id: i64, message_id: i64, text: &str) -> BotResult<()> {
        let payload = json!({
            "chat_id": chat_id,
            "message_id": message_id,
            "text": text,
            "parse_mode": PARSE_MODE,
        });
        let _: serde_json::Value = self.call("editMessageText", &payload).await?;
        Ok(())
    }

    async fn send_document(&self, chat_id: i64, document: OutgoingDocument) -> BotResult<()> {
        let mime = mime_for(&document.file_name);
        let part = Part::bytes(document.bytes)
            .file_name(document.file_name)
            .mime_str(mime)?;
        let mut form = Form::new()
            .text("chat_id", chat_id.to_string())
            .part("document", part);
        if let Some(caption) = document.caption {
            form = form.text("caption", caption);
        }
        let response = self
            .http
            .post(self.method_url("sendDocument"))
            .multipart(form)
            .send()
            .await?;
        let _: serde_json::Value = decode("sendDocument", response).await?;
        Ok(())
    }

    async fn answer_callback(
        &self,
        callback_id: &str,
        text: Option<&str>,
        show_alert: bool,
    ) -> BotResult<()> {
        let payload = json!({
            "callback_query_id": callback_id,
            "text": text,
            "show_alert": show_alert,
        });
        let _: bool = self.call("answerCallbackQuery", &payload).await?;
        Ok(())
    }
}
