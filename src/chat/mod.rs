pub mod commands;
pub mod keyboard;
pub mod telegram;
pub mod transport;

use std::sync::Arc;
use std::time::Duration;

use crate::config::AppConfig;
use crate::error::{with_timeout, BotError, BotResult};
use crate::orchestration::{LogLevel, SessionStore, UserLogBook};
use crate::profiles::{LocaleCatalog, SynthesisOptions};
use crate::reports::{profile_text, split_message, MESSAGE_CHAR_LIMIT};
use crate::storage::RecordStore;

use commands::history::format_invalid_limit;
use commands::profile::format_welcome;
use commands::{
    Command, HistoryCommandBridge, HistoryRequest, HistoryResponse, ProfileCommandBridge,
    GENERIC_FAILURE_MESSAGE, LOG_CAPTION, LOG_SEND_FAILED_MESSAGE, NO_HISTORY_MESSAGE,
    NO_SELECTION_MESSAGE, SELECT_COUNTRY_PROMPT,
};
use keyboard::{InlineKeyboard, LocaleMenu};
use transport::{CallbackQuery, ChatTransport, ChatUser, IncomingMessage, OutgoingDocument, Update};

pub use telegram::TelegramClient;

#[derive(Debug, Clone)]
pub struct RouterSettings {
    pub default_history_limit: usize,
    pub store_timeout: Duration,
    pub transport_timeout: Duration,
    pub synthesis: SynthesisOptions,
    /// Own username, used to ignore commands addressed to other bots.
    pub bot_username: Option<String>,
}

impl RouterSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            default_history_limit: config.history.default_limit,
            store_timeout: config.timeouts.store(),
            transport_timeout: config.timeouts.transport(),
            synthesis: config.synthesis,
            bot_username: None,
        }
    }
}

/// Maps chat updates onto synthesis, storage and presentation.
///
/// Shared across per-update tasks; all mutable state lives in the
/// [`SessionStore`] and the collaborators behind it.
pub struct CommandRouter {
    catalog: Arc<LocaleCatalog>,
    store: Arc<dyn RecordStore>,
    sessions: SessionStore,
    user_logs: UserLogBook,
    menu: LocaleMenu,
    settings: RouterSettings,
}

impl CommandRouter {
    pub fn new(
        catalog: Arc<LocaleCatalog>,
        store: Arc<dyn RecordStore>,
        user_logs: UserLogBook,
        menu: LocaleMenu,
        settings: RouterSettings,
    ) -> Self {
        Self {
            catalog,
            store,
            sessions: SessionStore::new(),
            user_logs,
            menu,
            settings,
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn menu(&self) -> &LocaleMenu {
        &self.menu
    }

    /// Handles one update. Failures are logged and answered with a generic
    /// message; they never propagate to the polling loop.
    pub async fn handle<T: ChatTransport + ?Sized>(&self, transport: &T, update: Update) {
        match update {
            Update::Message(message) => self.handle_message(transport, &message).await,
            Update::Callback(callback) => self.handle_callback(transport, &callback).await,
        }
    }

    async fn handle_message<T: ChatTransport + ?Sized>(&self, transport: &T, message: &IncomingMessage) {
        let Some(command) = Command::parse(&message.text, self.settings.bot_username.as_deref())
        else {
            return;
        };
        let user = &message.from;
        let command_name = command.name();
        tracing::info!(
            user_id = user.id,
            username = user.username.as_deref().unwrap_or(""),
            command = command_name,
            "Received command"
        );
        self.log_user(user.id, LogLevel::Info, &format!("Received {command_name} command"))
            .await;

        let chat_id = message.chat_id;
        let outcome = match command {
            Command::Start => self.send(transport, chat_id, &format_welcome(user), None).await,
            Command::Generate => {
                self.send(
                    transport,
                    chat_id,
                    SELECT_COUNTRY_PROMPT,
                    Some(self.menu.keyboard()),
                )
                .await
            }
            Command::Regenerate => self.regenerate(transport, chat_id, user).await,
            Command::History(arg) => self.history(transport, chat_id, user, arg.as_deref()).await,
            Command::Log => {
                self.send_log(transport, chat_id, user).await;
                Ok(())
            }
        };

        if let Err(err) = outcome {
            self.report_failure(user, command_name, &err).await;
            if let Err(notify_err) = self
                .send(transport, chat_id, GENERIC_FAILURE_MESSAGE, None)
                .await
            {
                tracing::warn!(user_id = user.id, error = %notify_err, "Failed to deliver failure notice");
            }
        }
    }

    async fn handle_callback<T: ChatTransport + ?Sized>(&self, transport: &T, callback: &CallbackQuery) {
        let user = &callback.from;
        if let Err(err) = self.select_locale(transport, callback).await {
            self.report_failure(user, "locale selection", &err).await;
            let answer = with_timeout(
                "answerCallbackQuery",
                self.settings.transport_timeout,
                transport.answer_callback(&callback.id, Some(GENERIC_FAILURE_MESSAGE), true),
            )
            .await;
            if let Err(answer_err) = answer {
                tracing::warn!(user_id = user.id, error = %answer_err, "Failed to answer callback");
            }
        }
    }

    async fn select_locale<T: ChatTransport + ?Sized>(
        &self,
        transport: &T,
        callback: &CallbackQuery,
    ) -> BotResult<()> {
        let user = &callback.from;
        let locale = self
            .menu
            .parse_selection(callback.data.as_deref().unwrap_or_default())?;
        tracing::info!(user_id = user.id, locale = locale.code(), "Generating details");
        self.log_user(
            user.id,
            LogLevel::Info,
            &format!("Generating details for locale: {}", locale.code()),
        )
        .await;

        let record = self.profile_bridge().generate(user, locale).await?;
        let text = profile_text(&record);
        match callback.message {
            Some((chat_id, message_id)) => {
                with_timeout(
                    "editMessageText",
                    self.settings.transport_timeout,
                    transport.edit_text(chat_id, message_id, &text),
                )
                .await?
            }
            None => self.send_chunks(transport, user.id, &text).await?,
        }
        with_timeout(
            "answerCallbackQuery",
            self.settings.transport_timeout,
            transport.answer_callback(&callback.id, None, false),
        )
        .await?;
        self.sessions.select(user.id, locale);
        self.log_user(
            user.id,
            LogLevel::Info,
            &format!("Displayed generated details for {}", user.display_name()),
        )
        .await;
        Ok(())
    }

    async fn regenerate<T: ChatTransport + ?Sized>(
        &self,
        transport: &T,
        chat_id: i64,
        user: &ChatUser,
    ) -> BotResult<()> {
        let Some(locale) = self.sessions.last_locale(user.id) else {
            self.log_user(user.id, LogLevel::Info, &BotError::NoLocaleSelected.to_string())
                .await;
            return self.send(transport, chat_id, NO_SELECTION_MESSAGE, None).await;
        };
        let record = self.profile_bridge().generate(user, locale).await?;
        self.send_chunks(transport, chat_id, &profile_text(&record))
            .await?;
        self.log_user(
            user.id,
            LogLevel::Info,
            &format!("Displayed regenerated details for {}", user.display_name()),
        )
        .await;
        Ok(())
    }

    async fn history<T: ChatTransport + ?Sized>(
        &self,
        transport: &T,
        chat_id: i64,
        user: &ChatUser,
        arg: Option<&str>,
    ) -> BotResult<()> {
        let default_limit = self.settings.default_history_limit;
        let (request, warning) = HistoryRequest::parse(arg, default_limit);
        if let Some(warning) = warning {
            self.log_user(user.id, LogLevel::Warning, &warning.to_string())
                .await;
            self.send(transport, chat_id, &format_invalid_limit(default_limit), None)
                .await?;
        }

        let bridge = HistoryCommandBridge::new(self.store.as_ref(), self.settings.store_timeout);
        match bridge.run(user, request).await? {
            HistoryResponse::Empty => {
                self.send(transport, chat_id, NO_HISTORY_MESSAGE, None)
                    .await?
            }
            HistoryResponse::Inline(chunks) => {
                for chunk in chunks {
                    self.send(transport, chat_id, &chunk, None).await?;
                }
            }
            HistoryResponse::Document(document) => {
                self.send_document(transport, chat_id, document).await?
            }
        }
        self.log_user(
            user.id,
            LogLevel::Info,
            &format!("Displayed history for {}", user.display_name()),
        )
        .await;
        Ok(())
    }

    async fn send_log<T: ChatTransport + ?Sized>(&self, transport: &T, chat_id: i64, user: &ChatUser) {
        let delivered = async {
            let bytes = self
                .user_logs
                .read(user.id)
                .await
                .map_err(|err| BotError::Io(std::io::Error::other(format!("{err:#}"))))?
                .ok_or_else(|| {
                    BotError::Io(std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "log file does not exist",
                    ))
                })?;
            let document = OutgoingDocument {
                file_name: format!("user_{}.log", user.id),
                bytes,
                caption: Some(LOG_CAPTION.to_string()),
            };
            self.send_document(transport, chat_id, document).await
        }
        .await;

        if let Err(err) = delivered {
            tracing::error!(user_id = user.id, error = %err, "Error sending log file");
            self.log_user(user.id, LogLevel::Error, &format!("Error sending log file: {err}"))
                .await;
            if let Err(notify_err) = self
                .send(transport, chat_id, LOG_SEND_FAILED_MESSAGE, None)
                .await
            {
                tracing::warn!(user_id = user.id, error = %notify_err, "Failed to deliver failure notice");
            }
        }
    }

    fn profile_bridge(&self) -> ProfileCommandBridge<'_> {
        ProfileCommandBridge::new(
            &self.catalog,
            self.store.as_ref(),
            self.settings.synthesis,
            self.settings.store_timeout,
        )
    }

    async fn send<T: ChatTransport + ?Sized>(
        &self,
        transport: &T,
        chat_id: i64,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> BotResult<()> {
        with_timeout(
            "sendMessage",
            self.settings.transport_timeout,
            transport.send_text(chat_id, text, keyboard),
        )
        .await
    }

    async fn send_chunks<T: ChatTransport + ?Sized>(
        &self,
        transport: &T,
        chat_id: i64,
        text: &str,
    ) -> BotResult<()> {
        for chunk in split_message(text, MESSAGE_CHAR_LIMIT) {
            self.send(transport, chat_id, &chunk, None).await?;
        }
        Ok(())
    }

    async fn send_document<T: ChatTransport + ?Sized>(
        &self,
        transport: &T,
        chat_id: i64,
        document: OutgoingDocument,
    ) -> BotResult<()> {
        with_timeout(
            "sendDocument",
            self.settings.transport_timeout,
            transport.send_document(chat_id, document),
        )
        .await
    }

    async fn report_failure(&self, user: &ChatUser, action: &str, err: &BotError) {
        if err.is_user_input() || matches!(err, BotError::UnsupportedLocale(_)) {
            tracing::warn!(user_id = user.id, action, error = %err, "Rejected request");
        } else {
            tracing::error!(user_id = user.id, action, error = %err, "Request failed");
        }
        self.log_user(user.id, LogLevel::Error, &format!("Error in {action}: {err}"))
            .await;
    }

    /// Best effort: a broken user log must not fail the request.
    async fn log_user(&self, user_id: i64, level: LogLevel, message: &str) {
        if let Err(err) = self.user_logs.append(user_id, level, message).await {
            tracing::warn!(user_id, error = %err, "Failed to write user log");
        }
    }
}
