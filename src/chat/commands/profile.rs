//! Chat command bridge for profile generation.

use std::time::Duration;

use crate::chat::transport::ChatUser;
use crate::error::{with_timeout, BotError, BotResult};
use crate::profiles::{synthesize_now, Locale, LocaleCatalog, ProfileRecord, SynthesisOptions};
use crate::reports::escape_html;
use crate::storage::{RecordStore, StoredProfile};

pub struct ProfileCommandBridge<'a> {
    catalog: &'a LocaleCatalog,
    store: &'a dyn RecordStore,
    options: SynthesisOptions,
    store_timeout: Duration,
}

impl<'a> ProfileCommandBridge<'a> {
    pub fn new(
        catalog: &'a LocaleCatalog,
        store: &'a dyn RecordStore,
        options: SynthesisOptions,
        store_timeout: Duration,
    ) -> Self {
        Self {
            catalog,
            store,
            options,
            store_timeout,
        }
    }

    /// Synthesizes a profile for `locale` and appends it to the history.
    /// Nothing is returned unless the append succeeded.
    pub async fn generate(&self, user: &ChatUser, locale: Locale) -> BotResult<ProfileRecord> {
        let source = self.catalog.field_source(locale)?;
        let record = synthesize_now(source, self.options);
        let entry = StoredProfile::new(user.id, user.username.clone(), record.clone());
        with_timeout("store append", self.store_timeout, async {
            self.store.append(&entry).await.map_err(BotError::Store)
        })
        .await?;
        tracing::info!(
            user_id = user.id,
            username = user.username.as_deref().unwrap_or(""),
            locale = locale.code(),
            record_id = %entry.record_id,
            "Saved generated details"
        );
        Ok(record)
    }
}

pub fn format_welcome(user: &ChatUser) -> String {
    format!(
        "✨<b>Hi! I'm the Faker Bot🤖</b>✨\n\n\
         ♦️ <b>User ID:</b> {}\n\
         ♦️ <b>First Name:</b> {}\n\
         ♦️ <b>Last Name:</b> {}\n\n\
         This bot can generate fake details for various countries.\n\n\
         <b>Commands:</b>\n\
         ♦️ /generate – Generate fake details\n\
         ♦️ /regenerate – Regenerate details for the last selected country\n\
         ♦️ /history – Show command history\n\
         ♦️ /log – Show bot log\n\
         Type /generate to start generating fake details.",
        user.id,
        escape_html(&user.first_name),
        escape_html(user.last_name.as_deref().unwrap_or("")),
    )
}
