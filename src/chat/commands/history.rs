//! `/history` parsing and rendering.

use std::time::Duration;

use crate::chat::transport::{ChatUser, OutgoingDocument};
use crate::error::{with_timeout, BotError, BotResult};
use crate::reports::{history_text, split_message, HtmlRenderer, HISTORY_FILE_NAME, MESSAGE_CHAR_LIMIT};
use crate::storage::RecordStore;

use super::HISTORY_CAPTION;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryRequest {
    /// No argument: the full history as an HTML document.
    Document,
    /// Any argument: inline text for the newest `limit` entries.
    Inline { limit: usize },
}

impl HistoryRequest {
    /// A present but unusable argument still selects inline output, with
    /// `default_limit`, and the rejection is returned alongside.
    pub fn parse(arg: Option<&str>, default_limit: usize) -> (Self, Option<BotError>) {
        let Some(raw) = arg else {
            return (HistoryRequest::Document, None);
        };
        match raw.trim().parse::<usize>() {
            Ok(limit) if limit > 0 => (HistoryRequest::Inline { limit }, None),
            _ => (
                HistoryRequest::Inline {
                    limit: default_limit,
                },
                Some(BotError::InvalidHistoryLimit(raw.to_string())),
            ),
        }
    }
}

pub fn format_invalid_limit(default_limit: usize) -> String {
    format!("Invalid limit. Using default limit of {default_limit}.")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryResponse {
    Empty,
    Inline(Vec<String>),
    Document(OutgoingDocument),
}

pub struct HistoryCommandBridge<'a> {
    store: &'a dyn RecordStore,
    store_timeout: Duration,
}

impl<'a> HistoryCommandBridge<'a> {
    pub fn new(store: &'a dyn RecordStore, store_timeout: Duration) -> Self {
        Self {
            store,
            store_timeout,
        }
    }

    pub async fn run(&self, user: &ChatUser, request: HistoryRequest) -> BotResult<HistoryResponse> {
        let limit = match request {
            HistoryRequest::Document => None,
            HistoryRequest::Inline { limit } => Some(limit),
        };
        let entries = with_timeout("store query", self.store_timeout, async {
            self.store.query(user.id, limit).await.map_err(BotError::Store)
        })
        .await?;
        if entries.is_empty() {
            return Ok(HistoryResponse::Empty);
        }
        Ok(match request {
            HistoryRequest::Inline { limit } => HistoryResponse::Inline(split_message(
                &history_text(&entries, limit),
                MESSAGE_CHAR_LIMIT,
            )),
            HistoryRequest::Document => {
                let owner = user.display_name();
                let html = HtmlRenderer::new(&owner).render_history(&entries);
                HistoryResponse::Document(OutgoingDocument {
                    file_name: HISTORY_FILE_NAME.to_string(),
                    bytes: html.into_bytes(),
                    caption: Some(HISTORY_CAPTION.to_string()),
                })
            }
        })
    }
}
