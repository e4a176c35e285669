pub mod chat;
pub mod config;
pub mod error;
pub mod orchestration;
pub mod profiles;
pub mod reports;
pub mod storage;
pub mod telemetry;

// Re-export commonly used types for convenience.
pub use chat::{CommandRouter, RouterSettings, TelegramClient};
pub use config::{AppConfig, WorkspacePaths};
pub use error::{BotError, BotResult};
pub use profiles::{Locale, LocaleCatalog, ProfileRecord};
pub use storage::{JsonlRecordStore, RecordStore, StoredProfile};
