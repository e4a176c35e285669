//! Per-user runtime state: locale selections and the user-facing event log.

pub mod sessions;
pub mod user_log;

pub use sessions::SessionStore;
pub use user_log::{LogLevel, UserLogBook};
