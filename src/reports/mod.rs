//! Presentation of profiles: chat text, message chunking and HTML export.

pub mod html_renderer;
pub mod icons;
pub mod text;

pub use html_renderer::{escape_html, HtmlRenderer, HISTORY_FILE_NAME};
pub use icons::{icon_for, FIELD_ICONS};
pub use text::{history_text, profile_text, split_message, MESSAGE_CHAR_LIMIT};
