//! Chat-message renderings (HTML parse mode).

use chrono::{DateTime, Utc};

use super::html_renderer::escape_html;
use super::icons::icon_for;
use crate::profiles::ProfileRecord;
use crate::storage::StoredProfile;

/// Largest message the Bot API accepts, in characters.
pub const MESSAGE_CHAR_LIMIT: usize = 4096;

pub fn profile_text(record: &ProfileRecord) -> String {
    let mut out = format!(
        "<b>Personal Profile: {}</b>\n\n",
        escape_html(&record.full_name)
    );
    push_field_lines(&mut out, record);
    out
}

/// Inline history listing. `limit` is the count the user asked for.
pub fn history_text(entries: &[StoredProfile], limit: usize) -> String {
    let mut out = format!("<b>Last {limit} generated details:</b>\n\n");
    for entry in entries {
        out.push_str(&format!(
            "<b>Generated on:</b> {}\n",
            format_timestamp(&entry.timestamp)
        ));
        push_field_lines(&mut out, &entry.details);
        out.push('\n');
    }
    out
}

pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn push_field_lines(out: &mut String, record: &ProfileRecord) {
    for (label, value) in record.display_fields() {
        if let Some(icon) = icon_for(label) {
            out.push_str(icon);
            out.push(' ');
        }
        out.push_str(&format!(
            "<b>{label}:</b> <code>{}</code>\n",
            escape_html(&value)
        ));
    }
}

/// Splits `text` into chunks of at most `max_chars` characters, breaking at
/// line ends where possible. A single line longer than the limit is cut at
/// character boundaries.
pub fn split_message(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in text.split_inclusive('\n') {
        let line_len = line.chars().count();
        if current_len + line_len > max_chars && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if line_len > max_chars {
            let chars: Vec<char> = line.chars().collect();
            for piece in chars.chunks(max_chars) {
                chunks.push(piece.iter().collect());
            }
            continue;
        }
        current.push_str(line);
        current_len += line_len;
    }
    if !current.trim().is_empty() {
        chunks.push(current);
    }
    chunks
}
