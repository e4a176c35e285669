use super::icons::icon_for;
use super::text::format_timestamp;
use crate::storage::StoredProfile;

pub const HISTORY_FILE_NAME: &str = "history.html";

/// Standalone HTML export of a user's profile history.
pub struct HtmlRenderer<'a> {
    owner: &'a str,
}

impl<'a> HtmlRenderer<'a> {
    /// `owner` is the display name printed in the page header.
    pub fn new(owner: &'a str) -> Self {
        Self { owner }
    }

    /// Renders `entries` in the order given (callers pass newest first).
    pub fn render_history(&self, entries: &[StoredProfile]) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\" />");
        html.push_str("<title>Fake Details History</title>");
        html.push_str(self.shared_styles());
        html.push_str("</head><body>");
        html.push_str("<header><h1>Fake Details History</h1>");
        html.push_str(&format!(
            "<p class=\"subtitle\">{} &middot; {} generated profile{}</p>",
            escape_html(self.owner),
            entries.len(),
            if entries.len() == 1 { "" } else { "s" }
        ));
        html.push_str("</header>");
        html.push_str("<section class=\"entries\">");
        for entry in entries {
            render_entry(&mut html, entry);
        }
        html.push_str("</section></body></html>");
        html
    }

    fn shared_styles(&self) -> &str {
        "<style>
            body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 2rem; color: #121212; background: #fff;}
            header { border-bottom: 1px solid #e0e0e0; margin-bottom: 1.5rem; padding-bottom: 1rem;}
            .subtitle { color: #555; }
            .entry { border-bottom: 1px solid #f0f0f0; padding: 0.75rem 0; }
            .entry h2 { margin: 0; font-size: 1.1rem; }
            .entry .meta { color: #666; font-size: 0.9rem; margin: 0.25rem 0 0.5rem; }
            .entry table { border-collapse: collapse; }
            .entry th { text-align: left; padding: 0.15rem 1rem 0.15rem 0; font-weight: 600; white-space: nowrap; }
            .entry td { font-family: ui-monospace, monospace; }
        </style>"
    }
}

fn render_entry(html: &mut String, entry: &StoredProfile) {
    html.push_str("<article class=\"entry\">");
    html.push_str(&format!(
        "<h2>{}</h2>",
        escape_html(&entry.details.full_name)
    ));
    html.push_str(&format!(
        "<p class=\"meta\">Generated on {}</p>",
        escape_html(&format_timestamp(&entry.timestamp))
    ));
    html.push_str("<table>");
    for (label, value) in entry.details.display_fields() {
        let icon = icon_for(label).map(|i| format!("{i} ")).unwrap_or_default();
        html.push_str(&format!(
            "<tr><th>{icon}{label}</th><td>{}</td></tr>",
            escape_html(&value)
        ));
    }
    html.push_str("</table></article>");
}

pub fn escape_html(input: &str) -> String {
    input
        .chars()
        .map(|ch| match ch {
            '<' => "&lt;".into(),
            '>' => "&gt;".into(),
            '&' => "&amp;".into(),
            '"' => "&quot;".into(),
            '\'' => "&#39;".into(),
            _ => ch.to_string(),
        })
        .collect::<String>()
}
