pub mod history;
pub mod profile;

pub use history::{HistoryCommandBridge, HistoryRequest, HistoryResponse};
pub use profile::ProfileCommandBridge;

pub const SELECT_COUNTRY_PROMPT: &str = "Select a country to generate fake details:";
pub const NO_SELECTION_MESSAGE: &str = "Please use /generate first to select a country.";
pub const NO_HISTORY_MESSAGE: &str = "No history found.";
pub const HISTORY_CAPTION: &str = "Your fake details history";
pub const LOG_CAPTION: &str = "Your log file";
pub const LOG_SEND_FAILED_MESSAGE: &str = "Error sending log file. Please check the server logs.";
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred. Please try again.";

/// Entries registered with `setMyCommands`.
pub const COMMAND_DESCRIPTIONS: [(&str, &str); 5] = [
    ("start", "Show the welcome message"),
    ("generate", "Generate fake details"),
    ("regenerate", "Regenerate details for the last selected country"),
    ("history", "Show generated details history"),
    ("log", "Show bot log"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Generate,
    Regenerate,
    /// Raw first argument, if any. Validation happens in the history bridge.
    History(Option<String>),
    Log,
}

impl Command {
    /// Parses `/name[@bot] [args]`. Returns `None` for plain text, unknown
    /// commands and commands addressed to a different bot.
    pub fn parse(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let mut parts = text.trim().split_whitespace();
        let head = parts.next()?.strip_prefix('/')?;
        let (name, mention) = match head.split_once('@') {
            Some((name, mention)) => (name, Some(mention)),
            None => (head, None),
        };
        if let (Some(mention), Some(bot)) = (mention, bot_username) {
            if !mention.eq_ignore_ascii_case(bot) {
                return None;
            }
        }
        match name.to_ascii_lowercase().as_str() {
            "start" => Some(Command::Start),
            "generate" => Some(Command::Generate),
            "regenerate" => Some(Command::Regenerate),
            "history" => Some(Command::History(parts.next().map(str::to_string))),
            "log" => Some(Command::Log),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "/start",
            Command::Generate => "/generate",
            Command::Regenerate => "/regenerate",
            Command::History(_) => "/history",
            Command::Log => "/log",
        }
    }
}
