use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BotError;

/// Language/region tag selecting the tables that feed field generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "en-ca")]
    EnCa,
    #[serde(rename = "ru")]
    Ru,
    #[serde(rename = "zh")]
    Zh,
    #[serde(rename = "fr")]
    Fr,
    #[serde(rename = "de")]
    De,
    #[serde(rename = "es")]
    Es,
    #[serde(rename = "it")]
    It,
    #[serde(rename = "pt")]
    Pt,
    #[serde(rename = "ja")]
    Ja,
    #[serde(rename = "ko")]
    Ko,
    #[serde(rename = "nl")]
    Nl,
    #[serde(rename = "no")]
    No,
    #[serde(rename = "sv")]
    Sv,
    #[serde(rename = "da")]
    Da,
    #[serde(rename = "fi")]
    Fi,
}

impl Locale {
    /// Menu order.
    pub const ALL: [Locale; 16] = [
        Locale::En,
        Locale::EnCa,
        Locale::Ru,
        Locale::Zh,
        Locale::Fr,
        Locale::De,
        Locale::Es,
        Locale::It,
        Locale::Pt,
        Locale::Ja,
        Locale::Ko,
        Locale::Nl,
        Locale::No,
        Locale::Sv,
        Locale::Da,
        Locale::Fi,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::EnCa => "en-ca",
            Locale::Ru => "ru",
            Locale::Zh => "zh",
            Locale::Fr => "fr",
            Locale::De => "de",
            Locale::Es => "es",
            Locale::It => "it",
            Locale::Pt => "pt",
            Locale::Ja => "ja",
            Locale::Ko => "ko",
            Locale::Nl => "nl",
            Locale::No => "no",
            Locale::Sv => "sv",
            Locale::Da => "da",
            Locale::Fi => "fi",
        }
    }

    /// Button label shown in the selection menu.
    pub fn menu_label(self) -> &'static str {
        match self {
            Locale::En => "🇺🇸 English (US)",
            Locale::EnCa => "🇨🇦 English (Canada)",
            Locale::Ru => "🇷🇺 Russian",
            Locale::Zh => "🇨🇳 Chinese",
            Locale::Fr => "🇫🇷 French",
            Locale::De => "🇩🇪 German",
            Locale::Es => "🇪🇸 Spanish",
            Locale::It => "🇮🇹 Italian",
            Locale::Pt => "🇵🇹 Portuguese",
            Locale::Ja => "🇯🇵 Japanese",
            Locale::Ko => "🇰🇷 Korean",
            Locale::Nl => "🇳🇱 Dutch",
            Locale::No => "🇳🇴 Norwegian",
            Locale::Sv => "🇸🇪 Swedish",
            Locale::Da => "🇩🇰 Danish",
            Locale::Fi => "🇫🇮 Finnish",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let normalized = code.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|locale| locale.code() == normalized)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| BotError::UnsupportedLocale(s.to_string()))
    }
}
