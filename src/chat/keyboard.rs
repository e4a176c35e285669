use serde::Serialize;

use crate::error::{BotError, BotResult};
use crate::profiles::{Locale, LocaleCatalog};

pub const CALLBACK_PREFIX: &str = "generate_";
const BUTTONS_PER_ROW: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineButton {
    pub text: String,
    pub callback_data: String,
}

/// Serializes to the Bot API `InlineKeyboardMarkup` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineKeyboard {
    pub inline_keyboard: Vec<Vec<InlineButton>>,
}

/// Locale selection menu built once at startup from the enabled codes.
#[derive(Debug, Clone)]
pub struct LocaleMenu {
    locales: Vec<Locale>,
    keyboard: InlineKeyboard,
}

impl LocaleMenu {
    /// Fails on unknown codes, on locales the catalog cannot serve, on
    /// duplicates and on an empty list.
    pub fn build(enabled: &[String], catalog: &LocaleCatalog) -> BotResult<Self> {
        let mut locales = Vec::with_capacity(enabled.len());
        for code in enabled {
            let locale: Locale = code.parse()?;
            if !catalog.supports(locale) {
                return Err(BotError::UnsupportedLocale(code.clone()));
            }
            if locales.contains(&locale) {
                return Err(BotError::Config(format!(
                    "locale '{code}' is enabled more than once"
                )));
            }
            locales.push(locale);
        }
        if locales.is_empty() {
            return Err(BotError::Config("no locales enabled".into()));
        }

        let inline_keyboard = locales
            .chunks(BUTTONS_PER_ROW)
            .map(|row| {
                row.iter()
                    .map(|locale| InlineButton {
                        text: locale.menu_label().to_string(),
                        callback_data: callback_data_for(*locale),
                    })
                    .collect()
            })
            .collect();
        Ok(Self {
            locales,
            keyboard: InlineKeyboard { inline_keyboard },
        })
    }

    pub fn keyboard(&self) -> &InlineKeyboard {
        &self.keyboard
    }

    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    /// Resolves callback data to a locale offered by this menu.
    pub fn parse_selection(&self, data: &str) -> BotResult<Locale> {
        let code = data
            .strip_prefix(CALLBACK_PREFIX)
            .ok_or_else(|| BotError::UnsupportedLocale(data.to_string()))?;
        let locale: Locale = code.parse()?;
        if !self.locales.contains(&locale) {
            return Err(BotError::UnsupportedLocale(code.to_string()));
        }
        Ok(locale)
    }
}

pub fn callback_data_for(locale: Locale) -> String {
    format!("{CALLBACK_PREFIX}{}", locale.code())
}
