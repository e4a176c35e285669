use dashmap::DashMap;

use crate::profiles::Locale;

/// Last locale each user picked from the `/generate` menu.
///
/// Lives for the process lifetime only. Each handler touches the entry of
/// the user that triggered it and nothing else.
#[derive(Debug, Default)]
pub struct SessionStore {
    selections: DashMap<i64, Locale>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_locale(&self, user_id: i64) -> Option<Locale> {
        self.selections.get(&user_id).map(|entry| *entry.value())
    }

    /// Records a selection, returning the one it replaced.
    pub fn select(&self, user_id: i64, locale: Locale) -> Option<Locale> {
        self.selections.insert(user_id, locale)
    }
}
