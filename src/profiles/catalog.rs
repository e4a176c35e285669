//! Built-in locale tables that feed the synthesizer.
//!
//! Each supported locale ships one YAML table set embedded at compile time.
//! Tables are parsed and validated once when the catalog is built, so a
//! malformed table is a startup error instead of a failed request.

use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use serde::Deserialize;

use super::locale::Locale;
use super::model::Gender;
use crate::error::BotError;

const BUILTIN_TABLES: [(Locale, &str); 16] = [
    (Locale::En, include_str!("locales/en.yaml")),
    (Locale::EnCa, include_str!("locales/en-ca.yaml")),
    (Locale::Ru, include_str!("locales/ru.yaml")),
    (Locale::Zh, include_str!("locales/zh.yaml")),
    (Locale::Fr, include_str!("locales/fr.yaml")),
    (Locale::De, include_str!("locales/de.yaml")),
    (Locale::Es, include_str!("locales/es.yaml")),
    (Locale::It, include_str!("locales/it.yaml")),
    (Locale::Pt, include_str!("locales/pt.yaml")),
    (Locale::Ja, include_str!("locales/ja.yaml")),
    (Locale::Ko, include_str!("locales/ko.yaml")),
    (Locale::Nl, include_str!("locales/nl.yaml")),
    (Locale::No, include_str!("locales/no.yaml")),
    (Locale::Sv, include_str!("locales/sv.yaml")),
    (Locale::Da, include_str!("locales/da.yaml")),
    (Locale::Fi, include_str!("locales/fi.yaml")),
];

const USERNAME_WORDS: &[&str] = &[
    "amber", "atlas", "breeze", "cobalt", "delta", "ember", "falcon", "granite", "harbor",
    "indigo", "juniper", "kestrel", "lumen", "maple", "nimbus", "onyx", "pepper", "quartz",
    "raven", "sable", "tundra", "umber", "vortex", "willow", "zephyr",
];
const USERNAME_SEPARATORS: &[&str] = &["", "_", ".", "-"];
const PASSWORD_LENGTH: usize = 8;

pub const STREET_NUMBER_MAX: u32 = 1400;
pub const WEIGHT_KG_RANGE: (u32, u32) = (38, 90);
pub const HEIGHT_CM_RANGE: (u32, u32) = (150, 200);

/// Locale-aware value generators consumed by the synthesizer.
///
/// Locale-independent tokens (street number, credentials, biometrics) have
/// default implementations.
pub trait FieldSource: Send + Sync {
    fn first_name(&self, gender: Gender, rng: &mut dyn RngCore) -> String;
    fn last_name(&self, gender: Gender, rng: &mut dyn RngCore) -> String;
    fn sex_label(&self, gender: Gender) -> String;
    fn university(&self, rng: &mut dyn RngCore) -> String;
    fn street_name(&self, rng: &mut dyn RngCore) -> String;
    fn state(&self, rng: &mut dyn RngCore) -> String;
    fn city(&self, rng: &mut dyn RngCore) -> String;
    fn country(&self) -> String;
    fn postal_code(&self, rng: &mut dyn RngCore) -> String;
    fn company(&self, rng: &mut dyn RngCore) -> String;
    fn phone_number(&self, rng: &mut dyn RngCore) -> String;
    fn occupation(&self, rng: &mut dyn RngCore) -> String;
    fn nationality(&self, rng: &mut dyn RngCore) -> String;
    fn language(&self, rng: &mut dyn RngCore) -> String;

    fn street_number(&self, rng: &mut dyn RngCore) -> u32 {
        rng.gen_range(1..=STREET_NUMBER_MAX)
    }

    fn username(&self, rng: &mut dyn RngCore) -> String {
        let word = USERNAME_WORDS.choose(rng).copied().unwrap_or("user");
        let separator = USERNAME_SEPARATORS.choose(rng).copied().unwrap_or("_");
        let number: u32 = rng.gen_range(1800..=2100);
        format!("{word}{separator}{number}")
    }

    fn password(&self, rng: &mut dyn RngCore) -> String {
        (0..PASSWORD_LENGTH)
            .map(|_| rng.sample(Alphanumeric) as char)
            .collect()
    }

    fn weight_kg(&self, rng: &mut dyn RngCore) -> u32 {
        rng.gen_range(WEIGHT_KG_RANGE.0..=WEIGHT_KG_RANGE.1)
    }

    fn height_cm(&self, rng: &mut dyn RngCore) -> u32 {
        rng.gen_range(HEIGHT_CM_RANGE.0..=HEIGHT_CM_RANGE.1)
    }
}

/// Male/female name lists. An empty female list reuses the male list, for
/// locales whose surnames do not inflect.
#[derive(Debug, Clone, Deserialize)]
pub struct NameTable {
    pub male: Vec<String>,
    #[serde(default)]
    pub female: Vec<String>,
}

impl NameTable {
    fn for_gender(&self, gender: Gender) -> &[String] {
        match gender {
            Gender::Female if !self.female.is_empty() => &self.female,
            _ => &self.male,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SexLabels {
    pub male: String,
    pub female: String,
}

/// Table set for one locale, as stored in `locales/<code>.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct LocaleTables {
    pub country: String,
    pub sex: SexLabels,
    pub first_names: NameTable,
    pub last_names: NameTable,
    pub universities: Vec<String>,
    pub street_names: Vec<String>,
    pub states: Vec<String>,
    pub cities: Vec<String>,
    /// `#` becomes a digit, `@` an uppercase ASCII letter.
    pub postal_code_masks: Vec<String>,
    pub companies: Vec<String>,
    pub phone_masks: Vec<String>,
    pub occupations: Vec<String>,
    pub nationalities: Vec<String>,
    pub languages: Vec<String>,
}

impl LocaleTables {
    pub fn from_yaml(raw: &str) -> Result<Self> {
        let tables: LocaleTables = serde_yaml::from_str(raw)?;
        tables.validate()?;
        Ok(tables)
    }

    fn validate(&self) -> Result<()> {
        let lists: [(&str, &[String]); 14] = [
            ("first_names.male", &self.first_names.male),
            ("first_names.female", &self.first_names.female),
            ("last_names.male", &self.last_names.male),
            ("universities", &self.universities),
            ("street_names", &self.street_names),
            ("states", &self.states),
            ("cities", &self.cities),
            ("postal_code_masks", &self.postal_code_masks),
            ("companies", &self.companies),
            ("phone_masks", &self.phone_masks),
            ("occupations", &self.occupations),
            ("nationalities", &self.nationalities),
            ("languages", &self.languages),
            ("country", std::slice::from_ref(&self.country)),
        ];
        for (name, values) in lists {
            if values.is_empty() || values.iter().any(|v| v.trim().is_empty()) {
                bail!("table '{name}' must contain at least one non-empty value");
            }
        }
        Ok(())
    }
}

fn pick(values: &[String], rng: &mut dyn RngCore) -> String {
    values.choose(rng).cloned().unwrap_or_default()
}

/// Expands a `#`/`@` mask into a concrete code.
pub fn fill_mask(mask: &str, rng: &mut dyn RngCore) -> String {
    mask.chars()
        .map(|ch| match ch {
            '#' => char::from(b'0' + rng.gen_range(0..10u8)),
            '@' => char::from(b'A' + rng.gen_range(0..26u8)),
            other => other,
        })
        .collect()
}

impl FieldSource for LocaleTables {
    fn first_name(&self, gender: Gender, rng: &mut dyn RngCore) -> String {
        pick(self.first_names.for_gender(gender), rng)
    }

    fn last_name(&self, gender: Gender, rng: &mut dyn RngCore) -> String {
        pick(self.last_names.for_gender(gender), rng)
    }

    fn sex_label(&self, gender: Gender) -> String {
        match gender {
            Gender::Male => self.sex.male.clone(),
            Gender::Female => self.sex.female.clone(),
        }
    }

    fn university(&self, rng: &mut dyn RngCore) -> String {
        pick(&self.universities, rng)
    }

    fn street_name(&self, rng: &mut dyn RngCore) -> String {
        pick(&self.street_names, rng)
    }

    fn state(&self, rng: &mut dyn RngCore) -> String {
        pick(&self.states, rng)
    }

    fn city(&self, rng: &mut dyn RngCore) -> String {
        pick(&self.cities, rng)
    }

    fn country(&self) -> String {
        self.country.clone()
    }

    fn postal_code(&self, rng: &mut dyn RngCore) -> String {
        let mask = pick(&self.postal_code_masks, rng);
        fill_mask(&mask, rng)
    }

    fn company(&self, rng: &mut dyn RngCore) -> String {
        pick(&self.companies, rng)
    }

    fn phone_number(&self, rng: &mut dyn RngCore) -> String {
        let mask = pick(&self.phone_masks, rng);
        fill_mask(&mask, rng)
    }

    fn occupation(&self, rng: &mut dyn RngCore) -> String {
        pick(&self.occupations, rng)
    }

    fn nationality(&self, rng: &mut dyn RngCore) -> String {
        pick(&self.nationalities, rng)
    }

    fn language(&self, rng: &mut dyn RngCore) -> String {
        pick(&self.languages, rng)
    }
}

/// All locale table sets known to this build.
#[derive(Debug, Clone, Default)]
pub struct LocaleCatalog {
    tables: HashMap<Locale, LocaleTables>,
}

impl LocaleCatalog {
    /// Parses the embedded tables for every built-in locale.
    pub fn builtin() -> Result<Self> {
        let mut tables = HashMap::new();
        for (locale, raw) in BUILTIN_TABLES {
            let parsed = LocaleTables::from_yaml(raw)
                .with_context(|| format!("Invalid built-in tables for locale '{locale}'"))?;
            tables.insert(locale, parsed);
        }
        Ok(Self { tables })
    }

    pub fn from_tables(tables: HashMap<Locale, LocaleTables>) -> Self {
        Self { tables }
    }

    pub fn supports(&self, locale: Locale) -> bool {
        self.tables.contains_key(&locale)
    }

    pub fn locales(&self) -> Vec<Locale> {
        Locale::ALL
            .iter()
            .copied()
            .filter(|locale| self.supports(*locale))
            .collect()
    }

    pub fn field_source(&self, locale: Locale) -> Result<&dyn FieldSource, BotError> {
        self.tables
            .get(&locale)
            .map(|tables| tables as &dyn FieldSource)
            .ok_or_else(|| BotError::UnsupportedLocale(locale.code().to_string()))
    }
}
