use chrono::{Datelike, NaiveDate, Utc};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use super::catalog::FieldSource;
use super::model::{Gender, ProfileRecord};

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 50;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisOptions {
    /// Derive the `sex` field from the gender used for name selection.
    #[serde(default)]
    pub couple_sex_to_name_gender: bool,
}

/// Assembles one fake identity from `source`.
///
/// Total: every field generator is infallible once a `FieldSource` exists.
pub fn synthesize(
    source: &dyn FieldSource,
    rng: &mut dyn RngCore,
    current_year: i32,
    options: SynthesisOptions,
) -> ProfileRecord {
    let gender = draw_gender(rng);
    let first_name = source.first_name(gender, rng);
    let last_name = source.last_name(gender, rng);
    let full_name = format!("{first_name} {last_name}");

    let age = rng.gen_range(MIN_AGE..=MAX_AGE);
    let birth_date = birth_date_for(current_year - age as i32, rng);

    // Sex is drawn on its own unless coupling is requested, so a record may
    // pair a female name with a male sex label. Deliberate default.
    let sex_gender = if options.couple_sex_to_name_gender {
        gender
    } else {
        draw_gender(rng)
    };

    ProfileRecord {
        full_name,
        first_name,
        last_name,
        age,
        birth_date,
        sex: source.sex_label(sex_gender),
        university: source.university(rng),
        street_name: source.street_name(rng),
        street_number: source.street_number(rng),
        state: source.state(rng),
        city: source.city(rng),
        country: source.country(),
        postal_code: source.postal_code(rng),
        company: source.company(rng),
        phone_number: source.phone_number(rng),
        occupation: source.occupation(rng),
        nationality: source.nationality(rng),
        language: source.language(rng),
        username: source.username(rng),
        password: source.password(rng),
        weight_kg: source.weight_kg(rng),
        height_cm: source.height_cm(rng),
    }
}

/// [`synthesize`] with the thread RNG and the current UTC year.
///
/// Kept synchronous so the RNG handle never lives across an `.await`.
pub fn synthesize_now(source: &dyn FieldSource, options: SynthesisOptions) -> ProfileRecord {
    let mut rng = rand::thread_rng();
    synthesize(source, &mut rng, Utc::now().year(), options)
}

fn draw_gender(rng: &mut dyn RngCore) -> Gender {
    Gender::ALL.choose(rng).copied().unwrap_or(Gender::Male)
}

fn birth_date_for(year: i32, rng: &mut dyn RngCore) -> NaiveDate {
    let days_in_year = if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366
    } else {
        365
    };
    let ordinal = rng.gen_range(1..=days_in_year);
    NaiveDate::from_yo_opt(year, ordinal).unwrap_or(NaiveDate::MIN)
}
