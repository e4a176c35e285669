//! Profile record shape and the display field set shared by every renderer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Binary gender used to pick name tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];
}

/// One synthesized fake identity. Never mutated after synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub birth_date: NaiveDate,
    pub sex: String,
    pub university: String,
    pub street_name: String,
    pub street_number: u32,
    pub state: String,
    pub city: String,
    pub country: String,
    pub postal_code: String,
    pub company: String,
    pub phone_number: String,
    pub occupation: String,
    pub nationality: String,
    pub language: String,
    pub username: String,
    pub password: String,
    pub weight_kg: u32,
    pub height_cm: u32,
}

/// Display fields in the order they are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    FullName,
    FirstName,
    LastName,
    Age,
    BirthDate,
    Sex,
    University,
    StreetName,
    StreetNumber,
    State,
    City,
    Country,
    PostalCode,
    Company,
    PhoneNumber,
    Occupation,
    Nationality,
    Language,
    Username,
    Password,
    Weight,
    Height,
}

impl ProfileField {
    pub const ALL: [ProfileField; 22] = [
        ProfileField::FullName,
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::Age,
        ProfileField::BirthDate,
        ProfileField::Sex,
        ProfileField::University,
        ProfileField::StreetName,
        ProfileField::StreetNumber,
        ProfileField::State,
        ProfileField::City,
        ProfileField::Country,
        ProfileField::PostalCode,
        ProfileField::Company,
        ProfileField::PhoneNumber,
        ProfileField::Occupation,
        ProfileField::Nationality,
        ProfileField::Language,
        ProfileField::Username,
        ProfileField::Password,
        ProfileField::Weight,
        ProfileField::Height,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProfileField::FullName => "Full Name",
            ProfileField::FirstName => "First Name",
            ProfileField::LastName => "Last Name",
            ProfileField::Age => "Age",
            ProfileField::BirthDate => "Birth Date",
            ProfileField::Sex => "Sex",
            ProfileField::University => "University",
            ProfileField::StreetName => "Street Name",
            ProfileField::StreetNumber => "Street Number",
            ProfileField::State => "State",
            ProfileField::City => "City",
            ProfileField::Country => "Country",
            ProfileField::PostalCode => "Postal Code",
            ProfileField::Company => "Company",
            ProfileField::PhoneNumber => "Phone Number",
            ProfileField::Occupation => "Occupation",
            ProfileField::Nationality => "Nationality",
            ProfileField::Language => "Language",
            ProfileField::Username => "Username",
            ProfileField::Password => "Password",
            ProfileField::Weight => "Weight",
            ProfileField::Height => "Height",
        }
    }
}

impl ProfileRecord {
    /// Formatted value for a display field. Units are attached here and
    /// nowhere else.
    pub fn display_value(&self, field: ProfileField) -> String {
        match field {
            ProfileField::FullName => self.full_name.clone(),
            ProfileField::FirstName => self.first_name.clone(),
            ProfileField::LastName => self.last_name.clone(),
            ProfileField::Age => self.age.to_string(),
            ProfileField::BirthDate => self.birth_date.format("%Y-%m-%d").to_string(),
            ProfileField::Sex => self.sex.clone(),
            ProfileField::University => self.university.clone(),
            ProfileField::StreetName => self.street_name.clone(),
            ProfileField::StreetNumber => self.street_number.to_string(),
            ProfileField::State => self.state.clone(),
            ProfileField::City => self.city.clone(),
            ProfileField::Country => self.country.clone(),
            ProfileField::PostalCode => self.postal_code.clone(),
            ProfileField::Company => self.company.clone(),
            ProfileField::PhoneNumber => self.phone_number.clone(),
            ProfileField::Occupation => self.occupation.clone(),
            ProfileField::Nationality => self.nationality.clone(),
            ProfileField::Language => self.language.clone(),
            ProfileField::Username => self.username.clone(),
            ProfileField::Password => self.password.clone(),
            ProfileField::Weight => format!("{} kg", self.weight_kg),
            ProfileField::Height => format!("{} cm", self.height_cm),
        }
    }

    /// `(label, value)` pairs in display order.
    pub fn display_fields(&self) -> Vec<(&'static str, String)> {
        ProfileField::ALL
            .iter()
            .map(|field| (field.label(), self.display_value(*field)))
            .collect()
    }
}

#[cfg(test)]
pub(crate) fn sample_record() -> ProfileRecord {
    ProfileRecord {
        full_name: "Ada Lovelace".into(),
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        age: 36,
        birth_date: NaiveDate::from_ymd_opt(1990, 12, 10).unwrap(),
        sex: "Female".into(),
        university: "University of London".into(),
        street_name: "St James's Square".into(),
        street_number: 12,
        state: "Greater London".into(),
        city: "London".into(),
        country: "United Kingdom".into(),
        postal_code: "SW1Y 4JH".into(),
        company: "Analytical Engines Ltd".into(),
        phone_number: "+44 20 7946 0000".into(),
        occupation: "Mathematician".into(),
        nationality: "British".into(),
        language: "English".into(),
        username: "ada_1815".into(),
        password: "n0te&G<1".into(),
        weight_kg: 55,
        height_cm: 165,
    }
}
