//! Read-only projections of a parsed number into string-keyed maps and JSON.
//!
//! Keys come from a closed set ([`Field`]) with one spelling per [`Language`].
//! Projections never validate anything; they only read the parsed fields and the
//! reference date used for the age.

use chrono::NaiveDate;
use serde_json::{Map, Value, json};

use crate::{
    error::Error,
    formats::PinFormat,
    pin::PersonalIdentityNumber,
    types::{Gender, Language},
};

/// Every key a projection can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    PersonalIdentityNumber,
    BirthDate,
    Century,
    Year,
    FullYear,
    Month,
    Day,
    IsoDate,
    ActualDay,
    Separator,
    BirthNumber,
    Complete,
    BirthPlace,
    GenderDigit,
    ValidationDigit,
    DerivedInfo,
    Age,
    Gender,
    IsCoordinationNumber,
    Formats,
    LongFormat,
    ShortFormat,
}

impl Field {
    pub fn key(self, language: Language) -> &'static str {
        match language {
            Language::English => self.english(),
            Language::Swedish => self.swedish(),
        }
    }

    fn english(self) -> &'static str {
        match self {
            Field::PersonalIdentityNumber => "personal_identity_number",
            Field::BirthDate => "birth_date",
            Field::Century => "century",
            Field::Year => "year",
            Field::FullYear => "full_year",
            Field::Month => "month",
            Field::Day => "day",
            Field::IsoDate => "iso_date",
            Field::ActualDay => "actual_day",
            Field::Separator => "separator",
            Field::BirthNumber => "birth_number",
            Field::Complete => "complete",
            Field::BirthPlace => "birth_place",
            Field::GenderDigit => "gender_digit",
            Field::ValidationDigit => "validation_digit",
            Field::DerivedInfo => "derived_info",
            Field::Age => "age",
            Field::Gender => "gender",
            Field::IsCoordinationNumber => "is_coordination_number",
            Field::Formats => "formats",
            Field::LongFormat => "long_format",
            Field::ShortFormat => "short_format",
        }
    }

    fn swedish(self) -> &'static str {
        match self {
            Field::PersonalIdentityNumber => "personnummer",
            Field::BirthDate => "födelsedatum",
            Field::Century => "sekel",
            Field::Year => "år",
            Field::FullYear => "helt_år",
            Field::Month => "månad",
            Field::Day => "dag",
            Field::IsoDate => "iso_datum",
            Field::ActualDay => "faktisk_dag",
            Field::Separator => "skiljetecken",
            Field::BirthNumber => "födelsenummer",
            Field::Complete => "komplett",
            Field::BirthPlace => "födelseort",
            Field::GenderDigit => "könssiffra",
            Field::ValidationDigit => "kontrollsiffra",
            Field::DerivedInfo => "härledd_information",
            Field::Age => "ålder",
            Field::Gender => "kön",
            Field::IsCoordinationNumber => "är_samordningsnummer",
            Field::Formats => "format",
            Field::LongFormat => "långt_format",
            Field::ShortFormat => "kort_format",
        }
    }
}

/// The gender as a word in `language`.
pub fn gender_word(gender: Gender, language: Language) -> &'static str {
    match (language, gender) {
        (Language::English, Gender::Male) => "male",
        (Language::English, Gender::Female) => "female",
        (Language::Swedish, Gender::Male) => "man",
        (Language::Swedish, Gender::Female) => "kvinna",
    }
}

struct Builder {
    language: Language,
    map: Map<String, Value>,
}

impl Builder {
    fn new(language: Language) -> Self {
        Self {
            language,
            map: Map::new(),
        }
    }

    fn insert(mut self, field: Field, value: impl Into<Value>) -> Self {
        self.map
            .insert(field.key(self.language).to_string(), value.into());
        self
    }

    fn build(self) -> Map<String, Value> {
        self.map
    }
}

/// Projects `pin` into a nested string-keyed map, computing the age and the
/// separator at `reference`.
pub fn to_map(
    pin: &PersonalIdentityNumber,
    language: Language,
    reference: NaiveDate,
) -> Map<String, Value> {
    let mut birth_date = Builder::new(language)
        .insert(Field::Century, format!("{:02}", pin.century()))
        .insert(Field::Year, format!("{:02}", pin.year()))
        .insert(Field::FullYear, format!("{:04}", pin.full_year()))
        .insert(Field::Month, format!("{:02}", pin.month()))
        .insert(Field::Day, format!("{:02}", pin.day()))
        .insert(Field::IsoDate, pin.birth_date().format("%Y-%m-%d").to_string());
    if pin.is_coordination_number() {
        birth_date = birth_date.insert(Field::ActualDay, pin.actual_day());
    }

    let birth_number = Builder::new(language)
        .insert(Field::Complete, format!("{:03}", pin.birth_number()))
        .insert(Field::BirthPlace, format!("{:02}", pin.birth_place()))
        .insert(Field::GenderDigit, pin.gender_digit().to_string());

    let derived = Builder::new(language)
        .insert(Field::Age, pin.age_at(reference))
        .insert(Field::Gender, gender_word(pin.gender(), language))
        .insert(Field::IsCoordinationNumber, pin.is_coordination_number());

    let formats = Builder::new(language)
        .insert(Field::LongFormat, pin.format(PinFormat::LongWithoutSeparator))
        .insert(
            Field::ShortFormat,
            pin.format_at(PinFormat::ShortWithSeparator, reference),
        );

    Builder::new(language)
        .insert(Field::PersonalIdentityNumber, pin.input())
        .insert(Field::BirthDate, birth_date.build())
        .insert(Field::Separator, pin.separator_at(reference).to_string())
        .insert(Field::BirthNumber, birth_number.build())
        .insert(Field::ValidationDigit, pin.check_digit().to_string())
        .insert(Field::DerivedInfo, derived.build())
        .insert(Field::Formats, formats.build())
        .build()
}

pub fn to_value(pin: &PersonalIdentityNumber, language: Language, reference: NaiveDate) -> Value {
    Value::Object(to_map(pin, language, reference))
}

/// Compact JSON text of [`to_map`].
pub fn to_json(
    pin: &PersonalIdentityNumber,
    language: Language,
    reference: NaiveDate,
) -> Result<String, Error> {
    Ok(serde_json::to_string(&to_value(pin, language, reference))?)
}

pub fn to_json_pretty(
    pin: &PersonalIdentityNumber,
    language: Language,
    reference: NaiveDate,
) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(&to_value(pin, language, reference))?)
}

/// JSON array of projections, in input order.
pub fn batch_to_value(
    pins: &[PersonalIdentityNumber],
    language: Language,
    reference: NaiveDate,
) -> Value {
    json!(
        pins.iter()
            .map(|pin| to_value(pin, language, reference))
            .collect::<Vec<_>>()
    )
}
