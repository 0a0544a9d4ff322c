//! The validated personal identity number.
//!
//! A [`PersonalIdentityNumber`] can only be obtained through the parse pipeline
//! (normalize, resolve century, validate date, verify check digit). All fields
//! are private and frozen; ages, formats and projections are computed on demand.

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use chrono::{Datelike, NaiveDate};

use crate::{
    calendar::{self, COORDINATION_OFFSET},
    century, checksum,
    error::Error,
    formats::{self, PinFormat},
    normalize::{Normalized, normalize},
    options::ParseOptions,
    types::{Gender, Separator},
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonalIdentityNumber {
    input: String,
    century: u8,
    year: u8,
    month: u8,
    day: u8,
    separator: Separator,
    birth_number: u16,
    check_digit: u8,
    birth_date: NaiveDate,
    reference_date: NaiveDate,
}

impl PersonalIdentityNumber {
    /// Parses any accepted layout against today's date.
    pub fn parse(input: &str) -> Result<Self, Error> {
        Self::parse_with(input, &ParseOptions::new())
    }

    /// Parses any accepted layout against `reference`.
    pub fn parse_at(input: &str, reference: NaiveDate) -> Result<Self, Error> {
        Self::parse_with(input, &ParseOptions::new().with_reference_date(Some(reference)))
    }

    /// Parses only `YYYYMMDD-NNNN`, against today's date.
    pub fn parse_strict(input: &str) -> Result<Self, Error> {
        Self::parse_with(input, &ParseOptions::new().with_strict(true))
    }

    pub fn parse_with(input: &str, options: &ParseOptions) -> Result<Self, Error> {
        if options.strict && !formats::is_strict(input) {
            return Err(Error::format_error(
                input,
                "does not match strict format YYYYMMDD-NNNN",
            ));
        }
        let reference = options.reference_date_or_today();
        tracing::trace!(input, %reference, "parsing personal identity number");
        Self::from_normalized(input, normalize(input)?, reference)
    }

    fn from_normalized(
        input: &str,
        normalized: Normalized,
        reference: NaiveDate,
    ) -> Result<Self, Error> {
        // Range checks first, so a bad month or day is reported as such rather
        // than as an unresolvable century.
        calendar::check_month(normalized.month)?;
        let (calendar_day, _) = calendar::effective_day(normalized.day)?;

        let full_year = century::resolve_full_year(
            normalized.year,
            normalized.century,
            normalized.separator,
            normalized.month,
            calendar_day,
            reference,
        )?;
        let birth = calendar::validate_birth_date(full_year, normalized.month, normalized.day)?;
        checksum::verify(&normalized.significant_digits(), normalized.check_digit)?;

        let separator = Separator::for_age(calendar::age_at(birth.date, reference));
        let century = u8::try_from(full_year.div_euclid(100))
            .ok()
            .filter(|century| *century <= 99)
            .ok_or_else(|| {
                Error::invalid_date("year", full_year.unsigned_abs(), "is not a four-digit year")
            })?;

        Ok(Self {
            input: input.to_string(),
            century,
            year: normalized.year,
            month: normalized.month,
            day: normalized.day,
            separator,
            birth_number: normalized.birth_number,
            check_digit: normalized.check_digit,
            birth_date: birth.date,
            reference_date: reference,
        })
    }

    /// The string this number was parsed from.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The reference date the number was parsed against.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn century(&self) -> u8 {
        self.century
    }

    /// Last two digits of the birth year.
    pub fn year(&self) -> u8 {
        self.year
    }

    pub fn full_year(&self) -> i32 {
        self.birth_date.year()
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    /// The day as written, above 60 for coordination numbers.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// The calendar day of birth.
    pub fn actual_day(&self) -> u8 {
        if self.is_coordination_number() {
            self.day - COORDINATION_OFFSET
        } else {
            self.day
        }
    }

    pub fn is_coordination_number(&self) -> bool {
        self.day > COORDINATION_OFFSET
    }

    /// The effective birth date (coordination offset removed).
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn separator(&self) -> Separator {
        self.separator
    }

    /// Birth place digits followed by the gender digit, `0..=999`.
    pub fn birth_number(&self) -> u16 {
        self.birth_number
    }

    /// The historical regional code, `0..=99`.
    pub fn birth_place(&self) -> u8 {
        (self.birth_number / 10) as u8
    }

    pub fn gender_digit(&self) -> u8 {
        (self.birth_number % 10) as u8
    }

    pub fn check_digit(&self) -> u8 {
        self.check_digit
    }

    pub fn gender(&self) -> Gender {
        Gender::from_digit(self.gender_digit())
    }

    pub fn is_male(&self) -> bool {
        self.gender() == Gender::Male
    }

    pub fn is_female(&self) -> bool {
        self.gender() == Gender::Female
    }

    /// Age at the reference date used while parsing.
    pub fn age(&self) -> i32 {
        self.age_at(self.reference_date)
    }

    /// Age in whole years at `reference`.
    pub fn age_at(&self, reference: NaiveDate) -> i32 {
        calendar::age_at(self.birth_date, reference)
    }

    /// The separator this person carries at `reference`.
    pub fn separator_at(&self, reference: NaiveDate) -> Separator {
        Separator::for_age(self.age_at(reference))
    }

    pub fn significant_digits(&self) -> [u8; checksum::SIGNIFICANT_DIGITS] {
        checksum::significant_digits(self.year, self.month, self.day, self.birth_number)
    }

    pub fn format(&self, layout: PinFormat) -> String {
        layout.render(self)
    }

    /// Renders `layout` with the separator this person carries at `reference`.
    pub fn format_at(&self, layout: PinFormat, reference: NaiveDate) -> String {
        layout.render_with_separator(self, self.separator_at(reference))
    }
}

/// `YYMMDD-NNNC`, the everyday layout.
impl Display for PersonalIdentityNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format(PinFormat::ShortWithSeparator))
    }
}

/// Parses against today's date; see [`PersonalIdentityNumber::parse`].
impl FromStr for PersonalIdentityNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
