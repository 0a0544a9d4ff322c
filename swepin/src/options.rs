//! Options for parsing and generation.
//!
//! The reference date ("today") is always explicit here; only the convenience
//! entry points fall back to [`crate::today`] when it is left unset.

use chrono::NaiveDate;

use crate::{calendar, error::Error};

/// Parse behavior options for [`crate::PersonalIdentityNumber::parse_with`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Date against which century inference, separator and age are evaluated.
    pub reference_date: Option<NaiveDate>,
    /// Accept only `YYYYMMDD-NNNN`.
    pub strict: bool,
}

impl ParseOptions {
    /// Creates default parse options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reference date.
    pub fn with_reference_date(mut self, reference_date: Option<NaiveDate>) -> Self {
        self.reference_date = reference_date;
        self
    }

    /// Enables/disables strict mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn reference_date_or_today(&self) -> NaiveDate {
        self.reference_date.unwrap_or_else(calendar::today)
    }
}

pub const DEFAULT_COUNT: usize = 10;
pub const DEFAULT_START_YEAR: i32 = 1920;
pub const DEFAULT_END_YEAR: i32 = 2024;
pub const DEFAULT_MALE_RATIO: f64 = 0.5;
pub const DEFAULT_COORDINATION_PROBABILITY: f64 = 0.1;

/// Lowest and highest birth years the generator accepts (four-digit years).
pub const MIN_YEAR: i32 = 1000;
pub const MAX_YEAR: i32 = 9999;

/// Constraints for [`crate::generate`].
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOptions {
    pub count: usize,
    /// First birth year, inclusive.
    pub start_year: i32,
    /// Last birth year, inclusive. Birth dates never pass the reference date.
    pub end_year: i32,
    pub include_coordination_numbers: bool,
    /// Chance that a number is written as a coordination number, when included.
    pub coordination_probability: f64,
    /// When false, nobody generated is 100 or older at the reference date.
    pub include_centenarians: bool,
    /// Chance that a number has an odd (male) gender digit.
    pub male_ratio: f64,
    pub reference_date: Option<NaiveDate>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            start_year: DEFAULT_START_YEAR,
            end_year: DEFAULT_END_YEAR,
            include_coordination_numbers: true,
            coordination_probability: DEFAULT_COORDINATION_PROBABILITY,
            include_centenarians: true,
            male_ratio: DEFAULT_MALE_RATIO,
            reference_date: None,
        }
    }
}

impl GenerateOptions {
    /// Creates default generation options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the inclusive birth year range.
    pub fn with_years(mut self, start_year: i32, end_year: i32) -> Self {
        self.start_year = start_year;
        self.end_year = end_year;
        self
    }

    pub fn with_coordination_numbers(mut self, include: bool) -> Self {
        self.include_coordination_numbers = include;
        self
    }

    pub fn with_coordination_probability(mut self, probability: f64) -> Self {
        self.coordination_probability = probability;
        self
    }

    pub fn with_centenarians(mut self, include: bool) -> Self {
        self.include_centenarians = include;
        self
    }

    pub fn with_male_ratio(mut self, male_ratio: f64) -> Self {
        self.male_ratio = male_ratio;
        self
    }

    pub fn with_reference_date(mut self, reference_date: Option<NaiveDate>) -> Self {
        self.reference_date = reference_date;
        self
    }

    pub fn reference_date_or_today(&self) -> NaiveDate {
        self.reference_date.unwrap_or_else(calendar::today)
    }

    /// Checks the options that do not depend on the reference date.
    pub fn validate(&self) -> Result<(), Error> {
        for (name, year) in [("start year", self.start_year), ("end year", self.end_year)] {
            if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
                return Err(Error::invalid_options(format!(
                    "{} {} is outside {}..={}",
                    name, year, MIN_YEAR, MAX_YEAR
                )));
            }
        }
        if self.start_year > self.end_year {
            return Err(Error::invalid_options(format!(
                "start year {} is after end year {}",
                self.start_year, self.end_year
            )));
        }
        for (name, probability) in [
            ("male ratio", self.male_ratio),
            ("coordination probability", self.coordination_probability),
        ] {
            if !(0.0..=1.0).contains(&probability) {
                return Err(Error::invalid_options(format!(
                    "{} must be between 0 and 1, got {}",
                    name, probability
                )));
            }
        }
        Ok(())
    }
}
