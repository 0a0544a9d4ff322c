//! Century inference for the ten-digit layouts.
//!
//! A ten-digit number only carries the last two digits of the birth year. The
//! candidates are that year in the reference date's century and in the one
//! before it. A candidate is kept when its birth date is not after the reference
//! date and the age it implies matches the separator: `-` for under 100, `+` for
//! 100 and above. At most one candidate can satisfy both for a given separator.
//! Candidates outside years 0000-9999 are never kept.

use chrono::{Datelike, NaiveDate};

use crate::{calendar::age_in_years, error::Error, types::Separator};

/// Years a two-digit century plus a two-digit year can spell.
const FULL_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// Resolves the four-digit birth year.
///
/// `century` is the explicit century of a twelve-digit number and is used as-is.
/// Otherwise `separator` (defaulting to `-`), the birth `month`/`day` (calendar
/// day, coordination offset removed) and `reference` select the century.
pub fn resolve_full_year(
    year: u8,
    century: Option<u8>,
    separator: Option<Separator>,
    month: u8,
    day: u8,
    reference: NaiveDate,
) -> Result<i32, Error> {
    if let Some(century) = century {
        return Ok(i32::from(century) * 100 + i32::from(year));
    }

    let separator = separator.unwrap_or(Separator::Dash);
    let current_century = reference.year().div_euclid(100);

    [current_century, current_century - 1]
        .into_iter()
        .map(|century| century * 100 + i32::from(year))
        .filter(|candidate| FULL_YEARS.contains(candidate))
        .find(|&candidate| {
            let age = age_in_years(candidate, u32::from(month), u32::from(day), reference);
            age >= 0 && separator.admits_age(age)
        })
        .inspect(|full_year| {
            tracing::debug!(full_year, %separator, "resolved century from reference date");
        })
        .ok_or(Error::CenturyAmbiguity {
            year,
            separator,
            reference,
        })
}
