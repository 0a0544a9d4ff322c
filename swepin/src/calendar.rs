//! Gregorian calendar checks for the embedded birth date.
//!
//! Days `01`–`31` are ordinary birth days; `61`–`91` mark a coordination number
//! whose calendar day is the written day minus [`COORDINATION_OFFSET`]. Everything
//! else (`00`, `32`–`60`, above `91`) is rejected.

use chrono::{Datelike, Local, NaiveDate};

use crate::error::Error;

/// Added to the calendar day of a coordination number.
pub const COORDINATION_OFFSET: u8 = 60;

/// A validated birth date together with how its day was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthDate {
    /// The effective (calendar) date.
    pub date: NaiveDate,
    /// Whether the day was written with the coordination offset.
    pub coordination: bool,
}

/// The current local date, used as the reference date when none is supplied.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1–12) of `year`, or 0 for an out-of-range month.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

pub fn check_month(month: u8) -> Result<(), Error> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(Error::invalid_date(
            "month",
            u32::from(month),
            "is not between 01 and 12",
        ))
    }
}

/// Splits a written day into its calendar day and coordination flag.
///
/// Only the ranges are checked here; whether the day exists in a given month is
/// left to [`validate_birth_date`].
pub fn effective_day(raw_day: u8) -> Result<(u8, bool), Error> {
    match raw_day {
        1..=31 => Ok((raw_day, false)),
        61..=91 => Ok((raw_day - COORDINATION_OFFSET, true)),
        0 => Err(Error::invalid_date("day", 0, "is not a day of the month")),
        32..=60 => Err(Error::invalid_date(
            "day",
            u32::from(raw_day),
            "is neither a calendar day (01-31) nor a coordination day (61-91)",
        )),
        _ => Err(Error::invalid_date(
            "day",
            u32::from(raw_day),
            "is above the highest coordination day 91",
        )),
    }
}

/// Validates `(year, month, raw_day)` as a real date, honouring the coordination offset.
pub fn validate_birth_date(year: i32, month: u8, raw_day: u8) -> Result<BirthDate, Error> {
    check_month(month)?;
    let (day, coordination) = effective_day(raw_day)?;

    let last_day = days_in_month(year, month);
    if day > last_day {
        return Err(Error::invalid_date(
            "day",
            u32::from(day),
            format!("does not exist in {:04}-{:02} ({} days)", year, month, last_day),
        ));
    }

    let date = NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day)).ok_or_else(|| {
        Error::invalid_date(
            "year",
            year.unsigned_abs(),
            "is outside the supported calendar range",
        )
    })?;

    Ok(BirthDate { date, coordination })
}

/// Whole years between a birth `(year, month, day)` and `reference`.
///
/// The birthday counts from the same month and day in the reference year, so
/// someone born on 29 February turns a year older on 1 March in common years.
/// Negative when the birth lies after the reference date.
pub fn age_in_years(year: i32, month: u32, day: u32, reference: NaiveDate) -> i32 {
    let before_birthday = (reference.month(), reference.day()) < (month, day);
    reference.year() - year - i32::from(before_birthday)
}

pub fn age_at(birth: NaiveDate, reference: NaiveDate) -> i32 {
    age_in_years(birth.year(), birth.month(), birth.day(), reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(1980));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 13), 0);
    }

    #[test]
    fn test_effective_day_ranges() {
        assert_eq!(effective_day(1).unwrap(), (1, false));
        assert_eq!(effective_day(31).unwrap(), (31, false));
        assert_eq!(effective_day(61).unwrap(), (1, true));
        assert_eq!(effective_day(84).unwrap(), (24, true));
        assert_eq!(effective_day(91).unwrap(), (31, true));
        for dead in [0, 32, 45, 60, 92, 99] {
            assert!(effective_day(dead).is_err(), "day {} should be rejected", dead);
        }
    }

    #[test]
    fn test_validate_ordinary_date() {
        let birth = validate_birth_date(1980, 12, 24).unwrap();
        assert_eq!(birth.date, date(1980, 12, 24));
        assert!(!birth.coordination);
    }

    #[test]
    fn test_validate_coordination_date() {
        let birth = validate_birth_date(1980, 12, 84).unwrap();
        assert_eq!(birth.date, date(1980, 12, 24));
        assert!(birth.coordination);
    }

    #[test]
    fn test_validate_leap_day() {
        assert!(validate_birth_date(1980, 2, 29).is_ok());
        assert!(validate_birth_date(1980, 2, 89).is_ok());
        assert!(validate_birth_date(1981, 2, 29).is_err());
        assert!(validate_birth_date(1900, 2, 89).is_err());
        assert!(validate_birth_date(2000, 2, 29).is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_month_and_day() {
        match validate_birth_date(1980, 13, 24) {
            Err(Error::InvalidDate { field, value, .. }) => {
                assert_eq!(field, "month");
                assert_eq!(value, 13);
            }
            other => panic!("expected invalid month, got {:?}", other),
        }
        assert!(validate_birth_date(1980, 0, 24).is_err());
        assert!(validate_birth_date(1980, 4, 31).is_err());
        assert!(validate_birth_date(1980, 4, 91).is_err());
        assert!(validate_birth_date(1980, 12, 32).is_err());
    }

    #[test]
    fn test_age_in_years() {
        let reference = date(2024, 6, 1);
        assert_eq!(age_at(date(1980, 12, 24), reference), 43);
        assert_eq!(age_at(date(1980, 6, 1), reference), 44);
        assert_eq!(age_at(date(1980, 6, 2), reference), 43);
        assert_eq!(age_at(date(2025, 1, 1), reference), -1);
        assert_eq!(age_at(date(2025, 7, 1), reference), -2);
    }

    #[test]
    fn test_age_for_leap_day_birth() {
        let birth = date(2000, 2, 29);
        assert_eq!(age_at(birth, date(2023, 2, 28)), 22);
        assert_eq!(age_at(birth, date(2023, 3, 1)), 23);
        assert_eq!(age_at(birth, date(2024, 2, 29)), 24);
    }
}
