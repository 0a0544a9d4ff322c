#![forbid(unsafe_code)]
//! Swedish personal identity numbers (personnummer) for Rust.
//!
//! Parses, validates, formats and generates personal identity numbers and their
//! coordination-number variant (samordningsnummer, day of month + 60).
//! Every input goes through the same pipeline: normalization, century inference,
//! calendar validation and the Luhn check digit. A successfully parsed
//! [`PersonalIdentityNumber`] is immutable and always satisfies all of these.
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use swepin::{PersonalIdentityNumber, PinFormat};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let pin = PersonalIdentityNumber::parse_at("801224-1231", today)?;
//!
//! assert_eq!(pin.full_year(), 1980);
//! assert_eq!(pin.age_at(today), 43);
//! assert_eq!(pin.format(PinFormat::LongWithoutSeparator), "198012241231");
//! # Ok::<(), swepin::Error>(())
//! ```
//!
//! # Accepted layouts
//!
//! - `YYYYMMDDNNNN` and `YYYYMMDD-NNNN`: century present, no inference needed
//! - `YYMMDD-NNNN` and `YYMMDDNNNN`: century inferred from the reference date
//! - `YYMMDD+NNNN`: the person is at least 100 years old at the reference date
//!
//! Generated numbers (see [`generate`]) are fed back through the parser before
//! they are returned, so they always validate.

pub mod calendar;
pub mod century;
pub mod checksum;
pub mod error;
pub mod formats;
pub mod generate;
pub mod normalize;
pub mod options;
pub mod pin;
pub mod projection;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    calendar::today,
    checksum::calculate_check_digit,
    error::Error,
    formats::{
        PinFormat, is_long_with_separator, is_long_without_separator, is_short_with_separator,
        is_short_without_separator,
    },
    generate::{generate, generate_with_rng},
    options::{GenerateOptions, ParseOptions},
    pin::PersonalIdentityNumber,
    types::{Gender, Language, Separator},
};
