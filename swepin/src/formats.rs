//! The four canonical textual layouts of a personal identity number.
//!
//! This module provides the [`PinFormat`] enum used both to detect which layout an
//! input uses and to render a parsed number back into any of them.

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Error, Separator, pin::PersonalIdentityNumber};

// `[0-9]` rather than `\d`, which also matches non-ASCII digits
lazy_static! {
    static ref LONG_WITH_SEPARATOR: Regex = Regex::new(r"^[0-9]{8}[-+][0-9]{4}$").unwrap();
    static ref LONG_WITHOUT_SEPARATOR: Regex = Regex::new(r"^[0-9]{12}$").unwrap();
    static ref SHORT_WITH_SEPARATOR: Regex = Regex::new(r"^[0-9]{6}[-+][0-9]{4}$").unwrap();
    static ref SHORT_WITHOUT_SEPARATOR: Regex = Regex::new(r"^[0-9]{10}$").unwrap();
    static ref STRICT: Regex = Regex::new(r"^[0-9]{8}-[0-9]{4}$").unwrap();
}

/// Represents the canonical layouts of a personal identity number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinFormat {
    /// `YYYYMMDDNNNC`, twelve digits.
    LongWithoutSeparator,
    /// `YYYYMMDD-NNNC` (or `+`).
    LongWithSeparator,
    /// `YYMMDD-NNNC` (or `+`), the everyday layout.
    ShortWithSeparator,
    /// `YYMMDDNNNC`, ten digits.
    ShortWithoutSeparator,
}

impl PinFormat {
    pub const ALL: [PinFormat; 4] = [
        PinFormat::LongWithoutSeparator,
        PinFormat::LongWithSeparator,
        PinFormat::ShortWithSeparator,
        PinFormat::ShortWithoutSeparator,
    ];

    /// Detects the layout of `input`, or `None` if it matches none of them.
    ///
    /// # Example
    /// ```rust
    /// use swepin::PinFormat;
    /// assert_eq!(PinFormat::detect("801224-1231"), Some(PinFormat::ShortWithSeparator));
    /// assert_eq!(PinFormat::detect("198012241231"), Some(PinFormat::LongWithoutSeparator));
    /// assert_eq!(PinFormat::detect("1980-12-24-1231"), None);
    /// ```
    pub fn detect(input: &str) -> Option<Self> {
        PinFormat::ALL
            .into_iter()
            .find(|format| format.pattern().is_match(input))
    }

    /// Whether this layout carries the century.
    pub fn is_long(self) -> bool {
        matches!(
            self,
            PinFormat::LongWithoutSeparator | PinFormat::LongWithSeparator
        )
    }

    pub fn has_separator(self) -> bool {
        matches!(
            self,
            PinFormat::LongWithSeparator | PinFormat::ShortWithSeparator
        )
    }

    /// Number of digits, separator excluded.
    pub fn digit_count(self) -> usize {
        if self.is_long() { 12 } else { 10 }
    }

    pub(crate) fn from_shape(long: bool, separated: bool) -> Self {
        match (long, separated) {
            (true, false) => PinFormat::LongWithoutSeparator,
            (true, true) => PinFormat::LongWithSeparator,
            (false, true) => PinFormat::ShortWithSeparator,
            (false, false) => PinFormat::ShortWithoutSeparator,
        }
    }

    /// Renders `pin` in this layout.
    ///
    /// Pure projection of the parsed fields; nothing is recomputed.
    pub fn render(self, pin: &PersonalIdentityNumber) -> String {
        self.render_with_separator(pin, pin.separator())
    }

    /// Renders `pin` with `separator` in place of the one derived at parse time.
    pub fn render_with_separator(self, pin: &PersonalIdentityNumber, separator: Separator) -> String {
        let date = format!("{:02}{:02}{:02}", pin.year(), pin.month(), pin.day());
        let tail = format!("{:03}{}", pin.birth_number(), pin.check_digit());
        match self {
            PinFormat::LongWithoutSeparator => format!("{:02}{}{}", pin.century(), date, tail),
            PinFormat::LongWithSeparator => {
                format!("{:02}{}{}{}", pin.century(), date, separator, tail)
            }
            PinFormat::ShortWithSeparator => format!("{}{}{}", date, separator, tail),
            PinFormat::ShortWithoutSeparator => format!("{}{}", date, tail),
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            PinFormat::LongWithoutSeparator => &*LONG_WITHOUT_SEPARATOR,
            PinFormat::LongWithSeparator => &*LONG_WITH_SEPARATOR,
            PinFormat::ShortWithSeparator => &*SHORT_WITH_SEPARATOR,
            PinFormat::ShortWithoutSeparator => &*SHORT_WITHOUT_SEPARATOR,
        }
    }
}

/// Whether `input` is exactly `YYYYMMDD-NNNN`, the only layout strict parsing accepts.
pub fn is_strict(input: &str) -> bool {
    STRICT.is_match(input)
}

pub fn is_long_with_separator(input: &str) -> bool {
    LONG_WITH_SEPARATOR.is_match(input)
}

pub fn is_long_without_separator(input: &str) -> bool {
    LONG_WITHOUT_SEPARATOR.is_match(input)
}

pub fn is_short_with_separator(input: &str) -> bool {
    SHORT_WITH_SEPARATOR.is_match(input)
}

pub fn is_short_without_separator(input: &str) -> bool {
    SHORT_WITHOUT_SEPARATOR.is_match(input)
}

/// Implements [`std::fmt::Display`] for [`PinFormat`].
///
/// - `LongWithoutSeparator` → `"long"`
/// - `LongWithSeparator` → `"long-separated"`
/// - `ShortWithSeparator` → `"short-separated"`
/// - `ShortWithoutSeparator` → `"short"`
impl Display for PinFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PinFormat::LongWithoutSeparator => write!(f, "long"),
            PinFormat::LongWithSeparator => write!(f, "long-separated"),
            PinFormat::ShortWithSeparator => write!(f, "short-separated"),
            PinFormat::ShortWithoutSeparator => write!(f, "short"),
        }
    }
}

/// Implements [`std::str::FromStr`] for [`PinFormat`].
///
/// Accepts the [`Display`] names case-insensitively, with `_` in place of `-`,
/// plus the digit counts `12` and `10` for the unseparated layouts.
///
/// # Example
/// ```rust
/// use swepin::PinFormat;
/// use std::str::FromStr;
/// assert_eq!(PinFormat::from_str("LONG").unwrap(), PinFormat::LongWithoutSeparator);
/// assert_eq!(PinFormat::from_str("short_separated").unwrap(), PinFormat::ShortWithSeparator);
/// assert!(PinFormat::from_str("medium").is_err());
/// ```
impl FromStr for PinFormat {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase().replace('_', "-");
        match s.as_str() {
            "long" | "12" => Ok(PinFormat::LongWithoutSeparator),
            "long-separated" => Ok(PinFormat::LongWithSeparator),
            "short-separated" => Ok(PinFormat::ShortWithSeparator),
            "short" | "10" => Ok(PinFormat::ShortWithoutSeparator),
            other => Err(Error::invalid_options(format!(
                "unknown format `{}`; expected long, long-separated, short-separated or short",
                other
            ))),
        }
    }
}
