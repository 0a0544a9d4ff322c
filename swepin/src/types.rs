//! Small value types shared by the parser, the generator and the projections.

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Age (in whole years) from which the `+` separator is used.
pub const CENTENARIAN_AGE: i32 = 100;

/// The character between the birth date and the birth number.
///
/// `-` is used for people younger than 100 at the reference date, `+` from
/// the year they turn 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Separator {
    #[serde(rename = "-")]
    Dash,
    #[serde(rename = "+")]
    Plus,
}

impl Separator {
    /// The separator a person of `age` years carries.
    pub fn for_age(age: i32) -> Self {
        if age >= CENTENARIAN_AGE {
            Separator::Plus
        } else {
            Separator::Dash
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Separator::Dash => '-',
            Separator::Plus => '+',
        }
    }

    /// Whether a person of `age` years may carry this separator.
    pub fn admits_age(self, age: i32) -> bool {
        Separator::for_age(age) == self
    }
}

impl Display for Separator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Separator {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '-' => Ok(Separator::Dash),
            '+' => Ok(Separator::Plus),
            other => Err(Error::format_error(
                other.to_string(),
                "separator must be `-` or `+`",
            )),
        }
    }
}

/// Legal gender as encoded by the parity of the gender digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Odd digits are male, even digits female.
    pub fn from_digit(digit: u8) -> Self {
        if digit % 2 == 1 {
            Gender::Male
        } else {
            Gender::Female
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// Language of the keys and labels used by projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Swedish,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Swedish => "sv",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Accepts the ISO 639-1 and 639-2 codes and the English names, case-insensitively.
impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "sv" | "swe" | "swedish" | "svenska" => Ok(Language::Swedish),
            other => Err(Error::invalid_options(format!(
                "unknown language `{}`; expected `en` or `sv`",
                other
            ))),
        }
    }
}
