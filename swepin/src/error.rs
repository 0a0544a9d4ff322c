//! All error types for the swepin crate.
//!
//! These are returned from all fallible operations (normalizing, parsing, generating, projecting).

use chrono::NaiveDate;
use thiserror::Error;

use crate::types::Separator;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid format `{input}`: {reason}")]
    Format { input: String, reason: String },

    #[error(
        "cannot resolve century for year `{year:02}` with separator `{separator}` at reference date {reference}"
    )]
    CenturyAmbiguity {
        year: u8,
        separator: Separator,
        reference: NaiveDate,
    },

    #[error("invalid date: {field} `{value}` {reason}")]
    InvalidDate {
        field: &'static str,
        value: u32,
        reason: String,
    },

    #[error("check digit mismatch: expected {expected}, got {actual}")]
    Checksum { expected: u8, actual: u8 },

    #[error("generated candidate `{candidate}` violates an invariant: {reason}")]
    GeneratorInvariant { candidate: String, reason: String },

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Creates a new format error for the given input.
    pub fn format_error(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Format {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new invalid date error.
    pub fn invalid_date(field: &'static str, value: u32, reason: impl Into<String>) -> Self {
        Error::InvalidDate {
            field,
            value,
            reason: reason.into(),
        }
    }

    /// Creates a new generator invariant error.
    pub fn generator_invariant(candidate: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::GeneratorInvariant {
            candidate: candidate.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new invalid options error.
    pub fn invalid_options(message: impl Into<String>) -> Self {
        Error::InvalidOptions(message.into())
    }

    /// Stable, machine-readable tag for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Format { .. } => "format",
            Error::CenturyAmbiguity { .. } => "century-ambiguity",
            Error::InvalidDate { .. } => "invalid-date",
            Error::Checksum { .. } => "checksum",
            Error::GeneratorInvariant { .. } => "generator-invariant",
            Error::InvalidOptions(_) => "invalid-options",
            Error::Json(_) => "json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error() {
        let error = Error::format_error("12ab", "unexpected character `a` at position 3");
        assert_eq!(
            error.to_string(),
            "invalid format `12ab`: unexpected character `a` at position 3"
        );
        assert_eq!(error.kind(), "format");
    }

    #[test]
    fn test_century_ambiguity_error() {
        let error = Error::CenturyAmbiguity {
            year: 5,
            separator: Separator::Plus,
            reference: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        let message = error.to_string();
        assert!(message.contains("`05`"));
        assert!(message.contains("`+`"));
        assert!(message.contains("2024-01-01"));
        assert_eq!(error.kind(), "century-ambiguity");
    }

    #[test]
    fn test_invalid_date_error() {
        let error = Error::invalid_date("month", 13, "is not between 01 and 12");
        assert_eq!(
            error.to_string(),
            "invalid date: month `13` is not between 01 and 12"
        );
        assert_eq!(error.kind(), "invalid-date");
    }

    #[test]
    fn test_checksum_error() {
        let error = Error::Checksum {
            expected: 1,
            actual: 5,
        };
        assert_eq!(error.to_string(), "check digit mismatch: expected 1, got 5");
        assert_eq!(error.kind(), "checksum");
    }

    #[test]
    fn test_generator_invariant_error() {
        let error = Error::generator_invariant("198012241231", "separator mismatch");
        assert!(error.to_string().contains("198012241231"));
        assert!(error.to_string().contains("separator mismatch"));
        assert_eq!(error.kind(), "generator-invariant");
    }

    #[test]
    fn test_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let error = Error::from(json_error);
        assert!(error.to_string().contains("JSON error"));
        assert_eq!(error.kind(), "json");
    }

    #[test]
    fn test_error_debug() {
        let error = Error::invalid_options("male ratio must be between 0 and 1");
        let debug = format!("{:?}", error);
        assert!(debug.contains("InvalidOptions"));
        assert!(debug.contains("male ratio"));
    }
}
