//! Structural normalization of raw input.
//!
//! Strips at most one `-` or `+` (it must sit directly before the last four
//! digits), rejects any other character, and splits the remaining 10 or 12
//! ASCII digits into their fields. No calendar or checksum checks happen here.

use crate::{checksum, error::Error, formats::PinFormat, types::Separator};

/// The digit fields of an input, before any semantic validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalized {
    /// Explicit century of a twelve-digit input.
    pub century: Option<u8>,
    pub year: u8,
    pub month: u8,
    /// The day exactly as written (coordination days are above 60).
    pub day: u8,
    pub birth_number: u16,
    pub check_digit: u8,
    /// The separator as written, if any.
    pub separator: Option<Separator>,
    pub layout: PinFormat,
}

impl Normalized {
    /// `YYMMDDNNN`, the digits covered by the check digit.
    pub fn significant_digits(&self) -> [u8; checksum::SIGNIFICANT_DIGITS] {
        checksum::significant_digits(self.year, self.month, self.day, self.birth_number)
    }
}

pub fn normalize(input: &str) -> Result<Normalized, Error> {
    let mut digits: Vec<u8> = Vec::with_capacity(12);
    let mut separator: Option<(Separator, usize)> = None;

    for (position, ch) in input.chars().enumerate() {
        match ch {
            '0'..='9' => {
                if digits.len() == 12 {
                    return Err(Error::format_error(
                        input,
                        "too many digits, expected 10 or 12",
                    ));
                }
                digits.push(ch as u8 - b'0');
            }
            '-' | '+' => {
                if separator.is_some() {
                    return Err(Error::format_error(input, "more than one separator"));
                }
                separator = Some((Separator::try_from(ch)?, digits.len()));
            }
            other => {
                return Err(Error::format_error(
                    input,
                    format!("unexpected character `{}` at position {}", other, position + 1),
                ));
            }
        }
    }

    if digits.len() != 10 && digits.len() != 12 {
        return Err(Error::format_error(
            input,
            format!("expected 10 or 12 digits, found {}", digits.len()),
        ));
    }
    if let Some((_, index)) = separator {
        if index != digits.len() - 4 {
            return Err(Error::format_error(
                input,
                "separator must directly precede the last four digits",
            ));
        }
    }

    let long = digits.len() == 12;
    let (century, rest) = if long {
        (Some(pair(&digits[0..2])), &digits[2..])
    } else {
        (None, &digits[..])
    };
    let layout = PinFormat::from_shape(long, separator.is_some());
    tracing::debug!(%layout, "normalized input");

    Ok(Normalized {
        century,
        year: pair(&rest[0..2]),
        month: pair(&rest[2..4]),
        day: pair(&rest[4..6]),
        birth_number: u16::from(rest[6]) * 100 + u16::from(rest[7]) * 10 + u16::from(rest[8]),
        check_digit: rest[9],
        separator: separator.map(|(separator, _)| separator),
        layout,
    })
}

fn pair(digits: &[u8]) -> u8 {
    digits[0] * 10 + digits[1]
}
