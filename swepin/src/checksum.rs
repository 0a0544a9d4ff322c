//! The check digit (kontrollsiffra): Luhn mod 10 over the nine significant digits.
//!
//! The significant digits are `YYMMDD` (day as written, so coordination days keep
//! their `+60`) followed by the three-digit birth number. Digits at odd positions,
//! counting from the left and starting at 1, are doubled; two-digit products are
//! reduced by 9; the check digit brings the total up to a multiple of ten.

use crate::error::Error;

/// Number of digits covered by the check digit.
pub const SIGNIFICANT_DIGITS: usize = 9;

/// Lays out `YYMMDDNNN` as single digits.
///
/// `year` and `day` are taken modulo 100 and `birth_number` modulo 1000, so the
/// output always holds nine values in `0..=9`.
pub fn significant_digits(year: u8, month: u8, day: u8, birth_number: u16) -> [u8; SIGNIFICANT_DIGITS] {
    let year = year % 100;
    let month = month % 100;
    let day = day % 100;
    let birth_number = birth_number % 1000;
    [
        year / 10,
        year % 10,
        month / 10,
        month % 10,
        day / 10,
        day % 10,
        (birth_number / 100) as u8,
        (birth_number / 10 % 10) as u8,
        (birth_number % 10) as u8,
    ]
}

/// Computes the check digit for nine significant digits.
///
/// Every element must be in `0..=9`.
pub fn compute(digits: &[u8; SIGNIFICANT_DIGITS]) -> u8 {
    luhn(digits)
}

/// Recomputes the check digit and compares it with `provided`.
pub fn verify(digits: &[u8; SIGNIFICANT_DIGITS], provided: u8) -> Result<(), Error> {
    let expected = compute(digits);
    if expected == provided {
        Ok(())
    } else {
        Err(Error::Checksum {
            expected,
            actual: provided,
        })
    }
}

/// Computes the check digit for an arbitrary string of ASCII digits.
///
/// ```rust
/// assert_eq!(swepin::calculate_check_digit("801224123").unwrap(), 1);
/// assert!(swepin::calculate_check_digit("80122412x").is_err());
/// ```
pub fn calculate_check_digit(input: &str) -> Result<u8, Error> {
    if input.is_empty() {
        return Err(Error::format_error(input, "no digits to compute a check digit over"));
    }
    let digits = input
        .chars()
        .enumerate()
        .map(|(position, ch)| {
            ch.to_digit(10).map(|d| d as u8).ok_or_else(|| {
                Error::format_error(
                    input,
                    format!("unexpected character `{}` at position {}", ch, position + 1),
                )
            })
        })
        .collect::<Result<Vec<u8>, Error>>()?;
    Ok(luhn(&digits))
}

fn luhn(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(index, &digit)| {
            // index 0 is position 1, which is doubled
            let value = if index % 2 == 0 {
                u32::from(digit) * 2
            } else {
                u32::from(digit)
            };
            if value > 9 { value - 9 } else { value }
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}
