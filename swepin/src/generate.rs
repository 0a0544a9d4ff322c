//! Random personal identity numbers that satisfy every validation rule.
//!
//! Each candidate is drawn in reverse order of the parse pipeline (date, optional
//! coordination offset, birth number, check digit, separator), assembled in the
//! twelve-digit layout and then parsed again. A candidate that fails the parser
//! or disagrees with what was drawn is a bug in this module and aborts the whole
//! batch with [`Error::GeneratorInvariant`].

use chrono::{Datelike, Months, NaiveDate};
use rand::Rng;

use crate::{
    calendar::{self, COORDINATION_OFFSET},
    checksum,
    error::Error,
    options::GenerateOptions,
    pin::PersonalIdentityNumber,
    types::{CENTENARIAN_AGE, Separator},
};

const MALE_DIGITS: [u16; 5] = [1, 3, 5, 7, 9];
const FEMALE_DIGITS: [u16; 5] = [0, 2, 4, 6, 8];

/// Generates `options.count` numbers using the thread-local random source.
pub fn generate(options: &GenerateOptions) -> Result<Vec<PersonalIdentityNumber>, Error> {
    generate_with_rng(options, &mut rand::thread_rng())
}

/// Generates `options.count` numbers drawing from `rng`.
///
/// Seeding `rng` makes the batch reproducible for a fixed reference date.
///
/// ```rust
/// use chrono::NaiveDate;
/// use rand::{SeedableRng, rngs::StdRng};
/// use swepin::{GenerateOptions, generate_with_rng};
///
/// let options = GenerateOptions::new()
///     .with_count(3)
///     .with_reference_date(NaiveDate::from_ymd_opt(2024, 6, 1));
/// let first = generate_with_rng(&options, &mut StdRng::seed_from_u64(7))?;
/// let second = generate_with_rng(&options, &mut StdRng::seed_from_u64(7))?;
/// assert_eq!(first, second);
/// # Ok::<(), swepin::Error>(())
/// ```
pub fn generate_with_rng<R: Rng + ?Sized>(
    options: &GenerateOptions,
    rng: &mut R,
) -> Result<Vec<PersonalIdentityNumber>, Error> {
    options.validate()?;
    let reference = options.reference_date_or_today();
    let window = BirthWindow::new(options, reference)?;
    tracing::debug!(
        count = options.count,
        earliest = %window.earliest,
        latest = %window.latest,
        "generating personal identity numbers"
    );

    (0..options.count)
        .map(|_| generate_one(options, &window, reference, rng))
        .collect()
}

/// The inclusive range of birth dates a batch may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BirthWindow {
    earliest: NaiveDate,
    latest: NaiveDate,
}

impl BirthWindow {
    fn new(options: &GenerateOptions, reference: NaiveDate) -> Result<Self, Error> {
        let first_of_range = NaiveDate::from_ymd_opt(options.start_year, 1, 1);
        let last_of_range = NaiveDate::from_ymd_opt(options.end_year, 12, 31);
        let (Some(mut earliest), Some(last_of_range)) = (first_of_range, last_of_range) else {
            return Err(Error::invalid_options(format!(
                "year range {}..={} is not representable",
                options.start_year, options.end_year
            )));
        };
        let latest = last_of_range.min(reference);

        if !options.include_centenarians {
            // The day after the reference date's month and day, 100 years back,
            // is the first birth date that is still under 100.
            let youngest_centenarian = reference
                .checked_sub_months(Months::new(12 * CENTENARIAN_AGE as u32))
                .and_then(|date| date.succ_opt());
            if let Some(first_non_centenarian) = youngest_centenarian {
                earliest = earliest.max(first_non_centenarian);
            }
        }

        if earliest > latest {
            return Err(Error::invalid_options(format!(
                "no birth dates between {} and {} at reference date {}",
                earliest, latest, reference
            )));
        }
        Ok(Self { earliest, latest })
    }

    /// Uniform year, then a uniform day within the part of that year inside the window.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<NaiveDate, Error> {
        let year = rng.gen_range(self.earliest.year()..=self.latest.year());
        let first = if year == self.earliest.year() {
            self.earliest.ordinal()
        } else {
            1
        };
        let last = if year == self.latest.year() {
            self.latest.ordinal()
        } else {
            calendar::days_in_year(year)
        };
        let ordinal = rng.gen_range(first..=last);
        NaiveDate::from_yo_opt(year, ordinal).ok_or_else(|| {
            Error::generator_invariant(
                format!("{:04}-{:03}", year, ordinal),
                "sampled day of year does not exist",
            )
        })
    }
}

fn generate_one<R: Rng + ?Sized>(
    options: &GenerateOptions,
    window: &BirthWindow,
    reference: NaiveDate,
    rng: &mut R,
) -> Result<PersonalIdentityNumber, Error> {
    let birth_date = window.sample(rng)?;

    let coordination =
        options.include_coordination_numbers && rng.gen_bool(options.coordination_probability);
    let calendar_day = birth_date.day() as u8;
    let written_day = if coordination {
        calendar_day + COORDINATION_OFFSET
    } else {
        calendar_day
    };

    let male = rng.gen_bool(options.male_ratio);
    let gender_digits = if male { &MALE_DIGITS } else { &FEMALE_DIGITS };
    let gender_digit = gender_digits[rng.gen_range(0..gender_digits.len())];
    let birth_place: u16 = rng.gen_range(0..=99);
    let birth_number = birth_place * 10 + gender_digit;

    let full_year = birth_date.year();
    let year = full_year.rem_euclid(100) as u8;
    let month = birth_date.month() as u8;
    let check_digit = checksum::compute(&checksum::significant_digits(
        year,
        month,
        written_day,
        birth_number,
    ));
    let separator = Separator::for_age(calendar::age_at(birth_date, reference));

    let candidate = format!(
        "{:04}{:02}{:02}{:03}{}",
        full_year, month, written_day, birth_number, check_digit
    );
    let pin = PersonalIdentityNumber::parse_at(&candidate, reference).map_err(|e| {
        tracing::error!(error = %e, "generated candidate failed re-validation");
        Error::generator_invariant(&candidate, e.to_string())
    })?;

    let mismatch = if pin.birth_date() != birth_date {
        Some("birth date differs after parsing")
    } else if pin.is_coordination_number() != coordination {
        Some("coordination flag differs after parsing")
    } else if pin.separator() != separator {
        Some("separator differs after parsing")
    } else if pin.is_male() != male {
        Some("gender differs after parsing")
    } else {
        None
    };
    if let Some(reason) = mismatch {
        tracing::error!(reason, "generated candidate disagrees with its draw");
        return Err(Error::generator_invariant(candidate, reason));
    }

    Ok(pin)
}
