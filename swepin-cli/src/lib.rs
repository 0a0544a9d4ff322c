//! CLI library for testing purposes

pub mod formats;
pub mod generate;
pub mod inspect;
pub mod validate;
pub mod validation;

pub use formats::{FormatArg, LanguageArg, OutputFormat};
pub use swepin::PersonalIdentityNumber;
