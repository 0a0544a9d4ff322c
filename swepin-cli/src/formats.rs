use swepin::{Language, PinFormat};

/// Layouts accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FormatArg {
    /// `YYYYMMDDNNNC`
    Long,
    /// `YYYYMMDD-NNNC`
    LongSeparated,
    /// `YYMMDD-NNNC`
    #[default]
    ShortSeparated,
    /// `YYMMDDNNNC`
    Short,
}

impl From<FormatArg> for PinFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Long => PinFormat::LongWithoutSeparator,
            FormatArg::LongSeparated => PinFormat::LongWithSeparator,
            FormatArg::ShortSeparated => PinFormat::ShortWithSeparator,
            FormatArg::Short => PinFormat::ShortWithoutSeparator,
        }
    }
}

/// Language of projection keys and table labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LanguageArg {
    #[default]
    #[value(alias = "english")]
    En,
    #[value(alias = "swedish")]
    Sv,
}

impl From<LanguageArg> for Language {
    fn from(value: LanguageArg) -> Self {
        match value {
            LanguageArg::En => Language::English,
            LanguageArg::Sv => Language::Swedish,
        }
    }
}

/// How generated numbers are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One number per line.
    #[default]
    Text,
    /// A JSON array of projections.
    Json,
    /// A YAML sequence of projections.
    Yaml,
}

