use chrono::NaiveDate;
use swepin::{Language, PersonalIdentityNumber, PinFormat, projection};
use unicode_width::UnicodeWidthStr;

use crate::formats::OutputFormat;

const MIN_LABEL_WIDTH: usize = 26;
const MIN_VALUE_WIDTH: usize = 38;

enum Row {
    Section(&'static str, String),
    Field(&'static str, String),
}

/// Labels for the table, one set per language.
struct Labels {
    title: &'static str,
    property: &'static str,
    value: &'static str,
    original: &'static str,
    birth_date: &'static str,
    century: &'static str,
    year: &'static str,
    full_year: &'static str,
    month: &'static str,
    day: &'static str,
    full_date: &'static str,
    coordination: &'static str,
    coordination_yes: &'static str,
    no: &'static str,
    actual_day: &'static str,
    separator: &'static str,
    birth_number: &'static str,
    complete: &'static str,
    birth_place: &'static str,
    gender_digit: &'static str,
    validation_digit: &'static str,
    derived: &'static str,
    age: &'static str,
    gender: &'static str,
    formats: &'static str,
    long: &'static str,
    long_separated: &'static str,
    short_separated: &'static str,
    short: &'static str,
}

const ENGLISH: Labels = Labels {
    title: "Swedish Personal Identity Number Details",
    property: "Property",
    value: "Value",
    original: "Original Number",
    birth_date: "BIRTH DATE",
    century: "Century",
    year: "Year (2 digits)",
    full_year: "Full Year (4 digits)",
    month: "Month",
    day: "Day",
    full_date: "Full Date",
    coordination: "Coordination Number",
    coordination_yes: "Yes (day + 60)",
    no: "No",
    actual_day: "Actual Day",
    separator: "SEPARATOR",
    birth_number: "BIRTH NUMBER",
    complete: "Complete Number",
    birth_place: "Birth Place Digits",
    gender_digit: "Gender Digit",
    validation_digit: "Validation Digit",
    derived: "DERIVED PROPERTIES",
    age: "Age",
    gender: "Gender",
    formats: "FORMATS",
    long: "Long (12 digits) w/o sep",
    long_separated: "Long w/ separator",
    short_separated: "Short (10 digits) w/ sep",
    short: "Short w/o separator",
};

const SWEDISH: Labels = Labels {
    title: "Personnummer, detaljer",
    property: "Egenskap",
    value: "Värde",
    original: "Ursprungligt nummer",
    birth_date: "FÖDELSEDATUM",
    century: "Sekel",
    year: "År (2 siffror)",
    full_year: "Helt år (4 siffror)",
    month: "Månad",
    day: "Dag",
    full_date: "Fullständigt datum",
    coordination: "Samordningsnummer",
    coordination_yes: "Ja (dag + 60)",
    no: "Nej",
    actual_day: "Faktisk dag",
    separator: "SKILJETECKEN",
    birth_number: "FÖDELSENUMMER",
    complete: "Komplett nummer",
    birth_place: "Födelseortssiffror",
    gender_digit: "Könssiffra",
    validation_digit: "Kontrollsiffra",
    derived: "HÄRLEDDA EGENSKAPER",
    age: "Ålder",
    gender: "Kön",
    formats: "FORMAT",
    long: "Långt (12 siffror) utan tecken",
    long_separated: "Långt med tecken",
    short_separated: "Kort (10 siffror) med tecken",
    short: "Kort utan tecken",
};

fn labels(language: Language) -> &'static Labels {
    match language {
        Language::English => &ENGLISH,
        Language::Swedish => &SWEDISH,
    }
}

fn rows(pin: &PersonalIdentityNumber, l: &Labels, language: Language, reference: NaiveDate) -> Vec<Row> {
    let mut rows = vec![
        Row::Section(l.original, pin.input().to_string()),
        Row::Section(l.birth_date, String::new()),
        Row::Field(l.century, format!("{:02}", pin.century())),
        Row::Field(l.year, format!("{:02}", pin.year())),
        Row::Field(l.full_year, format!("{:04}", pin.full_year())),
        Row::Field(l.month, format!("{:02}", pin.month())),
        Row::Field(l.day, format!("{:02}", pin.day())),
        Row::Field(l.full_date, pin.birth_date().format("%Y-%m-%d").to_string()),
    ];
    if pin.is_coordination_number() {
        rows.push(Row::Field(l.coordination, l.coordination_yes.to_string()));
        rows.push(Row::Field(l.actual_day, format!("{:02}", pin.actual_day())));
    } else {
        rows.push(Row::Field(l.coordination, l.no.to_string()));
    }
    let gender = projection::gender_word(pin.gender(), language);
    rows.extend([
        Row::Section(l.separator, pin.separator_at(reference).to_string()),
        Row::Section(l.birth_number, String::new()),
        Row::Field(l.complete, format!("{:03}", pin.birth_number())),
        Row::Field(l.birth_place, format!("{:02}", pin.birth_place())),
        Row::Field(l.gender_digit, pin.gender_digit().to_string()),
        Row::Field(l.validation_digit, pin.check_digit().to_string()),
        Row::Section(l.derived, String::new()),
        Row::Field(l.age, pin.age_at(reference).to_string()),
        Row::Field(l.gender, capitalize(gender)),
        Row::Section(l.formats, String::new()),
        Row::Field(l.long, pin.format(PinFormat::LongWithoutSeparator)),
        Row::Field(l.long_separated, pin.format_at(PinFormat::LongWithSeparator, reference)),
        Row::Field(l.short_separated, pin.format_at(PinFormat::ShortWithSeparator, reference)),
        Row::Field(l.short, pin.format(PinFormat::ShortWithoutSeparator)),
    ]);
    rows
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Pads by display width, so `å` and `ö` line up like ASCII.
fn pad_right(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(fill))
}

fn center(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(text));
    let left = fill / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(fill - left))
}

/// Render the labelled property table of `pin`, with the age and separator
/// taken at `reference`.
pub fn render_table(pin: &PersonalIdentityNumber, language: Language, reference: NaiveDate) -> String {
    let l = labels(language);
    let rows = rows(pin, l, language, reference);

    let label_width = rows
        .iter()
        .map(|row| match row {
            Row::Section(label, _) => UnicodeWidthStr::width(*label),
            Row::Field(label, _) => UnicodeWidthStr::width(*label) + 2,
        })
        .chain([UnicodeWidthStr::width(l.property)])
        .max()
        .unwrap_or(0)
        .max(MIN_LABEL_WIDTH);
    let value_width = rows
        .iter()
        .map(|row| match row {
            Row::Section(_, value) | Row::Field(_, value) => UnicodeWidthStr::width(value.as_str()),
        })
        .max()
        .unwrap_or(0)
        .max(MIN_VALUE_WIDTH)
        .max(UnicodeWidthStr::width(l.title).saturating_sub(label_width + 3));

    // Cell widths include one space of padding on each side.
    let (lw, vw) = (label_width + 2, value_width + 2);
    let rule = |left: &str, mid: &str, right: &str| {
        format!("{}{}{}{}{}", left, "━".repeat(lw), mid, "━".repeat(vw), right)
    };
    let line = |label: &str, value: &str| {
        format!("┃ {} ┃ {} ┃", pad_right(label, label_width), pad_right(value, value_width))
    };

    let mut lines = vec![
        rule("┏", "━", "┓"),
        format!("┃{}┃", center(l.title, lw + vw + 1)),
        rule("┣", "┳", "┫"),
        format!("┃ {} ┃ {} ┃", center(l.property, label_width), center(l.value, value_width)),
        rule("┣", "╋", "┫"),
    ];
    for (i, row) in rows.iter().enumerate() {
        match row {
            Row::Section(label, value) => {
                if i > 0 {
                    lines.push(rule("┣", "╋", "┫"));
                }
                lines.push(line(label, value));
                if value.is_empty() {
                    lines.push(rule("┣", "╋", "┫"));
                }
            }
            Row::Field(label, value) => lines.push(line(&format!("  {}", label), value)),
        }
    }
    lines.push(rule("┗", "┻", "┛"));
    lines.join("\n")
}

/// Render `pin` as a table or as a serialized projection.
pub fn render(
    pin: &PersonalIdentityNumber,
    language: Language,
    reference: NaiveDate,
    output: OutputFormat,
) -> Result<String, String> {
    match output {
        OutputFormat::Text => Ok(render_table(pin, language, reference)),
        OutputFormat::Json => projection::to_json_pretty(pin, language, reference)
            .map_err(|e| format!("Error serializing to JSON: {}", e)),
        OutputFormat::Yaml => serde_yaml::to_string(&projection::to_value(pin, language, reference))
            .map_err(|e| format!("Error serializing to YAML: {}", e)),
    }
}
