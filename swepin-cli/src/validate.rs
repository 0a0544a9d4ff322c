use rayon::prelude::*;
use serde::Serialize;
use swepin::{Error, ParseOptions, PersonalIdentityNumber, PinFormat};

/// Outcome of validating one input.
#[derive(Debug)]
pub struct ValidationReport {
    pub input: String,
    pub outcome: Result<PersonalIdentityNumber, Error>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }
}

#[derive(Serialize)]
struct ReportEntry<'a> {
    input: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    long_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> From<&'a ValidationReport> for ReportEntry<'a> {
    fn from(report: &'a ValidationReport) -> Self {
        match &report.outcome {
            Ok(pin) => ReportEntry {
                input: &report.input,
                valid: true,
                long_format: Some(pin.format(PinFormat::LongWithoutSeparator)),
                error_kind: None,
                error: None,
            },
            Err(e) => ReportEntry {
                input: &report.input,
                valid: false,
                long_format: None,
                error_kind: Some(e.kind()),
                error: Some(e.to_string()),
            },
        }
    }
}

/// Validate every input in parallel; reports keep the input order.
pub fn validate_all(inputs: &[String], options: &ParseOptions) -> Vec<ValidationReport> {
    inputs
        .par_iter()
        .map(|input| ValidationReport {
            input: input.clone(),
            outcome: PersonalIdentityNumber::parse_with(input, options),
        })
        .collect()
}

/// Render reports as a JSON array.
pub fn reports_to_json(reports: &[ValidationReport]) -> Result<String, String> {
    let entries: Vec<ReportEntry> = reports.iter().map(ReportEntry::from).collect();
    serde_json::to_string_pretty(&entries).map_err(|e| format!("Error serializing to JSON: {}", e))
}

/// Render reports as `OK`/`ERR` lines.
pub fn reports_to_text(reports: &[ValidationReport]) -> String {
    reports
        .iter()
        .map(|report| match &report.outcome {
            Ok(_) => format!("OK  {}", report.input),
            Err(e) => format!("ERR {}: {}", report.input, e),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Run the validate command. Returns whether every input was valid.
pub fn run_validate_command(
    inputs: &[String],
    options: &ParseOptions,
    json_output: bool,
) -> Result<bool, String> {
    let reports = validate_all(inputs, options);
    let invalid = reports.iter().filter(|r| !r.is_valid()).count();
    tracing::debug!(total = reports.len(), invalid, "validated inputs");

    if json_output {
        println!("{}", reports_to_json(&reports)?);
    } else {
        println!("{}", reports_to_text(&reports));
    }

    Ok(invalid == 0)
}
