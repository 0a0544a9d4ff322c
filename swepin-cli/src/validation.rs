use chrono::NaiveDate;
use std::path::Path;

/// Parse a `--today` value (`YYYY-MM-DD`).
pub fn parse_reference_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| format!("Invalid date '{}': {}. Expected YYYY-MM-DD", value, e))
}

/// Validate file path exists and is readable
pub fn validate_file_path(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return Err(format!("File does not exist: {}", path));
    }

    if !path_obj.is_file() {
        return Err(format!("Path is not a file: {}", path));
    }

    Ok(())
}

/// Collect the numbers to check: positional arguments first, then the
/// non-blank lines of `file`.
pub fn collect_inputs(args: &[String], file: Option<&str>) -> Result<Vec<String>, String> {
    let mut inputs = args.to_vec();

    if let Some(path) = file {
        validate_file_path(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Cannot read file {}: {}", path, e))?;
        inputs.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }

    if inputs.is_empty() {
        return Err("No personal identity numbers given".to_string());
    }

    Ok(inputs)
}
