use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn swepin_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("swepin"))
}

const TODAY: &str = "2024-06-01";

#[test]
fn test_validate_valid_numbers() {
    let output = swepin_cmd()
        .args(["validate", "801224-1231", "198012241231", "--today", TODAY])
        .output()
        .expect("Failed to execute command");

    assert!(
        output.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("OK  801224-1231"));
    assert!(stdout.contains("OK  198012241231"));
}

#[test]
fn test_validate_exits_non_zero_on_invalid_input() {
    let output = swepin_cmd()
        .args(["validate", "801224-1231", "801224-1235", "--today", TODAY])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("OK  801224-1231"));
    assert!(stdout.contains("ERR 801224-1235"));
}

#[test]
fn test_validate_json_report() {
    let output = swepin_cmd()
        .args(["validate", "19801284-1238", "--today", TODAY, "--json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report[0]["input"], "19801284-1238");
    assert_eq!(report[0]["valid"], true);
    assert_eq!(report[0]["long_format"], "198012841238");
}

#[test]
fn test_validate_strict_rejects_short_layout() {
    let output = swepin_cmd()
        .args(["validate", "801224-1231", "--strict", "--today", TODAY])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("YYYYMMDD-NNNN"));
}

#[test]
fn test_validate_reads_file() {
    let temp_dir = TempDir::new().unwrap();
    let input_file = temp_dir.path().join("pins.txt");
    fs::write(&input_file, "801224-1231\n\n121212+1212\n").unwrap();

    let output = swepin_cmd()
        .args([
            "validate",
            "--file",
            input_file.to_str().unwrap(),
            "--today",
            TODAY,
        ])
        .output()
        .expect("Failed to execute command");

    assert!(
        output.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.contains("OK  121212+1212"));
}

#[test]
fn test_validate_missing_file() {
    let output = swepin_cmd()
        .args(["validate", "--file", "does_not_exist.txt"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("File does not exist"));
}

#[test]
fn test_format_long() {
    let output = swepin_cmd()
        .args(["format", "801224-1231", "--format", "long", "--today", TODAY])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "198012241231");
}

#[test]
fn test_format_centenarian_keeps_plus() {
    let output = swepin_cmd()
        .args(["format", "19121212-1212", "--today", TODAY])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "121212+1212");
}

#[test]
fn test_format_invalid_number() {
    let output = swepin_cmd()
        .args(["format", "801324-1231", "--today", TODAY])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}

#[test]
fn test_inspect_table() {
    let output = swepin_cmd()
        .args(["inspect", "801224-1231", "--today", TODAY])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Swedish Personal Identity Number Details"));
    assert!(stdout.contains("1980-12-24"));
    assert!(stdout.contains("43"));
}

#[test]
fn test_inspect_swedish_json() {
    let output = swepin_cmd()
        .args(["inspect", "801224-1231", "--today", TODAY, "--lang", "sv", "--json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["personnummer"], "801224-1231");
    assert_eq!(value["härledd_information"]["ålder"], 43);
}

#[test]
fn test_generate_seeded_is_reproducible() {
    let run = || {
        swepin_cmd()
            .args([
                "generate", "--count", "20", "--seed", "42", "--today", TODAY, "--format", "long",
            ])
            .output()
            .expect("Failed to execute command")
    };
    let first = run();
    let second = run();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    let stdout = String::from_utf8_lossy(&first.stdout);
    assert_eq!(stdout.lines().count(), 20);
    assert!(stdout.lines().all(|line| line.len() == 12));
}

#[test]
fn test_generated_numbers_validate() {
    let generated = swepin_cmd()
        .args([
            "generate",
            "--count",
            "50",
            "--seed",
            "7",
            "--today",
            TODAY,
            "--format",
            "long-separated",
            "--coordination-probability",
            "0.5",
        ])
        .output()
        .expect("Failed to execute command");
    assert!(generated.status.success());

    let pins: Vec<String> = String::from_utf8_lossy(&generated.stdout)
        .lines()
        .map(str::to_string)
        .collect();
    let output = swepin_cmd()
        .arg("validate")
        .args(&pins)
        .args(["--today", TODAY])
        .output()
        .expect("Failed to execute command");

    assert!(
        output.status.success(),
        "Generated numbers failed validation: {}",
        String::from_utf8_lossy(&output.stdout)
    );
}

#[test]
fn test_generate_json_output() {
    let output = swepin_cmd()
        .args([
            "generate", "--count", "3", "--seed", "1", "--today", TODAY, "--output", "json",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 3);
}

#[test]
fn test_generate_rejects_bad_ratio() {
    let output = swepin_cmd()
        .args(["generate", "--male-ratio", "1.5"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid options"));
    assert!(stderr.contains("male ratio"));
}

#[test]
fn test_generate_rejects_years_outside_four_digits() {
    let output = swepin_cmd()
        .args(["generate", "--start-year", "999", "--end-year", "2000"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid options"));
}

#[test]
fn test_generate_rejects_inverted_years() {
    let output = swepin_cmd()
        .args(["generate", "--start-year", "2000", "--end-year", "1990"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid options"));
}

#[test]
fn test_completions() {
    let output = swepin_cmd()
        .args(["completions", "bash"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("swepin"));
}
