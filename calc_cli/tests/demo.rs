//! End-to-end run of the demo binary.

use std::process::Command;

fn calc_cli() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_calc_cli"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_demo_succeeds_with_six_results() {
    let output = calc_cli().output().unwrap();
    assert!(output.status.success());
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let results: Vec<&str> = stdout.lines().filter(|l| l.contains(" = ")).collect();
    assert_eq!(results.len(), 6);
    assert_eq!(results[0], "5 + 4 = 9");
    assert_eq!(results[3], "15 / 3 = 5");
    assert!(stdout.contains("All operations completed successfully!"));
}

#[test]
fn test_demo_json_output() {
    let output = calc_cli().arg("--json").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json_start = stdout.find('[').unwrap();
    let evaluations: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();
    let evaluations = evaluations.as_array().unwrap();
    assert_eq!(evaluations.len(), 6);
    assert_eq!(evaluations[5]["operation"]["op"], "sqrt");
    assert_eq!(evaluations[5]["value"], 4.0);
}

#[test]
fn test_unknown_flag_is_rejected() {
    let output = calc_cli().arg("--bogus").output().unwrap();
    assert!(!output.status.success());
}
