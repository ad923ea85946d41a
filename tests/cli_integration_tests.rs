//! End-to-end tests driving the `validate-workflows` binary
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_validator(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_validate-workflows"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run validate-workflows")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is utf8")
}

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path.to_string_lossy().into_owned()
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    let output = run_validator(&[]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Usage"));
    assert!(!stdout.contains("Validation Summary"));
}

#[test]
fn flow_style_workflow_without_name_passes_with_warning() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write(
        dir.path(),
        "ci.yml",
        "{on: push, jobs: {build: {runs-on: ubuntu, steps: [a,b]}}}",
    );

    let output = run_validator(&[&path]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("⚠ Warnings (1):"));
    assert!(stdout.contains(&format!("⚠ {}: Missing 'name' field (recommended)", path)));
    assert!(stdout.contains("✓ All validations passed!"));
}

#[test]
fn empty_jobs_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write(dir.path(), "ci.yml", "{name: x, on: push, jobs: {}}");

    let output = run_validator(&[&path]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("✗ Errors (1):"));
    assert!(stdout.contains(&format!("✗ {}: 'jobs' must contain at least one job", path)));
}

#[test]
fn verbose_flag_prints_trace_lines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write(
        dir.path(),
        "ci.yaml",
        "name: CI\non: push\njobs:\n  build:\n    runs-on: ubuntu-latest\n    steps:\n      - run: make\n",
    );

    let quiet = stdout_of(&run_validator(&[&path]));
    assert!(!quiet.contains("Valid YAML syntax"));

    let output = run_validator(&["--verbose", &path]);
    let stdout = stdout_of(&output);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains(&format!("Validating {}...", path)));
    assert!(stdout.contains(&format!("✓ {}: Valid YAML syntax", path)));
    assert!(stdout.contains(&format!("✓ {}: Valid workflow structure", path)));

    let short = stdout_of(&run_validator(&["-v", &path]));
    assert!(short.contains("Valid workflow structure"));
}

#[test]
fn missing_path_is_reported_and_other_inputs_still_checked() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.yml").to_string_lossy().into_owned();
    let broken = write(dir.path(), "broken.yml", "name: x\njobs: {}\n");

    let output = run_validator(&[&missing, &broken]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("✗ Errors (2):"));
    assert!(stdout.contains(&format!("✗ {}: Not found", missing)));
    assert!(stdout.contains(&format!("✗ {}: Missing required 'on' field", broken)));
}

#[test]
fn directory_argument_is_expanded() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::create_dir(dir.path().join("workflows")).expect("mkdir");
    write(
        &dir.path().join("workflows"),
        "ok.yml",
        "name: ok\non: push\njobs:\n  a:\n    runs-on: x\n    steps: [run]\n",
    );
    let bad = write(&dir.path().join("workflows"), "bad.yml", "- not\n- a mapping\n");

    let output = run_validator(&[dir.path().to_str().expect("utf8 path")]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains(&format!("✗ {}: Workflow must be a YAML mapping", bad)));
    assert!(stdout.contains("✗ Errors (1):"));
}
