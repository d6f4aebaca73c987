use tempfile::tempdir;

use crate::common::std_launcher_command;

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn missing_nango_variables_exit_with_every_name() {
    let workdir = tempdir().expect("can create temporary directory");
    let output = std_launcher_command(workdir.path())
        .output()
        .expect("process should start");

    assert_eq!(output.status.code(), Some(1), "exit code 1 expected");
    let stderr = stderr_of(&output);
    for name in [
        "NANGO_CONNECTION_ID",
        "NANGO_INTEGRATION_ID",
        "NANGO_BASE_URL",
        "NANGO_SECRET_KEY",
    ] {
        assert!(stderr.contains(name), "stderr should list {name}: {stderr}");
    }
}

#[test]
fn disabled_nango_without_token_exits_with_direct_token_error() {
    let workdir = tempdir().expect("can create temporary directory");
    let output = std_launcher_command(workdir.path())
        .env("MONDAY_USENANGO", "false")
        .output()
        .expect("process should start");

    assert_eq!(output.status.code(), Some(1), "exit code 1 expected");
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("Either provide a token or enable Nango authentication"),
        "stderr: {stderr}"
    );
    assert!(!stderr.contains("NANGO_BASE_URL"), "stderr: {stderr}");
}

#[test]
fn dotenv_file_supplies_missing_variables() {
    let workdir = tempdir().expect("can create temporary directory");
    std::fs::write(
        workdir.path().join(".env"),
        "NANGO_CONNECTION_ID=conn\nNANGO_INTEGRATION_ID=monday\n",
    )
    .expect("can write .env");

    let output = std_launcher_command(workdir.path())
        .output()
        .expect("process should start");

    assert_eq!(output.status.code(), Some(1), "exit code 1 expected");
    let stderr = stderr_of(&output);
    assert!(!stderr.contains("- NANGO_CONNECTION_ID"), "stderr: {stderr}");
    assert!(!stderr.contains("- NANGO_INTEGRATION_ID"), "stderr: {stderr}");
    assert!(stderr.contains("- NANGO_BASE_URL"), "stderr: {stderr}");
    assert!(stderr.contains("- NANGO_SECRET_KEY"), "stderr: {stderr}");
}

#[test]
fn help_lists_flags_and_exits_zero() {
    let workdir = tempdir().expect("can create temporary directory");
    let output = std_launcher_command(workdir.path())
        .arg("--help")
        .output()
        .expect("process should start");

    assert!(output.status.success(), "--help should exit 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--token", "--use-nango", "--enable-dynamic-api-tools", "MONDAY_READONLYMODE"] {
        assert!(stdout.contains(flag), "help should mention {flag}: {stdout}");
    }
}
