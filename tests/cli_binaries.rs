mod integration;

use integration::helpers::*;
use predicates::prelude::*;

#[test]
fn help_lists_usage_on_stdout() {
    EscpCommand::new()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: escp [OPTIONS] SOURCE DEST"))
        .stdout(predicate::str::contains("--ignore-file"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn version_reports_package_version() {
    EscpCommand::new()
        .arg("-V")
        .assert()
        .success()
        .stdout(format!("escp {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn without_operands_shows_usage_and_exits_one() {
    EscpCommand::new()
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing SOURCE and DEST operands"))
        .stderr(predicate::str::contains("Usage: escp"));
}

#[test]
fn unknown_flag_is_rejected() {
    EscpCommand::new()
        .args(["--definitely-not-a-flag", "src", "host:dst"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("escp error:"));
}
