//! Resolution of the external `scp` and `ssh` programs.

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Environment variable naming the program used in place of `scp`.
pub const SCP_PROGRAM_ENV: &str = "ESCP_SCP";

/// Environment variable naming the program used in place of `ssh`.
pub const SSH_PROGRAM_ENV: &str = "ESCP_SSH";

pub(crate) const DEFAULT_SCP: &str = "scp";
pub(crate) const DEFAULT_SSH: &str = "ssh";

/// Returns the value of `var` when it is set and non-empty, else `default`.
#[must_use]
pub fn program_from_env(var: &str, default: &str) -> OsString {
    match env::var_os(var) {
        Some(value) if !value.is_empty() => value,
        _ => OsString::from(default),
    }
}

/// Hint appended to spawn failures so operators know how to point escp at
/// another binary.
#[must_use]
pub fn describe_missing_program(program: &OsStr, env_var: &str) -> String {
    let display = Path::new(program).display();
    format!(
        "'{display}' is not available on PATH or is not executable; install it or set {env_var} to an explicit path"
    )
}
