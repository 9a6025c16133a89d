//! Shared helpers for the binary integration suites.
#![allow(dead_code)]

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;

use assert_cmd::cargo::cargo_bin_cmd;

pub use test_support::{FileTree, TestDir};

/// Fake `scp`: logs its arguments, copies locally, and refuses sources whose
/// path contains `fail`. Remote operands are accepted without copying.
pub const FAKE_SCP: &str = r#"#!/bin/sh
printf '%s\n' "$*" >> "@LOG_DIR@/scp.log"
while [ $# -gt 2 ]; do shift; done
case "$1" in
  *fail*) echo "scp: $1: Permission denied" >&2; exit 1 ;;
esac
case "$2" in
  *:*) exit 0 ;;
esac
cp -R "$1" "$2"
"#;

/// Fake `ssh`: logs its arguments and exits with `@STATUS@`.
pub const FAKE_SSH: &str = r#"#!/bin/sh
printf '%s\n' "$*" >> "@LOG_DIR@/ssh.log"
exit @STATUS@
"#;

/// Directory holding fake `scp`/`ssh` programs and their argument logs.
pub struct FakePrograms {
    dir: TestDir,
}

impl FakePrograms {
    pub fn new(ssh_status: i32) -> Self {
        let dir = TestDir::new().expect("create fake program dir");
        let log_dir = dir.path().display().to_string();
        install(&dir, "scp", &FAKE_SCP.replace("@LOG_DIR@", &log_dir));
        install(
            &dir,
            "ssh",
            &FAKE_SSH
                .replace("@LOG_DIR@", &log_dir)
                .replace("@STATUS@", &ssh_status.to_string()),
        );
        Self { dir }
    }

    pub fn scp(&self) -> PathBuf {
        self.dir.join("scp")
    }

    pub fn ssh(&self) -> PathBuf {
        self.dir.join("ssh")
    }

    /// Lines logged by `program` (`"scp"` or `"ssh"`), one per invocation.
    pub fn log(&self, program: &str) -> Vec<String> {
        fs::read_to_string(self.dir.join(format!("{program}.log")))
            .unwrap_or_default()
            .lines()
            .map(str::to_owned)
            .collect()
    }
}

fn install(dir: &TestDir, name: &str, body: &str) {
    let path = dir.write_file(name, body.as_bytes()).expect("write script");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod script");
    }
    #[cfg(not(unix))]
    let _ = path;
}

/// Builder around the compiled `escp` binary.
pub struct EscpCommand {
    inner: assert_cmd::Command,
}

impl EscpCommand {
    pub fn new() -> Self {
        let mut inner = cargo_bin_cmd!("escp");
        inner.env_remove("ESCP_LOG");
        Self { inner }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.inner.arg(arg);
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.inner.args(args);
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.inner.current_dir(dir);
        self
    }

    /// Routes `scp` and `ssh` invocations to `fakes`.
    pub fn with_fakes(mut self, fakes: &FakePrograms) -> Self {
        self.inner.env("ESCP_SCP", fakes.scp());
        self.inner.env("ESCP_SSH", fakes.ssh());
        self
    }

    pub fn output(mut self) -> Output {
        self.inner.output().expect("run escp")
    }

    pub fn assert(mut self) -> assert_cmd::assert::Assert {
        self.inner.assert()
    }
}

/// Stdout of `output` as UTF-8.
pub fn stdout_text(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}

/// Stderr of `output` as UTF-8.
pub fn stderr_text(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr is UTF-8")
}
