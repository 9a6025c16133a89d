use std::collections::BTreeSet;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use logging::{trace_config, trace_copy};
use walk::CopyTarget;

use crate::Destination;
use crate::error::TransferError;
use crate::program::{
    DEFAULT_SCP, DEFAULT_SSH, SCP_PROGRAM_ENV, SSH_PROGRAM_ENV, describe_missing_program,
    program_from_env,
};
use crate::quote::quote_remote_path;
use crate::report::{ItemOutcome, ItemReport, TransferReport};

/// Settings for a transfer batch.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CopyOptions {
    scp_program: OsString,
    ssh_program: OsString,
    port: Option<u16>,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            scp_program: OsString::from(DEFAULT_SCP),
            ssh_program: OsString::from(DEFAULT_SSH),
            port: None,
        }
    }
}

impl CopyOptions {
    /// Uses plain `scp` and `ssh` from `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the `ESCP_SCP` and `ESCP_SSH` overrides.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            scp_program: program_from_env(SCP_PROGRAM_ENV, DEFAULT_SCP),
            ssh_program: program_from_env(SSH_PROGRAM_ENV, DEFAULT_SSH),
            port: None,
        }
    }

    /// Replaces the copy program.
    #[must_use]
    pub fn scp_program(mut self, program: impl Into<OsString>) -> Self {
        self.scp_program = program.into();
        self
    }

    /// Replaces the remote-shell program used to create directories.
    #[must_use]
    pub fn ssh_program(mut self, program: impl Into<OsString>) -> Self {
        self.ssh_program = program.into();
        self
    }

    /// Connects to a non-default port (`scp -P`, `ssh -p`).
    #[must_use]
    pub const fn port(mut self, port: Option<u16>) -> Self {
        self.port = port;
        self
    }

    /// Configured port, if any.
    #[must_use]
    pub const fn configured_port(&self) -> Option<u16> {
        self.port
    }

    fn scp_command(&self) -> Command {
        let mut command = Command::new(&self.scp_program);
        command.arg("-r");
        if let Some(port) = self.port {
            command.arg("-P").arg(port.to_string());
        }
        command
    }

    fn ssh_command(&self, target: &str) -> Command {
        let mut command = Command::new(&self.ssh_program);
        if let Some(port) = self.port {
            command.arg("-p").arg(port.to_string());
        }
        command.arg(target);
        command
    }
}

/// Copies every target to `destination`, one `scp -r` invocation per item.
///
/// Parent directories of every relative path are created first so the
/// source tree shape is kept. A failing item is recorded and the batch moves
/// on; an empty `targets` slice does nothing.
///
/// # Errors
///
/// Returns [`TransferError`] when a program cannot be started or the
/// destination directories cannot be prepared.
pub fn copy_targets(
    targets: &[CopyTarget],
    destination: &Destination,
    options: &CopyOptions,
) -> Result<TransferReport, TransferError> {
    let mut report = TransferReport::default();
    if targets.is_empty() {
        return Ok(report);
    }

    prepare_directories(targets, destination, options)?;

    for target in targets {
        let dest_operand = destination.join(target.relative_path());
        trace_copy!(
            "copying {} to {}",
            target.full_path().display(),
            Path::new(&dest_operand).display()
        );

        let mut command = options.scp_command();
        command.arg(target.full_path()).arg(&dest_operand);
        let output = run(&mut command, "scp", &options.scp_program, SCP_PROGRAM_ENV)?;

        let outcome = if output.status.success() {
            ItemOutcome::Copied
        } else {
            ItemOutcome::Failed {
                status: output.status.code(),
            }
        };
        report.push(ItemReport::new(
            target.relative_path().to_path_buf(),
            outcome,
            combined_output(&output),
        ));
    }

    Ok(report)
}

/// Parent directories (relative to the destination) that must exist before
/// the targets are copied, shortest first.
fn parent_directories(targets: &[CopyTarget]) -> BTreeSet<PathBuf> {
    targets
        .iter()
        .filter_map(|target| target.relative_path().parent())
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .collect()
}

fn prepare_directories(
    targets: &[CopyTarget],
    destination: &Destination,
    options: &CopyOptions,
) -> Result<(), TransferError> {
    let parents = parent_directories(targets);

    match destination {
        Destination::Local(root) => {
            let dirs = std::iter::once(root.clone()).chain(parents.iter().map(|p| root.join(p)));
            for dir in dirs {
                fs::create_dir_all(&dir)
                    .map_err(|source| TransferError::PrepareLocal { path: dir, source })?;
            }
            Ok(())
        }
        Destination::Remote { path, .. } => {
            let mut remote_dirs: Vec<String> = parents
                .iter()
                .filter_map(|parent| destination.remote_path(parent))
                .collect();
            if !path.is_empty() {
                remote_dirs.insert(0, path.clone());
            }
            if remote_dirs.is_empty() {
                return Ok(());
            }

            let host = destination.ssh_target().unwrap_or_default();
            let script = std::iter::once(String::from("mkdir -p --"))
                .chain(remote_dirs.iter().map(|dir| quote_remote_path(dir)))
                .collect::<Vec<_>>()
                .join(" ");
            trace_config!("preparing {} directories on {}", remote_dirs.len(), host);

            let mut command = options.ssh_command(&host);
            command.arg(script);
            let output = run(&mut command, "ssh", &options.ssh_program, SSH_PROGRAM_ENV)?;
            if output.status.success() {
                Ok(())
            } else {
                Err(TransferError::PrepareRemote {
                    host,
                    status: output.status.code(),
                    output: combined_output(&output),
                })
            }
        }
    }
}

fn run(
    command: &mut Command,
    role: &'static str,
    program: &OsStr,
    env_var: &str,
) -> Result<Output, TransferError> {
    command.output().map_err(|source| TransferError::Spawn {
        role,
        hint: describe_missing_program(program, env_var),
        source,
    })
}

fn combined_output(output: &Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    text
}
