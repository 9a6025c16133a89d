#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the `escp` command line: it loads ignore patterns, walks
//! the source tree, drops excluded paths, and hands the rest to
//! [`transport::copy_targets`].
//!
//! # Design
//!
//! [`run`] accepts an iterator of arguments together with handles for
//! standard output and error, so the binary and the tests drive the same
//! code. A [`clap`] command definition parses the options into a plain
//! struct; the pipeline then runs strictly in order (patterns, destination,
//! traversal, filtering, copy) and stops at the first fatal error.
//!
//! # Invariants
//!
//! - `run` never panics; every failure becomes a diagnostic and an exit code.
//! - Nothing is copied unless the ignore file and the whole source tree were
//!   read successfully.
//! - Malformed ignore patterns produce a warning and are otherwise skipped.
//!
//! # Errors
//!
//! | Exit | Meaning |
//! |------|---------|
//! | [`EXIT_USAGE`] | bad options, missing operands, malformed destination |
//! | [`EXIT_CONFIG`] | ignore file unreadable (or missing when named with `-i`) |
//! | [`EXIT_TRAVERSAL`] | source tree could not be read |
//! | [`EXIT_PARTIAL_TRANSFER`] | one or more items were not copied |
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = cli::run(["escp", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert!(String::from_utf8(stdout).unwrap().starts_with("escp "));
//! assert!(stderr.is_empty());
//! ```

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use filters::{DEFAULT_IGNORE_FILE, IgnoreSet, load_patterns, load_patterns_required};
use logging::{
    Message, MessageSink, Verbosity, escp_error, escp_info, escp_warning, init_tracing,
    trace_config,
};
use transport::{CopyOptions, Destination, copy_targets};
use walk::{CopyTarget, TargetKind, collect_copy_targets};

mod args;

use args::{ParsedArgs, parse_args};

/// Invalid options or operands.
pub const EXIT_USAGE: i32 = 1;
/// The ignore file could not be loaded.
pub const EXIT_CONFIG: i32 = 2;
/// The source tree could not be read.
pub const EXIT_TRAVERSAL: i32 = 3;
/// At least one item failed to copy.
pub const EXIT_PARTIAL_TRANSFER: i32 = 23;

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

const USAGE_LINE: &str = "Usage: escp [OPTIONS] SOURCE DEST";

/// Deterministic help text describing the CLI surface.
const HELP_TEXT: &str = concat!(
    "escp ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "Copy a directory tree with scp, skipping paths listed in an ignore file.\n",
    "\n",
    "Usage: escp [OPTIONS] SOURCE DEST\n",
    "\n",
    "DEST is either a local path or [user@]host:path.\n",
    "\n",
    "Options:\n",
    "  -h, --help              Show this help message and exit.\n",
    "  -V, --version           Output version information and exit.\n",
    "  -i, --ignore-file FILE  Read ignore patterns from FILE instead of ./.scpignore.\n",
    "  -n, --dry-run           List the paths that would be copied without copying them.\n",
    "  -P, --port PORT         Connect to PORT on the remote host.\n",
    "  -v, --verbose           Increase logging verbosity; repeat for more detail.\n",
    "  -q, --quiet             Suppress informational output.\n",
    "\n",
    "Ignore files hold one pattern per line; blank lines and lines starting\n",
    "with '#' are skipped. A pattern matches a path when it globs the file\n",
    "name, or when it names a whole path segment ('build' skips every build\n",
    "directory). Leading and trailing '*' relax the segment match.\n",
    "\n",
    "Environment:\n",
    "  ESCP_SCP   program used instead of scp\n",
    "  ESCP_SSH   program used instead of ssh\n",
    "  ESCP_LOG   tracing filter directives (e.g. escp::filter=debug)\n",
);

/// Renders the help text describing the supported options.
fn render_help() -> String {
    HELP_TEXT.to_string()
}

fn render_version() -> String {
    format!("escp {}\n", env!("CARGO_PKG_VERSION"))
}

/// Writes `message`, falling back to a plain line if the sink fails.
fn emit<W: Write>(message: &Message, sink: &mut MessageSink<W>) {
    if sink.write(message).is_err() {
        let _ = writeln!(sink.writer_mut(), "{message}");
    }
}

/// Runs the CLI using the provided argument iterator and output handles.
///
/// The function returns the process exit code that should be used by the
/// caller. Informational messages and dry-run listings go to `stdout`;
/// warnings and errors go to `stderr`.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let mut stderr_sink = MessageSink::new(stderr);
    match parse_args(arguments) {
        Ok(parsed) => execute(parsed, stdout, &mut stderr_sink),
        Err(error) => {
            let text = clap_error_text(&error);
            emit(&escp_error!(EXIT_USAGE, "{text}"), &mut stderr_sink);
            let _ = writeln!(stderr_sink.writer_mut(), "{USAGE_LINE}");
            EXIT_USAGE
        }
    }
}

/// First line of a clap diagnostic without its `error: ` prefix.
fn clap_error_text(error: &clap::Error) -> String {
    let rendered = error.render().to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_owned()
}

fn execute<Out, Err>(parsed: ParsedArgs, stdout: &mut Out, stderr: &mut MessageSink<Err>) -> i32
where
    Out: Write,
    Err: Write,
{
    let ParsedArgs {
        show_help,
        show_version,
        dry_run,
        quiet,
        verbose,
        port,
        ignore_file,
        operands,
    } = parsed;

    if show_help {
        return write_or_fail(stdout, render_help().as_bytes());
    }
    if show_version {
        return write_or_fail(stdout, render_version().as_bytes());
    }

    init_tracing(Verbosity::from_flags(verbose, quiet));

    let (source, destination) = match operands.as_slice() {
        [source, destination] => (PathBuf::from(source), destination.clone()),
        [] | [_] => {
            emit(
                &escp_error!(EXIT_USAGE, "missing SOURCE and DEST operands"),
                stderr,
            );
            let _ = writeln!(stderr.writer_mut(), "{USAGE_LINE}");
            return EXIT_USAGE;
        }
        [_, _, extra, ..] => {
            emit(
                &escp_error!(
                    EXIT_USAGE,
                    "unexpected extra operand '{}'",
                    extra.to_string_lossy()
                ),
                stderr,
            );
            let _ = writeln!(stderr.writer_mut(), "{USAGE_LINE}");
            return EXIT_USAGE;
        }
    };

    let destination = match Destination::parse(&destination) {
        Ok(destination) => destination,
        Err(error) => {
            emit(&escp_error!(EXIT_USAGE, "{error}"), stderr);
            return EXIT_USAGE;
        }
    };

    let ignore_set = match load_ignore_set(ignore_file.as_deref().map(Path::new)) {
        Ok(set) => set,
        Err(error) => {
            emit(&escp_error!(EXIT_CONFIG, "{error}"), stderr);
            return EXIT_CONFIG;
        }
    };
    let skipped: Vec<Message> = ignore_set
        .diagnostics()
        .iter()
        .map(|diagnostic| escp_warning!("{diagnostic}; pattern skipped"))
        .collect();
    let _ = stderr.write_all(&skipped);

    let targets = match collect_copy_targets(&source) {
        Ok(targets) => targets,
        Err(error) => {
            emit(&escp_error!(EXIT_TRAVERSAL, "{error}"), stderr);
            return EXIT_TRAVERSAL;
        }
    };
    let total = targets.len();
    let survivors = ignore_set.filter(targets);
    trace_config!(
        "{} of {} paths excluded by ignore patterns",
        total - survivors.len(),
        total
    );

    let mut stdout_sink = MessageSink::new(stdout);
    if survivors.is_empty() {
        if !quiet {
            emit(
                &escp_info!("no files to copy based on the ignore patterns"),
                &mut stdout_sink,
            );
        }
        return 0;
    }

    if port.is_some() && !destination.is_remote() {
        emit(
            &escp_warning!("--port has no effect for a local destination"),
            stderr,
        );
    }

    if dry_run {
        return list_targets(&survivors, &destination, quiet, &mut stdout_sink);
    }

    transfer(&survivors, &destination, port, quiet, &mut stdout_sink, stderr)
}

fn load_ignore_set(explicit: Option<&Path>) -> Result<IgnoreSet, filters::LoadError> {
    let patterns = match explicit {
        Some(path) => load_patterns_required(path)?,
        None => load_patterns(Path::new(DEFAULT_IGNORE_FILE))?,
    };
    Ok(IgnoreSet::new(patterns))
}

fn display_relative(target: &CopyTarget) -> String {
    let mut text = target.relative_path().display().to_string();
    if target.kind() == TargetKind::EmptyDirectory {
        text.push('/');
    }
    text
}

fn list_targets<Out: Write>(
    survivors: &[CopyTarget],
    destination: &Destination,
    quiet: bool,
    stdout: &mut MessageSink<Out>,
) -> i32 {
    for target in survivors {
        if writeln!(stdout.writer_mut(), "{}", display_relative(target)).is_err() {
            return EXIT_USAGE;
        }
    }
    if !quiet {
        emit(
            &escp_info!(
                "dry run: {} item(s) would be copied to {destination}",
                survivors.len()
            ),
            stdout,
        );
    }
    0
}

fn transfer<Out, Err>(
    survivors: &[CopyTarget],
    destination: &Destination,
    port: Option<u16>,
    quiet: bool,
    stdout: &mut MessageSink<Out>,
    stderr: &mut MessageSink<Err>,
) -> i32
where
    Out: Write,
    Err: Write,
{
    let options = CopyOptions::from_env().port(port);
    let report = match copy_targets(survivors, destination, &options) {
        Ok(report) => report,
        Err(error) => {
            emit(&escp_error!(EXIT_PARTIAL_TRANSFER, "{error}"), stderr);
            return EXIT_PARTIAL_TRANSFER;
        }
    };

    for item in report.items() {
        match item.failure_summary() {
            Some(summary) => emit(&escp_error!(EXIT_PARTIAL_TRANSFER, "{summary}"), stderr),
            None if !item.output().is_empty() => {
                let _ = stdout.writer_mut().write_all(item.output().as_bytes());
            }
            None => {}
        }
    }

    let failed = report.len() - report.copied();
    if failed > 0 {
        emit(
            &escp_error!(
                EXIT_PARTIAL_TRANSFER,
                "{failed} of {} item(s) failed to copy to {destination}",
                report.len()
            ),
            stderr,
        );
        return EXIT_PARTIAL_TRANSFER;
    }

    if !quiet {
        emit(
            &escp_info!("copied {} item(s) to {destination}", report.copied()),
            stdout,
        );
    }
    0
}

fn write_or_fail<Out: Write>(stdout: &mut Out, bytes: &[u8]) -> i32 {
    match stdout.write_all(bytes).and_then(|()| stdout.flush()) {
        Ok(()) => 0,
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => 0,
        Err(_) => EXIT_USAGE,
    }
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(u8::try_from(clamped).unwrap_or(u8::MAX))
}
