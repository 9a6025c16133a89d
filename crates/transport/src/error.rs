use std::io;
use std::path::PathBuf;

/// Failure that stops a transfer batch before or between items.
///
/// Per-item copy failures are not errors; they are recorded in the
/// [`TransferReport`](crate::TransferReport).
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    /// The copy or remote-shell program could not be started.
    #[error("failed to launch {role} program: {hint} ({source})")]
    Spawn {
        /// `"scp"` or `"ssh"`.
        role: &'static str,
        /// Operator-facing hint naming the override variable.
        hint: String,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
    /// A destination directory could not be created locally.
    #[error("failed to create destination directory '{}': {source}", path.display())]
    PrepareLocal {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
    /// `ssh HOST mkdir -p` exited unsuccessfully.
    #[error("failed to create destination directories on {host}: {}", describe_status(*status, output))]
    PrepareRemote {
        /// `[user@]host` that was contacted.
        host: String,
        /// Exit code, or `None` when the process was killed by a signal.
        status: Option<i32>,
        /// Combined stdout and stderr of the invocation.
        output: String,
    },
}

pub(crate) fn describe_status(status: Option<i32>, output: &str) -> String {
    let trimmed = output.trim();
    let status = match status {
        Some(code) => format!("exit status {code}"),
        None => String::from("terminated by signal"),
    };
    if trimmed.is_empty() {
        status
    } else {
        format!("{status}: {trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_prepare_error_includes_output() {
        let error = TransferError::PrepareRemote {
            host: "alice@example.com".into(),
            status: Some(255),
            output: "ssh: connect to host example.com port 22: Connection refused\n".into(),
        };
        assert_eq!(
            error.to_string(),
            "failed to create destination directories on alice@example.com: exit status 255: ssh: connect to host example.com port 22: Connection refused"
        );
    }

    #[test]
    fn status_without_output_or_code() {
        assert_eq!(describe_status(None, "  \n"), "terminated by signal");
        assert_eq!(describe_status(Some(1), ""), "exit status 1");
    }
}
