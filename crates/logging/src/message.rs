use std::fmt;
use std::io::{self, Write};

/// Program name used as the prefix of every rendered diagnostic.
pub const PROGRAM_NAME: &str = "escp";

/// Severity attached to a [`Message`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Severity {
    /// Progress or summary information.
    Info,
    /// A recoverable problem; the operation continues.
    Warning,
    /// A failure; usually accompanied by an exit code.
    Error,
}

impl Severity {
    /// Returns the lowercase label rendered after the program name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operator-facing diagnostic.
///
/// Messages render as `escp <severity>: <text>`, with a `(code N)` trailer
/// when an exit code is attached.
///
/// # Examples
///
/// ```
/// use logging::Message;
///
/// let message = Message::error(23, "2 of 5 items failed to copy");
/// assert_eq!(message.to_string(), "escp error: 2 of 5 items failed to copy (code 23)");
///
/// let message = Message::info("no files to copy");
/// assert_eq!(message.to_string(), "escp info: no files to copy");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Message {
    severity: Severity,
    code: Option<i32>,
    text: String,
}

impl Message {
    /// Creates an informational message.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            code: None,
            text: text.into(),
        }
    }

    /// Creates a warning.
    #[must_use]
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: None,
            text: text.into(),
        }
    }

    /// Creates an error carrying the exit code the process will report.
    #[must_use]
    pub fn error(code: i32, text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: Some(code),
            text: text.into(),
        }
    }

    /// Replaces the exit code trailer.
    #[must_use]
    pub const fn with_code(mut self, code: i32) -> Self {
        self.code = Some(code);
        self
    }

    /// Returns the message severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the exit code, if one is attached.
    #[must_use]
    pub const fn code(&self) -> Option<i32> {
        self.code
    }

    /// Returns the message body without prefix or trailer.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Renders the message into `writer` followed by a newline.
    pub fn render_line_to_writer<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{self}")
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PROGRAM_NAME} {}: {}", self.severity, self.text)?;
        if let Some(code) = self.code {
            write!(f, " (code {code})")?;
        }
        Ok(())
    }
}

/// Builds an error [`Message`] with `format!` syntax.
///
/// ```
/// let message = logging::escp_error!(2, "failed to read '{}'", ".scpignore");
/// assert_eq!(message.code(), Some(2));
/// assert!(message.text().contains(".scpignore"));
/// ```
#[macro_export]
macro_rules! escp_error {
    ($code:expr, $($arg:tt)+) => {
        $crate::Message::error($code, ::std::format!($($arg)+))
    };
}

/// Builds a warning [`Message`] with `format!` syntax.
#[macro_export]
macro_rules! escp_warning {
    ($($arg:tt)+) => {
        $crate::Message::warning(::std::format!($($arg)+))
    };
}

/// Builds an informational [`Message`] with `format!` syntax.
#[macro_export]
macro_rules! escp_info {
    ($($arg:tt)+) => {
        $crate::Message::info(::std::format!($($arg)+))
    };
}
