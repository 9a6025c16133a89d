//! Subscriber installation for structured tracing.

use std::io;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding an [`EnvFilter`] directive that overrides the
/// verbosity flags (for example `ESCP_LOG=escp::filter=trace`).
pub const LOG_ENV: &str = "ESCP_LOG";

/// Verbosity requested on the command line.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub enum Verbosity {
    /// Only errors.
    Quiet,
    /// Warnings and errors.
    #[default]
    Normal,
    /// Per-item copy progress (`-v`).
    Verbose,
    /// Filter and traversal decisions (`-vv`).
    Debug,
    /// Everything (`-vvv` and beyond).
    Trace,
}

impl Verbosity {
    /// Maps the `-v` count and `-q` flag to a verbosity. `quiet` wins.
    ///
    /// ```
    /// use logging::Verbosity;
    ///
    /// assert_eq!(Verbosity::from_flags(0, false), Verbosity::Normal);
    /// assert_eq!(Verbosity::from_flags(2, false), Verbosity::Debug);
    /// assert_eq!(Verbosity::from_flags(2, true), Verbosity::Quiet);
    /// ```
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Returns the maximum level recorded at this verbosity.
    #[must_use]
    pub const fn level_filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::ERROR,
            Self::Normal => LevelFilter::WARN,
            Self::Verbose => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }
}

fn build_filter(verbosity: Verbosity) -> EnvFilter {
    match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::builder()
            .with_default_directive(verbosity.level_filter().into())
            .parse_lossy(""),
    }
}

/// Installs the global tracing subscriber, writing to stderr.
///
/// Returns `false` when a subscriber was already installed (for example by a
/// test harness); the existing subscriber is left in place.
pub fn init_tracing(verbosity: Verbosity) -> bool {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .without_time();

    tracing_subscriber::registry()
        .with(build_filter(verbosity))
        .with(layer)
        .try_init()
        .is_ok()
}
