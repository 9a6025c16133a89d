//! Destination operand parsing.
//!
//! An operand is remote when a `:` appears before any `/`, matching how `scp`
//! itself tells hosts from local paths: `host:path`, `user@host:path`,
//! `[::1]:path`, and `user@[2001:db8::1]:path` are remote, while `./a:b` and
//! `/tmp/x` are local.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

/// Where copied items are written.
///
/// # Examples
///
/// ```
/// use transport::Destination;
///
/// let dest: Destination = "alice@example.com:/srv/backup".parse().unwrap();
/// assert!(dest.is_remote());
/// assert_eq!(dest.to_string(), "alice@example.com:/srv/backup");
///
/// let local: Destination = "out/dir".parse().unwrap();
/// assert!(!local.is_remote());
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Destination {
    /// A path on another host reached over ssh.
    Remote {
        /// Login name, when given as `user@`.
        user: Option<String>,
        /// Hostname or IP literal (without brackets).
        host: String,
        /// Remote path; empty means the login directory.
        path: String,
    },
    /// A path on this machine.
    Local(PathBuf),
}

/// Errors that can occur when parsing a destination operand.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DestinationParseError {
    /// The operand string was empty.
    #[error("destination operand is empty")]
    Empty,
    /// The host part of a remote operand was empty or malformed.
    #[error("invalid remote destination '{operand}'")]
    InvalidFormat {
        /// Operand as given.
        operand: String,
    },
}

impl Destination {
    /// Parses a destination operand.
    ///
    /// # Errors
    ///
    /// Returns [`DestinationParseError`] when the operand is empty or looks
    /// remote but has no usable host.
    pub fn parse(operand: &OsStr) -> Result<Self, DestinationParseError> {
        if operand.is_empty() {
            return Err(DestinationParseError::Empty);
        }

        let text = operand.to_string_lossy();
        if !looks_remote(&text) {
            return Ok(Self::Local(PathBuf::from(operand)));
        }

        let invalid = || DestinationParseError::InvalidFormat {
            operand: text.clone().into_owned(),
        };

        let (user, rest) = extract_user(&text);
        let (host, path) = extract_host_and_path(rest).ok_or_else(invalid)?;

        if host.is_empty() || user == Some("") {
            return Err(invalid());
        }

        Ok(Self::Remote {
            user: user.map(String::from),
            host: host.to_owned(),
            path: path.to_owned(),
        })
    }

    /// Reports whether the destination is on another host.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    /// `[user@]host` as passed to `ssh`, or `None` for local destinations.
    #[must_use]
    pub fn ssh_target(&self) -> Option<String> {
        match self {
            Self::Remote { user, host, .. } => Some(match user {
                Some(user) => format!("{user}@{host}"),
                None => host.clone(),
            }),
            Self::Local(_) => None,
        }
    }

    /// Path of `relative` below the destination, as the remote shell sees it.
    ///
    /// Local destinations return `None`; use [`Self::join`] instead.
    #[must_use]
    pub fn remote_path(&self, relative: &Path) -> Option<String> {
        match self {
            Self::Remote { path, .. } => Some(join_remote(path, &slash_path(relative))),
            Self::Local(_) => None,
        }
    }

    /// Full operand for `relative` below the destination, suitable as the
    /// last argument of `scp`.
    #[must_use]
    pub fn join(&self, relative: &Path) -> OsString {
        match self {
            Self::Remote { path, .. } => {
                let joined = join_remote(path, &slash_path(relative));
                OsString::from(format!("{}:{joined}", self.host_operand()))
            }
            Self::Local(root) => root.join(relative).into_os_string(),
        }
    }

    fn host_operand(&self) -> String {
        match self {
            Self::Remote { user, host, .. } => {
                let host = if host.contains(':') {
                    format!("[{host}]")
                } else {
                    host.clone()
                };
                match user {
                    Some(user) => format!("{user}@{host}"),
                    None => host,
                }
            }
            Self::Local(_) => String::new(),
        }
    }
}

impl FromStr for Destination {
    type Err = DestinationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(OsStr::new(s))
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote { path, .. } => write!(f, "{}:{path}", self.host_operand()),
            Self::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

fn looks_remote(text: &str) -> bool {
    let head = if text.starts_with('[') {
        match text.find(']') {
            Some(close) => &text[close + 1..],
            None => return false,
        }
    } else if let Some(bracket) = text.find("@[") {
        match text[bracket..].find(']') {
            Some(close) => &text[bracket + close + 1..],
            None => return false,
        }
    } else {
        text
    };

    match head.find(':') {
        Some(colon) => !head[..colon].contains('/'),
        None => false,
    }
}

fn extract_user(text: &str) -> (Option<&str>, &str) {
    // A bracketed host may contain `@`-free colons; only look before it.
    let limit = match text.find('[') {
        Some(bracket) => bracket,
        None => text.find(':').unwrap_or(text.len()),
    };

    match text[..limit].rfind('@') {
        Some(at) => (Some(&text[..at]), &text[at + 1..]),
        None => (None, text),
    }
}

fn extract_host_and_path(text: &str) -> Option<(&str, &str)> {
    if let Some(bracketed) = text.strip_prefix('[') {
        let close = bracketed.find(']')?;
        let path = bracketed[close + 1..].strip_prefix(':')?;
        return Some((&bracketed[..close], path));
    }

    text.split_once(':')
}

fn slash_path(relative: &Path) -> String {
    let mut out = String::new();
    for component in relative.components() {
        if let Component::Normal(part) = component {
            if !out.is_empty() {
                out.push('/');
            }
            out.push_str(&part.to_string_lossy());
        }
    }
    out
}

fn join_remote(base: &str, relative: &str) -> String {
    if base.is_empty() {
        relative.to_owned()
    } else if relative.is_empty() {
        base.to_owned()
    } else if base.ends_with('/') {
        format!("{base}{relative}")
    } else {
        format!("{base}/{relative}")
    }
}
