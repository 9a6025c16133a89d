/// Quotes `text` for a POSIX shell.
///
/// Text made only of safe characters is returned unchanged; anything else is
/// wrapped in single quotes with embedded quotes spliced as `'\''`.
///
/// ```
/// use transport::shell_quote;
///
/// assert_eq!(shell_quote("/srv/data"), "/srv/data");
/// assert_eq!(shell_quote("my dir"), "'my dir'");
/// assert_eq!(shell_quote("it's"), "'it'\\''s'");
/// ```
#[must_use]
pub fn shell_quote(text: &str) -> String {
    let safe = !text.is_empty() && text.bytes().all(is_safe_byte);
    if safe {
        return text.to_owned();
    }

    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('\'');
    for ch in text.chars() {
        if ch == '\'' {
            quoted.push_str("'\\''");
        } else {
            quoted.push(ch);
        }
    }
    quoted.push('\'');
    quoted
}

/// Quotes a remote path for `mkdir`, leaving a leading `~` or `~/` bare so
/// the remote shell expands it to the login directory the way `scp` does.
///
/// ```
/// use transport::quote_remote_path;
///
/// assert_eq!(quote_remote_path("~/my backup"), "~/'my backup'");
/// assert_eq!(quote_remote_path("~"), "~");
/// assert_eq!(quote_remote_path("/srv/~x"), "'/srv/~x'");
/// ```
#[must_use]
pub fn quote_remote_path(path: &str) -> String {
    if path == "~" || path == "~/" {
        return path.to_owned();
    }
    match path.strip_prefix("~/") {
        Some(rest) => format!("~/{}", shell_quote(rest)),
        None => shell_quote(path),
    }
}

fn is_safe_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(
            byte,
            b'/' | b'.' | b'_' | b'-' | b'+' | b',' | b'@' | b'%' | b'='
        )
}
