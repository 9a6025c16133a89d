use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use logging::trace_config;

use crate::{IgnorePattern, LoadError};

/// File name looked up in the working directory when no ignore file is given.
pub const DEFAULT_IGNORE_FILE: &str = ".scpignore";

fn line_to_pattern(line: &str) -> Option<IgnorePattern> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        None
    } else {
        Some(IgnorePattern::new(trimmed))
    }
}

/// Parses pattern text already held in memory.
///
/// ```
/// use filters::parse_patterns;
///
/// let patterns = parse_patterns("*.log\n# Ignore backup files\n*.bak");
/// let texts: Vec<_> = patterns.iter().map(|p| p.as_str()).collect();
/// assert_eq!(texts, ["*.log", "*.bak"]);
/// ```
#[must_use]
pub fn parse_patterns(text: &str) -> Vec<IgnorePattern> {
    text.lines().filter_map(line_to_pattern).collect()
}

/// Reads newline-delimited patterns from `reader`.
///
/// `\r\n` endings are accepted and invalid UTF-8 is decoded lossily.
pub fn read_patterns<R: BufRead>(reader: &mut R) -> io::Result<Vec<IgnorePattern>> {
    let mut buffer = Vec::new();
    let mut patterns = Vec::new();

    loop {
        buffer.clear();
        let bytes_read = reader.read_until(b'\n', &mut buffer)?;

        if bytes_read == 0 {
            break;
        }

        if buffer.last() == Some(&b'\n') {
            buffer.pop();
        }
        if buffer.last() == Some(&b'\r') {
            buffer.pop();
        }

        let line = String::from_utf8_lossy(&buffer);
        if let Some(pattern) = line_to_pattern(&line) {
            patterns.push(pattern);
        }
    }

    Ok(patterns)
}

fn open_and_read(path: &Path, file: File) -> Result<Vec<IgnorePattern>, LoadError> {
    let mut reader = BufReader::new(file);
    let patterns = read_patterns(&mut reader).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    trace_config!(
        "loaded {} ignore patterns from {}",
        patterns.len(),
        path.display()
    );
    Ok(patterns)
}

/// Loads patterns from `path`, treating a missing file as "no patterns".
///
/// Any failure other than [`io::ErrorKind::NotFound`] (permission denied, a
/// directory in place of the file, a read error) is returned as
/// [`LoadError::Read`].
pub fn load_patterns(path: &Path) -> Result<Vec<IgnorePattern>, LoadError> {
    match File::open(path) {
        Ok(file) => open_and_read(path, file),
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            trace_config!("no ignore file at {}; nothing excluded", path.display());
            Ok(Vec::new())
        }
        Err(source) => Err(LoadError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Loads patterns from a file the operator asked for explicitly.
///
/// Unlike [`load_patterns`], a missing file is an error.
pub fn load_patterns_required(path: &Path) -> Result<Vec<IgnorePattern>, LoadError> {
    match File::open(path) {
        Ok(file) => open_and_read(path, file),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Err(LoadError::Missing {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(LoadError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
