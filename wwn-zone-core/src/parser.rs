use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::table::{WwnEntry, WwnTable};

/// Errors that can occur while reading a WWN alias list.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input file does not exist.
    #[error("WWN list file not found: {path}")]
    NotFound { path: String },
    /// Input file exists but could not be read as text.
    #[error("failed to read WWN list file {path}: {source}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },
    /// A line did not carry both a WWN and an alias.
    #[error("malformed line {line} in {source_name}: expected `<WWN> <Alias>`, found {content:?}")]
    MalformedLine {
        source_name: String,
        line: usize,
        content: String,
    },
}

/// A parsed entry together with the 1-based line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedEntry {
    pub line: usize,
    pub entry: WwnEntry,
}

/// Parse list text into entries, preserving duplicates and source order.
///
/// Blank lines and lines starting with `#` are skipped. Tokens after the
/// alias are ignored.
pub fn parse_entries(input: &str, source_name: &str) -> Result<Vec<NumberedEntry>, ParseError> {
    let mut entries = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut tokens = trimmed.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some(wwn), Some(alias)) => entries.push(NumberedEntry {
                line: idx + 1,
                entry: WwnEntry::new(wwn, alias),
            }),
            _ => {
                return Err(ParseError::MalformedLine {
                    source_name: source_name.to_string(),
                    line: idx + 1,
                    content: trimmed.to_string(),
                })
            }
        }
    }

    Ok(entries)
}

/// Parse list text into a [`WwnTable`].
pub fn parse(input: &str, source_name: &str) -> Result<WwnTable, ParseError> {
    let entries = parse_entries(input, source_name)?;
    Ok(entries.into_iter().map(|numbered| numbered.entry).collect())
}

/// Read a list file into entries, preserving duplicates and source order.
pub fn read_entries(path: &Path) -> Result<Vec<NumberedEntry>, ParseError> {
    let raw = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ParseError::NotFound {
            path: path.display().to_string(),
        },
        _ => ParseError::Unreadable {
            path: path.display().to_string(),
            source,
        },
    })?;

    let entries = parse_entries(&raw, &path.display().to_string())?;
    debug!(path = %path.display(), entries = entries.len(), "read WWN list");
    Ok(entries)
}

/// Read a list file into a [`WwnTable`].
pub fn parse_file(path: &Path) -> Result<WwnTable, ParseError> {
    let entries = read_entries(path)?;
    Ok(entries.into_iter().map(|numbered| numbered.entry).collect())
}
