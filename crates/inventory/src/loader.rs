//! Load-file reader.
//!
//! The format is alternating lines: a bin name, then its count. A trailing
//! name with no count line is ignored.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use partbin_core::InventoryError;

use crate::store::InventoryStore;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read inventory: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: '{text}' is not a whole number")]
    InvalidCount { line: usize, text: String },

    #[error("line {line}: count {value} is negative")]
    NegativeCount { line: usize, value: i64 },

    #[error("line {line}: {source}")]
    Store {
        line: usize,
        #[source]
        source: InventoryError,
    },
}

/// Read `(name, count)` pairs from `reader` into a fresh store, in file order.
pub fn load_from_reader(reader: impl BufRead) -> Result<InventoryStore, LoadError> {
    let mut store = InventoryStore::new();
    let mut pending_name: Option<(usize, String)> = None;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let mut line = line?;
        if line.ends_with('\r') {
            line.pop();
        }

        match pending_name.take() {
            None => pending_name = Some((line_no, line)),
            Some((name_line, name)) => {
                let count = parse_count(line_no, &line)?;
                let result = match u32::try_from(count) {
                    Ok(count) => store.create_bin(name, count),
                    Err(_) => Err(InventoryError::capacity_exceeded(name, count)),
                };
                result.map_err(|source| LoadError::Store {
                    line: name_line,
                    source,
                })?;
            }
        }
    }

    if let Some((line, name)) = pending_name {
        tracing::warn!(line, bin = %name, "ignoring bin name without a count line");
    }

    tracing::info!(bins = store.len(), "inventory loaded");
    Ok(store)
}

/// Open `path` and load it with [`load_from_reader`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<InventoryStore, LoadError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading inventory file");
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_reader(BufReader::new(file))
}

/// Counts made only of digits but too long for `i64` saturate to `u64::MAX`,
/// so they are rejected as over capacity rather than as malformed.
fn parse_count(line: usize, text: &str) -> Result<u64, LoadError> {
    let trimmed = text.trim();
    match trimmed.parse::<i64>() {
        Ok(value) => u64::try_from(value).map_err(|_| LoadError::NegativeCount { line, value }),
        Err(_) if is_unsigned_digits(trimmed) => Ok(u64::MAX),
        Err(_) => Err(LoadError::InvalidCount {
            line,
            text: trimmed.to_string(),
        }),
    }
}

fn is_unsigned_digits(text: &str) -> bool {
    let digits = text.strip_prefix('+').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
