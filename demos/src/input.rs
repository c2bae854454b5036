//! Input-file helpers shared by every driver.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use stride_core::GridError;

/// Errors from reading or parsing a driver input file.
#[derive(Debug)]
pub enum InputError {
    /// The file could not be read.
    Io(io::Error),
    /// A line failed to parse as the requested record type.
    Parse { line: usize, msg: String },
    /// The file did not form a well-shaped grid.
    Grid(GridError),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read input: {e}"),
            Self::Parse { line, msg } => write!(f, "input line {line}: {msg}"),
            Self::Grid(e) => write!(f, "malformed grid input: {e}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse { .. } => None,
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<io::Error> for InputError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GridError> for InputError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Read a whole input file.
pub fn read_to_string(path: impl AsRef<Path>) -> Result<String, InputError> {
    Ok(fs::read_to_string(path)?)
}

/// Read an input file as a vector of lines.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, InputError> {
    Ok(read_to_string(path)?.lines().map(str::to_owned).collect())
}

/// Read an input file as one parsed record per non-blank line.
pub fn read_records<T>(path: impl AsRef<Path>) -> Result<Vec<T>, InputError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    parse_records(&read_to_string(path)?)
}

/// Parse one record per non-blank line; errors carry the 1-based line.
pub fn parse_records<T>(text: &str) -> Result<Vec<T>, InputError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let mut records = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = line.parse().map_err(|e: T::Err| InputError::Parse {
            line: i + 1,
            msg: e.to_string(),
        })?;
        records.push(record);
    }
    Ok(records)
}
