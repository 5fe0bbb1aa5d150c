use crate::Position;
use std::io;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CsvError {
    #[error("IO error: {0}")]
    Io(String),

    /// An unquoted cell contains the quote character. Never raised in lax mode.
    #[error("cells containing the quote ({1}) must be quoted: error at position {0}")]
    UnquotedQuote(Position, char),

    /// Auto-detection was asked to vote on an empty or whitespace-only line.
    /// This is a usage error, not malformed data, so it bypasses error recovery.
    #[error("separator cannot be determined from an empty line")]
    SeparatorUndetermined,
}

impl From<io::Error> for CsvError {
    fn from(error: io::Error) -> Self {
        CsvError::Io(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CsvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoting_error_message_carries_line_and_column() {
        let error = CsvError::UnquotedQuote(Position { line: 0, column: 2 }, '"');
        assert!(error.to_string().contains("0:2"));
    }
}
