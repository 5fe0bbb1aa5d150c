use crate::errors::{CsvError, Result};
use crate::row::Row;
use tracing::warn;

/// What to do with a line the tokenizer could not parse.
///
/// The behavior space is small and fixed, so this is a closed enum rather
/// than an injected callback. All variants except [`LogAndDiscard`] are pure
/// functions of the error and the line.
///
/// [`LogAndDiscard`]: ErrorRecovery::LogAndDiscard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorRecovery {
    /// Return the error to the caller, stopping the stream.
    #[default]
    Propagate,
    /// Drop the offending line and produce nothing.
    Discard,
    /// Produce two comment rows, the error message and the raw line, so the
    /// stream keeps flowing and the failure stays inspectable downstream.
    Comment,
    /// Log a warning with the message and the line, then drop it.
    LogAndDiscard,
}

impl ErrorRecovery {
    pub fn handle(&self, error: CsvError, line: &str) -> Result<Vec<Row>> {
        match self {
            ErrorRecovery::Propagate => Err(error),
            ErrorRecovery::Discard => Ok(Vec::new()),
            ErrorRecovery::Comment => Ok(vec![
                Row::Comment(error.to_string()),
                Row::Comment(line.to_string()),
            ]),
            ErrorRecovery::LogAndDiscard => {
                warn!("{}, the following line is skipped: {}", error, line);
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn quoting_error() -> CsvError {
        CsvError::UnquotedQuote(Position { line: 3, column: 1 }, '"')
    }

    #[test]
    fn propagate_returns_the_error() {
        assert_eq!(
            ErrorRecovery::Propagate.handle(quoting_error(), "a\"b").unwrap_err(),
            quoting_error()
        );
    }

    #[test]
    fn discard_produces_nothing() {
        assert_eq!(ErrorRecovery::Discard.handle(quoting_error(), "a\"b").unwrap(), vec![]);
    }

    #[test]
    fn comment_produces_message_then_line() {
        let rows = ErrorRecovery::Comment.handle(quoting_error(), "a\"b").unwrap();
        assert_eq!(
            rows,
            vec![Row::comment(quoting_error().to_string()), Row::comment("a\"b")]
        );
    }

    #[test]
    fn log_and_discard_produces_nothing() {
        assert_eq!(
            ErrorRecovery::LogAndDiscard.handle(quoting_error(), "a\"b").unwrap(),
            vec![]
        );
    }
}
