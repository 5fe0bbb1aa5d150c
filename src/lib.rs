pub mod errors;
pub mod printer;
pub mod recovery;
pub mod row;
pub mod rows;
pub mod separator;
pub mod tokenizer;

pub use errors::{CsvError, Result};
pub use printer::{write_rows, RowPrinter};
pub use recovery::ErrorRecovery;
pub use row::Row;
pub use rows::ReadOption;
pub use separator::SeparatorDeterminer;
pub use tokenizer::{stream_rows, RowTokenizer, TokenizerBuilder};

/// A location in the input, counted in physical lines and characters, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
