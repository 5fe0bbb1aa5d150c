//! Turn raw text lines into rows of cells.
//!
//! The tokenizer consumes one physical line per call and produces zero or more
//! rows. A quoted cell may span several physical lines; until its closing
//! quote arrives the tokenizer holds the partial text and produces nothing.
//!
//! Limitations:
//! - One instance per input stream, lines fed strictly in order. The `&mut`
//!   API enforces no concurrent calls at compile time.
//! - Line terminators are assumed to be stripped by the line source; embedded
//!   line breaks are reintroduced as `\n` when reassembling a quoted cell.

use crate::errors::{CsvError, Result};
use crate::recovery::ErrorRecovery;
use crate::row::Row;
use crate::separator::SeparatorDeterminer;
use crate::Position;
use itertools::Itertools;
use std::io::BufRead;

pub const DEFAULT_SEPARATORS: &str = ",;\t";
pub const DEFAULT_QUOTE: char = '"';

/// Split one logical line into cells with the given separator.
///
/// Returns `Ok(None)` when the line ends inside a quoted cell, meaning the
/// record continues on the next physical line. This is a pure function so the
/// separator auto-detection can run trial splits without touching tokenizer
/// state.
pub(crate) fn split_line(
    line: &str,
    separator: char,
    quote: char,
    lax: bool,
    line_no: usize,
) -> Result<Option<Vec<Option<String>>>> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut quoted = false;
    let mut pending_quote = false;
    for (column, c) in line.chars().enumerate() {
        if c == separator && (!quoted || pending_quote) {
            cells.push(Some(std::mem::take(&mut cell)));
            quoted = false;
            pending_quote = false;
        } else if c == quote {
            if pending_quote {
                // Doubled quote inside a quoted cell is a literal quote.
                cell.push(c);
                pending_quote = false;
            } else if quoted {
                // Tentative close; the next character decides.
                pending_quote = true;
            } else if cell.is_empty() {
                quoted = true;
            } else if lax {
                cell.push(c);
            } else {
                return Err(CsvError::UnquotedQuote(
                    Position { line: line_no, column },
                    quote,
                ));
            }
        } else {
            cell.push(c);
            pending_quote = false;
        }
    }
    if quoted && !pending_quote {
        return Ok(None);
    }
    cells.push(Some(cell));
    Ok(Some(cells))
}

/// The stateful line-by-line tokenizer.
///
/// Holds the text of an unterminated quoted cell between calls, the separator
/// once auto-detection has fired, and a line counter for diagnostics. Not
/// meant to be shared: drive one instance from one loop.
pub struct RowTokenizer {
    determiner: SeparatorDeterminer,
    quote: char,
    comment_start: Option<String>,
    lax: bool,
    recovery: ErrorRecovery,
    pending: Option<String>,
    line_no: usize,
}

impl RowTokenizer {
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Consume one physical line and produce the rows completed by it.
    ///
    /// An empty or whitespace-only line yields one zero-cell data row, an
    /// explicit blank-line marker. An empty result means the line opened a
    /// quoted cell that has not closed yet; feed the next line to continue.
    pub fn apply(&mut self, line: &str) -> Result<Vec<Row>> {
        let line = match self.pending.take() {
            Some(mut prefix) => {
                prefix.push_str(line);
                prefix
            }
            None => line.to_string(),
        };
        let rows = self.tokenize(&line);
        self.line_no += 1;
        rows
    }

    fn tokenize(&mut self, line: &str) -> Result<Vec<Row>> {
        if line.trim().is_empty() {
            return Ok(vec![Row::Data(Vec::new())]);
        }
        if let Some(prefix) = &self.comment_start {
            if let Some(text) = line.strip_prefix(prefix.as_str()) {
                return Ok(vec![Row::Comment(text.to_string())]);
            }
        }
        // A configuration error, never offered to recovery.
        let separator = self.determiner.determine(line, self.quote, self.lax)?;
        match split_line(line, separator, self.quote, self.lax, self.line_no) {
            Ok(Some(cells)) => Ok(vec![Row::Data(cells)]),
            Ok(None) => {
                let mut pending = line.to_string();
                pending.push('\n');
                self.pending = Some(pending);
                Ok(Vec::new())
            }
            Err(error) => self.recovery.handle(error, line),
        }
    }
}

/// Configures and builds a [`RowTokenizer`].
///
/// Defaults: separator auto-detected among `,`, `;` and tab, quote `"`,
/// comments disabled, lax mode off, errors propagated.
pub struct TokenizerBuilder {
    separators: String,
    quote: char,
    comment_start: Option<String>,
    lax: bool,
    recovery: ErrorRecovery,
}

impl TokenizerBuilder {
    pub fn new() -> Self {
        TokenizerBuilder {
            separators: DEFAULT_SEPARATORS.to_string(),
            quote: DEFAULT_QUOTE,
            comment_start: None,
            lax: false,
            recovery: ErrorRecovery::Propagate,
        }
    }

    pub fn separated_by(mut self, separator: char) -> Self {
        self.separators = separator.to_string();
        self
    }

    /// Auto-detect the separator among the given candidates by voting on the
    /// first data line. A tie resolves to the earliest-listed candidate.
    pub fn separated_by_any_of(mut self, separators: &str) -> Self {
        self.separators = separators.to_string();
        self
    }

    pub fn quoted_with(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// Treat lines starting with the prefix as comments. Without this, such
    /// lines are ordinary data.
    pub fn comments_start_with(mut self, comment_start: &str) -> Self {
        self.comment_start = Some(comment_start.to_string());
        self
    }

    /// Tolerate a quote character inside an unquoted cell as literal text.
    pub fn lax_mode(mut self) -> Self {
        self.lax = true;
        self
    }

    pub fn handling_errors(mut self, recovery: ErrorRecovery) -> Self {
        self.recovery = recovery;
        self
    }

    pub fn build(self) -> RowTokenizer {
        let mut candidates = self.separators.chars();
        let determiner = match (candidates.next(), candidates.next()) {
            (Some(separator), None) => SeparatorDeterminer::fixed(separator),
            _ => SeparatorDeterminer::auto(&self.separators),
        };
        RowTokenizer {
            determiner,
            quote: self.quote,
            comment_start: self.comment_start,
            lax: self.lax,
            recovery: self.recovery,
            pending: None,
            line_no: 0,
        }
    }
}

impl Default for TokenizerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Read rows one line at a time.
///
/// Lines ending inside a quoted cell are merged with the following lines
/// until the cell closes. A cell still open when the input ends is dropped.
pub fn stream_rows<R: BufRead>(
    reader: R,
    mut tokenizer: RowTokenizer,
) -> impl Iterator<Item = Result<Row>> {
    reader
        .lines()
        .map(move |line_result| {
            let line = line_result?;
            tokenizer.apply(&line)
        })
        .flatten_ok()
}
