//! Render rows back to text lines, the exact inverse of the tokenizer.

use crate::errors::Result;
use crate::row::Row;
use itertools::Itertools;
use std::io::Write;

/// Serializes a row to one line with correct quoting.
///
/// Stateless: reads only its configuration per call, so one printer may be
/// shared across threads.
pub struct RowPrinter {
    separator: char,
    quote: char,
    comment_start: Option<String>,
}

impl RowPrinter {
    pub fn new(separator: char, quote: char, comment_start: Option<&str>) -> Self {
        RowPrinter {
            separator,
            quote,
            comment_start: comment_start.map(str::to_string),
        }
    }

    /// Render one row, without a line terminator.
    ///
    /// Comments get the prefix and no escaping. With comments disabled, a
    /// comment row degrades to a single escaped cell. Absent cells render
    /// empty; a value containing the quote, the separator or a line break is
    /// quoted with embedded quotes doubled.
    pub fn print(&self, row: &Row) -> String {
        match row {
            Row::Comment(text) => match &self.comment_start {
                Some(prefix) => format!("{prefix}{text}"),
                None => self.print_cell(Some(text.as_str())),
            },
            Row::Data(cells) => cells
                .iter()
                .map(|cell| self.print_cell(cell.as_deref()))
                .join(&self.separator.to_string()),
        }
    }

    fn print_cell(&self, cell: Option<&str>) -> String {
        let Some(value) = cell else {
            return String::new();
        };
        let has_quote = value.contains(self.quote);
        if !has_quote
            && !value.contains(self.separator)
            && !value.contains('\n')
            && !value.contains('\r')
        {
            return value.to_string();
        }
        let mut quoted = String::with_capacity(value.len() + 2);
        quoted.push(self.quote);
        for c in value.chars() {
            quoted.push(c);
            if c == self.quote {
                quoted.push(c);
            }
        }
        quoted.push(self.quote);
        quoted
    }
}

/// Write rows to a sink, one line each.
///
/// Every line is appended with its terminator in a single write, so writers
/// sharing a sink never interleave mid-line.
pub fn write_rows<'a, W, I>(sink: &mut W, printer: &RowPrinter, rows: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Row>,
{
    for row in rows {
        let mut line = printer.print(row);
        line.push('\n');
        sink.write_all(line.as_bytes())?;
    }
    Ok(())
}
