//! Post-read row transforms.

use crate::row::Row;
use enumset::{EnumSet, EnumSetType};

/// Adjustments applied to rows after tokenizing.
#[derive(EnumSetType, Debug)]
pub enum ReadOption {
    /// Trim whitespace around every cell value.
    Trim,
    /// Drop comment rows entirely.
    CommentsSkipped,
    /// Replace empty cell values with absent ones.
    EmptyAsNull,
}

/// Apply a set of options to one row; `None` means the row is dropped.
pub fn apply_options(row: Row, options: EnumSet<ReadOption>) -> Option<Row> {
    if row.is_comment() {
        return if options.contains(ReadOption::CommentsSkipped) {
            None
        } else {
            Some(row)
        };
    }
    let mut row = row;
    if options.contains(ReadOption::Trim) {
        row = trim(row);
    }
    if options.contains(ReadOption::EmptyAsNull) {
        row = replace_empty_with_null(row);
    }
    Some(row)
}

/// A filter to exclude comment rows.
pub fn without_comments(row: &Row) -> bool {
    !row.is_comment()
}

/// Trim whitespace around every cell value; comments pass unchanged.
pub fn trim(row: Row) -> Row {
    map_cells(row, |cell| cell.map(|value| value.trim().to_string()))
}

/// Replace empty cell values with absent ones; comments pass unchanged.
pub fn replace_empty_with_null(row: Row) -> Row {
    map_cells(row, |cell| cell.filter(|value| !value.is_empty()))
}

/// Replace absent cell values with empty strings; comments pass unchanged.
pub fn replace_null_with_empty(row: Row) -> Row {
    map_cells(row, |cell| cell.or_else(|| Some(String::new())))
}

fn map_cells(row: Row, f: impl Fn(Option<String>) -> Option<String>) -> Row {
    match row {
        Row::Data(cells) => Row::Data(cells.into_iter().map(f).collect()),
        comment => comment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_strips_cell_whitespace() {
        assert_eq!(trim(Row::data([" a ", "b"])), Row::data(["a", "b"]));
        assert_eq!(trim(Row::comment(" a ")), Row::comment(" a "));
    }

    #[test]
    fn empty_and_null_conversions_invert_each_other() {
        let sparse = Row::Data(vec![Some("a".to_string()), None]);
        let dense = Row::data(["a", ""]);
        assert_eq!(replace_empty_with_null(dense.clone()), sparse);
        assert_eq!(replace_null_with_empty(sparse), dense);
    }

    #[test]
    fn options_combine() {
        let options = ReadOption::Trim | ReadOption::EmptyAsNull;
        assert_eq!(
            apply_options(Row::data([" a ", "  "]), options),
            Some(Row::Data(vec![Some("a".to_string()), None]))
        );
    }

    #[test]
    fn comments_can_be_skipped() {
        assert_eq!(apply_options(Row::comment("note"), ReadOption::CommentsSkipped.into()), None);
        assert_eq!(
            apply_options(Row::comment("note"), EnumSet::empty()),
            Some(Row::comment("note"))
        );
        assert!(without_comments(&Row::data(["a"])));
        assert!(!without_comments(&Row::comment("a")));
    }
}
