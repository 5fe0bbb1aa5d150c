/// One record of delimiter-separated text.
///
/// A data row is an ordered list of cells where `None` is an absent value,
/// distinct from `Some("")`. A comment row carries the text after the comment
/// prefix, never split into cells. Rows compare structurally and are not
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Data(Vec<Option<String>>),
    Comment(String),
}

impl Row {
    /// Build a data row from plain string cells.
    pub fn data<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Row::Data(cells.into_iter().map(|cell| Some(cell.into())).collect())
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Row::Comment(text.into())
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, Row::Comment(_))
    }

    /// The number of values in this row; a comment counts as one.
    pub fn len(&self) -> usize {
        match self {
            Row::Data(cells) => cells.len(),
            Row::Comment(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_rows_compare_structurally() {
        assert_eq!(Row::data(["a", "b"]), Row::Data(vec![Some("a".to_string()), Some("b".to_string())]));
        assert_ne!(Row::data(["a"]), Row::Data(vec![None]));
        assert_ne!(Row::data(["a"]), Row::Comment("a".to_string()));
    }

    #[test]
    fn comment_counts_as_one_value() {
        assert_eq!(Row::comment("note").len(), 1);
        assert_eq!(Row::Data(vec![]).len(), 0);
        assert!(Row::Data(vec![]).is_empty());
        assert!(!Row::comment("note").is_empty());
    }
}
