use crate::errors::{CsvError, Result};
use crate::tokenizer::split_line;

/// Decides which character separates the cells of a line.
///
/// Either a fixed configured character, or auto-detection: each candidate is
/// tried on the first non-empty line via a trial split, and the candidate
/// producing the most cells wins. A candidate whose trial raises a quoting
/// error or leaves a quoted cell open counts zero cells. A tie resolves to
/// the earliest-listed candidate. The winner is cached for the lifetime of
/// the instance.
#[derive(Debug, Clone)]
pub enum SeparatorDeterminer {
    Fixed(char),
    Auto {
        candidates: Vec<char>,
        resolved: Option<char>,
    },
}

impl SeparatorDeterminer {
    pub fn fixed(separator: char) -> Self {
        SeparatorDeterminer::Fixed(separator)
    }

    pub fn auto(candidates: &str) -> Self {
        SeparatorDeterminer::Auto {
            candidates: candidates.chars().collect(),
            resolved: None,
        }
    }

    /// Resolve the separator, voting on the given line if not yet decided.
    ///
    /// Errors with [`CsvError::SeparatorUndetermined`] when asked to vote on
    /// an empty or whitespace-only line, or with no candidates configured.
    pub fn determine(&mut self, line: &str, quote: char, lax: bool) -> Result<char> {
        match self {
            SeparatorDeterminer::Fixed(separator) => Ok(*separator),
            SeparatorDeterminer::Auto { candidates, resolved } => {
                if let Some(separator) = resolved {
                    return Ok(*separator);
                }
                if line.trim().is_empty() {
                    return Err(CsvError::SeparatorUndetermined);
                }
                let mut votes = candidates
                    .iter()
                    .map(|&candidate| (candidate, count_cells(line, candidate, quote, lax)));
                let Some(mut best) = votes.next() else {
                    return Err(CsvError::SeparatorUndetermined);
                };
                for (candidate, count) in votes {
                    if count > best.1 {
                        best = (candidate, count);
                    }
                }
                *resolved = Some(best.0);
                Ok(best.0)
            }
        }
    }
}

fn count_cells(line: &str, separator: char, quote: char, lax: bool) -> usize {
    match split_line(line, separator, quote, lax, 0) {
        Ok(Some(cells)) => cells.len(),
        _ => 0,
    }
}
