use crate::BingoError;
use std::collections::HashSet;
use std::io::BufRead;

/// The pool of candidate entries eligible to appear on a card.
///
/// Entries are unique non-empty strings in input order. The pool is immutable
/// once constructed; sampling never consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPool {
    entries: Vec<String>,
}

impl EntryPool {
    /// Builds a pool from an iterator of lines.
    ///
    /// Empty lines are skipped. Duplicate lines are dropped, keeping the
    /// first occurrence, so the same entry can never appear twice on a card.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let entries = lines
            .into_iter()
            .map(Into::into)
            .filter(|line| !line.is_empty())
            .filter(|line| seen.insert(line.clone()))
            .collect();
        Self { entries }
    }

    /// Reads a pool from line-oriented text, one entry per line.
    ///
    /// Trailing carriage returns are stripped so files with CRLF line
    /// endings load the same entries as files with LF endings.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, BingoError> {
        let lines = reader
            .lines()
            .map(|line| line.map(|l| l.trim_end_matches('\r').to_string()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_lines(lines))
    }

    /// Returns the number of entries in the pool.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the pool has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries in input order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_lines_skips_empty_lines() {
        let pool = EntryPool::from_lines(["A", "", "B", "", ""]);
        assert_eq!(pool.entries(), ["A", "B"]);
    }

    #[test]
    fn from_lines_drops_duplicates_keeping_first() {
        let pool = EntryPool::from_lines(["A", "B", "A", "C", "B"]);
        assert_eq!(pool.entries(), ["A", "B", "C"]);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn from_reader_handles_crlf() {
        let text = "one\r\ntwo\r\nthree\n";
        let pool = EntryPool::from_reader(text.as_bytes()).unwrap();
        assert_eq!(pool.entries(), ["one", "two", "three"]);
    }

    #[test]
    fn from_reader_empty_input_gives_empty_pool() {
        let pool = EntryPool::from_reader("".as_bytes()).unwrap();
        assert!(pool.is_empty());
    }

    #[test]
    fn whitespace_only_lines_are_kept() {
        // Only truly empty lines are skipped; content is not validated.
        let pool = EntryPool::from_lines(["A", "  ", "B"]);
        assert_eq!(pool.len(), 3);
    }
}
