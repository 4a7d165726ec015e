//! A line-oriented language for driving a [`LinkedList`](crate::LinkedList).
//!
//! Each non-blank line holds one operation, e.g.
//!
//! ```text
//! append 1
//! insert 0   # front insertion
//! get 1
//! remove-first
//! to-list
//! ```

use std::{fmt, str::FromStr};

use thiserror::Error;

mod operation;
pub use operation::{Operation, ParseError};

mod runner;
pub use runner::{Entry, Outcome, RunError, Runner};

/// A parse error located in a script.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("line {line}: {source}")]
pub struct ScriptError {
    line: usize,
    #[source]
    source: ParseError,
}

impl ScriptError {
    /// The 1-based line the error occurred on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// What was wrong with the line.
    #[must_use]
    pub const fn kind(&self) -> &ParseError {
        &self.source
    }
}

/// A parsed script: operations paired with the line they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script<V> {
    steps: Vec<(usize, Operation<V>)>,
}

impl<V> Script<V> {
    /// Returns the number of operations in the script.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the script has no operations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterates over `(line, operation)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Operation<V>)> {
        self.steps.iter().map(|(line, operation)| (*line, operation))
    }
}

impl<V> FromIterator<Operation<V>> for Script<V> {
    /// Numbers the operations as if they were consecutive lines.
    fn from_iter<I: IntoIterator<Item = Operation<V>>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().zip(1..).map(|(op, line)| (line, op)).collect(),
        }
    }
}

impl<V> FromStr for Script<V>
where
    V: FromStr,
    V::Err: fmt::Display,
{
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut steps = Vec::new();
        for (text, line) in s.lines().zip(1..) {
            match Operation::parse_line(text) {
                Ok(Some(operation)) => steps.push((line, operation)),
                Ok(None) => {}
                Err(source) => return Err(ScriptError { line, source }),
            }
        }
        Ok(Self { steps })
    }
}

impl<V> IntoIterator for Script<V> {
    type Item = (usize, Operation<V>);
    type IntoIter = std::vec::IntoIter<(usize, Operation<V>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_blank_lines_and_comments() {
        let script: Script<i64> = "# setup\nappend 1\n\n   \nappend 2 # second\nto-list\n"
            .parse()
            .unwrap();

        let steps: Vec<_> = script.iter().collect();
        assert_eq!(
            steps,
            vec![
                (2, &Operation::Append(1)),
                (5, &Operation::Append(2)),
                (6, &Operation::ToList),
            ]
        );
    }

    #[test]
    fn parse_error_reports_line() {
        let error = "append 1\nhead\nfrobnicate\n"
            .parse::<Script<i64>>()
            .unwrap_err();

        assert_eq!(error.line(), 3);
        assert_eq!(
            error.kind(),
            &ParseError::UnknownOperation("frobnicate".to_string())
        );
        assert_eq!(error.to_string(), "line 3: unknown operation 'frobnicate'");
    }

    #[test]
    fn empty_script() {
        let script: Script<String> = "".parse().unwrap();
        assert!(script.is_empty());
        assert_eq!(script.len(), 0);
    }

    #[test]
    fn collect_numbers_lines_consecutively() {
        let script: Script<i64> = [Operation::Append(1), Operation::Head].into_iter().collect();
        let lines: Vec<usize> = script.into_iter().map(|(line, _)| line).collect();
        assert_eq!(lines, vec![1, 2]);
    }
}
