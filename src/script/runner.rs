use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tracing::instrument;

use super::{Operation, Script};
use crate::{Config, LinkedList, OutOfBounds};

/// The result of applying one [`Operation`] to a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum Outcome<V> {
    /// The operation changed the list and produced no value.
    Done,
    /// A value read from (or removed from) the list.
    Value(V),
    /// The list was empty, so there was no value to return.
    Absent,
    /// The length of the list.
    Length(usize),
    /// A snapshot of the whole list.
    List(Vec<V>),
    /// A lookup failed and the run continued.
    OutOfBounds {
        /// The requested index.
        index: isize,
        /// The length of the list at the time.
        length: usize,
    },
}

impl<V> From<Option<V>> for Outcome<V> {
    fn from(value: Option<V>) -> Self {
        value.map_or(Self::Absent, Self::Value)
    }
}

impl<V: fmt::Display> Outcome<V> {
    /// Renders the outcome as a line of text.
    ///
    /// Returns `None` for [`Outcome::Done`], which has nothing to show.
    #[must_use]
    pub fn render(&self, empty_marker: &str) -> Option<String> {
        match self {
            Self::Done => None,
            Self::Value(value) => Some(value.to_string()),
            Self::Absent => Some(empty_marker.to_string()),
            Self::Length(length) => Some(length.to_string()),
            Self::List(values) => {
                let values: Vec<String> = values.iter().map(ToString::to_string).collect();
                Some(format!("[{}]", values.join(", ")))
            }
            Self::OutOfBounds { index, length } => {
                Some(OutOfBounds::new(*index, *length).to_string())
            }
        }
    }
}

/// One executed operation and what it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry<V> {
    /// The 1-based script line the operation came from.
    pub line: usize,
    /// The operation, as script text.
    pub operation: String,
    /// What the operation produced.
    pub outcome: Outcome<V>,
}

/// A lookup failed while running a script with
/// [`stop_on_error`](Config::stop_on_error) set.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("line {line}: {source}")]
pub struct RunError {
    line: usize,
    #[source]
    source: OutOfBounds,
}

impl RunError {
    /// The 1-based script line of the failing operation.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// The underlying bounds error.
    #[must_use]
    pub const fn out_of_bounds(&self) -> OutOfBounds {
        self.source
    }
}

/// Applies operations to a [`LinkedList`] and records a transcript.
#[derive(Debug)]
pub struct Runner<V> {
    list: LinkedList<V>,
    config: Config,
    transcript: Vec<Entry<V>>,
}

impl<V> Runner<V> {
    /// Creates a runner over an empty list.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self::with_list(LinkedList::new(), config)
    }

    /// Creates a runner over an existing list.
    #[must_use]
    pub const fn with_list(list: LinkedList<V>, config: Config) -> Self {
        Self {
            list,
            config,
            transcript: Vec::new(),
        }
    }

    /// The list in its current state.
    #[must_use]
    pub const fn list(&self) -> &LinkedList<V> {
        &self.list
    }

    /// The configuration the runner was created with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Every operation executed so far, in order.
    #[must_use]
    pub fn transcript(&self) -> &[Entry<V>] {
        &self.transcript
    }

    /// Consumes the runner, returning the list.
    #[must_use]
    pub fn into_list(self) -> LinkedList<V> {
        self.list
    }
}

impl<V: Clone> Runner<V> {
    /// Applies a single operation to the list.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if a `get` index is outside the list.
    pub fn apply(&mut self, operation: Operation<V>) -> Result<Outcome<V>, OutOfBounds> {
        let outcome = match operation {
            Operation::Append(value) => {
                self.list.append(value);
                Outcome::Done
            }
            Operation::Insert(value) => {
                self.list.insert(value);
                Outcome::Done
            }
            Operation::RemoveFirst => self.list.remove_first().into(),
            Operation::Head => self.list.head().cloned().into(),
            Operation::Tail => self.list.tail().cloned().into(),
            Operation::Len => Outcome::Length(self.list.len()),
            Operation::Get(index) => Outcome::Value(self.list.get_value_at(index)?.clone()),
            Operation::ToList => Outcome::List(self.list.to_vec()),
            Operation::Clear => {
                self.list.clear();
                Outcome::Done
            }
        };
        Ok(outcome)
    }
}

impl<V: Clone + fmt::Display> Runner<V> {
    /// Runs every operation in `script`, appending to the transcript.
    ///
    /// # Errors
    ///
    /// If [`stop_on_error`](Config::stop_on_error) is set, the first failed
    /// lookup stops the run and is returned. Operations before it remain
    /// applied and recorded. Otherwise failed lookups are recorded as
    /// [`Outcome::OutOfBounds`] and the run continues.
    #[instrument(level = "debug", skip_all, fields(operations = script.len()))]
    pub fn run(&mut self, script: Script<V>) -> Result<(), RunError> {
        let mut skipped = 0_usize;

        for (line, operation) in script {
            let text = operation.to_string();
            tracing::debug!(line, operation = %text, "applying");

            let outcome = match self.apply(operation) {
                Ok(outcome) => outcome,
                Err(source) if self.config.stop_on_error => {
                    return Err(RunError { line, source });
                }
                Err(error) => {
                    tracing::warn!("line {line}: skipping '{text}': {error}");
                    skipped += 1;
                    Outcome::OutOfBounds {
                        index: error.index(),
                        length: error.length(),
                    }
                }
            };

            self.transcript.push(Entry {
                line,
                operation: text,
                outcome,
            });
        }

        tracing::info!(
            "ran {} operations ({skipped} skipped), list length {}",
            self.transcript.len(),
            self.list.len()
        );
        Ok(())
    }
}
