//! Singly linked list
//!
//! A forward-linked chain of heap-allocated nodes with O(1) access to both
//! ends, plus a small line-oriented script language for driving a list from
//! text.

pub mod domain;
pub use domain::{Config, ConfigError, LinkedList, Node, OutOfBounds};

/// Operation scripts and the runner that applies them to a list.
pub mod script;
pub use script::{Operation, Outcome, Runner};
