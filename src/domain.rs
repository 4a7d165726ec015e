//! Domain types for the linked list.
//!
//! This module contains the node and list types, the bounds error, and the
//! runner configuration.

/// Chain element holding one value and the link to its successor.
pub mod node;
pub use node::Node;

/// The list container and its iterators.
pub mod list;
pub use list::{LinkedList, OutOfBounds};

mod config;
pub use config::{Config, Error as ConfigError};
