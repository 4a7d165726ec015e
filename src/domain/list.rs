//! The [`LinkedList`] container.
//!
//! Nodes are stored in a [`Slab`] owned by the list, and each node links to
//! its successor by slab key. `head` and `tail` are keys into the same slab;
//! `tail` is only a shortcut for O(1) append and never owns anything.

use std::{fmt, iter::FusedIterator};

use slab::Slab;
use thiserror::Error;

use super::node::{Link, Node};

/// Error returned when an index lies outside `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} out of bounds for list of length {length}")]
pub struct OutOfBounds {
    index: isize,
    length: usize,
}

impl OutOfBounds {
    /// Creates the error for `index` against a list of `length` values.
    #[must_use]
    pub const fn new(index: isize, length: usize) -> Self {
        Self { index, length }
    }

    /// The index that was requested.
    #[must_use]
    pub const fn index(&self) -> isize {
        self.index
    }

    /// The length of the list at the time of the request.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }
}

/// A singly linked list with O(1) access to both ends.
///
/// Values can be added at either end, but only removed from the front.
/// Absence is signalled with `None` ([`head`](Self::head),
/// [`tail`](Self::tail), [`remove_first`](Self::remove_first)), whereas an
/// invalid index passed to [`get_value_at`](Self::get_value_at) is an
/// [`OutOfBounds`] error.
///
/// # Examples
///
/// ```
/// use singly::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.append(1);
/// list.append(2);
/// list.insert(0);
///
/// assert_eq!(list.head(), Some(&0));
/// assert_eq!(list.tail(), Some(&2));
/// assert_eq!(list.to_vec(), vec![0, 1, 2]);
///
/// assert_eq!(list.remove_first(), Some(0));
/// assert_eq!(list.get_value_at(1), Ok(&2));
/// assert!(list.get_value_at(2).is_err());
/// ```
pub struct LinkedList<V> {
    /// Every node of the chain, and nothing else.
    nodes: Slab<Node<V>>,

    head: Link,

    /// Key of the last node reachable from `head`.
    tail: Link,

    len: usize,
}

impl<V> LinkedList<V> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of values in the list.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no values.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the first value, or `None` if the list is empty.
    #[must_use]
    pub fn head(&self) -> Option<&V> {
        self.head_node().map(Node::value)
    }

    /// Returns the last value, or `None` if the list is empty.
    #[must_use]
    pub fn tail(&self) -> Option<&V> {
        self.node(self.tail).map(Node::value)
    }

    /// Returns the first node of the chain, for read-only traversal.
    #[must_use]
    pub fn head_node(&self) -> Option<&Node<V>> {
        self.node(self.head)
    }

    /// Returns the node that follows `node` in this list.
    ///
    /// `node` must come from this list; a node from another list yields an
    /// unrelated node or `None`.
    #[must_use]
    pub fn next_node(&self, node: &Node<V>) -> Option<&Node<V>> {
        self.node(node.next())
    }

    fn node(&self, link: Link) -> Option<&Node<V>> {
        link.and_then(|key| self.nodes.get(key))
    }

    /// Adds a value to the end of the list.
    pub fn append(&mut self, value: V) {
        let key = self.nodes.insert(Node::new(value));

        match self.tail.and_then(|tail| self.nodes.get_mut(tail)) {
            Some(last) => {
                let displaced = last.set_next(Some(key));
                debug_assert!(displaced.is_none(), "tail node had a successor");
            }
            None => self.head = Some(key),
        }

        self.tail = Some(key);
        self.len += 1;
    }

    /// Adds a value to the front of the list.
    pub fn insert(&mut self, value: V) {
        let key = self.nodes.insert(Node::with_next(value, self.head));
        self.head = Some(key);

        if self.tail.is_none() {
            self.tail = Some(key);
        }

        self.len += 1;
    }

    /// Removes the first value and returns it, or `None` if the list is empty.
    pub fn remove_first(&mut self) -> Option<V> {
        let node = self.nodes.try_remove(self.head?)?;
        let (value, next) = node.into_parts();
        self.head = next;

        if self.head.is_none() {
            self.tail = None;
        }

        self.len -= 1;
        Some(value)
    }

    /// Returns the value at `index`, or `None` if `index >= len`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&V> {
        if index >= self.len {
            return None;
        }
        self.iter().nth(index)
    }

    /// Returns the value at `index`, counting from the front.
    ///
    /// The bounds are checked before the chain is walked.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `index` is negative or not less than
    /// [`len`](Self::len).
    pub fn get_value_at(&self, index: isize) -> Result<&V, OutOfBounds> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.get(index))
            .ok_or(OutOfBounds {
                index,
                length: self.len,
            })
    }

    /// Removes every value from the list.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Returns an iterator over the values, front to back.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            list: self,
            next: self.head,
            remaining: self.len,
        }
    }
}

impl<V: Clone> LinkedList<V> {
    /// Returns a snapshot of the values in link order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<V> {
        self.iter().cloned().collect()
    }
}

impl<V> Default for LinkedList<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for LinkedList<V> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<V: fmt::Debug> fmt::Debug for LinkedList<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<V: PartialEq> PartialEq for LinkedList<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<V: Eq> Eq for LinkedList<V> {}

impl<V> Extend<V> for LinkedList<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<V> FromIterator<V> for LinkedList<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, V> IntoIterator for &'a LinkedList<V> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> IntoIterator for LinkedList<V> {
    type Item = V;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// Borrowing iterator over a [`LinkedList`], returned by
/// [`LinkedList::iter`].
pub struct Iter<'a, V> {
    list: &'a LinkedList<V>,
    next: Link,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.next)?;
        self.next = node.next();
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Iter<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Consuming iterator over a [`LinkedList`], yielding values front to back.
#[derive(Debug)]
pub struct IntoIter<V>(LinkedList<V>);

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.remove_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}

impl<V> FusedIterator for IntoIter<V> {}
