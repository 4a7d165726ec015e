/// Link from one node to the next: the successor's key in the slab of the
/// list that owns both nodes, or `None` at the end of the chain.
pub type Link = Option<usize>;

/// A single element of a singly linked chain.
///
/// Nodes live in the slab of a [`LinkedList`](crate::LinkedList), which owns
/// every node reachable from its head. A node only records where its
/// successor lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<V> {
    value: V,
    next: Link,
}

impl<V> Node<V> {
    /// Creates a node with no successor.
    #[must_use]
    pub const fn new(value: V) -> Self {
        Self { value, next: None }
    }

    /// Creates a node whose successor is stored under `next`.
    #[must_use]
    pub const fn with_next(value: V, next: Link) -> Self {
        Self { value, next }
    }

    /// Returns the stored value.
    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Returns the link to the following node.
    #[must_use]
    pub const fn next(&self) -> Link {
        self.next
    }

    /// Replaces the link to the following node, returning the previous link.
    ///
    /// The caller is responsible for not building a cycle.
    pub const fn set_next(&mut self, next: Link) -> Link {
        std::mem::replace(&mut self.next, next)
    }

    /// Returns `true` if this node has a successor.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Consumes the node and returns its value.
    #[must_use]
    pub fn into_value(self) -> V {
        self.value
    }

    /// Consumes the node, returning its value and its successor link.
    pub(crate) fn into_parts(self) -> (V, Link) {
        (self.value, self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_has_no_successor() {
        let node = Node::new(7);
        assert_eq!(node.value(), &7);
        assert!(!node.has_next());
        assert_eq!(node.next(), None);
        assert_eq!(node.into_value(), 7);
    }

    #[test]
    fn set_next_links_and_returns_previous() {
        let mut node = Node::new("a");

        assert_eq!(node.set_next(Some(3)), None);
        assert!(node.has_next());
        assert_eq!(node.next(), Some(3));

        assert_eq!(node.set_next(Some(8)), Some(3));
        assert_eq!(node.next(), Some(8));
    }

    #[test]
    fn set_next_none_unlinks() {
        let mut node = Node::with_next(1, Some(0));
        assert!(node.has_next());

        assert_eq!(node.set_next(None), Some(0));
        assert!(!node.has_next());
    }

    #[test]
    fn into_parts_keeps_link() {
        let node = Node::with_next('x', Some(4));
        assert_eq!(node.into_parts(), ('x', Some(4)));
    }
}
