//! Chain cells for the singly-linked list.

/// Owning link to the next cell in the chain, `None` at the tail.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single chain cell: one element plus the owning link to its successor.
///
/// A node is reachable only through the list that owns it. Its unique
/// owner is either the list head or its predecessor's `next` link, so
/// unlinking a node is always a local splice on exactly one link.
pub(crate) struct Node<T> {
    pub(crate) elem: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// Create a tail cell holding `elem`.
    pub(crate) fn new(elem: T) -> Self {
        Self { elem, next: None }
    }
}
