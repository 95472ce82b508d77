//! Keyed operations: matcher-driven lookup, removal, and replacement.
//!
//! A *matcher* is a pure yes/no predicate over `(element, key)` — match
//! semantics, not a three-way ordering. Single-target operations resolve
//! the first matching position with [`UniList::find_index`] and delegate
//! to the positional form, so a failed lookup propagates without touching
//! the chain. Bulk operations run a single forward scan instead of
//! re-searching from the head after every hit; the cursor only advances,
//! so they terminate even when a replacement value still satisfies the
//! matcher.

use crate::error::ListError;
use crate::list::UniList;
use crate::node::Node;

impl<T> UniList<T> {
    /// Position of the first element (head-to-tail) for which
    /// `matches(element, key)` holds.
    ///
    /// Returns [`ListError::NoMatch`] when no element matches or the list
    /// is empty.
    pub fn find_index<K, M>(&self, key: &K, matches: M) -> Result<usize, ListError>
    where
        M: Fn(&T, &K) -> bool,
    {
        let mut cursor = self.head.as_deref();
        let mut index = 0;
        while let Some(node) = cursor {
            if matches(&node.elem, key) {
                return Ok(index);
            }
            index += 1;
            cursor = node.next.as_deref();
        }
        Err(ListError::NoMatch)
    }

    /// Remove the first element matching `key`, releasing it through the
    /// disposer.
    ///
    /// A failed lookup propagates [`ListError::NoMatch`] without mutating
    /// the list.
    pub fn remove_by_key<K, M>(&mut self, key: &K, matches: M) -> Result<(), ListError>
    where
        M: Fn(&T, &K) -> bool,
    {
        let index = self.find_index(key, &matches)?;
        self.remove(index)
    }

    /// Overwrite the first element matching `key` with `value`, returning
    /// the displaced element.
    pub fn replace_by_key<K, M>(&mut self, value: T, key: &K, matches: M) -> Result<T, ListError>
    where
        M: Fn(&T, &K) -> bool,
    {
        let index = self.find_index(key, &matches)?;
        self.replace(index, value)
    }

    /// Borrow the first element matching `key`.
    pub fn get_by_key<K, M>(&self, key: &K, matches: M) -> Result<&T, ListError>
    where
        M: Fn(&T, &K) -> bool,
    {
        let index = self.find_index(key, &matches)?;
        self.get(index)
    }

    /// Remove every element matching `key`, releasing each through the
    /// disposer. Returns the number of elements removed.
    ///
    /// Single forward scan: each chain link is examined exactly once, so
    /// the operation is O(n) and terminates regardless of what the
    /// matcher does.
    pub fn remove_all_by_key<K, M>(&mut self, key: &K, matches: M) -> usize
    where
        M: Fn(&T, &K) -> bool,
    {
        let mut removed = 0;
        let mut cursor = &mut self.head;
        loop {
            let hit = match cursor {
                Some(node) => matches(&node.elem, key),
                None => break,
            };
            if hit {
                let boxed = cursor
                    .take()
                    .expect("cursor was matched non-empty just above");
                let Node { elem, next } = *boxed;
                *cursor = next;
                self.len -= 1;
                removed += 1;
                Self::run_disposer(&mut self.disposer, elem);
            } else {
                match cursor {
                    Some(node) => cursor = &mut node.next,
                    None => break,
                }
            }
        }
        removed
    }

    /// Overwrite every element matching `key` with a clone of `value`.
    /// Returns the number of elements replaced.
    ///
    /// The matcher is evaluated against the element *before* it is
    /// overwritten, and the scan advances past every slot exactly once —
    /// replacing with a value that itself matches `key` is safe and does
    /// not re-trigger on the same slot. Displaced elements are dropped,
    /// not passed through the disposer.
    pub fn replace_all_by_key<K, M>(&mut self, value: &T, key: &K, matches: M) -> usize
    where
        T: Clone,
        M: Fn(&T, &K) -> bool,
    {
        let mut replaced = 0;
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            if matches(&node.elem, key) {
                node.elem = value.clone();
                replaced += 1;
            }
            cursor = node.next.as_deref_mut();
        }
        replaced
    }

    /// Build a brand-new list of the positions of every element matching
    /// `key`, in head-to-tail discovery order.
    ///
    /// Returns `None` when nothing matches: absence is reported
    /// explicitly rather than as an empty container.
    pub fn find_all_indices<K, M>(&self, key: &K, matches: M) -> Option<UniList<usize>>
    where
        M: Fn(&T, &K) -> bool,
    {
        let mut indices = UniList::new();
        let mut cursor = self.head.as_deref();
        let mut index = 0;
        while let Some(node) = cursor {
            if matches(&node.elem, key) {
                indices.push_back(index);
            }
            index += 1;
            cursor = node.next.as_deref();
        }
        if indices.is_empty() {
            None
        } else {
            Some(indices)
        }
    }
}
