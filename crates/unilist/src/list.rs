//! The list handle and positional operations.
//!
//! [`UniList`] owns the node chain and enforces index bounds before any
//! mutation touches a link. A node is always fully constructed before it
//! is spliced into the chain, so a failed operation never leaves a
//! half-linked node behind.

use std::fmt;

use crate::error::ListError;
use crate::node::{Link, Node};

/// Element disposal hook, invoked once per element on every removal path.
///
/// The disposer is the designated release point for resources embedded in
/// an element (for example when elements are `Box`es over separately
/// allocated records). Elements displaced by [`UniList::replace`] are
/// handed back to the caller instead and never pass through the disposer.
pub type Disposer<T> = Box<dyn FnMut(T)>;

/// A generic singly-linked list with positional and keyed operations.
///
/// The handle holds the head link, the live element count, and an
/// optional [`Disposer`] fixed at construction. Valid positional indices
/// form the half-open range `[0, len)`.
///
/// Not safe for concurrent use from multiple threads; wrap in external
/// locking if shared.
pub struct UniList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
    pub(crate) disposer: Option<Disposer<T>>,
}

impl<T> UniList<T> {
    /// Create an empty list with no disposer.
    ///
    /// Removed elements are dropped normally.
    pub fn new() -> Self {
        Self {
            head: None,
            len: 0,
            disposer: None,
        }
    }

    /// Create an empty list whose elements are released through `dispose`.
    ///
    /// The hook is invoked exactly once per element by [`remove`],
    /// [`remove_by_key`], [`remove_all_by_key`], [`clear`], and the
    /// destructor, in each case before the node's storage is released.
    ///
    /// [`remove`]: UniList::remove
    /// [`remove_by_key`]: UniList::remove_by_key
    /// [`remove_all_by_key`]: UniList::remove_all_by_key
    /// [`clear`]: UniList::clear
    pub fn with_disposer(dispose: impl FnMut(T) + 'static) -> Self {
        Self {
            head: None,
            len: 0,
            disposer: Some(Box::new(dispose)),
        }
    }

    /// Number of elements currently in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `value` as the new first element. O(1).
    pub fn push_front(&mut self, value: T) {
        let node = Box::new(Node {
            elem: value,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    /// Insert `value` as the new last element, walking to the tail. O(n).
    pub fn push_back(&mut self, value: T) {
        let tail = self.link_at_mut(self.len);
        *tail = Some(Box::new(Node::new(value)));
        self.len += 1;
    }

    /// Insert `value` so it becomes the element at `index`, shifting
    /// subsequent elements one position toward the tail.
    ///
    /// `index == 0` is a prepend; `index >= len` is an append. This is the
    /// one positional operation without an upper bound check, so it never
    /// fails.
    pub fn insert(&mut self, index: usize, value: T) {
        let index = index.min(self.len);
        let link = self.link_at_mut(index);
        let successor = link.take();
        *link = Some(Box::new(Node {
            elem: value,
            next: successor,
        }));
        self.len += 1;
    }

    /// Remove the element at `index`, releasing it through the disposer,
    /// and relink its predecessor to its successor.
    ///
    /// Fails with [`ListError::IndexOutOfBounds`] for `index >= len`,
    /// leaving the list unchanged.
    pub fn remove(&mut self, index: usize) -> Result<(), ListError> {
        if index >= self.len {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        let link = self.link_at_mut(index);
        let boxed = link
            .take()
            .expect("index < len, so the link at `index` is occupied");
        let Node { elem, next } = *boxed;
        *link = next;
        self.len -= 1;
        Self::run_disposer(&mut self.disposer, elem);
        Ok(())
    }

    /// Overwrite the element at `index` with `value`, returning the
    /// displaced element.
    ///
    /// A direct overwrite: the displaced element is handed back rather
    /// than passed through the disposer, and no node is destroyed or
    /// recreated. Same bounds contract as [`remove`](UniList::remove).
    pub fn replace(&mut self, index: usize, value: T) -> Result<T, ListError> {
        if index >= self.len {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        let node = self
            .link_at_mut(index)
            .as_deref_mut()
            .expect("index < len, so a node exists at `index`");
        Ok(std::mem::replace(&mut node.elem, value))
    }

    /// Borrow the element at `index`.
    ///
    /// Same bounds contract as [`remove`](UniList::remove).
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        if index >= self.len {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        let mut cursor = self.head.as_deref();
        for _ in 0..index {
            cursor = cursor.and_then(|node| node.next.as_deref());
        }
        let node = cursor.expect("index < len, so a node exists at `index`");
        Ok(&node.elem)
    }

    /// Invoke `visit` once per element in head-to-tail order.
    ///
    /// The visitor borrows the list for the duration of the walk, so it
    /// cannot mutate the chain it is visiting.
    pub fn traverse(&self, mut visit: impl FnMut(&T)) {
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            visit(&node.elem);
            cursor = node.next.as_deref();
        }
    }

    /// Reverse the chain in place. O(n) time, O(1) extra space.
    ///
    /// Walks the original chain once, relinking each node at the front of
    /// the rebuilt chain. The length is recounted as a by-product and
    /// checked against the stored count.
    pub fn reverse(&mut self) {
        let mut reversed: Link<T> = None;
        let mut cursor = self.head.take();
        let mut relinked = 0;
        while let Some(mut node) = cursor {
            cursor = node.next.take();
            node.next = reversed;
            reversed = Some(node);
            relinked += 1;
        }
        debug_assert_eq!(relinked, self.len);
        self.head = reversed;
        self.len = relinked;
    }

    /// Remove every element, releasing each through the disposer.
    ///
    /// The handle stays valid and reusable afterward: head is reset to
    /// none and the count to zero.
    pub fn clear(&mut self) {
        // Iterative teardown; dropping the head recursively would overflow
        // the stack on long chains.
        let mut cursor = self.head.take();
        while let Some(boxed) = cursor {
            let Node { elem, next } = *boxed;
            cursor = next;
            Self::run_disposer(&mut self.disposer, elem);
        }
        self.len = 0;
    }

    /// Release `elem` through the disposer, or drop it if none was set.
    ///
    /// An associated function over `&mut Option<Disposer<T>>` so callers
    /// holding a cursor into the chain can still reach the hook.
    pub(crate) fn run_disposer(disposer: &mut Option<Disposer<T>>, elem: T) {
        if let Some(dispose) = disposer {
            dispose(elem);
        }
    }

    /// The link whose target currently sits at `index`, or the tail link
    /// when `index == len`.
    ///
    /// Callers must ensure `index <= len`; every positional operation
    /// checks its bound before walking.
    pub(crate) fn link_at_mut(&mut self, index: usize) -> &mut Link<T> {
        let mut cursor = &mut self.head;
        for _ in 0..index {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => break,
            }
        }
        cursor
    }
}

impl<T> Default for UniList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for UniList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> fmt::Debug for UniList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniList")
            .field("len", &self.len)
            .field("disposer", &self.disposer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn collect<T: Clone>(list: &UniList<T>) -> Vec<T> {
        let mut out = Vec::with_capacity(list.len());
        list.traverse(|elem| out.push(elem.clone()));
        out
    }

    #[test]
    fn new_list_is_empty() {
        let list: UniList<i32> = UniList::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(collect(&list), Vec::<i32>::new());
    }

    #[test]
    fn push_back_preserves_arrival_order() {
        let mut list = UniList::new();
        for n in 1..=10 {
            list.push_back(n);
        }
        assert_eq!(list.len(), 10);
        assert_eq!(collect(&list), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn push_front_reverses_arrival_order() {
        let mut list = UniList::new();
        for n in 1..=5 {
            list.push_front(n);
        }
        assert_eq!(collect(&list), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn insert_at_zero_is_prepend() {
        let mut list = UniList::new();
        list.push_back(2);
        list.insert(0, 1);
        assert_eq!(collect(&list), vec![1, 2]);
    }

    #[test]
    fn insert_at_len_is_append() {
        let mut list = UniList::new();
        list.push_back(1);
        list.insert(1, 2);
        assert_eq!(collect(&list), vec![1, 2]);
    }

    #[test]
    fn insert_beyond_len_is_append() {
        let mut list = UniList::new();
        list.push_back(1);
        list.insert(1000, 2);
        assert_eq!(collect(&list), vec![1, 2]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn insert_mid_sits_between_predecessor_and_successor() {
        let mut list = UniList::new();
        for n in [10, 20, 30] {
            list.push_back(n);
        }
        list.insert(1, 15);
        assert_eq!(collect(&list), vec![10, 15, 20, 30]);
        assert_eq!(list.get(1), Ok(&15));
        assert_eq!(list.get(2), Ok(&20));
    }

    #[test]
    fn remove_shifts_successors_left() {
        let mut list = UniList::new();
        for n in [1, 2, 3, 4] {
            list.push_back(n);
        }
        list.remove(1).unwrap();
        assert_eq!(collect(&list), vec![1, 3, 4]);
        assert_eq!(list.get(1), Ok(&3));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn remove_head_updates_head() {
        let mut list = UniList::new();
        list.push_back(1);
        list.push_back(2);
        list.remove(0).unwrap();
        assert_eq!(collect(&list), vec![2]);
    }

    #[test]
    fn remove_last_valid_index_succeeds() {
        let mut list = UniList::new();
        for n in [1, 2, 3] {
            list.push_back(n);
        }
        list.remove(2).unwrap();
        assert_eq!(collect(&list), vec![1, 2]);
    }

    #[test]
    fn remove_at_len_is_out_of_bounds() {
        let mut list = UniList::new();
        list.push_back(1);
        assert_eq!(
            list.remove(1),
            Err(ListError::IndexOutOfBounds { index: 1, len: 1 })
        );
        // Failed removal leaves the list untouched.
        assert_eq!(collect(&list), vec![1]);
    }

    #[test]
    fn replace_changes_only_the_target() {
        let mut list = UniList::new();
        for n in [1, 2, 3] {
            list.push_back(n);
        }
        let old = list.replace(1, 99).unwrap();
        assert_eq!(old, 2);
        assert_eq!(collect(&list), vec![1, 99, 3]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn replace_out_of_bounds_fails() {
        let mut list: UniList<i32> = UniList::new();
        assert_eq!(
            list.replace(0, 1),
            Err(ListError::IndexOutOfBounds { index: 0, len: 0 })
        );
    }

    #[test]
    fn get_boundaries() {
        let mut list = UniList::new();
        for n in [7, 8, 9] {
            list.push_back(n);
        }
        assert_eq!(list.get(0), Ok(&7));
        assert_eq!(list.get(2), Ok(&9));
        assert_eq!(
            list.get(3),
            Err(ListError::IndexOutOfBounds { index: 3, len: 3 })
        );
    }

    #[test]
    fn traverse_visits_in_order() {
        let mut list = UniList::new();
        for n in [1, 2, 3] {
            list.push_back(n);
        }
        let mut seen = Vec::new();
        list.traverse(|&elem| seen.push(elem * 10));
        assert_eq!(seen, vec![10, 20, 30]);
    }

    #[test]
    fn reverse_reverses_order_and_keeps_len() {
        let mut list = UniList::new();
        for n in 1..=5 {
            list.push_back(n);
        }
        list.reverse();
        assert_eq!(collect(&list), vec![5, 4, 3, 2, 1]);
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn reverse_of_empty_and_singleton_is_noop() {
        let mut empty: UniList<i32> = UniList::new();
        empty.reverse();
        assert!(empty.is_empty());

        let mut one = UniList::new();
        one.push_back(42);
        one.reverse();
        assert_eq!(collect(&one), vec![42]);
    }

    #[test]
    fn clear_resets_and_list_is_reusable() {
        let mut list = UniList::new();
        for n in 1..=3 {
            list.push_back(n);
        }
        list.clear();
        assert!(list.is_empty());
        list.push_back(9);
        assert_eq!(collect(&list), vec![9]);
    }

    #[test]
    fn disposer_runs_once_per_removed_element() {
        let disposed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&disposed);
        let mut list = UniList::with_disposer(move |elem: i32| sink.borrow_mut().push(elem));
        for n in [1, 2, 3] {
            list.push_back(n);
        }

        list.remove(1).unwrap();
        assert_eq!(*disposed.borrow(), vec![2]);

        list.clear();
        assert_eq!(*disposed.borrow(), vec![2, 1, 3]);
    }

    #[test]
    fn disposer_is_not_invoked_on_replace() {
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let mut list = UniList::with_disposer(move |_elem: i32| *sink.borrow_mut() += 1);
        list.push_back(1);
        let old = list.replace(0, 2).unwrap();
        assert_eq!(old, 1);
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn drop_releases_remaining_elements_through_disposer() {
        let disposed = Rc::new(RefCell::new(Vec::new()));
        {
            let sink = Rc::clone(&disposed);
            let mut list = UniList::with_disposer(move |elem: i32| sink.borrow_mut().push(elem));
            list.push_back(1);
            list.push_back(2);
        }
        assert_eq!(*disposed.borrow(), vec![1, 2]);
    }

    #[test]
    fn drop_of_long_chain_does_not_overflow_the_stack() {
        let mut list = UniList::new();
        for n in 0..200_000 {
            list.push_front(n);
        }
        drop(list);
    }

    #[test]
    fn debug_shows_len_and_disposer_presence() {
        let mut list = UniList::with_disposer(|_elem: i32| {});
        list.push_back(1);
        assert_eq!(
            format!("{list:?}"),
            "UniList { len: 1, disposer: true }"
        );
    }

    #[cfg(not(miri))]
    mod proptests {
        use proptest::prelude::*;

        use super::*;

        fn from_vec(values: &[i32]) -> UniList<i32> {
            let mut list = UniList::new();
            for &v in values {
                list.push_back(v);
            }
            list
        }

        proptest! {
            #[test]
            fn reverse_is_its_own_inverse(values in proptest::collection::vec(any::<i32>(), 0..50)) {
                let mut list = from_vec(&values);
                list.reverse();
                list.reverse();
                prop_assert_eq!(collect(&list), values);
            }

            #[test]
            fn reversed_order_matches_model(values in proptest::collection::vec(any::<i32>(), 0..50)) {
                let mut list = from_vec(&values);
                list.reverse();
                let mut expected = values.clone();
                expected.reverse();
                prop_assert_eq!(collect(&list), expected);
                prop_assert_eq!(list.len(), values.len());
            }

            #[test]
            fn insert_matches_vec_model(
                values in proptest::collection::vec(any::<i32>(), 0..30),
                index in 0usize..40,
                value in any::<i32>(),
            ) {
                let mut list = from_vec(&values);
                list.insert(index, value);
                let mut expected = values.clone();
                expected.insert(index.min(values.len()), value);
                prop_assert_eq!(collect(&list), expected);
            }

            #[test]
            fn remove_matches_vec_model(
                values in proptest::collection::vec(any::<i32>(), 1..30),
                index in 0usize..30,
            ) {
                let mut list = from_vec(&values);
                let result = list.remove(index);
                let mut expected = values.clone();
                if index < values.len() {
                    prop_assert!(result.is_ok());
                    expected.remove(index);
                } else {
                    prop_assert!(result.is_err());
                }
                prop_assert_eq!(collect(&list), expected);
            }

            #[test]
            fn len_tracks_insertions(
                fronts in proptest::collection::vec(any::<i32>(), 0..20),
                backs in proptest::collection::vec(any::<i32>(), 0..20),
            ) {
                let mut list = UniList::new();
                for &v in &fronts {
                    list.push_front(v);
                }
                for &v in &backs {
                    list.push_back(v);
                }
                prop_assert_eq!(list.len(), fronts.len() + backs.len());
            }
        }
    }
}
