//! Generic singly-linked list with positional and keyed operations.
//!
//! The engine is a single owned chain of heap-allocated nodes:
//!
//! ```text
//! UniList<T> (handle: head link, live length, optional disposer)
//! └── Node<T> → Node<T> → … → Node<T> (each uniquely owned by its
//!     predecessor's `next` link, the first by the list head)
//! ```
//!
//! Elements are addressed two ways:
//!
//! - **By position:** `insert`, `remove`, `replace`, `get` over the
//!   half-open index range `[0, len)`. `insert` alone accepts an
//!   out-of-range-high index and treats it as an append.
//! - **By key:** a caller-supplied matcher (`Fn(&T, &K) -> bool`) locates
//!   the first element satisfying the key; composite operations resolve
//!   the position first and delegate to the positional form. Bulk
//!   variants affect every match in a single forward scan.
//!
//! Cross-cutting behaviour is delegated to caller-supplied capabilities:
//! an optional *disposer* invoked once per element on every removal path,
//! a *matcher* for keyed lookup, and a *visitor* for traversal. There is
//! deliberately no `Iterator` implementation; traversal is callback-based.
//!
//! # Thread safety
//!
//! The container is single-threaded. Concurrent mutation or mixed
//! reader/writer access from multiple threads requires external locking.
//!
//! # Quick start
//!
//! ```rust
//! use unilist::UniList;
//!
//! let mut list = UniList::new();
//! for n in 1..=5 {
//!     list.push_back(n);
//! }
//! list.insert(2, 99);
//! assert_eq!(list.len(), 6);
//! assert_eq!(list.get(2), Ok(&99));
//!
//! let hits = list.find_all_indices(&99, |elem, key| elem == key).unwrap();
//! assert_eq!(hits.len(), 1);
//!
//! list.remove_by_key(&99, |elem, key| elem == key).unwrap();
//! list.reverse();
//! assert_eq!(list.get(0), Ok(&5));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
mod keyed;
pub mod list;
mod node;

pub use error::ListError;
pub use list::{Disposer, UniList};
