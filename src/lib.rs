//!
//! A growable, ordered container.
//!
//! [`OrderedContainer`] stores its elements in a single owned slot buffer
//! and offers index-based insertion, retrieval, replacement and removal,
//! removal by value, clearing and an in-place quicksort.
//!
//! ```
//! use ordered_container::OrderedContainer;
//!
//! let mut container = OrderedContainer::new();
//! for value in [8, 9, 2, 7] {
//!     container.append(value);
//! }
//!
//! assert_eq!(
//!     container.to_string(),
//!     "Container{array=[8, 9, 2, 7, <empty>, <empty>, <empty>, <empty>, <empty>, <empty>], size=4}"
//! );
//!
//! container.sort();
//! assert_eq!(container.get(0), Ok(&2));
//! assert!(container.remove_value(&9));
//! assert_eq!(container.len(), 3);
//! ```
//!
//! # Growth
//!
//! A full buffer is replaced by one with `floor(capacity * 1.75)` slots,
//! but always at least one more slot than before. Growth is reported as a
//! `debug` level [`tracing`] event.
//!
//! # Features
//!
//! | Feature | Description                                              |
//! |---------|----------------------------------------------------------|
//! | serde   | Derives `Serialize` / `Deserialize` for [`ContainerOptions`]. |

mod container;
mod error;
mod options;
mod sort;

pub use self::container::OrderedContainer;
pub use self::error::{ContainerError, Result};
pub use self::options::ContainerOptions;

/// The number of slots allocated by [`OrderedContainer::new`].
pub const DEFAULT_CAPACITY: usize = 10;
