//! Rank-indexed ordered set built on a probabilistic skip list.
//!
//! [`RankedSkipList`] keeps values sorted and, unlike a plain sorted
//! container, answers positional queries in expected O(log n): `get(i)`
//! returns the i-th smallest value and `rank(&x)` counts the values
//! strictly below `x`.
//!
//! # Quick Start
//!
//! ```
//! use rankset::RankedSkipList;
//!
//! let mut set = RankedSkipList::new();
//! for x in [5, 1, 3, 2, 4] {
//!     set.insert(x);
//! }
//!
//! assert_eq!(set.len(), 5);
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
//! assert_eq!(set.get(0), Some(&1));
//! assert_eq!(set.rank(&3), 2);
//!
//! set.remove(&3);
//! assert_eq!(set.rank(&4), 2);
//! ```

mod height;
pub mod skip_list;

pub use skip_list::{Iter, RankedSkipList};
