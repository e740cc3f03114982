//! Rank-indexed ordered set backed by a probabilistic skip list.
//!
//! Every forward link carries a span: the number of level-0 elements the
//! link advances past. Accumulating spans during the usual top-down descent
//! turns the skip list into an order-statistic structure - `get(i)` returns
//! the i-th smallest value and `rank(x)` counts the values strictly below
//! `x`, both in expected O(log n). A balanced tree gives the same bounds
//! only with subtree-size augmentation; a sorted array gives `get` for free
//! but linear insertion.
//!
//! # Span semantics
//!
//! `node.span[level]` is the number of level-0 steps taken by following
//! `node.next[level]`. For the last node of a level (whose forward link is
//! `NULL`) it is the number of elements after that node, so at every active
//! level the spans sum to exactly `len()`:
//!
//! ```text
//! Level 2: HEAD ------3------> C ------2------> (end)
//! Level 1: HEAD -1-> A ---2---> C -1-> D --1--> (end)
//! Level 0: HEAD -1-> A -1-> B -1-> C -1-> D -1-> E -0-> (end)
//! ```
//!
//! # Operations
//!
//! - `insert(x)` / `remove(&x)`: O(log n) expected - duplicates rejected
//! - `get(i)` / `remove_at(i)`: O(log n) expected - i-th smallest
//! - `rank(&x)`: O(log n) expected - count of values below x
//! - `find(&x)` / `find_lt(&x)` / `first()` / `last()`: O(log n) expected
//! - `iter()` / `iter_from(&x)`: O(1) per step after an O(log n) start
//! - `len()` / `clear()`: O(1) / O(n)
//!
//! There is no constant-time erase through an iterator: removing a value the
//! iterator just yielded is a full O(log n) [`remove`](RankedSkipList::remove)
//! by value.
//!
//! The structure is single-threaded; `&mut self` on every mutating method is
//! what serializes access.

use std::cmp::Ordering;
use std::fmt;
use std::mem::MaybeUninit;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::height;

/// Maximum number of levels. 32 levels cover billions of elements.
pub(crate) const MAX_HEIGHT: usize = 32;

/// Node index type. u32 saves space vs usize on 64-bit.
type Idx = u32;

/// Null index marker.
const NULL: Idx = Idx::MAX;

/// A node in the skip list. Each node stores exactly one value.
struct Node<T> {
    /// The value stored in this node. Uninitialized only for the head.
    item: MaybeUninit<T>,
    /// Number of levels this node participates in. Fixed at creation.
    levels: u8,
    /// Forward pointers at each level.
    next: [Idx; MAX_HEIGHT],
    /// Level-0 steps taken by following next[level]; see the module doc.
    span: [u32; MAX_HEIGHT],
}

impl<T> Node<T> {
    fn new(levels: u8, item: T) -> Self {
        Node {
            item: MaybeUninit::new(item),
            levels,
            next: [NULL; MAX_HEIGHT],
            span: [0; MAX_HEIGHT],
        }
    }

    fn new_head() -> Self {
        Node {
            item: MaybeUninit::uninit(),
            levels: MAX_HEIGHT as u8,
            next: [NULL; MAX_HEIGHT],
            span: [0; MAX_HEIGHT],
        }
    }

    fn levels(&self) -> usize {
        self.levels as usize
    }
}

/// An ordered set with O(log n) expected positional access.
///
/// Values are kept sorted under a caller-supplied comparator (natural
/// ordering via [`new`](RankedSkipList::new)). In addition to the usual
/// sorted-set operations it answers `get(i)` (the i-th smallest value) and
/// `rank(&x)` (how many values are strictly less than x) without scanning.
///
/// The second type parameter is the comparator; it defaults to a plain
/// function pointer so `RankedSkipList<T>` names the natural-order set.
pub struct RankedSkipList<T, C = fn(&T, &T) -> Ordering> {
    /// Arena of nodes. Slot 0 is the head.
    nodes: Vec<Node<T>>,
    /// Index of the head node. It holds no value and is never removed.
    head: Idx,
    /// Number of values (not counting the head).
    len: usize,
    /// Count of active levels; 0 when the set is empty.
    levels: usize,
    /// Free list for reusing removed node slots.
    free_list: Vec<Idx>,
    /// The ordering relation.
    compare: C,
    /// Random source for level selection.
    rng: SmallRng,
}

impl<T: Ord> RankedSkipList<T> {
    /// Create an empty set ordered by `T`'s natural ordering.
    pub fn new() -> Self {
        Self::with_comparator(T::cmp)
    }
}

impl<T, C: Fn(&T, &T) -> Ordering> RankedSkipList<T, C> {
    /// Create an empty set ordered by `compare`.
    ///
    /// The comparator must be a total order; values comparing `Equal` are
    /// treated as duplicates and rejected on insert.
    pub fn with_comparator(compare: C) -> Self {
        let mut list = RankedSkipList {
            nodes: Vec::new(),
            head: 0,
            len: 0,
            levels: 0,
            free_list: Vec::new(),
            compare,
            rng: SmallRng::from_entropy(),
        };
        list.nodes.push(Node::new_head());
        list
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // --- Node access helpers ---

    fn node(&self, idx: Idx) -> &Node<T> {
        &self.nodes[idx as usize]
    }

    fn node_mut(&mut self, idx: Idx) -> &mut Node<T> {
        &mut self.nodes[idx as usize]
    }

    /// Value stored at a non-head node.
    fn item(&self, idx: Idx) -> &T {
        debug_assert!(idx != self.head);
        unsafe { self.node(idx).item.assume_init_ref() }
    }

    fn alloc_node(&mut self, levels: u8, item: T) -> Idx {
        if let Some(idx) = self.free_list.pop() {
            let node = self.node_mut(idx);
            node.item = MaybeUninit::new(item);
            node.levels = levels;
            node.next = [NULL; MAX_HEIGHT];
            node.span = [0; MAX_HEIGHT];
            idx
        } else {
            let idx = self.nodes.len() as Idx;
            self.nodes.push(Node::new(levels, item));
            idx
        }
    }

    // --- Search by value ---

    /// Rightmost node whose value is strictly less than `x` (the head when
    /// no such node exists).
    fn find_pred_node(&self, x: &T) -> Idx {
        let mut u = self.head;
        for r in (0..self.levels).rev() {
            loop {
                let next = self.node(u).next[r];
                if next == NULL || (self.compare)(self.item(next), x) != Ordering::Less {
                    break;
                }
                u = next;
            }
        }
        u
    }

    /// Smallest stored value greater than or equal to `x`.
    pub fn find(&self, x: &T) -> Option<&T> {
        let u = self.find_pred_node(x);
        let next = self.node(u).next[0];
        if next == NULL { None } else { Some(self.item(next)) }
    }

    /// Smallest stored value greater than or equal to `x`.
    ///
    /// Same as [`find`](RankedSkipList::find); kept so the ge/lt pair reads
    /// symmetrically at call sites.
    pub fn find_ge(&self, x: &T) -> Option<&T> {
        self.find(x)
    }

    /// Largest stored value strictly less than `x`.
    pub fn find_lt(&self, x: &T) -> Option<&T> {
        let u = self.find_pred_node(x);
        if u == self.head { None } else { Some(self.item(u)) }
    }

    /// The minimum, or `None` when empty.
    pub fn first(&self) -> Option<&T> {
        let next = self.node(self.head).next[0];
        if next == NULL { None } else { Some(self.item(next)) }
    }

    /// The maximum, or `None` when empty.
    pub fn last(&self) -> Option<&T> {
        let mut u = self.head;
        for r in (0..self.levels).rev() {
            loop {
                let next = self.node(u).next[r];
                if next == NULL {
                    break;
                }
                u = next;
            }
        }
        if u == self.head { None } else { Some(self.item(u)) }
    }

    /// Whether a value comparing equal to `x` is stored.
    pub fn contains(&self, x: &T) -> bool {
        match self.find(x) {
            Some(v) => (self.compare)(v, x) == Ordering::Equal,
            None => false,
        }
    }

    // --- Positional search and rank ---

    /// Rightmost node at or before position `i`, by accumulating spans
    /// instead of comparing values. `j` tracks how many elements sit at or
    /// before the node being visited.
    fn find_pred_by_index(&self, i: usize) -> Idx {
        let mut u = self.head;
        let mut j = 0usize;
        for r in (0..self.levels).rev() {
            loop {
                let node = self.node(u);
                let next = node.next[r];
                if next == NULL || j + node.span[r] as usize > i {
                    break;
                }
                j += node.span[r] as usize;
                u = next;
            }
        }
        u
    }

    /// The i-th smallest value, or `None` when `i >= len()`.
    pub fn get(&self, i: usize) -> Option<&T> {
        if i >= self.len {
            return None;
        }
        let u = self.find_pred_by_index(i);
        let next = self.node(u).next[0];
        debug_assert!(next != NULL);
        Some(self.item(next))
    }

    /// Number of stored values strictly less than `x`, in `0..=len()`.
    ///
    /// `x` need not be present; for a stored value this is its position, for
    /// an absent one the position it would be inserted at.
    pub fn rank(&self, x: &T) -> usize {
        let mut u = self.head;
        let mut g = 0usize;
        for r in (0..self.levels).rev() {
            loop {
                let next = self.node(u).next[r];
                if next == NULL || (self.compare)(self.item(next), x) != Ordering::Less {
                    break;
                }
                // Accumulate before stepping: the span belongs to the link
                // being followed.
                g += self.node(u).span[r] as usize;
                u = next;
            }
        }
        g
    }

    // --- Insertion ---

    /// Insert `item`, keeping the set sorted and duplicate-free.
    ///
    /// Returns `false` (and drops `item`) when a value comparing equal is
    /// already stored.
    pub fn insert(&mut self, item: T) -> bool {
        let i = self.rank(&item);
        // When the value sorts past the current maximum there is nothing at
        // position i to compare against.
        if let Some(existing) = self.get(i) {
            if (self.compare)(existing, &item) == Ordering::Equal {
                return false;
            }
        }
        self.insert_at(i, item);
        true
    }

    /// Splice `item` in as the i-th element. Caller guarantees `i` is the
    /// value's rank, so ordering is preserved.
    fn insert_at(&mut self, i: usize, item: T) {
        let levels = height::pick_levels(&mut self.rng);
        if levels > self.levels {
            // Activate head levels up to the new height. Their forward links
            // are NULL (cleared by the unsplice that deactivated them) but
            // their spans are stale and must count every current element.
            for r in self.levels..levels {
                debug_assert_eq!(self.nodes[self.head as usize].next[r], NULL);
                self.nodes[self.head as usize].span[r] = self.len as u32;
            }
            self.levels = levels;
        }
        let w = self.alloc_node(levels as u8, item);

        let mut u = self.head;
        let mut j = 0usize;
        for r in (0..self.levels).rev() {
            loop {
                let node = self.node(u);
                let next = node.next[r];
                if next == NULL || j + node.span[r] as usize > i {
                    break;
                }
                j += node.span[r] as usize;
                u = next;
            }
            // Every link crossing the insertion point now has one more
            // element beneath it, whether or not the new node is spliced
            // into this level.
            self.node_mut(u).span[r] += 1;
            if r < self.node(w).levels() {
                // Level-0 distance from u to the new node.
                let offset = (i - j + 1) as u32;
                let u_node = self.node_mut(u);
                let u_next = u_node.next[r];
                let u_span = u_node.span[r];
                u_node.next[r] = w;
                u_node.span[r] = offset;
                let w_node = self.node_mut(w);
                w_node.next[r] = u_next;
                w_node.span[r] = u_span - offset;
            }
        }
        self.len += 1;
        self.check_invariants();
    }

    // --- Removal ---

    /// Remove and return the i-th smallest value, or `None` when
    /// `i >= len()` (in which case nothing is touched).
    pub fn remove_at(&mut self, i: usize) -> Option<T> {
        if i >= self.len {
            return None;
        }
        let mut removed = NULL;
        let mut u = self.head;
        let mut j = 0usize;
        for r in (0..self.levels).rev() {
            loop {
                let node = self.node(u);
                let next = node.next[r];
                if next == NULL || j + node.span[r] as usize > i {
                    break;
                }
                j += node.span[r] as usize;
                u = next;
            }
            // One fewer element under every link crossing position i, even
            // at levels the target does not participate in.
            self.node_mut(u).span[r] -= 1;
            let node = self.node(u);
            if node.next[r] != NULL && j + node.span[r] as usize == i {
                // The successor at this level is the target: absorb its span
                // and take over its forward pointer.
                let target = node.next[r];
                let t_next = self.node(target).next[r];
                let t_span = self.node(target).span[r];
                removed = target;
                let u_node = self.node_mut(u);
                u_node.span[r] += t_span;
                u_node.next[r] = t_next;
                if u == self.head && t_next == NULL {
                    // Top level emptied; deactivate it.
                    self.levels -= 1;
                }
            }
        }
        debug_assert!(removed != NULL);
        let item = unsafe { self.node_mut(removed).item.assume_init_read() };
        self.free_list.push(removed);
        self.len -= 1;
        self.check_invariants();
        Some(item)
    }

    /// Remove the value comparing equal to `x`, if present.
    ///
    /// `rank(x)` may point at a strictly larger value (or past the end) when
    /// `x` is absent, so the element found there is checked before removal.
    pub fn remove(&mut self, x: &T) -> bool {
        let i = self.rank(x);
        match self.get(i) {
            Some(v) if (self.compare)(v, x) == Ordering::Equal => {}
            _ => return false,
        }
        self.remove_at(i).is_some()
    }

    // --- Whole-structure operations ---

    /// Reset to the empty state, dropping all stored values.
    pub fn clear(&mut self) {
        let mut u = self.node(self.head).next[0];
        while u != NULL {
            let next = self.node(u).next[0];
            unsafe { self.node_mut(u).item.assume_init_drop() };
            u = next;
        }
        self.nodes.truncate(1);
        self.free_list.clear();
        let head = self.node_mut(self.head);
        head.next = [NULL; MAX_HEIGHT];
        head.span = [0; MAX_HEIGHT];
        self.len = 0;
        self.levels = 0;
        self.check_invariants();
    }

    // --- Iteration ---

    /// Iterate over all values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            current: self.node(self.head).next[0],
        }
    }

    /// Iterate in ascending order starting from the first value `>= x`.
    pub fn iter_from(&self, x: &T) -> Iter<'_, T> {
        let pred = self.find_pred_node(x);
        Iter {
            nodes: &self.nodes,
            current: self.node(pred).next[0],
        }
    }

    // --- Invariant checking ---

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        // Level 0 holds exactly len strictly increasing values.
        let mut count = 0usize;
        let mut prev: Option<Idx> = None;
        let mut u = self.node(self.head).next[0];
        while u != NULL {
            if let Some(p) = prev {
                assert!(
                    (self.compare)(self.item(p), self.item(u)) == Ordering::Less,
                    "INVARIANT VIOLATED: level 0 not strictly increasing"
                );
            }
            prev = Some(u);
            count += 1;
            u = self.node(u).next[0];
        }
        assert_eq!(
            count, self.len,
            "INVARIANT VIOLATED: level 0 count != len()"
        );
        assert!(
            self.levels > 0 || self.len == 0,
            "INVARIANT VIOLATED: levels is 0 but the set is non-empty"
        );

        for r in 0..self.levels {
            // Each active level's spans sum to len, every node on it is tall
            // enough, and only the trailing link may carry a zero span.
            let mut sum = 0usize;
            let mut u = self.head;
            loop {
                let node = self.node(u);
                assert!(node.levels() > r, "INVARIANT VIOLATED: node too short for level {r}");
                sum += node.span[r] as usize;
                if node.next[r] == NULL {
                    break;
                }
                assert!(node.span[r] > 0, "INVARIANT VIOLATED: zero span on a live link");
                u = node.next[r];
            }
            assert_eq!(
                sum, self.len,
                "INVARIANT VIOLATED: span sum at level {r} != len()"
            );
        }
        // The top active level must be occupied.
        if self.levels > 0 {
            assert!(
                self.node(self.head).next[self.levels - 1] != NULL,
                "INVARIANT VIOLATED: empty top level"
            );
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    fn check_invariants(&self) {}
}

impl<T: Ord> Default for RankedSkipList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for RankedSkipList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for item in iter {
            list.insert(item);
        }
        list
    }
}

impl<T, C: Fn(&T, &T) -> Ordering> Extend<T> for RankedSkipList<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: fmt::Debug, C: Fn(&T, &T) -> Ordering> fmt::Debug for RankedSkipList<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C> Drop for RankedSkipList<T, C> {
    fn drop(&mut self) {
        let mut u = self.nodes[self.head as usize].next[0];
        while u != NULL {
            unsafe { self.nodes[u as usize].item.assume_init_drop() };
            u = self.nodes[u as usize].next[0];
        }
    }
}

/// Forward iterator over level-0 links.
///
/// The borrow on the list means no removal can happen mid-iteration; to
/// erase a value the iterator yielded, finish (or drop) the iterator and
/// call [`RankedSkipList::remove`], an O(log n) operation.
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    current: Idx,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == NULL {
            return None;
        }
        let node = &self.nodes[self.current as usize];
        let item = unsafe { node.item.assume_init_ref() };
        self.current = node.next[0];
        Some(item)
    }
}

impl<'a, T, C: Fn(&T, &T) -> Ordering> IntoIterator for &'a RankedSkipList<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set() {
        let set: RankedSkipList<i32> = RankedSkipList::new();
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
        assert_eq!(set.get(0), None);
        assert_eq!(set.first(), None);
        assert_eq!(set.last(), None);
        assert_eq!(set.find(&1), None);
        assert_eq!(set.rank(&1), 0);
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn insert_one() {
        let mut set = RankedSkipList::new();
        assert!(set.insert(7));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(0), Some(&7));
        assert_eq!(set.first(), Some(&7));
        assert_eq!(set.last(), Some(&7));
        assert_eq!(set.rank(&7), 0);
    }

    #[test]
    fn duplicate_insert_is_a_noop() {
        let mut set = RankedSkipList::new();
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert_eq!(set.len(), 1);
        // Inserting a new maximum twice exercises the rank == len boundary.
        assert!(set.insert(9));
        assert!(!set.insert(9));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn traversal_is_sorted() {
        let mut set = RankedSkipList::new();
        for x in [5, 1, 3, 2, 4] {
            assert!(set.insert(x));
        }
        assert_eq!(set.len(), 5);
        let values: Vec<_> = set.iter().copied().collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn get_by_index() {
        let set: RankedSkipList<_> = [50, 10, 30, 20, 40].into_iter().collect();
        assert_eq!(set.get(0), Some(&10));
        assert_eq!(set.get(2), Some(&30));
        assert_eq!(set.get(4), Some(&50));
        assert_eq!(set.get(5), None);
    }

    #[test]
    fn rank_of_present_and_absent() {
        let set: RankedSkipList<_> = [5, 1, 3, 2, 4].into_iter().collect();
        assert_eq!(set.rank(&3), 2);
        assert_eq!(set.rank(&0), 0);
        assert_eq!(set.rank(&6), 5);
        // Rank of an absent value inside the range.
        let sparse: RankedSkipList<_> = [10, 20, 30].into_iter().collect();
        assert_eq!(sparse.rank(&15), 1);
        assert_eq!(sparse.rank(&20), 1);
        assert_eq!(sparse.rank(&21), 2);
    }

    #[test]
    fn rank_get_inverse() {
        let set: RankedSkipList<_> = (0..100).map(|i| (i * 37) % 100).collect();
        for i in 0..set.len() {
            let v = *set.get(i).unwrap();
            assert_eq!(set.rank(&v), i, "rank(get({i})) != {i}");
        }
    }

    #[test]
    fn find_ge_and_lt() {
        let set: RankedSkipList<_> = [10, 20, 30].into_iter().collect();
        assert_eq!(set.find(&10), Some(&10));
        assert_eq!(set.find(&15), Some(&20));
        assert_eq!(set.find_ge(&31), None);
        assert_eq!(set.find_lt(&10), None);
        assert_eq!(set.find_lt(&15), Some(&10));
        assert_eq!(set.find_lt(&31), Some(&30));
        assert!(set.contains(&20));
        assert!(!set.contains(&15));
    }

    #[test]
    fn remove_at_index() {
        let mut set: RankedSkipList<_> = [1, 2, 3, 4, 5].into_iter().collect();
        assert_eq!(set.remove_at(2), Some(3));
        assert_eq!(set.len(), 4);
        let values: Vec<_> = set.iter().copied().collect();
        assert_eq!(values, vec![1, 2, 4, 5]);
        assert_eq!(set.remove_at(4), None);
        assert_eq!(set.remove_at(0), Some(1));
        assert_eq!(set.remove_at(2), Some(5));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn remove_by_value() {
        let mut set: RankedSkipList<_> = [5, 1, 3, 2, 4].into_iter().collect();
        assert!(set.remove(&3));
        assert_eq!(set.len(), 4);
        let values: Vec<_> = set.iter().copied().collect();
        assert_eq!(values, vec![1, 2, 4, 5]);
        assert_eq!(set.rank(&4), 2);
        assert!(!set.remove(&3));
    }

    #[test]
    fn remove_absent_leaves_larger_neighbor_alone() {
        // rank(2) points at 3; a naive remove-at-rank would delete it.
        let mut set: RankedSkipList<_> = [1, 3].into_iter().collect();
        assert!(!set.remove(&2));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&3));
        // Past-the-end probe.
        assert!(!set.remove(&9));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn remove_from_empty() {
        let mut set: RankedSkipList<i32> = RankedSkipList::new();
        assert!(!set.remove(&1));
        assert_eq!(set.remove_at(0), None);
    }

    #[test]
    fn remove_everything_then_reuse() {
        let mut set: RankedSkipList<_> = (0..64).collect();
        for x in 0..64 {
            assert!(set.remove(&x), "failed to remove {x}");
        }
        assert!(set.is_empty());
        assert!(set.insert(42));
        assert_eq!(set.get(0), Some(&42));
    }

    #[test]
    fn clear_resets() {
        let mut set: RankedSkipList<_> = (0..32).collect();
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.first(), None);
        // Clearing an empty set is a no-op.
        set.clear();
        assert!(set.insert(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn iter_from_start_value() {
        let set: RankedSkipList<_> = [10, 20, 30, 40].into_iter().collect();
        let tail: Vec<_> = set.iter_from(&20).copied().collect();
        assert_eq!(tail, vec![20, 30, 40]);
        // An absent start value lands on the next larger element.
        let tail: Vec<_> = set.iter_from(&25).copied().collect();
        assert_eq!(tail, vec![30, 40]);
        assert_eq!(set.iter_from(&41).count(), 0);
    }

    #[test]
    fn into_iterator_for_ref() {
        let set: RankedSkipList<_> = [2, 1, 3].into_iter().collect();
        let mut out = Vec::new();
        for x in &set {
            out.push(*x);
        }
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn debug_output_is_sorted() {
        let set: RankedSkipList<_> = [3, 1, 2].into_iter().collect();
        assert_eq!(format!("{set:?}"), "{1, 2, 3}");
    }

    #[test]
    fn stress_interleaved() {
        let mut set = RankedSkipList::new();
        // 389 is coprime with 1000, so this visits every value once.
        for i in 0..1000usize {
            assert!(set.insert((i * 389) % 1000));
        }
        assert_eq!(set.len(), 1000);
        for i in 0..1000 {
            assert_eq!(set.get(i), Some(&i), "get({i})");
            assert_eq!(set.rank(&i), i, "rank({i})");
        }
        // Drop the even values.
        for x in (0..1000).step_by(2) {
            assert!(set.remove(&x));
        }
        assert_eq!(set.len(), 500);
        for i in 0..500 {
            let expected = i * 2 + 1;
            assert_eq!(set.get(i), Some(&expected), "get({i}) after removals");
            assert_eq!(set.rank(&expected), i);
        }
        let values: Vec<_> = set.iter().copied().collect();
        assert_eq!(values, (0..500).map(|i| i * 2 + 1).collect::<Vec<_>>());
    }

    #[test]
    fn non_copy_values() {
        let mut set: RankedSkipList<String> =
            ["pear", "apple", "quince"].into_iter().map(String::from).collect();
        assert_eq!(set.get(0).map(String::as_str), Some("apple"));
        assert_eq!(set.remove_at(1), Some("pear".to_string()));
        assert!(set.remove(&"quince".to_string()));
        set.clear();
        assert!(set.is_empty());
    }
}
