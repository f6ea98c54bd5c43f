//! Binary min-heap priority queue
//!
//! An array-backed, implicit complete binary tree in level order. Positions
//! are 1-based: the root lives at position 1, the children of position `i`
//! at `2i` and `2i + 1`, and its parent at `i / 2`. Position 0 is reserved
//! and never holds an element, so no index correction is needed anywhere in
//! the arithmetic.
//!
//! Only insertion (with sift-up) and peeking at the minimum are provided.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `insert`   | O(log n)   |
//! | `peek_min` | O(1)       |
//! | `is_heap`  | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use rust_basic_containers::PriorityQueue;
//! use rust_basic_containers::min_heap::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! heap.insert(5).insert(3).insert(8).insert(1);
//!
//! assert_eq!(heap.peek_min(), Some(&1));
//! assert_eq!(heap.get(1), Some(&1));
//! assert!(heap.is_heap());
//! ```

use crate::traits::{HeapError, PriorityQueue};

/// Position of the root element
pub const ROOT: usize = 1;

/// Position of the parent of `position`
///
/// For the root this is 0, the reserved position, which never holds an element.
#[inline]
pub const fn parent_of(position: usize) -> usize {
    position / 2
}

/// Position of the left child of `position`
#[inline]
pub const fn left_child_of(position: usize) -> usize {
    position * 2
}

/// Position of the right child of `position`
#[inline]
pub const fn right_child_of(position: usize) -> usize {
    position * 2 + 1
}

/// A binary min-heap over self-ordered elements
///
/// The element at position 1 is always the minimum. Elements are stored
/// contiguously: position `p` lives at offset `p - 1` of the backing vector,
/// which stands in for the reserved slot 0.
#[derive(Debug, Clone)]
pub struct MinHeap<T: Ord> {
    /// Elements at positions 1..=len, in level order
    data: Vec<T>,
}

impl<T: Ord> PriorityQueue<T> for MinHeap<T> {
    fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn insert(&mut self, value: T) -> &mut Self {
        self.data.push(value);
        let position = self.sift_up(self.data.len());

        debug_assert!(
            !self.less_than_parent(position),
            "heap order violated at position {} after insert",
            position
        );

        self
    }

    fn peek_min(&self) -> Option<&T> {
        self.get(ROOT)
    }
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Builds a heap from elements already in heap order
    ///
    /// `elements[0]` is position 1, `elements[1]` position 2, and so on. The
    /// caller is responsible for the heap-order invariant; nothing is checked.
    /// Use [`try_from_level_order`](Self::try_from_level_order) to validate.
    pub fn from_level_order_unchecked(elements: Vec<T>) -> Self {
        Self { data: elements }
    }

    /// Builds a heap from elements in level order, validating heap order
    ///
    /// # Errors
    /// Returns `HeapError::OrderViolation` naming the first position whose
    /// element is smaller than its parent.
    pub fn try_from_level_order(elements: Vec<T>) -> Result<Self, HeapError> {
        let heap = Self { data: elements };
        match heap.first_violation() {
            Some(position) => Err(HeapError::OrderViolation { position }),
            None => Ok(heap),
        }
    }

    /// Returns the element at a 1-based position
    ///
    /// Position 0 is reserved and always yields `None`, as does any position
    /// past the last element.
    pub fn get(&self, position: usize) -> Option<&T> {
        position.checked_sub(1).and_then(|offset| self.data.get(offset))
    }

    /// Returns the elements at positions 1..=len in level order
    pub fn as_level_order(&self) -> &[T] {
        &self.data
    }

    /// Consumes the heap, returning its elements in level order
    pub fn into_level_order(self) -> Vec<T> {
        self.data
    }

    /// Returns true if every element is at least as large as its parent
    pub fn is_heap(&self) -> bool {
        self.first_violation().is_none()
    }

    fn first_violation(&self) -> Option<usize> {
        (ROOT + 1..=self.data.len()).find(|&position| self.less_than_parent(position))
    }

    /// Compares the element at `position` against its parent
    ///
    /// The root has no parent; the position bound is checked together with
    /// the comparison so the reserved position 0 is never read.
    #[inline]
    fn less_than_parent(&self, position: usize) -> bool {
        position > ROOT && self.data[position - 1] < self.data[parent_of(position) - 1]
    }

    /// Move element at position up until its parent is no larger
    ///
    /// Returns the position the element came to rest at.
    fn sift_up(&mut self, mut position: usize) -> usize {
        while self.less_than_parent(position) {
            let parent = parent_of(position);
            self.data.swap(position - 1, parent - 1);
            position = parent;
        }
        position
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
