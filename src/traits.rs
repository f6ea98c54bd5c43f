//! Common traits for the containers in this crate
//!
//! This module provides the capability traits shared by interchangeable
//! container implementations:
//!
//! - [`PriorityQueue`]: Minimum-first queue supporting insert and peek
//! - [`Stack`]: LIFO sequence with O(1) push, pop and peek
//!
//! Queries against an empty container are modeled as `None`, never as errors.
//! The only fallible operation in the crate is checked heap seeding, which
//! reports a [`HeapError`].

use std::fmt;

/// Error type for heap construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The element at this 1-based position is smaller than its parent
    OrderViolation {
        /// Position of the offending element
        position: usize,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::OrderViolation { position } => {
                write!(
                    f,
                    "element at position {} is smaller than its parent",
                    position
                )
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Minimum-first priority queue
///
/// Elements serve as their own priority. Only insertion and peeking at the
/// minimum are provided; extraction is not part of this interface.
///
/// # Example
///
/// ```rust
/// use rust_basic_containers::PriorityQueue;
/// use rust_basic_containers::min_heap::MinHeap;
///
/// let mut heap = MinHeap::new();
/// heap.insert(5).insert(3).insert(8);
///
/// assert_eq!(heap.peek_min(), Some(&3));
/// assert_eq!(heap.len(), 3);
/// ```
pub trait PriorityQueue<T: Ord> {
    /// Creates a new empty queue
    fn new() -> Self;

    /// Returns true if the queue holds no elements
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Inserts an element, returning the queue for call chaining
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, value: T) -> &mut Self;

    /// Returns the minimum element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek_min(&self) -> Option<&T>;
}

/// Last-in, first-out sequence
///
/// Every implementation exposes the same observable behavior: for any
/// sequence of operations, two stacks of different realizations return the
/// same values and report the same length at every step.
///
/// # Example
///
/// ```rust
/// use rust_basic_containers::Stack;
/// use rust_basic_containers::linked_stack::LinkedStack;
///
/// let mut stack = LinkedStack::new();
/// Stack::push(&mut stack, 1);
/// Stack::push(&mut stack, 2);
///
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.len(), 1);
/// ```
pub trait Stack<T> {
    /// Creates a new empty stack
    fn new() -> Self;

    /// Returns true if the stack is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of items on the stack
    fn len(&self) -> usize;

    /// Places an item on top of the stack
    ///
    /// # Time Complexity
    /// O(1) (amortized for contiguous storage)
    fn push(&mut self, item: T);

    /// Removes and returns the top item
    ///
    /// # Time Complexity
    /// O(1)
    fn pop(&mut self) -> Option<T>;

    /// Returns the top item without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Returns a mutable reference to the top item
    fn peek_mut(&mut self) -> Option<&mut T>;
}
