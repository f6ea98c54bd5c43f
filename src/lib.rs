//! Basic container data types for Rust
//!
//! This crate provides two building-block abstract data types:
//!
//! - **Min-Heap Priority Queue**: array-backed implicit complete binary tree with
//!   1-based positions; O(log n) insert via sift-up, O(1) peek at the minimum
//! - **Stack**: LIFO sequence with O(1) push, pop and peek, in interchangeable
//!   realizations:
//!   - [`VecStack`](vec_stack::VecStack): contiguous storage
//!   - [`LinkedStack`](linked_stack::LinkedStack): chain of owned boxed nodes
//!   - `ArenaStack`: node chain in a `slotmap` arena (feature `arena-storage`)
//!
//! Queries against an empty container return `None`; no operation fails.
//!
//! # Example
//!
//! ```rust
//! use rust_basic_containers::min_heap::MinHeap;
//! use rust_basic_containers::vec_stack::VecStack;
//! use rust_basic_containers::{PriorityQueue, Stack};
//!
//! let mut heap = MinHeap::new();
//! heap.insert(5).insert(3).insert(8).insert(1);
//! assert_eq!(heap.peek_min(), Some(&1));
//!
//! let mut stack = VecStack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.pop(), Some(2));
//! ```

#[cfg(feature = "arena-storage")]
pub mod arena_stack;
pub mod linked_stack;
pub mod min_heap;
pub mod traits;
pub mod vec_stack;

// Re-export the main traits for convenience
pub use traits::{HeapError, PriorityQueue, Stack};
