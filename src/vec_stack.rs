//! Contiguous-storage stack
//!
//! The top of the stack is the end of a `Vec`: push appends, pop removes the
//! last element and peek reads it.
//!
//! # Example
//!
//! ```rust
//! use rust_basic_containers::Stack;
//! use rust_basic_containers::vec_stack::VecStack;
//!
//! let mut stack = VecStack::new();
//! stack.push(1);
//! stack.push(2);
//! stack.push(3);
//!
//! assert_eq!(stack.to_string(), "3, 2, 1");
//! assert_eq!(stack.pop(), Some(3));
//! assert_eq!(stack.len(), 2);
//! ```

use std::fmt;

use crate::traits::Stack;

/// A stack backed by a growable array
#[derive(Debug, Clone)]
pub struct VecStack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> for VecStack<T> {
    fn new() -> Self {
        Self { items: Vec::new() }
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }
}

impl<T> VecStack<T> {
    /// Creates an empty stack with room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Iterates from the top of the stack to the bottom
    pub fn iter(&self) -> std::iter::Rev<std::slice::Iter<'_, T>> {
        self.items.iter().rev()
    }

    /// Removes every item
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for VecStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for VecStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for VecStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for VecStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}
