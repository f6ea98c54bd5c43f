//! Singly-linked stack
//!
//! Each node exclusively owns the next node in the chain through a `Box`, and
//! the stack owns the head. Push links a new node in front of the head; pop
//! detaches the head, hands ownership of the rest of the chain back to the
//! stack, and drops the detached node. No traversal happens on either path.
//!
//! The length is kept in a running counter, changed exactly once per push and
//! per successful pop.
//!
//! # Example
//!
//! ```rust
//! use rust_basic_containers::Stack;
//! use rust_basic_containers::linked_stack::LinkedStack;
//!
//! let mut stack = LinkedStack::new();
//! assert!(stack.is_empty());
//!
//! stack.push(1);
//! stack.push(2);
//! stack.push(3);
//!
//! assert_eq!(stack.peek(), Some(&3));
//! assert_eq!(stack.to_string(), "3, 2, 1");
//! assert_eq!(stack.pop(), Some(3));
//! assert_eq!(stack.to_string(), "2, 1");
//! assert_eq!(stack.len(), 2);
//! ```

use std::fmt;

use crate::traits::Stack;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    item: T,
    next: Link<T>,
}

/// A stack built from a chain of owned nodes
pub struct LinkedStack<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Stack<T> for LinkedStack<T> {
    fn new() -> Self {
        Self { head: None, len: 0 }
    }

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn push(&mut self, item: T) {
        let node = Box::new(Node {
            item,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;

        #[cfg(debug_assertions)]
        self.assert_len_consistent();
    }

    fn pop(&mut self) -> Option<T> {
        let node = self.head.take()?;
        let Node { item, next } = *node;
        self.head = next;
        self.len -= 1;

        #[cfg(debug_assertions)]
        self.assert_len_consistent();

        Some(item)
    }

    fn peek(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.item)
    }

    fn peek_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.item)
    }
}

impl<T> LinkedStack<T> {
    /// Iterates from the top of the stack to the bottom
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Removes every item
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    #[cfg(debug_assertions)]
    fn assert_len_consistent(&self) {
        assert_eq!(
            self.head.is_none(),
            self.len == 0,
            "length counter {} disagrees with chain",
            self.len
        );
    }
}

// Unlink node by node; the default drop would recurse once per node.
impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedStack<T> {
    fn clone(&self) -> Self {
        let items: Vec<&T> = self.iter().collect();
        items.into_iter().rev().cloned().collect()
    }
}

impl<T> Extend<T> for LinkedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut runner = self.head.as_deref();
        while let Some(node) = runner {
            write!(f, "{}", node.item)?;
            if node.next.is_some() {
                f.write_str(", ")?;
            }
            runner = node.next.as_deref();
        }
        Ok(())
    }
}

/// Top-to-bottom iterator over a [`LinkedStack`]
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
