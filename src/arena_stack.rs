//! Arena-backed singly-linked stack
//!
//! The same chain as [`LinkedStack`](crate::linked_stack::LinkedStack), but
//! nodes live contiguously in a `slotmap` arena and link to their successor
//! by key instead of by `Box`. Each key is held by exactly one predecessor
//! (or by the stack as its head), so ownership of the chain stays single and
//! linear; popping removes the head node from the arena.
//!
//! # Feature Flag
//! Requires the `arena-storage` feature to be enabled.
//!
//! # Example
//!
//! ```rust
//! use rust_basic_containers::Stack;
//! use rust_basic_containers::arena_stack::ArenaStack;
//!
//! let mut stack = ArenaStack::new();
//! stack.push("a");
//! stack.push("b");
//!
//! assert_eq!(stack.pop(), Some("b"));
//! assert_eq!(stack.peek(), Some(&"a"));
//! ```

use std::fmt;

use slotmap::{new_key_type, SlotMap};

use crate::traits::Stack;

new_key_type! {
    /// Arena key for a stack node
    pub struct StackNodeKey;
}

#[derive(Debug, Clone)]
struct Node<T> {
    item: T,
    next: Option<StackNodeKey>,
}

/// A stack whose node chain lives in a `slotmap` arena
#[derive(Clone)]
pub struct ArenaStack<T> {
    nodes: SlotMap<StackNodeKey, Node<T>>,
    head: Option<StackNodeKey>,
    len: usize,
}

impl<T> Stack<T> for ArenaStack<T> {
    fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: None,
            len: 0,
        }
    }

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn push(&mut self, item: T) {
        let next = self.head.take();
        self.head = Some(self.nodes.insert(Node { item, next }));
        self.len += 1;

        #[cfg(debug_assertions)]
        self.assert_len_consistent();
    }

    fn pop(&mut self) -> Option<T> {
        let key = self.head?;
        let node = self.nodes.remove(key)?;
        self.head = node.next;
        self.len -= 1;

        #[cfg(debug_assertions)]
        self.assert_len_consistent();

        Some(node.item)
    }

    fn peek(&self) -> Option<&T> {
        self.head
            .and_then(|key| self.nodes.get(key))
            .map(|node| &node.item)
    }

    fn peek_mut(&mut self) -> Option<&mut T> {
        let key = self.head?;
        self.nodes.get_mut(key).map(|node| &mut node.item)
    }
}

impl<T> ArenaStack<T> {
    /// Creates an empty stack with arena room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(capacity),
            head: None,
            len: 0,
        }
    }

    /// Iterates from the top of the stack to the bottom
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            next: self.head,
        }
    }

    /// Removes every item
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
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
        assert_eq!(self.nodes.len(), self.len, "arena holds unlinked nodes");
    }
}

impl<T> Default for ArenaStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for ArenaStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for ArenaStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T: fmt::Debug> fmt::Debug for ArenaStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArenaStack<T> {
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

/// Top-to-bottom iterator over an [`ArenaStack`]
pub struct Iter<'a, T> {
    nodes: &'a SlotMap<StackNodeKey, Node<T>>,
    next: Option<StackNodeKey>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.next?)?;
        self.next = node.next;
        Some(&node.item)
    }
}
