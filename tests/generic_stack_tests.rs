//! Generic tests for all Stack implementations
//!
//! These tests work with any Stack implementation and exercise the trait
//! interface with edge cases and mixed scenarios.

use rust_basic_containers::linked_stack::LinkedStack;
use rust_basic_containers::vec_stack::VecStack;
use rust_basic_containers::Stack;

/// Test that an empty stack behaves correctly
fn test_empty_stack<S: Stack<String>>() {
    let mut stack = S::new();
    assert!(stack.is_empty());
    assert_eq!(stack.len(), 0);
    assert_eq!(stack.peek(), None);
    assert_eq!(stack.peek_mut(), None);
    assert_eq!(stack.pop(), None);
    assert!(stack.is_empty());
    assert_eq!(stack.len(), 0);
}

/// Test the push/peek/pop walkthrough
fn test_basic_operations<S: Stack<i32>>() {
    let mut stack = S::new();

    stack.push(1);
    assert!(!stack.is_empty());
    stack.push(2);
    stack.push(3);

    assert_eq!(stack.peek(), Some(&3));
    assert_eq!(stack.len(), 3);
    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.pop(), Some(2));
    assert_eq!(stack.pop(), Some(1));
    assert!(stack.is_empty());
}

/// Peek never removes anything
fn test_peek_is_idempotent<S: Stack<&'static str>>() {
    let mut stack = S::new();
    stack.push("bottom");
    stack.push("top");

    assert_eq!(stack.peek(), Some(&"top"));
    assert_eq!(stack.peek(), Some(&"top"));
    assert_eq!(stack.len(), 2);
}

/// Mutating through peek_mut changes what pop returns
fn test_peek_mut<S: Stack<Vec<u8>>>() {
    let mut stack = S::new();
    stack.push(vec![1]);
    stack.push(vec![2]);

    if let Some(top) = stack.peek_mut() {
        top.push(3);
    }

    assert_eq!(stack.pop(), Some(vec![2, 3]));
    assert_eq!(stack.pop(), Some(vec![1]));
}

/// Interleaved pushes and pops keep LIFO order
fn test_interleaved<S: Stack<i32>>() {
    let mut stack = S::new();

    stack.push(1);
    stack.push(2);
    assert_eq!(stack.pop(), Some(2));
    stack.push(3);
    stack.push(4);
    assert_eq!(stack.pop(), Some(4));
    assert_eq!(stack.pop(), Some(3));
    stack.push(5);
    assert_eq!(stack.pop(), Some(5));
    assert_eq!(stack.pop(), Some(1));
    assert_eq!(stack.pop(), None);
}

/// Popping past empty is harmless and the stack stays usable
fn test_reuse_after_empty<S: Stack<i32>>() {
    let mut stack = S::new();

    for _ in 0..3 {
        assert_eq!(stack.pop(), None);
    }
    stack.push(9);
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.pop(), Some(9));
    assert!(stack.is_empty());
}

/// Items that own heap memory are released correctly on pop and drop
fn test_owned_items<S: Stack<String>>() {
    let mut stack = S::new();

    for i in 0..50 {
        stack.push(format!("item-{}", i));
    }
    assert_eq!(stack.pop().as_deref(), Some("item-49"));
    assert_eq!(stack.len(), 49);
}

macro_rules! generic_stack_tests {
    ($module:ident, $stack:ident) => {
        mod $module {
            use super::*;

            #[test]
            fn empty_stack() {
                test_empty_stack::<$stack<String>>();
            }

            #[test]
            fn basic_operations() {
                test_basic_operations::<$stack<i32>>();
            }

            #[test]
            fn peek_is_idempotent() {
                test_peek_is_idempotent::<$stack<&'static str>>();
            }

            #[test]
            fn peek_mut() {
                test_peek_mut::<$stack<Vec<u8>>>();
            }

            #[test]
            fn interleaved() {
                test_interleaved::<$stack<i32>>();
            }

            #[test]
            fn reuse_after_empty() {
                test_reuse_after_empty::<$stack<i32>>();
            }

            #[test]
            fn owned_items() {
                test_owned_items::<$stack<String>>();
            }
        }
    };
}

generic_stack_tests!(vec_stack, VecStack);
generic_stack_tests!(linked_stack, LinkedStack);

#[cfg(feature = "arena-storage")]
use rust_basic_containers::arena_stack::ArenaStack;
#[cfg(feature = "arena-storage")]
generic_stack_tests!(arena_stack, ArenaStack);

#[test]
fn display_matches_across_realizations() {
    let vec_stack: VecStack<i32> = (1..=3).collect();
    let linked_stack: LinkedStack<i32> = (1..=3).collect();

    assert_eq!(vec_stack.to_string(), "3, 2, 1");
    assert_eq!(linked_stack.to_string(), "3, 2, 1");
}
