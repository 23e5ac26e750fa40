//! Singly linked lists built from owned boxes.
//!
//! Every node owns the rest of the chain through `next`, so a list is just
//! its head `Link`. Algorithms take the head by value and hand back a new
//! head, relinking the caller's boxes instead of allocating.

pub mod compose;
pub mod merge;
pub mod middle;
pub mod remove;
pub mod reverse;

pub use compose::{is_palindrome, reorder_list, sort_list};
pub use merge::{interleave, merge_two_sorted};
pub use middle::{find_middle, split_at_middle};
pub use remove::{dedup_sorted, remove_duplicates_sorted, remove_value};
pub use reverse::{reverse, reverse_recursive};

use std::mem;

/// An empty list is `None`; otherwise the box is the head node.
pub type Link<T> = Option<Box<ListNode<T>>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode<T> {
    pub val: T,
    pub next: Link<T>,
}

impl<T> ListNode<T> {
    pub fn new(val: T) -> Self {
        ListNode { val, next: None }
    }
}

// Unlinks the tail one box at a time. The derived drop would recurse once
// per node and overflow the stack on long lists.
impl<T> Drop for ListNode<T> {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

// =============================================================================
// Building and inspecting lists
// =============================================================================

/// Builds a list holding `values` in order.
pub fn from_vec<T>(values: Vec<T>) -> Link<T> {
    values
        .into_iter()
        .rev()
        .fold(None, |next, val| Some(Box::new(ListNode { val, next })))
}

/// Consumes a list and returns its values in order.
///
/// Nodes implement `Drop`, so values are moved out with `mem::take`, which
/// leaves a default in each box before it is freed.
pub fn into_vec<T: Default>(mut head: Link<T>) -> Vec<T> {
    let mut values = Vec::new();
    while let Some(mut node) = head {
        head = node.next.take();
        values.push(mem::take(&mut node.val));
    }
    values
}

pub fn to_vec<T: Clone>(head: &Link<T>) -> Vec<T> {
    iter(head).cloned().collect()
}

pub fn len<T>(head: &Link<T>) -> usize {
    iter(head).count()
}

/// Borrowing iterator over the values of a list.
pub fn iter<T>(head: &Link<T>) -> Iter<'_, T> {
    Iter {
        next: head.as_deref(),
    }
}

/// Attaches `tail` after the last node of `head`.
pub fn append<T>(mut head: Link<T>, tail: Link<T>) -> Link<T> {
    let mut cursor = &mut head;
    while let Some(node) = cursor {
        cursor = &mut node.next;
    }
    *cursor = tail;
    head
}

pub struct Iter<'a, T> {
    next: Option<&'a ListNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_keeps_order() {
        let head = from_vec(vec![1, 2, 3]);
        assert_eq!(to_vec(&head), vec![1, 2, 3]);
        assert_eq!(len(&head), 3);
    }

    #[test]
    fn test_empty_list() {
        let head: Link<i32> = from_vec(Vec::new());
        assert!(head.is_none());
        assert_eq!(len(&head), 0);
        assert!(into_vec(head).is_empty());
    }

    #[test]
    fn test_into_vec_moves_values() {
        let head = from_vec(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(into_vec(head), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_append() {
        let joined = append(from_vec(vec![1, 2]), from_vec(vec![3, 4]));
        assert_eq!(into_vec(joined), vec![1, 2, 3, 4]);

        let onto_empty = append(None, from_vec(vec![7]));
        assert_eq!(into_vec(onto_empty), vec![7]);
    }

    #[test]
    fn test_long_list_drops_without_recursion() {
        let head = from_vec((0..1_000_000i64).collect());
        assert_eq!(len(&head), 1_000_000);
        drop(head);

        let values = into_vec(from_vec((0..1_000_000i64).collect()));
        assert_eq!(values.len(), 1_000_000);
        assert_eq!(values.last(), Some(&999_999));
    }

    #[test]
    fn test_node_new_has_no_next() {
        let node = ListNode::new(5);
        assert_eq!(node.val, 5);
        assert!(node.next.is_none());
    }
}
