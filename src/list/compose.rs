//! Drills that chain the basic list moves together.

use super::{append, interleave, iter, merge_two_sorted, reverse, split_at_middle, Link};

/// Checks whether the list reads the same in both directions.
///
/// Splits at the middle, reverses the second half and walks both halves in
/// step. The second half is reversed back and re-attached before returning,
/// so the caller's list is left exactly as it was.
pub fn is_palindrome<T: PartialEq>(head: &mut Link<T>) -> bool {
    let (front, back) = split_at_middle(head.take());
    let back = reverse(back);
    let symmetric = iter(&front).zip(iter(&back)).all(|(a, b)| a == b);
    *head = append(front, reverse(back));
    symmetric
}

/// Reorders `L0 -> L1 -> ... -> Ln` into `L0 -> Ln -> L1 -> Ln-1 -> ...`.
pub fn reorder_list<T>(head: Link<T>) -> Link<T> {
    let (front, back) = split_at_middle(head);
    interleave(front, reverse(back))
}

/// Stable merge sort: split at the middle, sort both halves, merge.
pub fn sort_list<T: Ord>(head: Link<T>) -> Link<T> {
    if head.as_deref().map_or(true, |node| node.next.is_none()) {
        return head;
    }
    let (front, back) = split_at_middle(head);
    merge_two_sorted(sort_list(front), sort_list(back))
}
