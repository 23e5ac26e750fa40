use super::Link;

/// Removes every node holding `target`.
///
/// `previous` starts at a sentinel slot ahead of the head, so dropping the
/// head itself is the same move as dropping any other node. Survivors keep
/// their relative order.
pub fn remove_value<T: PartialEq>(head: Link<T>, target: &T) -> Link<T> {
    let mut sentinel = head;
    let mut previous = &mut sentinel;

    while let Some(mut current) = previous.take() {
        if current.val == *target {
            *previous = current.next.take();
        } else {
            previous = &mut previous.insert(current).next;
        }
    }
    sentinel
}

/// Removes every value that occurs more than once, keeping none of its
/// copies: `[1, 1, 2, 3, 3]` becomes `[2]`.
///
/// The input must already be sorted ascending; on unsorted input only
/// adjacent repeats are detected. When `current` equals its successor the
/// whole run of equal values is skipped and `previous` is linked straight to
/// the first node past it.
pub fn remove_duplicates_sorted<T: PartialEq>(head: Link<T>) -> Link<T> {
    let mut sentinel = head;
    let mut previous = &mut sentinel;

    while let Some(mut current) = previous.take() {
        let repeated = current
            .next
            .as_deref()
            .is_some_and(|next| next.val == current.val);

        if repeated {
            let mut rest = current.next.take();
            while rest.as_deref().is_some_and(|node| node.val == current.val) {
                rest = rest.and_then(|mut node| node.next.take());
            }
            *previous = rest;
        } else {
            previous = &mut previous.insert(current).next;
        }
    }
    sentinel
}

/// Collapses each run of equal values to its first node:
/// `[1, 1, 2, 3, 3]` becomes `[1, 2, 3]`. Same sortedness precondition as
/// [`remove_duplicates_sorted`].
pub fn dedup_sorted<T: PartialEq>(mut head: Link<T>) -> Link<T> {
    let mut cursor = head.as_deref_mut();
    while let Some(node) = cursor {
        while node.next.as_deref().is_some_and(|next| next.val == node.val) {
            node.next = node.next.take().and_then(|mut next| next.next.take());
        }
        cursor = node.next.as_deref_mut();
    }
    head
}
