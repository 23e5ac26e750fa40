use super::{Link, ListNode};

/// Returns the middle node of a non-empty list.
///
/// For an even length this is the second of the two middle nodes, so the
/// result always sits at index `len / 2`: `[1, 2, 3, 4]` yields `3`.
pub fn find_middle<T>(head: &ListNode<T>) -> &ListNode<T> {
    walk_to_middle(head).1
}

/// Cuts the list right before its middle node.
///
/// Returns `(first_half, second_half)` where the second half starts at the
/// node [`find_middle`] would return. The first half is at most as long as
/// the second one; a single node ends up alone in the second half.
pub fn split_at_middle<T>(mut head: Link<T>) -> (Link<T>, Link<T>) {
    let steps = match head.as_deref() {
        Some(node) => walk_to_middle(node).0,
        None => return (None, None),
    };

    let mut cursor = &mut head;
    for _ in 0..steps {
        match cursor {
            Some(node) => cursor = &mut node.next,
            None => break,
        }
    }
    let second = cursor.take();
    (head, second)
}

// Slow moves one node per round while fast moves two; returns how many
// times slow moved along with where it stopped.
fn walk_to_middle<T>(head: &ListNode<T>) -> (usize, &ListNode<T>) {
    let mut slow = head;
    let mut fast = Some(head);
    let mut steps = 0;

    while let Some(ahead) = fast.and_then(|node| node.next.as_deref()) {
        let Some(next) = slow.next.as_deref() else {
            break;
        };
        slow = next;
        fast = ahead.next.as_deref();
        steps += 1;
    }
    (steps, slow)
}
