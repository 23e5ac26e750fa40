use super::Link;

/// Reverses a list in place and returns the new head.
///
/// Walks with `previous` (initially empty) and `current` (initially the
/// head), pointing each node back at `previous`. Everything behind `current`
/// is already reversed and terminated. No node is allocated.
pub fn reverse<T>(head: Link<T>) -> Link<T> {
    let mut previous: Link<T> = None;
    let mut current = head;
    while let Some(mut node) = current {
        current = node.next.take();
        node.next = previous;
        previous = Some(node);
    }
    previous
}

/// Same relinking as [`reverse`], written as direct recursion.
///
/// Base case: an empty `current` means `previous` is the reversed list.
/// Recursive case: flip one node and recurse on the remainder. Depth equals
/// list length.
pub fn reverse_recursive<T>(head: Link<T>) -> Link<T> {
    fn flip<T>(current: Link<T>, previous: Link<T>) -> Link<T> {
        match current {
            None => previous,
            Some(mut node) => {
                let rest = node.next.take();
                node.next = previous;
                flip(rest, Some(node))
            }
        }
    }
    flip(head, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{from_vec, into_vec, to_vec};
    use proptest::prelude::*;

    #[test]
    fn test_reverse_basic() {
        let head = reverse(from_vec(vec![1, 2, 3, 4, 5]));
        assert_eq!(into_vec(head), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_reverse_short_lists_unchanged() {
        assert!(reverse::<i32>(None).is_none());
        assert_eq!(into_vec(reverse(from_vec(vec![9]))), vec![9]);
    }

    #[test]
    fn test_old_head_becomes_tail() {
        let head = reverse(from_vec(vec![1, 2]));
        let first = head.as_deref().unwrap();
        assert_eq!(first.val, 2);
        let last = first.next.as_deref().unwrap();
        assert_eq!(last.val, 1);
        assert!(last.next.is_none());
    }

    #[test]
    fn test_recursive_matches_iterative() {
        let values = vec![3, 1, 4, 1, 5, 9];
        assert_eq!(
            to_vec(&reverse_recursive(from_vec(values.clone()))),
            to_vec(&reverse(from_vec(values)))
        );
    }

    proptest! {
        #[test]
        fn test_reverse_twice_is_identity(values in prop::collection::vec(any::<i32>(), 0..64)) {
            let twice = reverse(reverse(from_vec(values.clone())));
            prop_assert_eq!(into_vec(twice), values);
        }

        #[test]
        fn test_reverse_matches_vec_reverse(values in prop::collection::vec(any::<i32>(), 0..64)) {
            let mut expected = values.clone();
            expected.reverse();
            prop_assert_eq!(into_vec(reverse_recursive(from_vec(values))), expected);
        }
    }
}
