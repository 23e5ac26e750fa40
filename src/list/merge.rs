use super::Link;

/// Merges two ascending lists into one, reusing every node.
///
/// The output hangs off a sentinel slot. Instead of moving one node per
/// comparison, each round hands over the whole run of nodes from the side
/// holding the smaller head, stopping where the other side's head would have
/// to go next. Ties stay on the left list. Once either side runs dry the
/// remainder of the other is spliced on in one step.
pub fn merge_two_sorted<T: Ord>(mut left: Link<T>, mut right: Link<T>) -> Link<T> {
    let mut sentinel: Link<T> = None;
    let mut tail = &mut sentinel;

    loop {
        let take_left = match (left.as_deref(), right.as_deref()) {
            (Some(a), Some(b)) => a.val <= b.val,
            _ => break,
        };

        if take_left {
            *tail = left.take();
            tail = skip_run(tail, |val| right.as_deref().is_some_and(|b| *val <= b.val));
            left = tail.take();
        } else {
            *tail = right.take();
            tail = skip_run(tail, |val| left.as_deref().is_some_and(|a| *val < a.val));
            right = tail.take();
        }
    }

    *tail = if left.is_some() { left } else { right };
    sentinel
}

/// Alternates nodes from `first` and `second`, starting with `first`.
///
/// Whatever remains of the longer list is appended as is.
pub fn interleave<T>(first: Link<T>, second: Link<T>) -> Link<T> {
    let mut sentinel: Link<T> = None;
    let mut tail = &mut sentinel;
    let mut from = first;
    let mut other = second;

    while let Some(mut node) = from {
        from = other;
        other = node.next.take();
        tail = &mut tail.insert(node).next;
    }
    *tail = other;
    sentinel
}

// Advances `tail` past every node whose value satisfies `stays`.
fn skip_run<T>(mut tail: &mut Link<T>, mut stays: impl FnMut(&T) -> bool) -> &mut Link<T> {
    while tail.as_deref().is_some_and(|node| stays(&node.val)) {
        if let Some(node) = tail {
            tail = &mut node.next;
        }
    }
    tail
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{from_vec, into_vec};
    use proptest::prelude::*;

    #[test]
    fn test_merge_basic() {
        let merged = merge_two_sorted(from_vec(vec![1, 2, 3, 10]), from_vec(vec![4, 5, 6]));
        assert_eq!(into_vec(merged), vec![1, 2, 3, 4, 5, 6, 10]);
    }

    #[test]
    fn test_merge_alternating() {
        let merged = merge_two_sorted(from_vec(vec![1, 3, 5]), from_vec(vec![2, 4, 6]));
        assert_eq!(into_vec(merged), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_merge_with_empty_sides() {
        assert!(merge_two_sorted::<i32>(None, None).is_none());
        assert_eq!(into_vec(merge_two_sorted(from_vec(vec![1, 2]), None)), vec![1, 2]);
        assert_eq!(into_vec(merge_two_sorted(None, from_vec(vec![3]))), vec![3]);
    }

    #[test]
    fn test_merge_is_stable() {
        // Keyed compares on `value` only, so `origin` shows which list won a tie.
        let left = keyed(vec![(1, 'a'), (2, 'a'), (2, 'a'), (5, 'a')]);
        let right = keyed(vec![(2, 'b'), (5, 'b')]);
        let merged: Vec<(i32, char)> = into_vec(merge_two_sorted(left, right))
            .into_iter()
            .map(|key| (key.value, key.origin))
            .collect();
        assert_eq!(
            merged,
            vec![(1, 'a'), (2, 'a'), (2, 'a'), (2, 'b'), (5, 'a'), (5, 'b')]
        );
    }

    #[derive(Debug, Default)]
    struct Keyed {
        value: i32,
        origin: char,
    }

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.value == other.value
        }
    }

    impl Eq for Keyed {}

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.value.cmp(&other.value)
        }
    }

    fn keyed(pairs: Vec<(i32, char)>) -> Link<Keyed> {
        from_vec(
            pairs
                .into_iter()
                .map(|(value, origin)| Keyed { value, origin })
                .collect(),
        )
    }

    #[test]
    fn test_interleave() {
        let woven = interleave(from_vec(vec![1, 2, 3]), from_vec(vec![10, 20]));
        assert_eq!(into_vec(woven), vec![1, 10, 2, 20, 3]);

        let woven = interleave(from_vec(vec![1]), from_vec(vec![10, 20, 30]));
        assert_eq!(into_vec(woven), vec![1, 10, 20, 30]);

        assert_eq!(into_vec(interleave(None, from_vec(vec![4]))), vec![4]);
    }

    proptest! {
        #[test]
        fn test_merge_matches_sorted_concat(
            mut a in prop::collection::vec(-50i32..50, 0..40),
            mut b in prop::collection::vec(-50i32..50, 0..40),
        ) {
            a.sort();
            b.sort();
            let mut expected = a.clone();
            expected.extend(b.iter().copied());
            expected.sort();

            let merged = into_vec(merge_two_sorted(from_vec(a), from_vec(b)));
            prop_assert_eq!(merged, expected);
        }
    }
}
