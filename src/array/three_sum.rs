use std::cmp::Ordering;

/// Every distinct triplet of values summing to zero.
///
/// Sorts `nums` in place first. The outer loop fixes the smallest member
/// and stops as soon as it turns positive, since nothing to its right can
/// bring the sum back to zero. Repeated pivots are skipped, and after each
/// hit both inner pointers move past the values they just used, so no
/// triplet is reported twice. Each triplet comes out in non-decreasing order.
pub fn three_sum(nums: &mut [i64]) -> Vec<[i64; 3]> {
    nums.sort_unstable();
    let mut triplets = Vec::new();

    for first in 0..nums.len().saturating_sub(2) {
        let pivot = nums[first];
        if pivot > 0 {
            break;
        }
        if first > 0 && pivot == nums[first - 1] {
            continue;
        }

        let (mut left, mut right) = (first + 1, nums.len() - 1);
        while left < right {
            // Widened so extreme inputs cannot overflow.
            let sum = i128::from(pivot) + i128::from(nums[left]) + i128::from(nums[right]);
            match sum.cmp(&0) {
                Ordering::Less => left += 1,
                Ordering::Greater => right -= 1,
                Ordering::Equal => {
                    let (low, high) = (nums[left], nums[right]);
                    triplets.push([pivot, low, high]);
                    while left < right && nums[left] == low {
                        left += 1;
                    }
                    while left < right && nums[right] == high {
                        right -= 1;
                    }
                }
            }
        }
    }

    triplets
}

/// Indices of two entries of an ascending slice adding up to `target`,
/// found by walking one pointer in from each end.
pub fn two_sum_sorted(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    if nums.len() < 2 {
        return None;
    }
    let (mut left, mut right) = (0, nums.len() - 1);

    while left < right {
        let sum = i128::from(nums[left]) + i128::from(nums[right]);
        match sum.cmp(&i128::from(target)) {
            Ordering::Equal => return Some((left, right)),
            Ordering::Less => left += 1,
            Ordering::Greater => right -= 1,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn brute_force(nums: &[i64]) -> BTreeSet<[i64; 3]> {
        let mut found = BTreeSet::new();
        for i in 0..nums.len() {
            for j in i + 1..nums.len() {
                for k in j + 1..nums.len() {
                    if nums[i] + nums[j] + nums[k] == 0 {
                        let mut triplet = [nums[i], nums[j], nums[k]];
                        triplet.sort();
                        found.insert(triplet);
                    }
                }
            }
        }
        found
    }

    #[test]
    fn test_three_sum_example() {
        let mut nums = vec![-1, 0, 1, 2, -1, -4];
        let triplets: BTreeSet<[i64; 3]> = three_sum(&mut nums).into_iter().collect();
        let expected: BTreeSet<[i64; 3]> = [[-1, -1, 2], [-1, 0, 1]].into_iter().collect();
        assert_eq!(triplets, expected);
    }

    #[test]
    fn test_three_sum_no_duplicates() {
        let mut nums = vec![0, 0, 0, 0];
        assert_eq!(three_sum(&mut nums), vec![[0, 0, 0]]);

        let mut nums = vec![-2, 0, 0, 2, 2];
        assert_eq!(three_sum(&mut nums), vec![[-2, 0, 2]]);
    }

    #[test]
    fn test_three_sum_short_or_empty() {
        assert!(three_sum(&mut []).is_empty());
        assert!(three_sum(&mut [1, -1]).is_empty());
        assert!(three_sum(&mut [0, 1, 1]).is_empty());
    }

    #[test]
    fn test_three_sum_extreme_values() {
        let mut nums = vec![i64::MAX, i64::MAX, i64::MIN, 0];
        assert!(three_sum(&mut nums).is_empty());
    }

    #[test]
    fn test_two_sum_sorted() {
        assert_eq!(two_sum_sorted(&[2, 7, 11, 15], 9), Some((0, 1)));
        assert_eq!(two_sum_sorted(&[2, 3, 4], 6), Some((0, 2)));
        assert_eq!(two_sum_sorted(&[-1, 0], -1), Some((0, 1)));
        assert_eq!(two_sum_sorted(&[1, 2, 3], 10), None);
        assert_eq!(two_sum_sorted(&[5], 5), None);
    }

    proptest! {
        #[test]
        fn test_three_sum_matches_brute_force(values in prop::collection::vec(-10i64..10, 0..25)) {
            let expected = brute_force(&values);
            let mut nums = values.clone();
            let triplets = three_sum(&mut nums);

            let unique: BTreeSet<[i64; 3]> = triplets.iter().copied().collect();
            prop_assert_eq!(unique.len(), triplets.len());
            for triplet in &triplets {
                prop_assert!(triplet[0] <= triplet[1] && triplet[1] <= triplet[2]);
                prop_assert_eq!(triplet.iter().sum::<i64>(), 0);
            }
            prop_assert_eq!(unique, expected);
        }
    }
}
