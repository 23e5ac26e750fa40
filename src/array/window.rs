/// Length of the shortest contiguous run of `nums` whose sum is at least
/// `target`, or `0` when no run qualifies.
///
/// Only valid for positive values: the window grows on the right until the
/// running sum reaches `target`, then shrinks from the left for as long as it
/// still does, recording the best length on every shrink.
pub fn min_sub_array_len(target: u64, nums: &[u32]) -> usize {
    let mut best = usize::MAX;
    let mut sum: u64 = 0;
    let mut left = 0;

    for (right, &value) in nums.iter().enumerate() {
        sum += u64::from(value);
        while sum >= target && left <= right {
            best = best.min(right - left + 1);
            sum -= u64::from(nums[left]);
            left += 1;
        }
    }

    if best == usize::MAX {
        0
    } else {
        best
    }
}
