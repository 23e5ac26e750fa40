//! Slice rewrites that keep the slot count fixed and only shrink the valid
//! prefix or overwrite content.

/// Merges the ascending `nums2` into `nums1`, whose first `valid` slots hold
/// an ascending run and whose tail has room for all of `nums2`.
///
/// Fills from the back with three cursors so nothing is overwritten before
/// it is read. On ties the `nums2` element is placed later, keeping `nums1`'s
/// equal elements first.
///
/// # Panics
///
/// If `nums1.len() < valid + nums2.len()`.
pub fn merge_sorted_in_place<T: Ord + Clone>(nums1: &mut [T], valid: usize, nums2: &[T]) {
    let mut read1 = valid;
    let mut read2 = nums2.len();
    let mut write = valid + nums2.len();

    while read2 > 0 {
        write -= 1;
        if read1 > 0 && nums1[read1 - 1] > nums2[read2 - 1] {
            nums1[write] = nums1[read1 - 1].clone();
            read1 -= 1;
        } else {
            nums1[write] = nums2[read2 - 1].clone();
            read2 -= 1;
        }
    }
}

/// Collapses runs of equal values in an ascending slice and returns the
/// length of the deduplicated prefix. Slots past it hold leftovers.
pub fn remove_duplicates_in_place<T: PartialEq>(nums: &mut [T]) -> usize {
    if nums.is_empty() {
        return 0;
    }
    let mut slow = 0;
    for fast in 1..nums.len() {
        if nums[fast] != nums[slow] {
            slow += 1;
            nums.swap(slow, fast);
        }
    }
    slow + 1
}

/// Moves every element not equal to `target` to the front, keeping their
/// order, and returns how many there are.
pub fn remove_element_in_place<T: PartialEq>(nums: &mut [T], target: &T) -> usize {
    let mut slow = 0;
    for fast in 0..nums.len() {
        if nums[fast] != *target {
            nums.swap(slow, fast);
            slow += 1;
        }
    }
    slow
}
