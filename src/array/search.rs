use std::cmp::Ordering;

// =============================================================================
// Binary search template
//
// Both endpoints are inclusive and the loop runs while `left + 1 < right`,
// so it always exits with two adjacent candidates and can never spin on a
// two-element range. The endpoints are then checked explicitly after the
// loop. `left + (right - left) / 2` keeps the midpoint from overflowing.
// =============================================================================

/// Finds `target` in an ascending slice.
pub fn binary_search<T: Ord>(nums: &[T], target: &T) -> Option<usize> {
    if nums.is_empty() {
        return None;
    }
    let (mut left, mut right) = (0, nums.len() - 1);

    while left + 1 < right {
        let mid = left + (right - left) / 2;
        match nums[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => left = mid,
            Ordering::Greater => right = mid,
        }
    }

    if nums[left] == *target {
        Some(left)
    } else if nums[right] == *target {
        Some(right)
    } else {
        None
    }
}

/// First and last index of `target` in an ascending slice that may repeat
/// values.
pub fn search_range<T: Ord>(nums: &[T], target: &T) -> Option<(usize, usize)> {
    let first = first_position(nums, target)?;
    let last = last_position(nums, target)?;
    Some((first, last))
}

fn first_position<T: Ord>(nums: &[T], target: &T) -> Option<usize> {
    if nums.is_empty() {
        return None;
    }
    let (mut left, mut right) = (0, nums.len() - 1);

    while left + 1 < right {
        let mid = left + (right - left) / 2;
        if nums[mid] < *target {
            left = mid;
        } else {
            right = mid;
        }
    }

    if nums[left] == *target {
        Some(left)
    } else if nums[right] == *target {
        Some(right)
    } else {
        None
    }
}

fn last_position<T: Ord>(nums: &[T], target: &T) -> Option<usize> {
    if nums.is_empty() {
        return None;
    }
    let (mut left, mut right) = (0, nums.len() - 1);

    while left + 1 < right {
        let mid = left + (right - left) / 2;
        if nums[mid] <= *target {
            left = mid;
        } else {
            right = mid;
        }
    }

    if nums[right] == *target {
        Some(right)
    } else if nums[left] == *target {
        Some(left)
    } else {
        None
    }
}

/// Index of an element no smaller than its neighbours, treating both ends
/// as negative infinity. Adjacent elements are assumed distinct.
pub fn find_peak<T: Ord>(nums: &[T]) -> Option<usize> {
    if nums.is_empty() {
        return None;
    }
    let (mut left, mut right) = (0, nums.len() - 1);

    while left + 1 < right {
        let mid = left + (right - left) / 2;
        // Climb towards the larger neighbour; a peak lies on that side.
        if nums[mid] < nums[mid + 1] {
            left = mid;
        } else {
            right = mid;
        }
    }

    Some(if nums[left] >= nums[right] { left } else { right })
}

/// Finds `target` in a strictly ascending slice that was rotated at an
/// unknown pivot, e.g. `[4, 5, 6, 7, 0, 1, 2]`.
///
/// At every step one of `[left, mid]` and `[mid, right]` is monotonic;
/// comparing `nums[mid]` with `nums[left]` tells which. The target's range
/// check against that half decides which half to keep. Duplicates break the
/// monotonic-half test and are not supported.
pub fn search_rotated<T: Ord>(nums: &[T], target: &T) -> Option<usize> {
    if nums.is_empty() {
        return None;
    }
    let (mut left, mut right) = (0, nums.len() - 1);

    while left + 1 < right {
        let mid = left + (right - left) / 2;
        if nums[mid] == *target {
            return Some(mid);
        }

        if nums[left] < nums[mid] {
            if nums[left] <= *target && *target < nums[mid] {
                right = mid;
            } else {
                left = mid;
            }
        } else if nums[mid] < *target && *target <= nums[right] {
            left = mid;
        } else {
            right = mid;
        }
    }

    if nums[left] == *target {
        Some(left)
    } else if nums[right] == *target {
        Some(right)
    } else {
        None
    }
}

/// Index of the smallest element of a rotated strictly ascending slice,
/// which is also the rotation offset.
pub fn find_min_rotated<T: Ord>(nums: &[T]) -> Option<usize> {
    let last = nums.last()?;
    let (mut left, mut right) = (0, nums.len() - 1);

    while left + 1 < right {
        let mid = left + (right - left) / 2;
        if nums[mid] > *last {
            left = mid;
        } else {
            right = mid;
        }
    }

    Some(if nums[left] <= nums[right] { left } else { right })
}
