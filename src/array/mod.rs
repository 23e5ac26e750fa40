//! Two-pointer techniques over slices.
//!
//! Every function here is total: empty or degenerate input yields a sentinel
//! (`None`, `0` or an empty vector) instead of an error. Preconditions such
//! as sortedness are documented on each function and not checked.

pub mod in_place;
pub mod matrix;
pub mod search;
pub mod three_sum;
pub mod window;

pub use in_place::{merge_sorted_in_place, remove_duplicates_in_place, remove_element_in_place};
pub use matrix::spiral_order;
pub use search::{binary_search, find_min_rotated, find_peak, search_range, search_rotated};
pub use three_sum::{three_sum, two_sum_sorted};
pub use window::min_sub_array_len;
