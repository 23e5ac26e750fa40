//! Two-Pointer Patterns
//!
//! Linked-list and array traversal techniques built on two cursors: one
//! chasing the other, two converging from both ends, or a window sliding
//! over a slice.
//!
//! ## Patterns Covered
//!
//! 1. **List relinking** - reverse, middle, merge, removal with a sentinel slot
//! 2. **Composed list drills** - palindrome check, reorder, merge sort
//! 3. **Binary search** - plain, range, peak, rotated
//! 4. **Sliding window** - minimal subarray with a sum threshold
//! 5. **Converging pointers** - 3Sum, two-sum on sorted input
//! 6. **Boundary traversal** - spiral matrix order
//! 7. **In-place slices** - merge, dedup, element removal
//!
//! ## Running Drills
//!
//! ```bash
//! cargo run --bin drills -- drills.toml
//! ```
//!
//! ## Quick Example
//!
//! ```
//! use two_pointer_patterns::list::{self, merge_two_sorted};
//!
//! let merged = merge_two_sorted(list::from_vec(vec![1, 2, 3, 10]), list::from_vec(vec![4, 5, 6]));
//! assert_eq!(list::into_vec(merged), vec![1, 2, 3, 4, 5, 6, 10]);
//! ```

pub mod array;
pub mod config;
pub mod drill;
pub mod error;
pub mod list;
pub mod recursion;

pub use config::{Drill, DrillFile, Settings};
pub use drill::{run_all, run_drill, run_task, Expected, Outcome, Report, Summary, Task, Verdict};
pub use error::DrillError;
pub use list::{Link, ListNode};
