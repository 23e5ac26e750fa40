//! Running configured drills and checking their results.
//!
//! The algorithms themselves never fail; they document preconditions and
//! return sentinels. A drill file is untrusted input though, so `run_task`
//! checks each precondition first and turns a violation into
//! [`DrillError::InvalidInput`] rather than computing an unspecified answer.

use crate::array;
use crate::config::{Drill, DrillFile};
use crate::error::DrillError;
use crate::list;
use crate::recursion;
use itertools::Itertools;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, info, warn};

// =============================================================================
// Tasks
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Task {
    Reverse { values: Vec<i64> },
    /// Rejected past [`MAX_RECURSIVE_LEN`] values.
    ReverseRecursive { values: Vec<i64> },
    FindMiddle { values: Vec<i64> },
    SplitAtMiddle { values: Vec<i64> },
    MergeTwoSorted { left: Vec<i64>, right: Vec<i64> },
    Interleave { first: Vec<i64>, second: Vec<i64> },
    RemoveValue { values: Vec<i64>, target: i64 },
    RemoveDuplicatesSorted { values: Vec<i64> },
    DedupSorted { values: Vec<i64> },
    IsPalindrome { values: Vec<i64> },
    ReorderList { values: Vec<i64> },
    SortList { values: Vec<i64> },
    BinarySearch { nums: Vec<i64>, target: i64 },
    SearchRange { nums: Vec<i64>, target: i64 },
    FindPeak { nums: Vec<i64> },
    SearchRotated { nums: Vec<i64>, target: i64 },
    FindMinRotated { nums: Vec<i64> },
    MinSubArrayLen { target: i64, nums: Vec<i64> },
    ThreeSum { nums: Vec<i64> },
    TwoSumSorted { nums: Vec<i64>, target: i64 },
    SpiralOrder { matrix: Vec<Vec<i64>> },
    MergeSortedInPlace { nums1: Vec<i64>, valid: usize, nums2: Vec<i64> },
    RemoveDuplicatesInPlace { nums: Vec<i64> },
    RemoveElementInPlace { nums: Vec<i64>, target: i64 },
    Factorial { n: u32 },
    Power { base: i64, exp: u32 },
}

impl Task {
    /// The `op` name used in drill files.
    pub fn op(&self) -> &'static str {
        match self {
            Task::Reverse { .. } => "reverse",
            Task::ReverseRecursive { .. } => "reverse_recursive",
            Task::FindMiddle { .. } => "find_middle",
            Task::SplitAtMiddle { .. } => "split_at_middle",
            Task::MergeTwoSorted { .. } => "merge_two_sorted",
            Task::Interleave { .. } => "interleave",
            Task::RemoveValue { .. } => "remove_value",
            Task::RemoveDuplicatesSorted { .. } => "remove_duplicates_sorted",
            Task::DedupSorted { .. } => "dedup_sorted",
            Task::IsPalindrome { .. } => "is_palindrome",
            Task::ReorderList { .. } => "reorder_list",
            Task::SortList { .. } => "sort_list",
            Task::BinarySearch { .. } => "binary_search",
            Task::SearchRange { .. } => "search_range",
            Task::FindPeak { .. } => "find_peak",
            Task::SearchRotated { .. } => "search_rotated",
            Task::FindMinRotated { .. } => "find_min_rotated",
            Task::MinSubArrayLen { .. } => "min_sub_array_len",
            Task::ThreeSum { .. } => "three_sum",
            Task::TwoSumSorted { .. } => "two_sum_sorted",
            Task::SpiralOrder { .. } => "spiral_order",
            Task::MergeSortedInPlace { .. } => "merge_sorted_in_place",
            Task::RemoveDuplicatesInPlace { .. } => "remove_duplicates_in_place",
            Task::RemoveElementInPlace { .. } => "remove_element_in_place",
            Task::Factorial { .. } => "factorial",
            Task::Power { .. } => "power",
        }
    }
}

// =============================================================================
// Expected values and outcomes
// =============================================================================

/// What a drill file may state under `expect`.
///
/// Absent results (an index that was not found, an overflowing product) are
/// written as `false`; index-like results also accept `-1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expected {
    Flag(bool),
    Number(i64),
    Sequence(Vec<i64>),
    Nested(Vec<Vec<i64>>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    List(Vec<i64>),
    Halves(Vec<i64>, Vec<i64>),
    Sequence(Vec<i64>),
    Index(Option<usize>),
    Pair(Option<(usize, usize)>),
    Length(usize),
    Flag(bool),
    Value(Option<i64>),
    Triplets(Vec<[i64; 3]>),
}

impl Outcome {
    pub fn matches(&self, expected: &Expected) -> bool {
        match (self, expected) {
            (Outcome::List(values) | Outcome::Sequence(values), Expected::Sequence(want)) => {
                values == want
            }
            (Outcome::Halves(first, second), Expected::Nested(want)) => {
                want.len() == 2 && *first == want[0] && *second == want[1]
            }
            (Outcome::Halves(first, second), Expected::Sequence(want)) => {
                // `[]` for two empty halves
                want.is_empty() && first.is_empty() && second.is_empty()
            }
            (Outcome::Index(found), Expected::Number(want)) => match found {
                Some(index) => index_eq(*index, *want),
                None => *want == -1,
            },
            (Outcome::Pair(found), Expected::Sequence(want)) => match found {
                Some((a, b)) => want.len() == 2 && index_eq(*a, want[0]) && index_eq(*b, want[1]),
                None => false,
            },
            (Outcome::Pair(None), Expected::Number(-1)) => true,
            (Outcome::Length(len), Expected::Number(want)) => index_eq(*len, *want),
            (Outcome::Flag(flag), Expected::Flag(want)) => flag == want,
            (Outcome::Value(Some(value)), Expected::Number(want)) => value == want,
            (Outcome::Triplets(triplets), Expected::Nested(want)) => {
                let actual: BTreeSet<Vec<i64>> = triplets.iter().map(|t| t.to_vec()).collect();
                let wanted: BTreeSet<Vec<i64>> = want
                    .iter()
                    .map(|t| t.iter().copied().sorted().collect::<Vec<i64>>())
                    .collect();
                actual.len() == triplets.len() && actual == wanted
            }
            (Outcome::Triplets(triplets), Expected::Sequence(want)) => {
                want.is_empty() && triplets.is_empty()
            }
            (
                Outcome::Index(None) | Outcome::Pair(None) | Outcome::Value(None),
                Expected::Flag(false),
            ) => true,
            _ => false,
        }
    }
}

fn index_eq(index: usize, want: i64) -> bool {
    i64::try_from(index).is_ok_and(|index| index == want)
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::List(values) => write!(f, "{}", values.iter().join(" -> ")),
            Outcome::Halves(first, second) => write!(
                f,
                "[{}] | [{}]",
                first.iter().join(" -> "),
                second.iter().join(" -> ")
            ),
            Outcome::Sequence(values) => write!(f, "[{}]", values.iter().join(", ")),
            Outcome::Index(Some(index)) | Outcome::Length(index) => write!(f, "{index}"),
            Outcome::Index(None) => write!(f, "not found"),
            Outcome::Pair(Some((a, b))) => write!(f, "({a}, {b})"),
            Outcome::Pair(None) => write!(f, "not found"),
            Outcome::Flag(flag) => write!(f, "{flag}"),
            Outcome::Value(Some(value)) => write!(f, "{value}"),
            Outcome::Value(None) => write!(f, "overflow"),
            Outcome::Triplets(triplets) => write!(
                f,
                "{{{}}}",
                triplets
                    .iter()
                    .map(|t| format!("[{}]", t.iter().join(", ")))
                    .join(", ")
            ),
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Flag(flag) => write!(f, "{flag}"),
            Expected::Number(value) => write!(f, "{value}"),
            Expected::Sequence(values) => write!(f, "[{}]", values.iter().join(", ")),
            Expected::Nested(rows) => write!(
                f,
                "[{}]",
                rows.iter()
                    .map(|row| format!("[{}]", row.iter().join(", ")))
                    .join(", ")
            ),
        }
    }
}

// =============================================================================
// Running a task
// =============================================================================

fn require_sorted(op: &'static str, what: &str, values: &[i64]) -> Result<(), DrillError> {
    if values.windows(2).all(|w| w[0] <= w[1]) {
        Ok(())
    } else {
        Err(DrillError::invalid_input(op, format!("{what} must be sorted ascending")))
    }
}

fn require_distinct_neighbours(op: &'static str, values: &[i64]) -> Result<(), DrillError> {
    if values.windows(2).all(|w| w[0] != w[1]) {
        Ok(())
    } else {
        Err(DrillError::invalid_input(op, "adjacent values must differ"))
    }
}

// A rotation of a strictly ascending run descends at most once, counting
// the wrap from the last element back to the first.
fn require_rotated_ascending(op: &'static str, nums: &[i64]) -> Result<(), DrillError> {
    require_distinct_neighbours(op, nums)?;
    if nums.len() > 1 && nums.first() == nums.last() {
        return Err(DrillError::invalid_input(op, "first and last values must differ"));
    }
    let descents = (0..nums.len())
        .filter(|&i| nums[i] > nums[(i + 1) % nums.len()])
        .count();
    if descents <= 1 {
        Ok(())
    } else {
        Err(DrillError::invalid_input(
            op,
            "nums must be a rotated strictly ascending array",
        ))
    }
}

/// Longest list `reverse_recursive` accepts from a drill file. Its recursion
/// is one frame per node.
pub const MAX_RECURSIVE_LEN: usize = 1_000;

fn list_outcome(head: list::Link<i64>) -> Outcome {
    Outcome::List(list::into_vec(head))
}

/// Runs one task against the toolkit.
pub fn run_task(task: &Task) -> Result<Outcome, DrillError> {
    let op = task.op();
    let outcome = match task {
        Task::Reverse { values } => list_outcome(list::reverse(list::from_vec(values.clone()))),
        Task::ReverseRecursive { values } => {
            if values.len() > MAX_RECURSIVE_LEN {
                return Err(DrillError::invalid_input(
                    op,
                    format!("at most {MAX_RECURSIVE_LEN} values, got {}", values.len()),
                ));
            }
            list_outcome(list::reverse_recursive(list::from_vec(values.clone())))
        }
        Task::FindMiddle { values } => {
            let head = list::from_vec(values.clone());
            let node = head
                .as_deref()
                .ok_or_else(|| DrillError::invalid_input(op, "list must not be empty"))?;
            Outcome::Value(Some(list::find_middle(node).val))
        }
        Task::SplitAtMiddle { values } => {
            let (first, second) = list::split_at_middle(list::from_vec(values.clone()));
            Outcome::Halves(list::into_vec(first), list::into_vec(second))
        }
        Task::MergeTwoSorted { left, right } => {
            require_sorted(op, "left", left)?;
            require_sorted(op, "right", right)?;
            list_outcome(list::merge_two_sorted(
                list::from_vec(left.clone()),
                list::from_vec(right.clone()),
            ))
        }
        Task::Interleave { first, second } => list_outcome(list::interleave(
            list::from_vec(first.clone()),
            list::from_vec(second.clone()),
        )),
        Task::RemoveValue { values, target } => {
            list_outcome(list::remove_value(list::from_vec(values.clone()), target))
        }
        Task::RemoveDuplicatesSorted { values } => {
            require_sorted(op, "values", values)?;
            list_outcome(list::remove_duplicates_sorted(list::from_vec(values.clone())))
        }
        Task::DedupSorted { values } => {
            require_sorted(op, "values", values)?;
            list_outcome(list::dedup_sorted(list::from_vec(values.clone())))
        }
        Task::IsPalindrome { values } => {
            let mut head = list::from_vec(values.clone());
            Outcome::Flag(list::is_palindrome(&mut head))
        }
        Task::ReorderList { values } => {
            list_outcome(list::reorder_list(list::from_vec(values.clone())))
        }
        Task::SortList { values } => list_outcome(list::sort_list(list::from_vec(values.clone()))),
        Task::BinarySearch { nums, target } => {
            require_sorted(op, "nums", nums)?;
            Outcome::Index(array::binary_search(nums, target))
        }
        Task::SearchRange { nums, target } => {
            require_sorted(op, "nums", nums)?;
            Outcome::Pair(array::search_range(nums, target))
        }
        Task::FindPeak { nums } => {
            require_distinct_neighbours(op, nums)?;
            Outcome::Index(array::find_peak(nums))
        }
        Task::SearchRotated { nums, target } => {
            require_rotated_ascending(op, nums)?;
            Outcome::Index(array::search_rotated(nums, target))
        }
        Task::FindMinRotated { nums } => {
            require_rotated_ascending(op, nums)?;
            Outcome::Index(array::find_min_rotated(nums))
        }
        Task::MinSubArrayLen { target, nums } => {
            let target = u64::try_from(*target)
                .map_err(|_| DrillError::invalid_input(op, "target must not be negative"))?;
            let nums = nums
                .iter()
                .map(|&value| u32::try_from(value).ok().filter(|value| *value > 0))
                .collect::<Option<Vec<u32>>>()
                .ok_or_else(|| {
                    DrillError::invalid_input(op, "nums must be positive 32-bit integers")
                })?;
            Outcome::Length(array::min_sub_array_len(target, &nums))
        }
        Task::ThreeSum { nums } => {
            let mut nums = nums.clone();
            Outcome::Triplets(array::three_sum(&mut nums))
        }
        Task::TwoSumSorted { nums, target } => {
            require_sorted(op, "nums", nums)?;
            Outcome::Pair(array::two_sum_sorted(nums, *target))
        }
        Task::SpiralOrder { matrix } => {
            let width = matrix.first().map_or(0, Vec::len);
            if matrix.iter().any(|row| row.len() != width) {
                return Err(DrillError::invalid_input(op, "matrix rows must have equal length"));
            }
            Outcome::Sequence(array::spiral_order(matrix))
        }
        Task::MergeSortedInPlace { nums1, valid, nums2 } => {
            if *valid > nums1.len() || nums1.len() - valid < nums2.len() {
                return Err(DrillError::invalid_input(
                    op,
                    format!(
                        "nums1 has {} slots, needs room for {} + {}",
                        nums1.len(),
                        valid,
                        nums2.len()
                    ),
                ));
            }
            require_sorted(op, "nums1 prefix", &nums1[..*valid])?;
            require_sorted(op, "nums2", nums2)?;
            let mut merged = nums1.clone();
            array::merge_sorted_in_place(&mut merged, *valid, nums2);
            merged.truncate(valid + nums2.len());
            Outcome::Sequence(merged)
        }
        Task::RemoveDuplicatesInPlace { nums } => {
            require_sorted(op, "nums", nums)?;
            let mut nums = nums.clone();
            let valid = array::remove_duplicates_in_place(&mut nums);
            nums.truncate(valid);
            Outcome::Sequence(nums)
        }
        Task::RemoveElementInPlace { nums, target } => {
            let mut nums = nums.clone();
            let valid = array::remove_element_in_place(&mut nums, target);
            nums.truncate(valid);
            Outcome::Sequence(nums)
        }
        Task::Factorial { n } => Outcome::Value(
            recursion::factorial(*n).and_then(|value| i64::try_from(value).ok()),
        ),
        Task::Power { base, exp } => Outcome::Value(recursion::power(*base, *exp)),
    };
    Ok(outcome)
}

// =============================================================================
// Verdicts and summaries
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Passed(Outcome),
    Failed { expected: Expected, actual: Outcome },
    /// Ran fine, but the drill states no expectation.
    Unchecked(Outcome),
    Rejected(String),
}

impl Verdict {
    pub fn is_ok(&self) -> bool {
        matches!(self, Verdict::Passed(_) | Verdict::Unchecked(_))
    }
}

#[derive(Debug, Clone)]
pub struct Report {
    pub label: String,
    pub op: &'static str,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub reports: Vec<Report>,
}

impl Summary {
    pub fn passed(&self) -> usize {
        self.count(|verdict| matches!(verdict, Verdict::Passed(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|verdict| matches!(verdict, Verdict::Failed { .. }))
    }

    pub fn unchecked(&self) -> usize {
        self.count(|verdict| matches!(verdict, Verdict::Unchecked(_)))
    }

    pub fn rejected(&self) -> usize {
        self.count(|verdict| matches!(verdict, Verdict::Rejected(_)))
    }

    pub fn is_success(&self) -> bool {
        self.reports.iter().all(|report| report.verdict.is_ok())
    }

    fn count(&self, predicate: impl Fn(&Verdict) -> bool) -> usize {
        self.reports
            .iter()
            .filter(|report| predicate(&report.verdict))
            .count()
    }
}

/// Runs a drill and compares its outcome with the stated expectation.
pub fn run_drill(drill: &Drill, index: usize) -> Report {
    let label = drill.label(index);
    let op = drill.task.op();
    debug!(drill = %label, op, "running drill");

    let verdict = match (run_task(&drill.task), &drill.expect) {
        (Err(err), _) => {
            warn!(drill = %label, error = %err, "drill rejected");
            Verdict::Rejected(err.to_string())
        }
        (Ok(outcome), None) => Verdict::Unchecked(outcome),
        (Ok(outcome), Some(expected)) if outcome.matches(expected) => Verdict::Passed(outcome),
        (Ok(actual), Some(expected)) => {
            warn!(drill = %label, %expected, %actual, "drill failed");
            Verdict::Failed {
                expected: expected.clone(),
                actual,
            }
        }
    };

    Report { label, op, verdict }
}

/// Runs every drill of a file, keeping file order in the summary.
pub fn run_all(file: &DrillFile) -> Summary {
    let settings = &file.settings;
    let reports: Vec<Report> = if settings.fail_fast {
        let mut reports = Vec::with_capacity(file.drills.len());
        for (index, drill) in file.drills.iter().enumerate() {
            let report = run_drill(drill, index);
            let stop = !report.verdict.is_ok();
            reports.push(report);
            if stop {
                info!(after = index + 1, "stopping at first failure");
                break;
            }
        }
        reports
    } else if settings.parallel {
        file.drills
            .par_iter()
            .enumerate()
            .map(|(index, drill)| run_drill(drill, index))
            .collect()
    } else {
        file.drills
            .iter()
            .enumerate()
            .map(|(index, drill)| run_drill(drill, index))
            .collect()
    };

    let summary = Summary { reports };
    info!(
        passed = summary.passed(),
        failed = summary.failed(),
        unchecked = summary.unchecked(),
        rejected = summary.rejected(),
        "drills finished"
    );
    summary
}
