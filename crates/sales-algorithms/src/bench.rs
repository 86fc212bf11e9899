//! Wall-clock comparisons of the custom routines against the standard
//! library. Each timing is a single run.

use std::hint::black_box;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::debug;

use crate::search::binary_search;
use crate::sort::quicksort;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timing {
    pub name: &'static str,
    pub elements: usize,
    pub elapsed: Duration,
}

impl Timing {
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

fn time<R>(name: &'static str, elements: usize, run: impl FnOnce() -> R) -> Timing {
    let start = Instant::now();
    black_box(run());
    let timing = Timing {
        name,
        elements,
        elapsed: start.elapsed(),
    };
    debug!(
        algorithm = name,
        elements,
        seconds = timing.seconds(),
        "timed algorithm"
    );
    timing
}

/// `start, start - 1, ..., 1`.
pub fn descending_sequence(start: i64) -> Vec<i64> {
    (1..=start).rev().collect()
}

/// Custom quicksort against `slice::sort`, each on its own copy.
pub fn compare_sorting(data: &[i64]) -> Vec<Timing> {
    let len = data.len();
    let custom = time("custom_quicksort", len, || quicksort(black_box(data)));
    let mut copy = data.to_vec();
    let builtin = time("builtin_sort", len, || {
        copy.sort();
        copy.len()
    });
    vec![custom, builtin]
}

/// Binary search over a sorted copy against a linear `contains` on the
/// original order. Sorting the copy is not timed.
pub fn compare_searching(data: &[i64], target: i64) -> Vec<Timing> {
    let len = data.len();
    let mut sorted = data.to_vec();
    sorted.sort_unstable();
    let binary = time("binary_search", len, || {
        binary_search(black_box(&sorted), &target)
    });
    let contains = time("builtin_contains", len, || black_box(data).contains(&target));
    vec![binary, contains]
}
