//! Pattern detector
//!
//! Derives aggregate statistics (temporal histogram, bursts, author ratios,
//! impact) from a commit batch. Detection never fails: an empty batch yields
//! the documented fallback summary.

use crate::constants::{BURST_MIN_COMMITS, BURST_WINDOW_SECS};
use crate::model::{Burst, CommitRecord, PatternSummary};

/// Compute the pattern summary for a commit batch.
///
/// The input does not need to be pre-sorted; commits are ordered by
/// timestamp internally before burst scanning. Burst indices refer to the
/// time-sorted order.
pub fn detect_patterns(commits: &[CommitRecord]) -> PatternSummary {
    if commits.is_empty() {
        return PatternSummary::empty();
    }

    let mut hour_histogram = [0u32; 24];
    for commit in commits {
        hour_histogram[usize::from(commit.hour % 24)] += 1;
    }

    let mut sorted: Vec<&CommitRecord> = commits.iter().collect();
    sorted.sort_by_key(|c| c.timestamp);

    let bursts = burst_windows(&sorted)
        .into_iter()
        .filter(|b| b.len >= BURST_MIN_COMMITS)
        .collect();

    let human_count = commits.iter().filter(|c| c.is_human).count();
    let human_ratio = human_count as f64 / commits.len() as f64;

    let total_changes: u64 = commits.iter().map(|c| u64::from(c.impact())).sum();
    let avg_impact = total_changes as f64 / commits.len() as f64;

    PatternSummary {
        hour_histogram,
        bursts,
        human_ratio,
        automation_ratio: 1.0 - human_ratio,
        avg_impact,
        peak_hour: peak_hour(&hour_histogram),
        total_changes,
    }
}

/// Greedy left-to-right partition of time-sorted commits into windows.
///
/// A window starting at index `i` absorbs every following commit whose
/// timestamp is within [`BURST_WINDOW_SECS`] of commit `i`; the scan then
/// resumes past the whole window. The returned windows are non-overlapping
/// and jointly cover every index.
fn burst_windows(sorted: &[&CommitRecord]) -> Vec<Burst> {
    let mut windows = Vec::new();
    let mut i = 0;
    while i < sorted.len() {
        let mut len = 1;
        while i + len < sorted.len()
            && sorted[i + len].timestamp - sorted[i].timestamp < BURST_WINDOW_SECS
        {
            len += 1;
        }
        windows.push(Burst { start: i, len });
        i += len;
    }
    windows
}

/// Hour with the highest commit count; the lowest hour wins ties.
fn peak_hour(histogram: &[u32; 24]) -> u8 {
    let mut best = 0u8;
    for hour in 1..24u8 {
        if histogram[usize::from(hour)] > histogram[usize::from(best)] {
            best = hour;
        }
    }
    best
}
