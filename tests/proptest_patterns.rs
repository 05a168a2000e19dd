//! Property-based tests for the pattern detector and the log parser
//!
//! Uses proptest to verify structural invariants over arbitrary commit
//! batches and parser robustness over arbitrary input.

use proptest::prelude::*;

use glyptic::detect_patterns;
use glyptic::git::parser::parse_log;
use glyptic::model::CommitRecord;

/// Generate a commit batch with arbitrary timestamps, hours, and magnitudes.
fn batch_strategy() -> impl Strategy<Value = Vec<CommitRecord>> {
    prop::collection::vec(
        (
            "[a-f0-9]{7}",
            0i64..2_000_000_000,
            0u8..24,
            any::<bool>(),
            1u32..50,
            0u32..500,
            0u32..500,
        ),
        0..60,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .map(
                |(id, timestamp, hour, is_human, files, additions, deletions)| CommitRecord {
                    id,
                    author: String::new(),
                    timestamp,
                    hour,
                    is_human,
                    files_changed: files,
                    additions,
                    deletions,
                    message: String::new(),
                },
            )
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Recorded bursts are non-overlapping, ordered, and each spans less
    /// than one hour from its anchor commit.
    #[test]
    fn bursts_are_disjoint_hour_windows(batch in batch_strategy()) {
        let summary = detect_patterns(&batch);

        let mut sorted = batch.clone();
        sorted.sort_by_key(|c| c.timestamp);

        let mut prev_end = 0;
        for burst in &summary.bursts {
            prop_assert!(burst.len >= 3);
            prop_assert!(burst.start >= prev_end, "bursts overlap");
            prop_assert!(burst.end() <= sorted.len());

            let anchor = sorted[burst.start].timestamp;
            let last = sorted[burst.end() - 1].timestamp;
            prop_assert!(last - anchor < 3600);

            // Maximality: the next commit (if any) falls outside the window
            if burst.end() < sorted.len() {
                prop_assert!(sorted[burst.end()].timestamp - anchor >= 3600);
            }
            prev_end = burst.end();
        }
    }

    /// Ratios always partition the batch.
    #[test]
    fn ratios_partition_the_batch(batch in batch_strategy()) {
        let summary = detect_patterns(&batch);
        prop_assert!((0.0..=1.0).contains(&summary.human_ratio));
        prop_assert!((summary.human_ratio + summary.automation_ratio - 1.0).abs() < 1e-12);
    }

    /// The histogram always counts every commit exactly once, and the peak
    /// hour is a lowest-valued argmax.
    #[test]
    fn histogram_counts_every_commit(batch in batch_strategy()) {
        let summary = detect_patterns(&batch);
        let total: u32 = summary.hour_histogram.iter().sum();
        prop_assert_eq!(total as usize, batch.len());

        if !batch.is_empty() {
            let peak = usize::from(summary.peak_hour);
            let max = *summary.hour_histogram.iter().max().unwrap();
            prop_assert_eq!(summary.hour_histogram[peak], max);
            for hour in 0..peak {
                prop_assert!(summary.hour_histogram[hour] < max);
            }
        }
    }

    /// Total changes always equals the summed impact.
    #[test]
    fn total_changes_matches_summed_impact(batch in batch_strategy()) {
        let summary = detect_patterns(&batch);
        let expected: u64 = batch.iter().map(|c| u64::from(c.impact())).sum();
        prop_assert_eq!(summary.total_changes, expected);
    }

    /// The log parser should never panic on arbitrary input.
    #[test]
    fn log_parser_does_not_panic(input in ".*") {
        let _ = parse_log(&input);
    }

    /// Every record the parser emits satisfies the core's preconditions.
    #[test]
    fn parsed_records_are_well_formed(input in ".*") {
        for record in parse_log(&input) {
            prop_assert!(record.files_changed >= 1);
            prop_assert!(record.hour < 24);
            prop_assert_eq!(record.id.len(), 7);
        }
    }
}

#[test]
fn empty_batch_yields_even_ratios_and_no_bursts() {
    let summary = detect_patterns(&[]);
    assert_eq!(summary.human_ratio, 0.5);
    assert_eq!(summary.automation_ratio, 0.5);
    assert!(summary.bursts.is_empty());
    assert_eq!(summary.hour_histogram, [0; 24]);
}
