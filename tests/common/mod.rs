//! Common test utilities for integration tests.
//!
//! Provides builders for commit batches with controlled timing, authorship,
//! and change magnitude.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]

use glyptic::model::CommitRecord;

/// Build one commit with explicit timing and magnitude.
pub fn commit(id: &str, timestamp: i64, hour: u8, is_human: bool, impact: u32) -> CommitRecord {
    CommitRecord {
        id: id.to_string(),
        author: if is_human {
            "alice".to_string()
        } else {
            "release-bot".to_string()
        },
        timestamp,
        hour,
        is_human,
        files_changed: 1 + impact / 20,
        additions: impact / 2,
        deletions: impact - impact / 2,
        message: format!("change {id}"),
    }
}

/// A small mixed batch: two humans, one bot, spread over three hours.
pub fn sample_batch() -> Vec<CommitRecord> {
    vec![
        commit("aaa1111", 1_700_000_000, 9, true, 40),
        commit("bbb2222", 1_700_003_600, 10, false, 120),
        commit("ccc3333", 1_700_007_200, 11, true, 8),
    ]
}

/// A batch with one tight burst of `n` commits starting at `start`.
pub fn burst_batch(start: i64, n: usize) -> Vec<CommitRecord> {
    (0..n)
        .map(|i| {
            commit(
                &format!("b{i:06}"),
                start + i as i64 * 60,
                ((start / 3600) % 24) as u8,
                true,
                10,
            )
        })
        .collect()
}
