//! Log output parser (git log --shortstat)
//!
//! The log format produces one pipe-separated header line per commit,
//! optionally followed by a shortstat line:
//!
//! ```text
//! a1b2c3d4...|Alice|1700000000|Fix layout drift
//!  3 files changed, 40 insertions(+), 12 deletions(-)
//! ```
//!
//! Malformed records are skipped rather than aborting the batch; a commit
//! that reaches the core always carries every required field.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::CommitRecord;

/// Abbreviated hash length kept in [`CommitRecord::id`]
const SHORT_ID_LEN: usize = 7;

/// Message length kept in [`CommitRecord::message`]
const MESSAGE_LEN: usize = 50;

static STAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+) files? changed(?:, (\d+) insertions?\(\+\))?(?:, (\d+) deletions?\(-\))?")
        .expect("stat pattern is a valid regex")
});

/// Parse `git log --pretty=format:%H|%an|%at|%s --shortstat` output.
///
/// Header lines that cannot be parsed are dropped (skip, continue); a
/// shortstat line updates the most recently parsed commit.
pub fn parse_log(output: &str) -> Vec<CommitRecord> {
    let mut commits: Vec<CommitRecord> = Vec::new();

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }

        if let Some(commit) = parse_header(line) {
            commits.push(commit);
        } else if let Some((files, additions, deletions)) = parse_shortstat(line) {
            if let Some(last) = commits.last_mut() {
                last.files_changed = files.max(1);
                last.additions = additions;
                last.deletions = deletions;
            }
        }
        // Anything else is noise between records; ignore it
    }

    commits
}

/// Parse one `%H|%an|%at|%s` header line.
fn parse_header(line: &str) -> Option<CommitRecord> {
    let parts: Vec<&str> = line.splitn(4, '|').collect();
    if parts.len() < 4 {
        return None;
    }

    let hash = parts[0];
    if hash.len() < SHORT_ID_LEN || !hash.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let timestamp: i64 = parts[2].parse().ok()?;
    let author = parts[1].to_string();

    Some(CommitRecord {
        id: hash[..SHORT_ID_LEN].to_string(),
        is_human: CommitRecord::classify_author(&author),
        author,
        timestamp,
        hour: hour_of_day(timestamp),
        files_changed: 1,
        additions: 0,
        deletions: 0,
        message: parts[3].chars().take(MESSAGE_LEN).collect(),
    })
}

/// Parse a shortstat line into (files, insertions, deletions).
fn parse_shortstat(line: &str) -> Option<(u32, u32, u32)> {
    let caps = STAT_RE.captures(line)?;
    let get = |i: usize| {
        caps.get(i)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };
    Some((get(1), get(2), get(3)))
}

/// UTC hour of day for a Unix timestamp (handles pre-epoch timestamps).
fn hour_of_day(timestamp: i64) -> u8 {
    (timestamp.rem_euclid(86_400) / 3_600) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH_A: &str = "a1b2c3d4e5f6a7b8c9d0a1b2c3d4e5f6a7b8c9d0";
    const HASH_B: &str = "ffeeddccbbaa99887766554433221100ffeeddcc";

    #[test]
    fn test_parse_header_line() {
        let line = format!("{HASH_A}|Alice|1700000000|Fix layout drift");
        let commits = parse_log(&line);
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].id, "a1b2c3d");
        assert_eq!(commits[0].author, "Alice");
        assert_eq!(commits[0].timestamp, 1_700_000_000);
        assert!(commits[0].is_human);
        assert_eq!(commits[0].message, "Fix layout drift");
        // No stat line: files floored at 1, zero line changes
        assert_eq!(commits[0].files_changed, 1);
        assert_eq!(commits[0].impact(), 0);
    }

    #[test]
    fn test_shortstat_attaches_to_preceding_commit() {
        let output = format!(
            "{HASH_A}|Alice|1700000000|Fix drift\n 3 files changed, 40 insertions(+), 12 deletions(-)\n"
        );
        let commits = parse_log(&output);
        assert_eq!(commits[0].files_changed, 3);
        assert_eq!(commits[0].additions, 40);
        assert_eq!(commits[0].deletions, 12);
    }

    #[test]
    fn test_shortstat_with_missing_segments() {
        let output = format!("{HASH_A}|Alice|1700000000|Docs\n 1 file changed, 5 deletions(-)\n");
        let commits = parse_log(&output);
        assert_eq!(commits[0].files_changed, 1);
        assert_eq!(commits[0].additions, 0);
        assert_eq!(commits[0].deletions, 5);
    }

    #[test]
    fn test_multiple_records() {
        let output = format!(
            "{HASH_A}|Alice|1700000000|First\n 2 files changed, 4 insertions(+)\n\n{HASH_B}|release-bot|1700003600|Second\n"
        );
        let commits = parse_log(&output);
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].additions, 4);
        assert!(!commits[1].is_human);
    }

    #[test]
    fn test_malformed_header_is_skipped() {
        let output = format!("not-a-commit-line\n{HASH_A}|Alice|1700000000|Valid\n");
        let commits = parse_log(&output);
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].message, "Valid");
    }

    #[test]
    fn test_unparsable_timestamp_is_skipped() {
        let output = format!("{HASH_A}|Alice|not-a-number|Broken\n");
        assert!(parse_log(&output).is_empty());
    }

    #[test]
    fn test_message_is_truncated() {
        let long = "x".repeat(200);
        let output = format!("{HASH_A}|Alice|1700000000|{long}\n");
        let commits = parse_log(&output);
        assert_eq!(commits[0].message.len(), MESSAGE_LEN);
    }

    #[test]
    fn test_hour_of_day() {
        // 1700000000 = 2023-11-14 22:13:20 UTC
        assert_eq!(hour_of_day(1_700_000_000), 22);
        assert_eq!(hour_of_day(0), 0);
        // Pre-epoch timestamps still map into 0-23
        assert_eq!(hour_of_day(-3_600), 23);
    }

    #[test]
    fn test_pipes_in_subject_are_kept() {
        let output = format!("{HASH_A}|Alice|1700000000|Table |cell| fix\n");
        let commits = parse_log(&output);
        assert_eq!(commits[0].message, "Table |cell| fix");
    }
}
