//! Commit data model

/// Author substrings that mark a commit as automated rather than human.
pub const AUTOMATION_MARKERS: [&str; 4] = ["bot", "action", "ci", "cd"];

/// Normalized snapshot of one commit's metadata and change magnitude.
///
/// Produced once by a commit source adapter and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommitRecord {
    /// Short commit identifier (abbreviated hash)
    pub id: String,

    /// Author name as reported by the source
    pub author: String,

    /// Unix timestamp (seconds)
    pub timestamp: i64,

    /// Hour of day in UTC (0-23)
    pub hour: u8,

    /// False when the author matches an automation marker
    pub is_human: bool,

    /// Number of files touched, floored at 1 by the adapter
    pub files_changed: u32,

    /// Lines added
    pub additions: u32,

    /// Lines removed
    pub deletions: u32,

    /// First line of the commit message
    pub message: String,
}

impl CommitRecord {
    /// Total change magnitude of this commit.
    pub fn impact(&self) -> u32 {
        self.additions + self.deletions
    }

    /// Classify an author string as human or automation.
    ///
    /// Matching is case-insensitive substring search against
    /// [`AUTOMATION_MARKERS`].
    pub fn classify_author(author: &str) -> bool {
        let lowered = author.to_lowercase();
        !AUTOMATION_MARKERS.iter().any(|m| lowered.contains(m))
    }
}
