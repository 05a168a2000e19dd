//! Aggregate pattern data derived from a commit batch

/// A run of ≥3 commits that all landed within one hour of the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Burst {
    /// Index of the first commit in the (time-sorted) batch
    pub start: usize,

    /// Number of commits in the window (always ≥ 3)
    pub len: usize,
}

impl Burst {
    /// One-past-the-end index of this burst.
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Statistics derived exactly once from a commit batch.
///
/// Built by [`crate::patterns::detect_patterns`]; every field has a defined
/// fallback for an empty batch, so construction never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternSummary {
    /// Commit count per hour of day (index 0-23)
    pub hour_histogram: [u32; 24],

    /// Detected bursts, non-overlapping, in batch order
    pub bursts: Vec<Burst>,

    /// Fraction of commits authored by humans (0.5 for an empty batch)
    pub human_ratio: f64,

    /// Fraction of commits authored by automation (1 - human_ratio)
    pub automation_ratio: f64,

    /// Mean lines changed per commit
    pub avg_impact: f64,

    /// Hour with the most commits; ties go to the lowest hour
    pub peak_hour: u8,

    /// Total lines changed across the batch
    pub total_changes: u64,
}

impl PatternSummary {
    /// Summary of an empty batch: even ratios, midday peak, empty histogram.
    pub fn empty() -> Self {
        Self {
            hour_histogram: [0; 24],
            bursts: Vec::new(),
            human_ratio: 0.5,
            automation_ratio: 0.5,
            avg_impact: 0.0,
            peak_hour: 12,
            total_changes: 0,
        }
    }
}
