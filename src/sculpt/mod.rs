//! Sculpture synthesizer
//!
//! Four independent geometry-generation strategies over a commit batch and
//! its pattern summary. Synthesis is pure: given the same commits and
//! summary, every mode produces the same scene. Chaotic mode additionally
//! anchors its pseudo-randomness to commit identity, so it is reproducible
//! across processes and platforms.

mod chaotic;
mod crystalline;
mod organic;
mod rhythmic;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::{CommitRecord, PatternSummary, Scene};

/// Hour-of-day mapped onto the unit circle.
pub(crate) fn hour_phase(hour: u8) -> f64 {
    f64::from(hour) / 24.0 * std::f64::consts::TAU
}

/// The four aesthetic strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Flowing branch structure following the commit sequence
    Organic,
    /// Radial spike formation around a central core
    Crystalline,
    /// Closed 24-hour activity loop
    Rhythmic,
    /// Identity-seeded pseudo-random walk
    Chaotic,
}

impl Mode {
    pub const ALL: [Mode; 4] = [
        Mode::Organic,
        Mode::Crystalline,
        Mode::Rhythmic,
        Mode::Chaotic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Organic => "organic",
            Mode::Crystalline => "crystalline",
            Mode::Rhythmic => "rhythmic",
            Mode::Chaotic => "chaotic",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a mode name is not recognized.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown sculpture mode: {0}")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "organic" => Ok(Mode::Organic),
            "crystalline" => Ok(Mode::Crystalline),
            "rhythmic" => Ok(Mode::Rhythmic),
            "chaotic" => Ok(Mode::Chaotic),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

/// Build a scene from a commit batch in the given mode.
///
/// An empty batch yields [`Scene::placeholder`] in every mode, so the result
/// is never an empty scene.
pub fn synthesize(mode: Mode, commits: &[CommitRecord], summary: &PatternSummary) -> Scene {
    if commits.is_empty() {
        return Scene::placeholder();
    }
    match mode {
        Mode::Organic => organic::build(commits),
        Mode::Crystalline => crystalline::build(commits, summary),
        Mode::Rhythmic => rhythmic::build(summary),
        Mode::Chaotic => chaotic::build(commits),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trips_through_str() {
        for mode in Mode::ALL {
            assert_eq!(mode.name().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let err = "cubist".parse::<Mode>().unwrap_err();
        assert_eq!(err, UnknownMode("cubist".to_string()));
    }

    #[test]
    fn test_empty_batch_yields_placeholder_in_every_mode() {
        let summary = PatternSummary::empty();
        for mode in Mode::ALL {
            let scene = synthesize(mode, &[], &summary);
            assert_eq!(scene, Scene::placeholder());
        }
    }
}
