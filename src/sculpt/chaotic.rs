//! Chaotic mode: identity-seeded pseudo-random walk
//!
//! Each commit extends a walk whose direction mixes the hour phase with the
//! commit's line changes, plus a jitter drawn from a generator reseeded from
//! a stable hash of the commit identifier. Results depend only on commit
//! identity, never on process state, so chaotic scenes are reproducible
//! across runs and platforms.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use xxhash_rust::xxh3::{xxh3_64, xxh3_64_with_seed};

use crate::constants::{layout, palette};
use crate::geom::Vec3;
use crate::model::{Color, CommitRecord, Scene, SculptureNode, ShapeKind};

use super::hour_phase;

/// Per-channel salts for identity-derived coloring.
const SALT_RED: u64 = 0x52;
const SALT_GREEN: u64 = 0x47;
const SALT_BLUE: u64 = 0x42;

/// Stable 64-bit hash of a commit identifier.
///
/// xxh3 rather than the stdlib hasher: the walk must not change across
/// processes or platforms.
fn identity_hash(id: &str) -> u64 {
    xxh3_64(id.as_bytes())
}

/// One color channel in the fixed intensity band, derived from a salted
/// hash of the identifier.
fn channel(id: &str, salt: u64) -> u8 {
    (palette::CHAOS_CHANNEL_FLOOR + xxh3_64_with_seed(id.as_bytes(), salt) % palette::CHAOS_CHANNEL_SPAN)
        as u8
}

pub(super) fn build(commits: &[CommitRecord]) -> Scene {
    let mut scene = Scene::new();
    let mut position = Vec3::ZERO;

    for (i, commit) in commits.iter().enumerate() {
        // Reseed from commit identity before computing this commit's offset
        let mut rng = StdRng::seed_from_u64(identity_hash(&commit.id));

        if i > 0 {
            let phase = hour_phase(commit.hour);
            let jitter = layout::CHAOS_JITTER;
            let direction = Vec3::new(
                phase.sin() + rng.random_range(-jitter..=jitter),
                f64::from(commit.additions) * layout::CHAOS_LIFT_PER_ADDITION
                    + rng.random_range(-jitter..=jitter),
                phase.cos() + rng.random_range(-jitter..=jitter),
            );
            let step = f64::from(commit.impact()).ln_1p() * layout::CHAOS_STEP_SCALE;
            position = position.add(direction.scale(step));
        }

        scene.nodes.push(SculptureNode {
            position,
            size: layout::CHAOS_NODE_BASE
                + f64::from(commit.files_changed) * layout::CHAOS_NODE_PER_FILE,
            color: Color::new(
                channel(&commit.id, SALT_RED),
                channel(&commit.id, SALT_GREEN),
                channel(&commit.id, SALT_BLUE),
            ),
            shape: if commit.is_human {
                ShapeKind::Sphere
            } else {
                ShapeKind::Cube
            },
        });
    }

    scene
}
