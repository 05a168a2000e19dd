//! Organic mode: flowing branch structure
//!
//! Commits are laid out in time order along X. Height follows log-impact,
//! depth splits human from automation authors, and the hour of day adds a
//! sinusoidal spiral drift. Consecutive commits are joined by tubes.

use crate::constants::{layout, palette};
use crate::geom::Vec3;
use crate::model::{CommitRecord, Scene, SculptureEdge, SculptureNode, ShapeKind};

use super::hour_phase;

pub(super) fn build(commits: &[CommitRecord]) -> Scene {
    let mut sorted: Vec<&CommitRecord> = commits.iter().collect();
    sorted.sort_by_key(|c| c.timestamp);

    let mut scene = Scene::new();
    let mut prev: Option<Vec3> = None;

    for (i, commit) in sorted.iter().enumerate() {
        let phase = hour_phase(commit.hour);
        let impact = f64::from(commit.impact()).ln_1p();

        let x = i as f64 * layout::ORGANIC_X_STEP;
        let y = impact * layout::ORGANIC_IMPACT_SCALE + phase.cos() * layout::ORGANIC_SPIRAL_HEIGHT;
        let split = if commit.is_human {
            layout::ORGANIC_DEPTH_SPLIT
        } else {
            -layout::ORGANIC_DEPTH_SPLIT
        };
        let z = split + phase.sin() * layout::ORGANIC_SPIRAL_DEPTH;
        let position = Vec3::new(x, y, z);

        scene.nodes.push(SculptureNode {
            position,
            size: layout::ORGANIC_NODE_BASE
                + f64::from(commit.files_changed) * layout::ORGANIC_NODE_PER_FILE,
            color: if commit.is_human {
                palette::ORGANIC_HUMAN
            } else {
                palette::ORGANIC_AUTOMATION
            },
            shape: ShapeKind::Sphere,
        });

        if let Some(prev_pos) = prev {
            // Coincident nodes would yield a zero-length tube; skip the edge
            if prev_pos.distance(position) > f64::EPSILON {
                scene.edges.push(SculptureEdge {
                    start: prev_pos,
                    end: position,
                    radius: layout::EDGE_RADIUS,
                });
            }
        }
        prev = Some(position);
    }

    scene
}
