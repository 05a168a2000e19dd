//! Crystalline mode: radial spike formation
//!
//! Each commit becomes a spike placed around a vertical helix: the angle
//! comes from the hour phase plus a per-index step (so same-hour commits
//! fan out), the radius from log-impact, the height from the sequence
//! index. A central core sphere summarizes total change magnitude.

use crate::constants::{layout, palette};
use crate::geom::Vec3;
use crate::model::{CommitRecord, PatternSummary, Scene, SculptureNode, ShapeKind};

use super::hour_phase;

pub(super) fn build(commits: &[CommitRecord], summary: &PatternSummary) -> Scene {
    let mut scene = Scene::new();

    for (i, commit) in commits.iter().enumerate() {
        let angle = hour_phase(commit.hour) + i as f64 * layout::CRYSTAL_ANGLE_STEP;
        let impact = f64::from(commit.impact()).ln_1p();
        let radius = layout::CRYSTAL_BASE_RADIUS + impact * layout::CRYSTAL_IMPACT_RADIUS;

        let spike_len = (layout::CRYSTAL_SPIKE_MIN
            + f64::from(commit.files_changed) * layout::CRYSTAL_SPIKE_PER_FILE)
            .clamp(layout::CRYSTAL_SPIKE_MIN, layout::CRYSTAL_SPIKE_MAX);

        scene.nodes.push(SculptureNode {
            position: Vec3::new(
                radius * angle.cos(),
                i as f64 * layout::CRYSTAL_HEIGHT_STEP,
                radius * angle.sin(),
            ),
            size: spike_len,
            color: if commit.is_human {
                palette::CRYSTAL_HUMAN
            } else {
                palette::CRYSTAL_AUTOMATION
            },
            shape: ShapeKind::Spike,
        });
    }

    // Central core sized by aggregate magnitude
    scene.nodes.push(SculptureNode {
        position: Vec3::ZERO,
        size: (summary.total_changes as f64).ln_1p() * layout::CRYSTAL_CORE_SCALE,
        color: palette::CRYSTAL_CORE,
        shape: ShapeKind::Sphere,
    });

    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::detect_patterns;

    fn commit(hour: u8, files: u32, impact: u32) -> CommitRecord {
        CommitRecord {
            id: format!("c{hour}-{files}"),
            author: String::new(),
            timestamp: i64::from(hour) * 3600,
            hour,
            is_human: true,
            files_changed: files,
            additions: impact,
            deletions: 0,
            message: String::new(),
        }
    }

    #[test]
    fn test_one_spike_per_commit_plus_core() {
        let commits = vec![commit(3, 1, 10), commit(9, 2, 50)];
        let summary = detect_patterns(&commits);
        let scene = build(&commits, &summary);
        assert_eq!(scene.nodes.len(), 3);
        assert_eq!(scene.nodes[2].shape, ShapeKind::Sphere);
        assert_eq!(scene.nodes[2].color, palette::CRYSTAL_CORE);
        assert!(scene.edges.is_empty());
    }

    #[test]
    fn test_spike_length_clamped() {
        let commits = vec![commit(0, 100, 0)];
        let summary = detect_patterns(&commits);
        let scene = build(&commits, &summary);
        assert_eq!(scene.nodes[0].size, layout::CRYSTAL_SPIKE_MAX);
    }

    #[test]
    fn test_same_hour_commits_fan_out() {
        let commits = vec![commit(6, 1, 10), commit(6, 1, 10)];
        let summary = detect_patterns(&commits);
        let scene = build(&commits, &summary);
        let a = scene.nodes[0].position;
        let b = scene.nodes[1].position;
        assert!(a.distance(b) > 0.1);
    }

    #[test]
    fn test_core_grows_with_total_changes() {
        let small = vec![commit(0, 1, 5)];
        let large = vec![commit(0, 1, 5000)];
        let small_scene = build(&small, &detect_patterns(&small));
        let large_scene = build(&large, &detect_patterns(&large));
        assert!(large_scene.nodes[1].size > small_scene.nodes[1].size);
    }
}
