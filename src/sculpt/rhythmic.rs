//! Rhythmic mode: closed 24-hour activity loop
//!
//! Exactly one node per hour bucket regardless of batch size, placed on a
//! fixed-radius circle at the hour's phase angle. Height and color
//! intensity follow the bucket's commit count, and consecutive hours are
//! joined into a closed loop including the 23 -> 0 wraparound.

use crate::constants::layout;
use crate::geom::Vec3;
use crate::model::{Color, PatternSummary, Scene, SculptureEdge, SculptureNode, ShapeKind};

use super::hour_phase;

pub(super) fn build(summary: &PatternSummary) -> Scene {
    let mut scene = Scene::new();
    let mut positions = [Vec3::ZERO; 24];

    for hour in 0..24u8 {
        let count = summary.hour_histogram[usize::from(hour)];
        let angle = hour_phase(hour);

        let position = Vec3::new(
            layout::RHYTHM_RADIUS * angle.cos(),
            f64::from(count) * layout::RHYTHM_HEIGHT_PER_COMMIT,
            layout::RHYTHM_RADIUS * angle.sin(),
        );
        positions[usize::from(hour)] = position;

        let intensity = (count * layout::RHYTHM_INTENSITY_PER_COMMIT).min(255) as u8;
        scene.nodes.push(SculptureNode {
            position,
            size: layout::RHYTHM_NODE_BASE + f64::from(count) * layout::RHYTHM_NODE_PER_COMMIT,
            color: Color::new(intensity, 100, 255 - intensity),
            shape: ShapeKind::Sphere,
        });
    }

    // Closed loop: 23 wraps back around to 0
    for hour in 0..24 {
        let next = (hour + 1) % 24;
        scene.edges.push(SculptureEdge {
            start: positions[hour],
            end: positions[next],
            radius: layout::EDGE_RADIUS,
        });
    }

    scene
}
