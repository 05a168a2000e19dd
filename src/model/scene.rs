//! Sculpture scene model

use serde::{Deserialize, Serialize};

use crate::geom::{self, Vec3};

use super::{Mesh, SceneObject};

/// Geometric primitive used for a sculpture node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Sphere,
    Cube,
    Spike,
    Tube,
}

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque color from RGB channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// One positioned, sized, colored primitive. Ephemeral, one per commit
/// (or per hour bucket in rhythmic mode).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SculptureNode {
    pub position: Vec3,
    pub size: f64,
    pub color: Color,
    pub shape: ShapeKind,
}

/// A tube joining two node positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SculptureEdge {
    pub start: Vec3,
    pub end: Vec3,
    pub radius: f64,
}

impl SculptureEdge {
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// Ordered collection of primitives and their connecting edges.
///
/// Order matters only while edges are being constructed; renderers and the
/// codec treat the collections as flat sets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    pub nodes: Vec<SculptureNode>,
    pub edges: Vec<SculptureEdge>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fallback scene for a degenerate (empty) commit batch: a single unit
    /// cube at the origin. A scene is never empty.
    pub fn placeholder() -> Self {
        Scene {
            nodes: vec![SculptureNode {
                position: Vec3::ZERO,
                size: 1.0,
                color: Color::new(200, 200, 200),
                shape: ShapeKind::Cube,
            }],
            edges: Vec::new(),
        }
    }

    pub fn is_placeholder_sized(&self) -> bool {
        self.nodes.len() == 1 && self.edges.is_empty()
    }

    /// Tessellate every node and edge into vertex buffers.
    pub fn to_object(&self) -> SceneObject {
        let meshes: Vec<Mesh> = self
            .nodes
            .iter()
            .map(geom::node_mesh)
            .chain(self.edges.iter().map(geom::edge_mesh))
            .collect();
        SceneObject::Multi(meshes)
    }
}
