//! Shared 3D vector math and primitive tessellation
//!
//! All geometry in the crate is built from [`Vec3`]. Tessellation turns the
//! abstract sculpture primitives into plain vertex buffers for the codec;
//! faces are never persisted, only vertices, because the mutation engine
//! operates on vertex positions alone.

use serde::{Deserialize, Serialize};

use crate::model::{Mesh, SculptureEdge, SculptureNode, ShapeKind};

/// A point or direction in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn scale(self, factor: f64) -> Vec3 {
        Vec3::new(self.x * factor, self.y * factor, self.z * factor)
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn distance(self, other: Vec3) -> f64 {
        self.sub(other).length()
    }

    pub fn midpoint(self, other: Vec3) -> Vec3 {
        self.add(other).scale(0.5)
    }

    /// Unit vector in this direction, or `None` for a zero-length vector.
    pub fn normalized(self) -> Option<Vec3> {
        let len = self.length();
        if len > f64::EPSILON {
            Some(self.scale(1.0 / len))
        } else {
            None
        }
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

/// Golden ratio, used for icosahedron vertex placement.
const PHI: f64 = 1.618_033_988_749_895;

/// Segments around the circumference of tubes and spike bases.
const RING_SEGMENTS: usize = 8;

/// The 12 vertices of a unit icosahedron.
fn icosahedron() -> [Vec3; 12] {
    [
        Vec3::new(-1.0, PHI, 0.0),
        Vec3::new(1.0, PHI, 0.0),
        Vec3::new(-1.0, -PHI, 0.0),
        Vec3::new(1.0, -PHI, 0.0),
        Vec3::new(0.0, -1.0, PHI),
        Vec3::new(0.0, 1.0, PHI),
        Vec3::new(0.0, -1.0, -PHI),
        Vec3::new(0.0, 1.0, -PHI),
        Vec3::new(PHI, 0.0, -1.0),
        Vec3::new(PHI, 0.0, 1.0),
        Vec3::new(-PHI, 0.0, -1.0),
        Vec3::new(-PHI, 0.0, 1.0),
    ]
}

/// Tessellate a sphere of `radius` centered at `center`.
fn sphere_vertices(center: Vec3, radius: f64) -> Vec<Vec3> {
    icosahedron()
        .iter()
        .map(|v| {
            // Icosahedron vertices sit at distance sqrt(1 + phi^2)
            let unit = v.scale(1.0 / (1.0 + PHI * PHI).sqrt());
            center.add(unit.scale(radius))
        })
        .collect()
}

/// Tessellate an axis-aligned cube with edge length `2 * half` at `center`.
fn cube_vertices(center: Vec3, half: f64) -> Vec<Vec3> {
    let mut verts = Vec::with_capacity(8);
    for &sx in &[-1.0, 1.0] {
        for &sy in &[-1.0, 1.0] {
            for &sz in &[-1.0, 1.0] {
                verts.push(center.add(Vec3::new(sx * half, sy * half, sz * half)));
            }
        }
    }
    verts
}

/// Tessellate an upward-pointing spike: base ring at `center`, apex above it.
fn spike_vertices(center: Vec3, base_radius: f64, height: f64) -> Vec<Vec3> {
    let mut verts = ring(center, Vec3::new(0.0, 1.0, 0.0), base_radius);
    verts.push(center.add(Vec3::new(0.0, height, 0.0)));
    verts
}

/// A ring of [`RING_SEGMENTS`] vertices of `radius` around `center`,
/// perpendicular to `axis`.
fn ring(center: Vec3, axis: Vec3, radius: f64) -> Vec<Vec3> {
    let (u, v) = basis_for(axis);
    (0..RING_SEGMENTS)
        .map(|i| {
            let theta = i as f64 / RING_SEGMENTS as f64 * std::f64::consts::TAU;
            center
                .add(u.scale(radius * theta.cos()))
                .add(v.scale(radius * theta.sin()))
        })
        .collect()
}

/// Two unit vectors spanning the plane perpendicular to `axis`.
///
/// A degenerate axis falls back to the XZ plane so callers never see a
/// zero-length basis.
fn basis_for(axis: Vec3) -> (Vec3, Vec3) {
    let Some(n) = axis.normalized() else {
        return (Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
    };
    // Pick the world axis least aligned with n to avoid a near-zero cross product
    let helper = if n.y.abs() < 0.9 {
        Vec3::new(0.0, 1.0, 0.0)
    } else {
        Vec3::new(1.0, 0.0, 0.0)
    };
    let u = n.cross(helper).normalized().unwrap_or(Vec3::new(1.0, 0.0, 0.0));
    let v = n.cross(u).normalized().unwrap_or(Vec3::new(0.0, 0.0, 1.0));
    (u, v)
}

/// Tessellate one sculpture node into a vertex buffer.
pub fn node_mesh(node: &SculptureNode) -> Mesh {
    let vertices = match node.shape {
        ShapeKind::Sphere => sphere_vertices(node.position, node.size),
        ShapeKind::Cube => cube_vertices(node.position, node.size),
        ShapeKind::Spike => spike_vertices(node.position, node.size.min(0.5), node.size),
        ShapeKind::Tube => ring(node.position, Vec3::new(0.0, 1.0, 0.0), node.size),
    };
    Mesh { vertices }
}

/// Tessellate one connecting edge into a twin-ring tube vertex buffer.
pub fn edge_mesh(edge: &SculptureEdge) -> Mesh {
    let axis = edge.end.sub(edge.start);
    let mut vertices = ring(edge.start, axis, edge.radius);
    vertices.extend(ring(edge.end, axis, edge.radius));
    Mesh { vertices }
}
