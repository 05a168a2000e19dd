//! Persisted mesh representation
//!
//! Artifacts on disk are addressable sets of vertex buffers. A loaded
//! artifact is either a single mesh or an ordered collection of sub-meshes;
//! the tagged [`SceneObject`] variant gives both the same traversal surface
//! so the mutation engine never branches on artifact shape.

use serde::{Deserialize, Serialize};

use crate::geom::Vec3;

/// A single vertex buffer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
}

impl Mesh {
    /// Axis-aligned bounding box as (min, max), or `None` when empty.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.vertices.first()?;
        let mut min = first;
        let mut max = first;
        for v in &self.vertices[1..] {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            min.z = min.z.min(v.z);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
            max.z = max.z.max(v.z);
        }
        Some((min, max))
    }
}

/// A loaded artifact: one mesh, or an ordered collection of sub-meshes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "meshes", rename_all = "snake_case")]
pub enum SceneObject {
    Single(Mesh),
    Multi(Vec<Mesh>),
}

impl SceneObject {
    pub fn meshes(&self) -> impl Iterator<Item = &Mesh> {
        match self {
            SceneObject::Single(mesh) => std::slice::from_ref(mesh).iter(),
            SceneObject::Multi(meshes) => meshes.iter(),
        }
    }

    pub fn meshes_mut(&mut self) -> impl Iterator<Item = &mut Mesh> {
        match self {
            SceneObject::Single(mesh) => std::slice::from_mut(mesh).iter_mut(),
            SceneObject::Multi(meshes) => meshes.iter_mut(),
        }
    }

    /// Bounding box over every sub-mesh, or `None` when no vertices exist.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut combined: Option<(Vec3, Vec3)> = None;
        for mesh in self.meshes() {
            let Some((lo, hi)) = mesh.bounds() else {
                continue;
            };
            combined = Some(match combined {
                None => (lo, hi),
                Some((min, max)) => (
                    Vec3::new(min.x.min(lo.x), min.y.min(lo.y), min.z.min(lo.z)),
                    Vec3::new(max.x.max(hi.x), max.y.max(hi.y), max.z.max(hi.z)),
                ),
            });
        }
        combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_bounds() {
        let mesh = Mesh {
            vertices: vec![
                Vec3::new(-1.0, 2.0, 0.5),
                Vec3::new(3.0, -4.0, 0.0),
                Vec3::new(0.0, 0.0, 7.0),
            ],
        };
        let (min, max) = mesh.bounds().unwrap();
        assert_eq!(min, Vec3::new(-1.0, -4.0, 0.0));
        assert_eq!(max, Vec3::new(3.0, 2.0, 7.0));
    }

    #[test]
    fn test_empty_mesh_has_no_bounds() {
        assert!(Mesh::default().bounds().is_none());
    }

    #[test]
    fn test_single_and_multi_traverse_uniformly() {
        let mesh = Mesh {
            vertices: vec![Vec3::ZERO],
        };
        let single = SceneObject::Single(mesh.clone());
        let multi = SceneObject::Multi(vec![mesh.clone(), mesh]);
        assert_eq!(single.meshes().count(), 1);
        assert_eq!(multi.meshes().count(), 2);
    }

    #[test]
    fn test_object_bounds_span_submeshes() {
        let obj = SceneObject::Multi(vec![
            Mesh {
                vertices: vec![Vec3::new(-5.0, 0.0, 0.0)],
            },
            Mesh {
                vertices: vec![Vec3::new(5.0, 1.0, -2.0)],
            },
        ]);
        let (min, max) = obj.bounds().unwrap();
        assert_eq!(min.x, -5.0);
        assert_eq!(max.x, 5.0);
        assert_eq!(min.z, -2.0);
    }
}
