//! Data models for Glyptic
//!
//! This module contains rendering-independent data structures representing
//! commits, derived patterns, and sculpture geometry.

mod commit;
mod mesh;
mod patterns;
mod scene;

pub use commit::{AUTOMATION_MARKERS, CommitRecord};
pub use mesh::{Mesh, SceneObject};
pub use patterns::{Burst, PatternSummary};
pub use scene::{Color, Scene, SculptureEdge, SculptureNode, ShapeKind};
