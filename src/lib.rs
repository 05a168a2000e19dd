//! Glyptic - Generative 3D sculptures from version control history
//!
//! Turns a commit stream into procedurally generated 3D scenes, and evolves
//! previously generated scenes into new generations via randomized geometric
//! mutation.
//!
//! This library provides:
//! - [`model`]: Domain models (commits, patterns, scenes, meshes)
//! - [`patterns`]: Aggregate pattern detection over a commit batch
//! - [`sculpt`]: The four sculpture synthesis modes
//! - [`mutate`]: The generation-chaining mutation engine
//! - [`codec`]: Artifact naming and JSON mesh persistence
//! - [`git`]: The `git log` commit source adapter
//! - [`geom`]: Shared vector math and primitive tessellation

pub mod codec;
pub mod constants;
pub mod geom;
pub mod git;
pub mod model;
pub mod mutate;
pub mod patterns;
pub mod sculpt;

pub use mutate::{evolve, find_latest, mutate};
pub use patterns::detect_patterns;
pub use sculpt::{Mode, synthesize};
