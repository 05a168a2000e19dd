//! Mutation engine
//!
//! Evolves a persisted sculpture into new generations by chaining three
//! randomized geometric transforms: a twist around the vertical axis,
//! per-vertex jitter, and a non-uniform scale. Each generation is written
//! under the next free index and becomes the input for the following step,
//! so the lineage is strictly linear.

use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;
use rand::rngs::StdRng;
use thiserror::Error;

use crate::codec::{self, CodecError, MeshCodec};
use crate::model::{Mesh, SceneObject};

/// Twist magnitude band (radians per unit height)
const TWIST_RANGE: (f64, f64) = (-0.5, 0.5);
/// Vertex jitter amplitude band
const NOISE_RANGE: (f64, f64) = (0.02, 0.1);
/// Per-axis scale factor band
const SCALE_RANGE: (f64, f64) = (0.8, 1.2);

/// Errors that can occur while evolving a sculpture
#[derive(Error, Debug)]
pub enum MutateError {
    /// No base artifact exists; producing a first generation without one is
    /// a precondition violation, surfaced to the caller without retry.
    #[error("No sculpture artifacts found in {0}")]
    NoArtifact(PathBuf),

    #[error("Artifact codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Locate the highest-generation artifact in `dir`.
///
/// A name without a numeric suffix counts as generation 0. Fails with
/// [`MutateError::NoArtifact`] when nothing in `dir` matches the naming
/// convention.
pub fn find_latest(dir: &Path) -> Result<(PathBuf, u32), MutateError> {
    let mut latest: Option<(PathBuf, u32)> = None;

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !codec::is_artifact_name(&path) {
            continue;
        }
        let generation = codec::generation_number(&path);
        if latest.as_ref().is_none_or(|(_, g)| generation > *g) {
            latest = Some((path, generation));
        }
    }

    latest.ok_or_else(|| MutateError::NoArtifact(dir.to_path_buf()))
}

/// Rotate each vertex in the horizontal plane by an angle proportional to
/// its height.
fn apply_twist(mesh: &mut Mesh, magnitude: f64) {
    for v in &mut mesh.vertices {
        let angle = v.y * magnitude;
        let (sin, cos) = angle.sin_cos();
        let x = v.x * cos - v.z * sin;
        let z = v.x * sin + v.z * cos;
        v.x = x;
        v.z = z;
    }
}

/// Add independent uniform jitter in `[-amount, amount]` to every coordinate.
fn apply_vertex_noise(mesh: &mut Mesh, amount: f64, rng: &mut StdRng) {
    for v in &mut mesh.vertices {
        v.x += rng.random_range(-amount..=amount);
        v.y += rng.random_range(-amount..=amount);
        v.z += rng.random_range(-amount..=amount);
    }
}

/// Scale coordinates by three independent per-axis factors.
fn apply_nonuniform_scale(mesh: &mut Mesh, scale: [f64; 3]) {
    for v in &mut mesh.vertices {
        v.x *= scale[0];
        v.y *= scale[1];
        v.z *= scale[2];
    }
}

/// Apply one mutation step to every sub-mesh of `object`.
///
/// Draws one twist magnitude, one noise amplitude, and one scale triple per
/// call, then applies twist, jitter, and scale in that fixed order. The
/// generator is threaded explicitly so callers can fix a seed for
/// reproducible output.
pub fn mutate(object: &mut SceneObject, rng: &mut StdRng) {
    let twist = rng.random_range(TWIST_RANGE.0..=TWIST_RANGE.1);
    let noise = rng.random_range(NOISE_RANGE.0..=NOISE_RANGE.1);
    let scale = [
        rng.random_range(SCALE_RANGE.0..=SCALE_RANGE.1),
        rng.random_range(SCALE_RANGE.0..=SCALE_RANGE.1),
        rng.random_range(SCALE_RANGE.0..=SCALE_RANGE.1),
    ];

    for mesh in object.meshes_mut() {
        apply_twist(mesh, twist);
        apply_vertex_noise(mesh, noise, rng);
        apply_nonuniform_scale(mesh, scale);
    }
}

/// Chain `generations` mutation steps starting from the latest artifact in
/// `dir`, returning the written paths in order.
///
/// Each step loads the immediately preceding step's freshly written output;
/// the lineage never branches back to the original base.
pub fn evolve<C: MeshCodec>(
    dir: &Path,
    generations: u32,
    codec: &C,
    rng: &mut StdRng,
) -> Result<Vec<PathBuf>, MutateError> {
    let (mut path, mut number) = find_latest(dir)?;
    let mut written = Vec::new();

    for _ in 0..generations {
        let mut object = codec.load(&path)?;
        mutate(&mut object, rng);
        number += 1;
        path = codec::artifact_path(dir, number);
        codec.save(&path, &object)?;
        written.push(path.clone());
    }

    Ok(written)
}
