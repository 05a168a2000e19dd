//! Mesh artifact codec
//!
//! Persists scenes as named, generation-indexed artifacts and loads them
//! back as addressable vertex buffers. The naming convention encodes the
//! generation in the file name: `sculpture.json` is generation 0 and
//! `sculpture_gen{N}.json` is generation N.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::constants::artifact;
use crate::model::{Scene, SceneObject};

/// Errors that can occur while reading or writing artifacts
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed artifact: {0}")]
    Format(#[from] serde_json::Error),
}

static GENERATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(artifact::GENERATION_PATTERN).expect("generation pattern is a valid regex")
});

/// Parse the generation index encoded in an artifact path.
///
/// A name without a numeric suffix is generation 0.
pub fn generation_number(path: &Path) -> u32 {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return 0;
    };
    GENERATION_RE
        .captures(name)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

/// Artifact path for a given generation inside `dir`.
pub fn artifact_path(dir: &Path, generation: u32) -> PathBuf {
    let name = if generation == 0 {
        format!("{}.{}", artifact::STEM, artifact::EXTENSION)
    } else {
        format!("{}_gen{}.{}", artifact::STEM, generation, artifact::EXTENSION)
    };
    dir.join(name)
}

/// True when the file name follows the artifact naming convention.
pub fn is_artifact_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| {
            name.starts_with(artifact::STEM) && name.ends_with(artifact::EXTENSION)
        })
}

/// Load and store sculpture artifacts.
///
/// The codec seam keeps the persistence format swappable; the core only
/// relies on round-tripping [`SceneObject`] vertex buffers.
pub trait MeshCodec {
    /// Load an artifact into vertex buffers.
    fn load(&self, path: &Path) -> Result<SceneObject, CodecError>;

    /// Serialize an object to `path`.
    fn save(&self, path: &Path, object: &SceneObject) -> Result<(), CodecError>;

    /// Tessellate and serialize a freshly synthesized scene.
    fn save_scene(&self, path: &Path, scene: &Scene) -> Result<(), CodecError> {
        self.save(path, &scene.to_object())
    }
}

/// JSON-backed codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl MeshCodec for JsonCodec {
    fn load(&self, path: &Path) -> Result<SceneObject, CodecError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, path: &Path, object: &SceneObject) -> Result<(), CodecError> {
        let data = serde_json::to_string(object)?;
        fs::write(path, data)?;
        Ok(())
    }
}
