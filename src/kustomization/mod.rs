//! Load a directory's kustomization file into a typed record.
//!
//! Only the fields that drive the reference graph are modeled; everything
//! else in the document (`apiVersion`, generators, images, ...) is ignored.
use crate::errors::KustomizationError;
use crate::fsys::FileSystem;
use serde::Deserialize;
use std::path::Path;

/// Marker file names recognized by kustomize, in lookup order.
pub const RECOGNIZED_FILE_NAMES: [&str; 3] =
    ["kustomization.yaml", "kustomization.yml", "Kustomization"];

/// A `patches` entry. Inline patches carry no `path` and are not checkable.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Patch {
    #[serde(default)]
    pub path: Option<String>,
}

/// A `replacements` entry; only file-backed replacements carry a `path`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ReplacementField {
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Kustomization {
    pub resources: Vec<String>,
    pub components: Vec<String>,
    pub patches: Vec<Patch>,
    pub replacements: Vec<ReplacementField>,
    pub transformers: Vec<String>,
    pub configurations: Vec<String>,
    // Deprecated kustomize field, folded into `resources` by `normalize`.
    bases: Vec<String>,
}

impl Kustomization {
    /// Fold deprecated fields into their modern equivalents, preserving
    /// declaration order with `bases` ahead of `resources`.
    pub fn normalize(&mut self) {
        if !self.bases.is_empty() {
            let mut resources = std::mem::take(&mut self.bases);
            resources.append(&mut self.resources);
            self.resources = resources;
        }
    }
}

/// Return the marker file path for `dir`, if one of the recognized names
/// exists there.
pub fn marker_file_in<F: FileSystem>(fs: &F, dir: &Path) -> Option<std::path::PathBuf> {
    RECOGNIZED_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| fs.exists(candidate) && !fs.is_dir(candidate))
}

/// Load and normalize the kustomization declared in `dir`.
///
/// # Errors
/// Returns `KustomizationError::NotFound` when no recognized marker file
/// exists, `Io` when it cannot be read, and `Yaml` when it does not parse.
pub fn read_from_dir<F: FileSystem>(
    fs: &F,
    dir: &Path,
) -> Result<Kustomization, KustomizationError> {
    let file = marker_file_in(fs, dir)
        .ok_or_else(|| KustomizationError::NotFound { dir: dir.to_path_buf() })?;
    let data = fs.read_file(&file)?;
    let mut kustomization: Kustomization = serde_yaml::from_slice(&data)
        .map_err(|source| KustomizationError::Yaml { file, source })?;
    kustomization.normalize();
    Ok(kustomization)
}
