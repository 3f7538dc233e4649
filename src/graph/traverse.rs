//! Depth-first traversal of overlay references.
//!
//! Starting from one overlay root, reads each reached overlay, registers it
//! in the directory tree, resolves its resource/component references into
//! child overlays, records one edge per child and recurses. A per-root
//! visited set short-circuits re-entry, so reference cycles terminate; the
//! incoming edge is still recorded before the short-circuit, and the edge
//! collector deduplicates across roots.
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::errors::GraphError;
use crate::fsys::FileSystem;
use crate::graph::{Edge, OverlayGraph};
use crate::kustomization;
use crate::utils::paths::{normalize, relative_id};

pub struct Traversal<'a, F: FileSystem> {
    fs: &'a F,
    top_dir: &'a Path,
    graph: &'a mut OverlayGraph,
    visited: HashSet<PathBuf>,
}

impl<'a, F: FileSystem> Traversal<'a, F> {
    /// Traverse the overlay at `overlay_dir` and everything it composes,
    /// accumulating tree nodes and edges into `graph`.
    ///
    /// # Errors
    /// Fatal per the error taxonomy: unreadable or malformed kustomization
    /// at any reached overlay, or a reached overlay outside `top_dir`.
    /// Missing referenced paths are diagnostics only.
    pub fn run(
        fs: &'a F,
        top_dir: &'a Path,
        graph: &'a mut OverlayGraph,
        overlay_dir: &Path,
    ) -> Result<(), GraphError> {
        let mut traversal = Self { fs, top_dir, graph, visited: HashSet::new() };
        traversal.visit(&normalize(overlay_dir))
    }

    fn visit(&mut self, dir: &Path) -> Result<(), GraphError> {
        if !self.visited.insert(dir.to_path_buf()) {
            return Ok(());
        }
        debug!("----- {} -----", dir.display());

        let kustomization = kustomization::read_from_dir(self.fs, dir).map_err(|source| {
            GraphError::Kustomization { dir: dir.to_path_buf(), source }
        })?;

        let id = relative_id(self.top_dir, dir)?;
        self.graph.register_overlay(&id);

        let mut next_dirs: Vec<PathBuf> = Vec::new();

        // Resources and components are the only entries that can denote
        // sub-overlays; entries resolving to plain files are ordinary
        // manifests and stay out of the graph.
        for entry in &kustomization.resources {
            debug!("- (resource) {entry}");
            let next = normalize(&dir.join(entry));
            if !self.fs.exists(&next) {
                info!("{} is not found", next.display());
            } else if self.fs.is_dir(&next) {
                next_dirs.push(next);
            }
        }
        for entry in &kustomization.components {
            debug!("- (component) {entry}");
            let next = normalize(&dir.join(entry));
            if !self.fs.exists(&next) {
                warn!("{} is not found", next.display());
            } else if self.fs.is_dir(&next) {
                next_dirs.push(next);
            }
        }

        // File-level references: existence check only, never an edge.
        for patch in &kustomization.patches {
            let Some(path) = &patch.path else { continue };
            debug!("- (patch) {path}");
            self.check_exists(dir, path);
        }
        for replacement in &kustomization.replacements {
            let Some(path) = &replacement.path else { continue };
            debug!("- (replacement) {path}");
            self.check_exists(dir, path);
        }
        for entry in &kustomization.transformers {
            debug!("- (transformer) {entry}");
            self.check_exists(dir, entry);
        }
        for entry in &kustomization.configurations {
            debug!("- (configuration) {entry}");
            self.check_exists(dir, entry);
        }

        for next_dir in &next_dirs {
            let child_id = relative_id(self.top_dir, next_dir)?;
            debug!(r#"[edge] "{id}" -> "{child_id}""#);
            self.graph.add_edge(Edge { src: id.clone(), dst: child_id });
        }

        for next_dir in next_dirs {
            self.visit(&next_dir)?;
        }

        Ok(())
    }

    fn check_exists(&self, dir: &Path, entry: &str) {
        let path = normalize(&dir.join(entry));
        if !self.fs.exists(&path) {
            warn!("{} is not found", path.display());
        }
    }
}
