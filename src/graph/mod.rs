//! Overlay graph model and builder.
//!
//! This module defines the structures populated during traversal: the
//! directory tree used for grouped rendering (`DirNode`) and the
//! deduplicated edge set (`Edge`), bundled into an `OverlayGraph` context
//! that a run creates, fills and hands to the renderer.
//!
//! You typically construct a graph via `OverlayGraph::build_from_directory`
//! and then pass it to `crate::visualization::DotGenerator`.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::errors::GraphError;
use crate::fsys::FileSystem;
use crate::kustomization;
use crate::utils::contain::contains;

pub mod traverse;

/// Reserved segment under which overlays with no parent directory register.
/// Rendered as `(root)`; contributes nothing to node addresses.
pub const ROOT_SEGMENT: &str = ".";

/// One directory level of the overlay tree. `overlays` holds the basenames
/// of overlays sitting directly at this level, in discovery order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirNode {
    pub overlays: Vec<String>,
    pub children: BTreeMap<String, DirNode>,
}

/// Directed reference: the overlay at `src` composes the overlay at `dst`.
/// Both endpoints are identifiers relative to the top directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Edge {
    pub src: String,
    pub dst: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverlayGraph {
    pub tree: DirNode,
    pub edges: Vec<Edge>,
}

impl OverlayGraph {
    /// Register an overlay identifier in the directory tree, creating one
    /// node per parent segment and appending the basename at the terminal
    /// node unless already present.
    pub fn register_overlay(&mut self, id: &str) {
        let mut segments: Vec<&str> = id.split('/').collect();
        let basename = segments.pop().unwrap_or(id).to_string();
        if segments.is_empty() {
            segments.push(ROOT_SEGMENT);
        }

        let mut node = &mut self.tree;
        for segment in segments {
            node = node.children.entry(segment.to_string()).or_default();
        }
        if !contains(&node.overlays, &basename) {
            node.overlays.push(basename);
        }
    }

    /// Append `edge` unless a structurally-equal edge is already collected.
    /// Returns whether the edge was inserted.
    pub fn add_edge(&mut self, edge: Edge) -> bool {
        if contains(&self.edges, &edge) {
            return false;
        }
        self.edges.push(edge);
        true
    }

    /// Discover every overlay root under `top_dir` and traverse each,
    /// accumulating the directory tree and the deduplicated edge set.
    ///
    /// # Errors
    /// Returns `GraphError` when discovery fails, when any reached overlay's
    /// kustomization cannot be read or parsed, or when a reached overlay
    /// lies outside `top_dir`.
    pub fn build_from_directory<F: FileSystem>(
        fs: &F,
        top_dir: &Path,
    ) -> Result<Self, GraphError> {
        let mut graph = OverlayGraph::default();
        for dir in find_overlay_roots(fs, top_dir)? {
            traverse::Traversal::run(fs, top_dir, &mut graph, &dir)?;
        }
        Ok(graph)
    }
}

/// Collect every directory under `top_dir` containing a recognized
/// kustomization marker file, in walk order.
///
/// # Errors
/// Propagates walk IO errors; a failed discovery aborts the run.
pub fn find_overlay_roots<F: FileSystem>(
    fs: &F,
    top_dir: &Path,
) -> Result<Vec<PathBuf>, GraphError> {
    let mut roots = Vec::new();
    fs.walk(top_dir, &mut |path, is_dir| {
        if !is_dir
            && path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| kustomization::RECOGNIZED_FILE_NAMES.contains(&n))
        {
            if let Some(parent) = path.parent() {
                roots.push(parent.to_path_buf());
            }
        }
        Ok(())
    })?;
    Ok(roots)
}
