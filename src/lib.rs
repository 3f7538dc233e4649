//! kustomize-graph — kustomize overlay composition grapher
//!
//! Scan a manifest tree for kustomization files and render the overlay
//! composition graph as a Graphviz DOT document, with overlays clustered by
//! directory.
//!
//! # Features
//! - Overlay discovery by recognized kustomization marker files
//! - Recursive resource/component resolution into a deduplicated edge set
//! - Existence warnings for patch/replacement/transformer/configuration paths
//! - Deterministic output: sorted discovery walk, lexical cluster order
//! - DOT on stdout, optional JSON graph export
//!
//! # Quickstart (Library)
//! ```no_run
//! use kustomize_graph::fsys::DiskFs;
//! use kustomize_graph::graph::OverlayGraph;
//! use kustomize_graph::visualization::DotGenerator;
//!
//! let top = std::path::Path::new("manifests");
//! let graph = OverlayGraph::build_from_directory(&DiskFs, top).expect("build graph");
//! print!("{}", DotGenerator::new().generate_dot(&graph));
//! ```
//!
//! # Quickstart (CLI)
//! ```text
//! kustomize-graph manifests | dot -Tsvg -o overlays.svg
//! kustomize-graph manifests --verbose --json graph.json
//! ```
//!
//! # Cycles
//! Overlays referencing each other are tolerated: a per-root visited set
//! stops re-entry while both edges are still recorded.
pub mod app;
pub mod cli;
pub mod errors;
pub mod fsys;
pub mod graph;
pub mod kustomization;
pub mod utils;
pub mod visualization;
