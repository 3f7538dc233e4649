use kustomize_graph::errors::GraphError;
use kustomize_graph::fsys::DiskFs;
use kustomize_graph::graph::{Edge, OverlayGraph, ROOT_SEGMENT};
use std::fs;
use std::path::Path;

fn write_overlay(top: &Path, rel: &str, kustomization: &str) {
    let dir = top.join(rel);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("kustomization.yaml"), kustomization).unwrap();
}

fn edge(src: &str, dst: &str) -> Edge {
    Edge { src: src.to_string(), dst: dst.to_string() }
}

#[test]
fn isolated_overlays_yield_nodes_without_edges() {
    let tmp = tempfile::tempdir().unwrap();
    let top = tmp.path();
    write_overlay(top, "a", "resources: []\n");
    write_overlay(top, "b", "{}\n");
    write_overlay(top, "c/nested", "{}\n");

    let graph = OverlayGraph::build_from_directory(&DiskFs, top).unwrap();
    assert!(graph.edges.is_empty());
    let root = graph.tree.children.get(ROOT_SEGMENT).expect("root group");
    assert_eq!(root.overlays, vec!["a", "b"]);
    let c = graph.tree.children.get("c").expect("c group");
    assert_eq!(c.overlays, vec!["nested"]);
}

#[test]
fn resource_directory_reference_becomes_edge() {
    let tmp = tempfile::tempdir().unwrap();
    let top = tmp.path();
    write_overlay(top, "base", "{}\n");
    write_overlay(top, "overlay", "resources:\n  - ../base\n");

    let graph = OverlayGraph::build_from_directory(&DiskFs, top).unwrap();
    assert_eq!(graph.edges, vec![edge("overlay", "base")]);
}

#[test]
fn component_directory_reference_becomes_edge() {
    let tmp = tempfile::tempdir().unwrap();
    let top = tmp.path();
    write_overlay(top, "components/logging", "{}\n");
    write_overlay(top, "overlay", "components:\n  - ../components/logging\n");

    let graph = OverlayGraph::build_from_directory(&DiskFs, top).unwrap();
    assert_eq!(graph.edges, vec![edge("overlay", "components/logging")]);
}

#[test]
fn duplicate_reference_produces_single_edge() {
    let tmp = tempfile::tempdir().unwrap();
    let top = tmp.path();
    write_overlay(top, "base", "{}\n");
    write_overlay(top, "overlay", "resources:\n  - ../base\n  - ../base\n");

    let graph = OverlayGraph::build_from_directory(&DiskFs, top).unwrap();
    assert_eq!(graph.edges, vec![edge("overlay", "base")]);
}

#[test]
fn diamond_reach_records_each_edge_once() {
    // root -> left -> shared, root -> right -> shared; shared is reached
    // twice within one root's traversal and again as its own discovery root.
    let tmp = tempfile::tempdir().unwrap();
    let top = tmp.path();
    write_overlay(top, "shared", "{}\n");
    write_overlay(top, "left", "resources:\n  - ../shared\n");
    write_overlay(top, "right", "resources:\n  - ../shared\n");
    write_overlay(top, "root", "resources:\n  - ../left\n  - ../right\n");

    let graph = OverlayGraph::build_from_directory(&DiskFs, top).unwrap();
    let mut edges = graph.edges.clone();
    edges.sort_by(|a, b| (a.src.clone(), a.dst.clone()).cmp(&(b.src.clone(), b.dst.clone())));
    assert_eq!(
        edges,
        vec![
            edge("left", "shared"),
            edge("right", "shared"),
            edge("root", "left"),
            edge("root", "right"),
        ]
    );
}

#[test]
fn missing_reference_is_not_an_edge_and_not_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let top = tmp.path();
    write_overlay(top, "overlay", "resources:\n  - ../does-not-exist\ncomponents:\n  - ../gone\n");

    let graph = OverlayGraph::build_from_directory(&DiskFs, top).unwrap();
    assert!(graph.edges.is_empty());
    // The dangling targets never appear in the tree either
    assert_eq!(graph.tree.children.len(), 1);
    let root = graph.tree.children.get(ROOT_SEGMENT).unwrap();
    assert_eq!(root.overlays, vec!["overlay"]);
}

#[test]
fn plain_file_resource_is_not_an_edge() {
    let tmp = tempfile::tempdir().unwrap();
    let top = tmp.path();
    write_overlay(top, "overlay", "resources:\n  - deployment.yaml\n");
    fs::write(top.join("overlay/deployment.yaml"), "kind: Deployment\n").unwrap();

    let graph = OverlayGraph::build_from_directory(&DiskFs, top).unwrap();
    assert!(graph.edges.is_empty());
}

#[test]
fn missing_patch_and_transformer_paths_are_not_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let top = tmp.path();
    write_overlay(
        top,
        "overlay",
        "patches:\n  - path: nope.yaml\n  - patch: |-\n      inline\nreplacements:\n  - path: gone.yaml\ntransformers:\n  - missing.yaml\nconfigurations:\n  - absent.yaml\n",
    );

    let graph = OverlayGraph::build_from_directory(&DiskFs, top).unwrap();
    assert!(graph.edges.is_empty());
}

#[test]
fn reference_cycle_terminates_with_both_edges() {
    let tmp = tempfile::tempdir().unwrap();
    let top = tmp.path();
    write_overlay(top, "a", "resources:\n  - ../b\n");
    write_overlay(top, "b", "resources:\n  - ../a\n");

    let graph = OverlayGraph::build_from_directory(&DiskFs, top).unwrap();
    let mut edges = graph.edges.clone();
    edges.sort_by(|x, y| x.src.cmp(&y.src));
    assert_eq!(edges, vec![edge("a", "b"), edge("b", "a")]);
}

#[test]
fn bases_fold_into_resources() {
    let tmp = tempfile::tempdir().unwrap();
    let top = tmp.path();
    write_overlay(top, "base", "{}\n");
    write_overlay(top, "overlay", "bases:\n  - ../base\n");

    let graph = OverlayGraph::build_from_directory(&DiskFs, top).unwrap();
    assert_eq!(graph.edges, vec![edge("overlay", "base")]);
}

#[test]
fn malformed_kustomization_aborts_the_run() {
    let tmp = tempfile::tempdir().unwrap();
    let top = tmp.path();
    write_overlay(top, "broken", "resources: {oops\n");
    write_overlay(top, "fine", "{}\n");

    let err = OverlayGraph::build_from_directory(&DiskFs, top).unwrap_err();
    assert!(matches!(err, GraphError::Kustomization { .. }));
}

#[test]
fn referenced_directory_without_marker_is_fatal() {
    // A directory resource is a traversal child; reading it must succeed.
    let tmp = tempfile::tempdir().unwrap();
    let top = tmp.path();
    fs::create_dir_all(top.join("plain-dir")).unwrap();
    write_overlay(top, "overlay", "resources:\n  - ../plain-dir\n");

    let err = OverlayGraph::build_from_directory(&DiskFs, top).unwrap_err();
    match err {
        GraphError::Kustomization { dir, .. } => {
            assert!(dir.ends_with("plain-dir"));
        }
        other => panic!("expected Kustomization error, got {other:?}"),
    }
}

#[test]
fn resources_resolve_before_components() {
    let tmp = tempfile::tempdir().unwrap();
    let top = tmp.path();
    write_overlay(top, "res", "{}\n");
    write_overlay(top, "comp", "{}\n");
    write_overlay(top, "overlay", "components:\n  - ../comp\nresources:\n  - ../res\n");

    let graph = OverlayGraph::build_from_directory(&DiskFs, top).unwrap();
    // Within one overlay, resource edges lead component edges
    let from_overlay: Vec<&Edge> = graph.edges.iter().filter(|e| e.src == "overlay").collect();
    assert_eq!(from_overlay[0].dst, "res");
    assert_eq!(from_overlay[1].dst, "comp");
}
