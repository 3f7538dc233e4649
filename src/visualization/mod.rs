use crate::graph::{DirNode, Edge, OverlayGraph, ROOT_SEGMENT};
use std::fmt::Write as _;

/// Display name substituted for the reserved top-directory segment.
const ROOT_DISPLAY_NAME: &str = "(root)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DotTheme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DotOptions {
    pub theme: DotTheme,
}

#[derive(Debug, Default)]
pub struct DotGenerator;

impl DotGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    /// Generate the DOT document with default options.
    #[must_use]
    pub fn generate_dot(&self, graph: &OverlayGraph) -> String {
        self.generate_dot_with_options(graph, DotOptions::default())
    }

    /// Generate the DOT document: opening marker, nested cluster sections
    /// mirroring the directory tree, edge lines in collection order,
    /// closing marker. Total over any graph state, including an empty one.
    #[must_use]
    pub fn generate_dot_with_options(&self, graph: &OverlayGraph, opts: DotOptions) -> String {
        let mut out = String::new();
        out.push_str("digraph G {\n");
        self.write_nodes(&graph.tree, "", 1, opts, &mut out);
        self.write_edges(&graph.edges, 1, &mut out);
        out.push_str("}\n");
        out
    }

    fn write_nodes(
        &self,
        node: &DirNode,
        prefix: &str,
        indent_level: usize,
        opts: DotOptions,
        out: &mut String,
    ) {
        let indent = "  ".repeat(indent_level);
        let next_indent = "  ".repeat(indent_level + 1);

        for overlay in &node.overlays {
            let id = join_id(prefix, overlay);
            let _ = writeln!(out, "{indent}\"{id}\"  [label=\"{overlay}\"]");
        }

        // BTreeMap iteration keeps sibling clusters in lexical order.
        for (segment, child) in &node.children {
            let display = if segment == ROOT_SEGMENT { ROOT_DISPLAY_NAME } else { segment };
            let fill = match opts.theme {
                DotTheme::Light => "lightgray",
                DotTheme::Dark => "gray25",
            };

            out.push('\n');
            let _ = writeln!(out, "{indent}subgraph cluster_{} {{", sanitize_segment(display));
            let _ = writeln!(out, "{next_indent}label = \"{display}\"");
            let _ = writeln!(out, "{next_indent}fillcolor={fill};");
            let _ = writeln!(out, "{next_indent}style=filled;");
            let _ = writeln!(out, "{next_indent}color=white;");
            let _ = writeln!(out, "{next_indent}penwidth=3;");
            let _ = writeln!(out, "{next_indent}node [style=filled,color=white];");

            // The sentinel segment is display-only: it must not leak into
            // node addresses, which stay equal to overlay identifiers.
            let child_prefix = if segment == ROOT_SEGMENT {
                prefix.to_string()
            } else {
                join_id(prefix, segment)
            };
            self.write_nodes(child, &child_prefix, indent_level + 1, opts, out);
            let _ = writeln!(out, "{indent}}}");
        }
    }

    fn write_edges(&self, edges: &[Edge], indent_level: usize, out: &mut String) {
        let indent = "  ".repeat(indent_level);
        for edge in edges {
            let _ = writeln!(out, "{indent}\"{}\" -> \"{}\"", edge.src, edge.dst);
        }
    }
}

fn join_id(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}/{name}")
    }
}

/// Cluster identifiers have stricter syntax than labels: `-`, `.`, `(` and
/// `)` are replaced with `_`.
fn sanitize_segment(segment: &str) -> String {
    segment
        .chars()
        .map(|c| match c {
            '-' | '.' | '(' | ')' => '_',
            other => other,
        })
        .collect()
}
