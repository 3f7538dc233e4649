use clap::Parser;
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(
    name = "kustomize-graph",
    version,
    about = "Graph kustomize overlay composition as Graphviz DOT",
    long_about = "Scan a manifest tree for kustomization files, resolve each overlay's \
resource/component references into a directed graph, and print a DOT document with \
overlays clustered by directory. Missing references are reported on stderr; only \
references that resolve to overlay directories become edges."
)]
pub struct Cli {
    /// Manifest top directory
    #[arg(default_value = ".")]
    pub top_dir: String,

    /// Enable debug-level diagnostics (per-entry tracing) on stderr
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Write the DOT document to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Write the graph (tree and edges) as JSON to a file
    #[arg(long)]
    pub json: Option<String>,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
