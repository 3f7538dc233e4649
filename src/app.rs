use crate::cli::Cli;
use crate::fsys::DiskFs;
use crate::graph::OverlayGraph;
use crate::visualization::{DotGenerator, DotOptions, DotTheme};
use clap::CommandFactory;
use clap_complete::generate;
use std::fs;
use std::io;
use std::path::Path;

/// Run the CLI logic in-process.
///
/// Returns an exit code (0 = success). All diagnostics go to stderr; the
/// DOT document is the only stdout output.
#[must_use]
pub fn run_cli(cli: Cli) -> i32 {
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let bin_name = env!("CARGO_PKG_NAME");
        generate(shell, &mut cmd, bin_name, &mut io::stdout());
        return 0;
    }

    init_logging(cli.verbose);

    let top_dir = Path::new(&cli.top_dir);
    let graph = match OverlayGraph::build_from_directory(&DiskFs, top_dir) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    if let Some(json_path) = &cli.json {
        let serialized = match serde_json::to_string_pretty(&graph) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("JSON encode error: {e}");
                return 1;
            }
        };
        if let Err(e) = fs::write(json_path, serialized) {
            eprintln!("Failed to write JSON output {json_path}: {e}");
            return 1;
        }
    }

    let dot = DotGenerator::new().generate_dot_with_options(&graph, dot_options(&cli, top_dir));
    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, dot) {
                eprintln!("Failed to write DOT output {path}: {e}");
                return 1;
            }
        }
        None => print!("{dot}"),
    }
    0
}

fn dot_options(cli: &Cli, top_dir: &Path) -> DotOptions {
    let config = cli.config.as_ref().map_or_else(
        || crate::utils::config::load_config_near(top_dir),
        |path| crate::utils::config::load_config_at(Path::new(path)),
    );
    let theme = match config.and_then(|c| c.dot).and_then(|d| d.theme).as_deref() {
        Some("dark") => DotTheme::Dark,
        _ => DotTheme::Light,
    };
    DotOptions { theme }
}

fn init_logging(verbose: bool) {
    // RUST_LOG wins when set; otherwise --verbose lowers the floor to debug.
    let default_filter = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
