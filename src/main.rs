fn main() {
    let cli = kustomize_graph::cli::parse();
    let code = kustomize_graph::app::run_cli(cli);
    if code != 0 {
        std::process::exit(code);
    }
}
