use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KustomizationError {
    #[error("no kustomization file found in {dir}")]
    NotFound { dir: PathBuf },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid kustomization {file}: {source}")]
    Yaml { file: PathBuf, source: serde_yaml::Error },
}

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("failed to read overlay at {dir}: {source}")]
    Kustomization { dir: PathBuf, source: KustomizationError },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{path} is not under the top directory {top}")]
    OutsideTopDir { path: PathBuf, top: PathBuf },
}
