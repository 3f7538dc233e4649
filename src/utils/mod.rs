pub mod contain {
    /// Membership test by structural equality over a small ordered collection.
    #[must_use]
    pub fn contains<T: PartialEq>(items: &[T], needle: &T) -> bool {
        items.iter().any(|item| item == needle)
    }

}

pub mod config {
    use serde::Deserialize;
    use std::fs;
    use std::path::Path;

    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct DotConfig {
        pub theme: Option<String>, // "light" | "dark"
    }

    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct Config {
        pub dot: Option<DotConfig>,
    }

    #[must_use]
    pub fn load_config_at(path: &Path) -> Option<Config> {
        let data = fs::read_to_string(path).ok()?;
        toml::from_str::<Config>(&data).ok()
    }

    /// Look for `kustomize-graph.toml` inside the given top directory.
    #[must_use]
    pub fn load_config_near(root: &Path) -> Option<Config> {
        let p = root.join("kustomize-graph.toml");
        if p.exists() {
            load_config_at(&p)
        } else {
            None
        }
    }
}

pub mod paths {
    use std::path::{Component, Path, PathBuf};

    use crate::errors::GraphError;

    /// Lexically normalize a path: drop `.` components and resolve `..`
    /// against preceding segments without touching the filesystem.
    #[must_use]
    pub fn normalize(path: &Path) -> PathBuf {
        let mut out = PathBuf::new();
        for comp in path.components() {
            match comp {
                Component::CurDir => {}
                Component::ParentDir => {
                    // Pop a normal segment if there is one; otherwise keep the
                    // `..` so paths escaping the root stay visibly outside.
                    let popped = matches!(
                        out.components().next_back(),
                        Some(Component::Normal(_))
                    );
                    if popped {
                        out.pop();
                    } else {
                        out.push("..");
                    }
                }
                other => out.push(other.as_os_str()),
            }
        }
        out
    }

    /// Compute the overlay identifier for `path`: its lexical path relative
    /// to `top`. The top directory itself maps to `"."`.
    ///
    /// # Errors
    /// Returns `GraphError::OutsideTopDir` when `top` is not an ancestor of
    /// `path` after normalization.
    pub fn relative_id(top: &Path, path: &Path) -> Result<String, GraphError> {
        let norm_top = normalize(top);
        let norm_path = normalize(path);
        let rel = norm_path.strip_prefix(&norm_top).map_err(|_| GraphError::OutsideTopDir {
            path: norm_path.clone(),
            top: norm_top.clone(),
        })?;
        let id = rel.to_string_lossy().replace('\\', "/");
        if id.is_empty() {
            Ok(".".to_string())
        } else {
            Ok(id)
        }
    }

}
