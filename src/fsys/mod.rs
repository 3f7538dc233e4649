//! Filesystem access behind a narrow trait.
//!
//! Traversal and discovery only need four capabilities: a recursive walk,
//! existence and directory checks, and whole-file reads. Keeping them behind
//! `FileSystem` lets the graph code stay independent of where the manifests
//! actually live.
use std::io;
use std::path::Path;

pub trait FileSystem {
    /// Invoke `visit` for every entry under `root` (including files). The
    /// visitor may abort the walk by returning an error, which is propagated.
    ///
    /// # Errors
    /// Returns the first IO error encountered by the walk or the visitor.
    fn walk(
        &self,
        root: &Path,
        visit: &mut dyn FnMut(&Path, bool) -> io::Result<()>,
    ) -> io::Result<()>;

    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// # Errors
    /// Returns the underlying IO error when the file cannot be read.
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// On-disk implementation backed by `walkdir` and `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskFs;

impl FileSystem for DiskFs {
    fn walk(
        &self,
        root: &Path,
        visit: &mut dyn FnMut(&Path, bool) -> io::Result<()>,
    ) -> io::Result<()> {
        // Sorted entries keep discovery order (and therefore output order)
        // deterministic across platforms.
        for entry in walkdir::WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(io::Error::other)?;
            visit(entry.path(), entry.file_type().is_dir())?;
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}
