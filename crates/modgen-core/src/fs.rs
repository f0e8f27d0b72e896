// crates/modgen-core/src/fs.rs
//
// Filesystem helpers for generators.
// - create_path: join segments, mkdir -p, idempotent
// - write_file: ensure parent dir, write UTF-8, overwrite
// - path_exists
// OS errors are returned with the failing path attached.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Join `segments` and create the directory (and its parents) if missing.
/// Returns the joined path.
pub fn create_path<I, P>(segments: I) -> Result<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let full: PathBuf = segments.into_iter().collect();
    if full.as_os_str().is_empty() {
        return Ok(full);
    }
    if !full.exists() {
        std::fs::create_dir_all(&full).map_err(|e| Error::io(&full, e))?;
        tracing::debug!(path = %full.display(), "created directory");
    }
    Ok(full)
}

pub fn write_file(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        create_path([dir])?;
    }
    std::fs::write(path, content).map_err(|e| Error::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

pub fn path_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}
