//! Filesystem side of generation.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Validate a planned output path and convert it to a platform path.
///
/// Paths must be relative, non-empty and must not step out of the root.
pub fn checked_relative(path: &str) -> Result<PathBuf, String> {
    if path.trim().is_empty() {
        return Err("empty output path".to_string());
    }

    let candidate = Path::new(path);
    let mut relative = PathBuf::new();
    for component in candidate.components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                return Err(format!("output path '{path}' must not contain '..'"));
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(format!("output path '{path}' must be relative"));
            }
        }
    }

    if relative.as_os_str().is_empty() {
        return Err(format!("output path '{path}' names no file"));
    }
    Ok(relative)
}

/// Writes whole files below one root directory.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    root: PathBuf,
}

impl OutputWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `contents` to `root/relative`, creating parent directories and
    /// replacing any previous file.
    pub fn write(&self, relative: &Path, contents: &str) -> io::Result<PathBuf> {
        let full = self.root.join(relative);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full, contents)?;
        Ok(full)
    }
}
