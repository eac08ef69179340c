//! Expand a structure tree onto the filesystem
//!
//! Directories are created idempotently and files are always overwritten,
//! so expanding the same tree twice leaves the same contents on disk.
//! Errors stop the walk immediately; whatever was written before the
//! failure stays in place.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::structure::Node;

/// Counts of what an expansion wrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaffoldSummary {
    pub directories: usize,
    pub files: usize,
}

pub struct Scaffold {
    root: PathBuf,
}

impl Scaffold {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create every directory and file described by `structure` under the root
    pub fn create_project(&self, structure: &Node) -> Result<ScaffoldSummary> {
        let mut summary = ScaffoldSummary::default();
        match structure {
            Node::Directory(entries) => expand_entries(&self.root, entries, &mut summary)?,
            Node::File(_) => anyhow::bail!("Project structure must be a directory at its root"),
        }
        Ok(summary)
    }
}

/// Expand `structure` into `destination`
pub fn expand(destination: &Path, structure: &Node) -> Result<ScaffoldSummary> {
    Scaffold::new(destination).create_project(structure)
}

fn expand_entries(
    parent: &Path,
    entries: &[(String, Node)],
    summary: &mut ScaffoldSummary,
) -> Result<()> {
    for (name, node) in entries {
        let path = parent.join(name);
        match node {
            Node::Directory(children) => {
                fs::create_dir_all(&path)
                    .with_context(|| format!("Failed to create directory: {}", path.display()))?;
                tracing::debug!(path = %path.display(), "created directory");
                summary.directories += 1;
                expand_entries(&path, children, summary)?;
            }
            Node::File(contents) => {
                // Names like "src/main.js" need their parent created first
                if let Some(dir) = path.parent() {
                    if !dir.exists() {
                        fs::create_dir_all(dir).with_context(|| {
                            format!("Failed to create directory: {}", dir.display())
                        })?;
                    }
                }
                fs::write(&path, contents)
                    .with_context(|| format!("Failed to write file: {}", path.display()))?;
                tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote file");
                summary.files += 1;
            }
        }
    }
    Ok(())
}
