//! Template copying for new projects
//!
//! A template directory holds a handful of boilerplate files (`.gitignore`,
//! `package.json`, the dev-server config) that every project gets verbatim.
//! Only the listed names are copied; anything else in the directory is
//! ignored. A listed file that is missing is reported, never fatal.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a template copy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub copied: Vec<String>,
    pub missing: Vec<String>,
}

/// Copy each of `files` from `template_dir` into `destination`
///
/// Existing files in the destination are overwritten.
pub fn copy_templates(
    template_dir: &Path,
    destination: &Path,
    files: &[String],
) -> Result<CopyReport> {
    let mut report = CopyReport::default();

    for name in files {
        let source = template_dir.join(name);
        if !source.is_file() {
            tracing::warn!(
                "Template file '{}' not found in {}, skipping",
                name,
                template_dir.display()
            );
            report.missing.push(name.clone());
            continue;
        }

        let target = destination.join(name);
        if is_same_file(&source, &target) {
            // Copying a file onto itself would truncate it
            tracing::debug!(path = %source.display(), "template already in place");
            report.copied.push(name.clone());
            continue;
        }
        fs::copy(&source, &target).with_context(|| {
            format!(
                "Failed to copy template {} to {}",
                source.display(),
                target.display()
            )
        })?;
        tracing::debug!(from = %source.display(), to = %target.display(), "copied template");
        report.copied.push(name.clone());
    }

    Ok(report)
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Find a template directory named `dir_name` using multiple strategies
///
/// 1. The structure file's directory and its ancestors, nearest first
/// 2. `working_dir` and its ancestors
/// 3. Next to the executable, up to two levels above it
///
/// At each candidate `<dir>/<dir_name>` is checked, so a templates folder
/// sitting beside any ancestor is found too. The first hit wins.
pub fn find_template_dir(
    structure_file: &Path,
    working_dir: &Path,
    dir_name: &str,
) -> Option<PathBuf> {
    // Strategy 1: Around the structure file
    if let Some(found) = structure_file
        .parent()
        .and_then(|dir| search_ancestors(dir, dir_name))
    {
        return Some(found);
    }

    // Strategy 2: Around the working directory
    if let Some(found) = search_ancestors(working_dir, dir_name) {
        return Some(found);
    }

    // Strategy 3: Relative to executable
    if let Ok(exe_path) = std::env::current_exe() {
        for dir in exe_path.ancestors().skip(1).take(3) {
            let candidate = dir.join(dir_name);
            if candidate.is_dir() {
                return Some(candidate);
            }
        }
    }

    None
}

fn search_ancestors(start: &Path, dir_name: &str) -> Option<PathBuf> {
    let mut path = start;

    loop {
        let candidate = path.join(dir_name);
        if candidate.is_dir() {
            tracing::debug!(path = %candidate.display(), "discovered template directory");
            return Some(candidate);
        }

        match path.parent() {
            Some(parent) => path = parent,
            None => return None,
        }
    }
}
