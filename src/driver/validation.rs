//! Input validation that must pass before anything is written

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::TemplateSource;
use crate::templates;

/// Check the structure file exists and is a regular file
pub fn validate_structure_file(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("File '{}' does not exist", path.display());
    }
    if !path.is_file() {
        anyhow::bail!("'{}' is not a file", path.display());
    }
    if !path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    {
        tracing::warn!("'{}' does not have a .json extension", path.display());
    }
    Ok(())
}

/// Resolve where templates come from
///
/// An explicit directory must exist; a discovered one may be absent, in
/// which case template copying is skipped.
pub fn resolve_template_dir(
    source: &TemplateSource,
    structure_file: &Path,
    working_dir: &Path,
) -> Result<Option<PathBuf>> {
    match source {
        TemplateSource::Explicit(dir) => {
            if !dir.exists() {
                anyhow::bail!("Template directory '{}' does not exist", dir.display());
            }
            if !dir.is_dir() {
                anyhow::bail!("'{}' exists but is not a directory", dir.display());
            }
            Ok(Some(dir.clone()))
        }
        TemplateSource::Discover(name) => {
            let found = templates::find_template_dir(structure_file, working_dir, name);
            if found.is_none() {
                tracing::warn!("No '{name}' directory found, skipping template copy");
            }
            Ok(found)
        }
    }
}

/// The destination may be missing but must not be a regular file
pub fn validate_destination(destination: &Path) -> Result<()> {
    if destination.exists() && !destination.is_dir() {
        anyhow::bail!(
            "Destination '{}' exists but is not a directory",
            destination.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_structure_file_checks() -> Result<()> {
        let temp = TempDir::new()?;
        assert!(validate_structure_file(&temp.path().join("missing.json")).is_err());
        assert!(validate_structure_file(temp.path()).is_err());

        let file = temp.path().join("layout.txt");
        fs::write(&file, "{}")?;
        // Wrong extension only warns
        validate_structure_file(&file)?;
        Ok(())
    }

    #[test]
    fn test_explicit_template_dir_must_exist() -> Result<()> {
        let temp = TempDir::new()?;
        let missing = TemplateSource::Explicit(temp.path().join("nope"));
        let err = resolve_template_dir(&missing, &temp.path().join("s.json"), temp.path())
            .unwrap_err();
        assert!(err.to_string().contains("does not exist"));

        let file = temp.path().join("file");
        fs::write(&file, "")?;
        let not_dir = TemplateSource::Explicit(file);
        assert!(resolve_template_dir(&not_dir, &temp.path().join("s.json"), temp.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_destination_must_not_be_file() -> Result<()> {
        let temp = TempDir::new()?;
        validate_destination(&temp.path().join("new-app"))?;
        validate_destination(temp.path())?;

        let file = temp.path().join("app");
        fs::write(&file, "")?;
        assert!(validate_destination(&file).is_err());
        Ok(())
    }
}
