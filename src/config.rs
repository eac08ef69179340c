use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

/// Optional defaults read from `config.toml`
///
/// Every key may be omitted; missing keys fall back to the built-in values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    #[serde(default = "default_package_manager")]
    pub package_manager: String,
    #[serde(default = "default_dependencies")]
    pub dependencies: Vec<String>,
    #[serde(default = "default_template_files")]
    pub template_files: Vec<String>,
    #[serde(default = "default_templates_dir_name")]
    pub templates_dir_name: String,
}

fn default_package_manager() -> String {
    paths::DEFAULT_PACKAGE_MANAGER.to_string()
}
fn default_dependencies() -> Vec<String> {
    paths::DEFAULT_DEPENDENCIES.iter().map(|s| s.to_string()).collect()
}
fn default_template_files() -> Vec<String> {
    paths::TEMPLATE_FILES.iter().map(|s| s.to_string()).collect()
}
fn default_templates_dir_name() -> String {
    paths::TEMPLATES_DIR_NAME.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            package_manager: default_package_manager(),
            dependencies: default_dependencies(),
            template_files: default_template_files(),
            templates_dir_name: default_templates_dir_name(),
        }
    }
}

impl Settings {
    /// Load settings from an explicit file, or the user config if present
    ///
    /// An explicit path must exist. The user-level file is optional and
    /// defaults are returned when it is absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    anyhow::bail!("Settings file '{}' does not exist", path.display());
                }
                Self::from_file(path)
            }
            None => match paths::settings_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;
        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }
}

/// Where template files come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Directory given on the command line; must exist
    Explicit(PathBuf),
    /// Search near the structure file and working directory for this name
    Discover(String),
}

/// Everything one scaffolding run needs
///
/// Built once in `main` from arguments, working directory and settings, then
/// handed to each step. Nothing below the driver reads process state.
#[derive(Debug, Clone)]
pub struct Config {
    pub structure_file: PathBuf,
    pub destination: PathBuf,
    pub templates: TemplateSource,
    pub template_files: Vec<String>,
    pub package_manager: String,
    pub dependencies: Vec<String>,
    pub skip_install: bool,
    /// Working directory at startup, used for relative paths and discovery
    pub working_dir: PathBuf,
}

impl Config {
    /// Combine command line values with loaded settings
    ///
    /// Relative paths are resolved against `working_dir`.
    pub fn new(
        working_dir: &Path,
        structure_file: &Path,
        destination: Option<&Path>,
        template_dir: Option<&Path>,
        package_manager: Option<String>,
        skip_install: bool,
        settings: Settings,
    ) -> Self {
        let resolve = |p: &Path| {
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                working_dir.join(p)
            }
        };

        let templates = match template_dir {
            Some(dir) => TemplateSource::Explicit(resolve(dir)),
            None => TemplateSource::Discover(settings.templates_dir_name),
        };

        Self {
            structure_file: resolve(structure_file),
            destination: destination
                .map(resolve)
                .unwrap_or_else(|| working_dir.to_path_buf()),
            templates,
            template_files: settings.template_files,
            package_manager: package_manager.unwrap_or(settings.package_manager),
            dependencies: settings.dependencies,
            skip_install,
            working_dir: working_dir.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_settings_use_defaults() -> Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join("config.toml");
        fs::write(&path, "package_manager = \"pnpm\"\n")?;

        let settings = Settings::load(Some(&path))?;
        assert_eq!(settings.package_manager, "pnpm");
        assert_eq!(settings.dependencies, vec!["vite".to_string()]);
        assert_eq!(settings.templates_dir_name, "templates");
        Ok(())
    }

    #[test]
    fn test_full_settings() -> Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
package_manager = "yarn"
dependencies = ["vite", "typescript"]
template_files = ["package.json"]
templates_dir_name = "boilerplate"
"#,
        )?;

        let settings = Settings::load(Some(&path))?;
        assert_eq!(
            settings,
            Settings {
                package_manager: "yarn".into(),
                dependencies: vec!["vite".into(), "typescript".into()],
                template_files: vec!["package.json".into()],
                templates_dir_name: "boilerplate".into(),
            }
        );
        Ok(())
    }

    #[test]
    fn test_explicit_settings_must_exist() {
        let err = Settings::load(Some(Path::new("/no/such/config.toml"))).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_malformed_settings_fail() -> Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join("config.toml");
        fs::write(&path, "dependencies = \"not a list\"")?;

        assert!(Settings::load(Some(&path)).is_err());
        Ok(())
    }

    #[test]
    fn test_config_resolves_relative_paths() {
        let cwd = Path::new("/work");
        let config = Config::new(
            cwd,
            Path::new("layout.json"),
            Some(Path::new("app")),
            None,
            None,
            false,
            Settings::default(),
        );

        assert_eq!(config.structure_file, PathBuf::from("/work/layout.json"));
        assert_eq!(config.destination, PathBuf::from("/work/app"));
        assert_eq!(
            config.templates,
            TemplateSource::Discover("templates".to_string())
        );
        assert_eq!(config.package_manager, "npm");
    }

    #[test]
    fn test_cli_values_override_settings() {
        let settings = Settings {
            package_manager: "yarn".into(),
            ..Settings::default()
        };
        let config = Config::new(
            Path::new("/work"),
            Path::new("/abs/layout.json"),
            None,
            Some(Path::new("tpl")),
            Some("pnpm".into()),
            true,
            settings,
        );

        assert_eq!(config.structure_file, PathBuf::from("/abs/layout.json"));
        assert_eq!(config.destination, PathBuf::from("/work"));
        assert_eq!(
            config.templates,
            TemplateSource::Explicit(PathBuf::from("/work/tpl"))
        );
        assert_eq!(config.package_manager, "pnpm");
        assert!(config.skip_install);
    }
}
