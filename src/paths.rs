//! Single source of truth for the filesystem names scaffolder relies on.
//!
//! No I/O happens here. Anything that decides where a file lives, or what a
//! well-known file is called, belongs in this module.
//!
//! # User-Level Paths
//!
//! ```text
//! <config dir>/scaffolder/
//! └── config.toml              # Optional settings
//! ```
//!
//! # Template Layout
//!
//! ```text
//! templates/
//! ├── .gitignore
//! ├── package.json
//! └── vite.config.js
//! ```

use std::path::PathBuf;

/// Directory name searched for during template auto-discovery
pub const TEMPLATES_DIR_NAME: &str = "templates";

/// Files copied from the template directory into every new project
pub const TEMPLATE_FILES: &[&str] = &[".gitignore", "package.json", "vite.config.js"];

/// Dev dependencies installed by the bootstrapper
pub const DEFAULT_DEPENDENCIES: &[&str] = &["vite"];

/// Package manager used when none is configured
pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";

/// User config directory: `<config dir>/scaffolder/`
///
/// `None` when the platform has no notion of a config directory.
pub fn scaffolder_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("scaffolder"))
}

/// Default settings file: `<config dir>/scaffolder/config.toml`
pub fn settings_path() -> Option<PathBuf> {
    scaffolder_config_dir().map(|dir| dir.join("config.toml"))
}
