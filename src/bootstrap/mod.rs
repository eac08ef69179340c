pub mod npm;
pub mod pnpm;
pub mod yarn;

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Trait for package manager integrations
pub trait PackageManager {
    /// Get the name of this package manager
    fn name(&self) -> &'static str;

    /// Executable to spawn
    fn program(&self) -> &str {
        self.name()
    }

    /// Arguments that create the package manifest non-interactively
    fn init_args(&self) -> Vec<String>;

    /// Arguments that install `dependencies` as dev dependencies
    fn install_args(&self, dependencies: &[String]) -> Vec<String>;

    /// Command suggested to start the dev server once setup is done
    fn dev_command(&self) -> String;

    /// Check if this package manager is available
    fn is_available(&self) -> bool {
        which::which(self.program()).is_ok()
    }
}

/// Get a package manager by name
pub fn get_package_manager(name: &str) -> Result<Box<dyn PackageManager>> {
    match name.to_lowercase().as_str() {
        "npm" => Ok(Box::new(npm::Npm)),
        "pnpm" => Ok(Box::new(pnpm::Pnpm)),
        "yarn" => Ok(Box::new(yarn::Yarn)),
        other => anyhow::bail!("Unknown package manager '{other}' (expected npm, pnpm or yarn)"),
    }
}

/// Initialize the project manifest and install `dependencies`
///
/// Both commands run in `project_path` with inherited stdio and must exit
/// successfully. Nothing is rolled back on failure.
pub fn bootstrap(
    manager: &dyn PackageManager,
    project_path: &Path,
    dependencies: &[String],
) -> Result<()> {
    if !manager.is_available() {
        anyhow::bail!("{} is not installed or not on PATH", manager.program());
    }

    println!("📦 Initializing project with {}...", manager.name());
    run_step(manager, project_path, &manager.init_args())?;

    if dependencies.is_empty() {
        tracing::info!("no dependencies configured, skipping install");
        return Ok(());
    }

    println!("📥 Installing {}...", dependencies.join(", "));
    run_step(manager, project_path, &manager.install_args(dependencies))?;

    Ok(())
}

fn run_step(manager: &dyn PackageManager, project_path: &Path, args: &[String]) -> Result<()> {
    let program = manager.program();
    tracing::debug!(program, ?args, cwd = %project_path.display(), "running");

    let status = Command::new(program)
        .current_dir(project_path)
        .args(args)
        .status()
        .with_context(|| format!("Failed to run {program} {}", args.join(" ")))?;

    if !status.success() {
        match status.code() {
            Some(code) => anyhow::bail!("{program} {} exited with status {code}", args.join(" ")),
            None => anyhow::bail!("{program} {} was terminated by a signal", args.join(" ")),
        }
    }

    Ok(())
}
