//! Run a full scaffolding pass
//!
//! All checks happen before the first write:
//!
//! 1. **Structure file**: must exist and parse as a JSON object
//! 2. **Templates**: explicit directory must exist, otherwise discovered
//! 3. **Destination**: created if missing, must not be a file
//!
//! Then the steps run in order, each awaited before the next:
//!
//! 4. **Expand**: write the structure tree
//! 5. **Templates**: copy boilerplate files (missing ones only warn)
//! 6. **Bootstrap**: package manager init + install
//!
//! Nothing here exits the process. Errors go back to the caller.

pub mod validation;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::bootstrap::{self, PackageManager};
use crate::config::Config;
use crate::scaffold::{self, ScaffoldSummary};
use crate::structure;
use crate::templates::{self, CopyReport};

/// What a completed run did
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub destination: PathBuf,
    pub scaffold: ScaffoldSummary,
    /// `None` when no template directory was available
    pub templates: Option<CopyReport>,
    pub bootstrapped: bool,
}

/// Execute every step for `config`, using `manager` for the bootstrap step
pub fn run(config: &Config, manager: &dyn PackageManager) -> Result<RunSummary> {
    validation::validate_structure_file(&config.structure_file)?;
    let root = structure::load(&config.structure_file)?;

    let template_dir = validation::resolve_template_dir(
        &config.templates,
        &config.structure_file,
        &config.working_dir,
    )?;
    validation::validate_destination(&config.destination)?;

    // === Validation done, start writing ===
    fs::create_dir_all(&config.destination).with_context(|| {
        format!(
            "Failed to create destination: {}",
            config.destination.display()
        )
    })?;

    println!(
        "🏗️  Creating project structure in {}",
        config.destination.display()
    );
    let summary = scaffold::expand(&config.destination, &root)?;
    println!(
        "  ✓ Created {} directories and {} files",
        summary.directories, summary.files
    );

    let copy_report = match &template_dir {
        Some(dir) => {
            let report =
                templates::copy_templates(dir, &config.destination, &config.template_files)?;
            println!(
                "  ✓ Copied {} template file(s) from {}",
                report.copied.len(),
                dir.display()
            );
            Some(report)
        }
        None => None,
    };

    let bootstrapped = if config.skip_install {
        tracing::info!("skipping package manager bootstrap");
        false
    } else {
        bootstrap::bootstrap(manager, &config.destination, &config.dependencies)?;
        true
    };

    Ok(RunSummary {
        destination: config.destination.clone(),
        scaffold: summary,
        templates: copy_report,
        bootstrapped,
    })
}
