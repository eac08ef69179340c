use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use scaffolder::bootstrap::{self, PackageManager};
use scaffolder::driver::{self, RunSummary};
use scaffolder::{Config, Settings};

/// Command line values for a scaffolding run
pub struct Args {
    pub json_file: PathBuf,
    pub destination: Option<PathBuf>,
    pub template_directory: Option<PathBuf>,
    pub package_manager: Option<String>,
    pub skip_install: bool,
    pub config: Option<PathBuf>,
}

pub fn execute(args: Args) -> Result<()> {
    let working_dir = std::env::current_dir().context("Failed to get current directory")?;
    let settings = Settings::load(args.config.as_deref())?;

    let config = Config::new(
        &working_dir,
        &args.json_file,
        args.destination.as_deref(),
        args.template_directory.as_deref(),
        args.package_manager,
        args.skip_install,
        settings,
    );

    let manager = bootstrap::get_package_manager(&config.package_manager)?;
    let summary = driver::run(&config, manager.as_ref())?;

    print_guidance(&summary, manager.as_ref());
    Ok(())
}

fn print_guidance(summary: &RunSummary, manager: &dyn PackageManager) {
    if let Some(report) = &summary.templates {
        if !report.missing.is_empty() {
            println!(
                "  ⚠️  Missing templates: {}",
                report.missing.join(", ").yellow()
            );
        }
    }

    println!("\n{}", "✅ Project setup complete!".green().bold());
    println!("\nTo start developing:");
    println!("  cd {}", summary.destination.display().to_string().cyan());
    if summary.bootstrapped {
        println!("  {}", manager.dev_command().cyan());
    } else {
        println!("  {} {}", manager.name().cyan(), "install".cyan());
        println!("  {}", manager.dev_command().cyan());
    }
}
