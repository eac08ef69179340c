use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Create a front-end project scaffold from a JSON structure file", long_about = None)]
struct Cli {
    /// Path to the JSON file containing the project structure
    json_file: PathBuf,

    /// Destination directory for the project (defaults to current directory)
    destination: Option<PathBuf>,

    /// Directory holding template files (auto-discovered when omitted)
    template_directory: Option<PathBuf>,

    /// Package manager to bootstrap with (npm, pnpm, yarn)
    #[arg(long)]
    package_manager: Option<String>,

    /// Skip package manager init and dependency install
    #[arg(long)]
    skip_install: bool,

    /// Settings file (defaults to the user config, if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = SubscriberBuilder::default()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();

    commands::scaffold::execute(commands::scaffold::Args {
        json_file: cli.json_file,
        destination: cli.destination,
        template_directory: cli.template_directory,
        package_manager: cli.package_manager,
        skip_install: cli.skip_install,
        config: cli.config,
    })
}
