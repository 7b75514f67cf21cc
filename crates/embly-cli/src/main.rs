//! embly: set up and locate the per-user embly directory.
//!
//! Set `EMBLY__HOME` to use another home directory than the current user's.

mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use embly_home::{
    UserContext, cache_dir_with, ensure_application_directories_with, nix_dir_with,
    resolve_application_directory_with,
};

#[derive(Parser, Debug)]
#[command(name = "embly")]
#[command(about = "Set up and locate the per-user embly directory", long_about = None)]
struct Cli {
    /// Defaults to `init`
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Create ~/.embly, ~/.embly/cache and ~/.embly/nix if missing
    Init,
    /// Print the embly directory
    Path,
    /// Print the cache directory
    Cache,
    /// Print the nix directory
    Nix,
}

fn run(command: Command, user: &dyn UserContext) -> embly_home::Result<PathBuf> {
    match command {
        Command::Init => {
            let created = ensure_application_directories_with(user)?;
            if created.is_empty() {
                log::info!("embly directory already initialized");
            }
            resolve_application_directory_with(user)
        }
        Command::Path => resolve_application_directory_with(user),
        Command::Cache => cache_dir_with(user),
        Command::Nix => nix_dir_with(user),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = config::Settings::load()?;
    let user = settings.user();

    let path = run(cli.command.unwrap_or(Command::Init), &*user)?;
    println!("{}", path.display());
    Ok(())
}
