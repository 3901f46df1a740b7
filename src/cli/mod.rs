pub mod commands;

use crate::config::{
    validate_launcher_config, GlobalConfigManager, LauncherConfig, LauncherOverrides,
};
use crate::core::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Launcher settings come from flags and the config file only; the
// environment belongs to the menu.
#[derive(Parser, Debug)]
#[command(
    name = "homelab",
    version,
    about = "Launch the homelab Bash menu",
    long_about = None
)]
pub struct Cli {
    /// Repository root (default: derived from the executable location)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Interpreter used to run the menu script (default: bash)
    #[arg(long, global = true, value_name = "PROGRAM")]
    pub interpreter: Option<String>,

    /// Config file (default: per-user config.toml, optional)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the menu script (same as running without a subcommand)
    Menu,

    /// Check the interpreter and menu script
    Doctor,
}

impl Cli {
    fn overrides(&self) -> LauncherOverrides {
        LauncherOverrides {
            root: self.root.clone(),
            interpreter: self.interpreter.clone(),
        }
    }

    fn config_manager(&self) -> GlobalConfigManager {
        match &self.config {
            Some(path) => GlobalConfigManager::with_path(path),
            None => GlobalConfigManager::new(),
        }
    }
}

/// Config file values with command-line overrides applied.
pub async fn load_launcher_config(cli: &Cli) -> Result<LauncherConfig> {
    let manager = cli.config_manager();
    let config = manager
        .load()
        .await?
        .launcher
        .with_overrides(&cli.overrides());
    validate_launcher_config(&config)?;
    Ok(config)
}

pub async fn run(cli: Cli) -> Result<()> {
    let config = load_launcher_config(&cli).await?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => commands::menu::execute(&config).await,
        Commands::Doctor => commands::doctor::execute(&config).await,
    }
}
