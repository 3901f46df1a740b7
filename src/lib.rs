pub mod cli;
pub mod config;
pub mod core;
pub mod launcher;

pub use crate::core::error::{HomelabError, Result};
pub use launcher::{resolve_repo_root, run, run_with_config, LaunchOutcome, Launcher};
