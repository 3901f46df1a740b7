#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

pub fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_homelab"))
}

/// Temporary repository containing `scripts/menu.sh` with `body`.
pub fn create_repo(body: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let scripts = dir.path().join("scripts");
    std::fs::create_dir_all(&scripts).expect("Failed to create scripts dir");
    std::fs::write(scripts.join("menu.sh"), body).expect("Failed to write menu.sh");
    dir
}

/// Copy the built binary into `<repo>/target/release/homelab`.
pub fn install_binary(repo: &Path) -> PathBuf {
    let bin_dir = repo.join("target").join("release");
    std::fs::create_dir_all(&bin_dir).expect("Failed to create target dir");
    let dest = bin_dir.join("homelab");
    std::fs::copy(get_binary_path(), &dest).expect("Failed to copy binary");
    dest
}

/// `binary` with no arguments, with `HOME` and `XDG_CONFIG_HOME` pointing
/// at `config_home` so the user's real config is never picked up.
pub fn bare_command(binary: &Path, config_home: &Path) -> Command {
    let mut cmd = Command::new(binary);
    cmd.env("HOME", config_home)
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null());
    cmd
}

/// Built binary reading its config from `<config_home>/config.toml`.
pub fn homelab(config_home: &Path) -> Command {
    let mut cmd = bare_command(&get_binary_path(), config_home);
    cmd.arg("--config").arg(config_home.join("config.toml"));
    cmd
}
