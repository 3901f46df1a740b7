//! Locates the homelab menu script and runs it as a child process.
//!
//! The Bash menu is the primary interface. This launcher only forwards to
//! it: the child's exit status is never turned into an error, only a
//! failure to start the interpreter is.

use crate::config::LauncherConfig;
use crate::core::error::{HomelabError, Result};
use crate::core::{repo_root_from, resolve_path, EnvSnapshot};
use anyhow::Context;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use tokio::process::{Child, Command};

/// Repository root derived from the running executable's location.
///
/// Symlinks are resolved first, so a link in `~/.local/bin` still points
/// at the checkout it was built in. Nothing is checked on disk beyond that.
pub fn resolve_repo_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot locate the running executable")?;
    let exe = std::fs::canonicalize(&exe).unwrap_or(exe);
    repo_root_from(&exe).ok_or(HomelabError::RepoRoot(exe))
}

/// Run the menu with built-in defaults: `bash <root>/scripts/menu.sh`.
pub async fn run() -> Result<()> {
    run_with_config(&LauncherConfig::default()).await
}

/// Launch the configured menu and wait for it. The menu's own exit status
/// is not ours to report.
pub async fn run_with_config(config: &LauncherConfig) -> Result<()> {
    Launcher::from_config(config)?.launch().await?;
    Ok(())
}

#[derive(Debug, Clone, Copy)]
pub struct LaunchOutcome {
    pub status: ExitStatus,
}

impl LaunchOutcome {
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    pub fn success(&self) -> bool {
        self.status.success()
    }
}

#[derive(Debug, Clone)]
pub struct Launcher {
    root: PathBuf,
    interpreter: String,
    script: PathBuf,
    env: EnvSnapshot,
}

impl Launcher {
    /// Launcher for `root`, with a snapshot of the current environment.
    pub fn new(root: &Path, config: &LauncherConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            interpreter: config.interpreter.clone(),
            script: resolve_path(root, &config.menu_script),
            env: EnvSnapshot::capture(),
        }
    }

    /// Like [`Launcher::new`], deriving the root unless the config pins one.
    pub fn from_config(config: &LauncherConfig) -> Result<Self> {
        let root = match &config.root {
            Some(root) => root.clone(),
            None => resolve_repo_root()?,
        };
        Ok(Self::new(&root, config))
    }

    pub fn with_env(mut self, env: EnvSnapshot) -> Self {
        self.env = env;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }

    pub fn script(&self) -> &Path {
        &self.script
    }

    pub fn env(&self) -> &EnvSnapshot {
        &self.env
    }

    /// `<interpreter> <script>` with the snapshot as its whole environment.
    /// Stdio is left at the `Command` defaults.
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.interpreter);
        command.arg(&self.script);
        self.env.apply(&mut command);
        command
    }

    /// Spawn the menu with inherited stdio and wait for it to exit.
    pub async fn launch(&self) -> Result<LaunchOutcome> {
        tracing::debug!(
            interpreter = %self.interpreter,
            script = %self.script.display(),
            vars = self.env.len(),
            "launching menu"
        );

        let mut command = self.command();
        command
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // Installed before spawning so a Ctrl-C at the menu never kills us first
        let shield = InterruptShield::install()?;
        let mut child = command.spawn().map_err(|source| HomelabError::Spawn {
            program: self.interpreter.clone(),
            source,
        })?;
        let status = shield.wait(&mut child).await?;

        let outcome = LaunchOutcome { status };
        if outcome.success() {
            tracing::debug!("menu exited cleanly");
        } else {
            tracing::debug!(code = ?outcome.code(), "menu exited with failure, ignoring");
        }

        Ok(outcome)
    }
}

/// Holds off SIGINT while the menu runs. The terminal delivers it to the
/// whole foreground group, so the menu still sees it and decides what to do.
#[cfg(unix)]
struct InterruptShield(tokio::signal::unix::Signal);

#[cfg(unix)]
impl InterruptShield {
    fn install() -> std::io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};
        Ok(Self(signal(SignalKind::interrupt())?))
    }

    async fn wait(mut self, child: &mut Child) -> std::io::Result<ExitStatus> {
        loop {
            tokio::select! {
                status = child.wait() => return status,
                received = self.0.recv() => {
                    if received.is_none() {
                        return child.wait().await;
                    }
                    tracing::debug!("interrupt received, waiting for menu");
                }
            }
        }
    }
}

#[cfg(not(unix))]
struct InterruptShield;

#[cfg(not(unix))]
impl InterruptShield {
    fn install() -> std::io::Result<Self> {
        Ok(Self)
    }

    async fn wait(self, child: &mut Child) -> std::io::Result<ExitStatus> {
        child.wait().await
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn repo_with_menu(body: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let scripts = dir.path().join("scripts");
        std::fs::create_dir_all(&scripts).unwrap();
        std::fs::write(scripts.join("menu.sh"), body).unwrap();
        dir
    }

    #[test]
    fn script_path_is_under_root() {
        let launcher = Launcher::new(Path::new("/srv/lab"), &LauncherConfig::default());
        assert_eq!(launcher.script(), Path::new("/srv/lab/scripts/menu.sh"));
        assert_eq!(launcher.interpreter(), "bash");
        assert_eq!(launcher.root(), Path::new("/srv/lab"));
    }

    #[test]
    fn pinned_root_skips_derivation() {
        let config = LauncherConfig {
            root: Some(PathBuf::from("/opt/homelab")),
            ..LauncherConfig::default()
        };
        let launcher = Launcher::from_config(&config).unwrap();
        assert_eq!(launcher.root(), Path::new("/opt/homelab"));
    }

    #[test]
    fn derived_root_matches_executable_location() {
        let exe = std::fs::canonicalize(std::env::current_exe().unwrap()).unwrap();
        let root = resolve_repo_root().unwrap();
        assert_eq!(root, exe.parent().unwrap().parent().unwrap().parent().unwrap());
    }

    #[tokio::test]
    async fn child_stdout_is_produced() {
        let repo = repo_with_menu("echo menu-ready\n");
        let launcher = Launcher::new(repo.path(), &LauncherConfig::default());

        let output = launcher.command().output().await.unwrap();
        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "menu-ready");
    }

    #[tokio::test]
    async fn default_run_leaves_missing_menu_to_bash() {
        // The test binary's derived root has no scripts/menu.sh; bash reports it
        // and the launch still succeeds.
        run().await.unwrap();
    }

    #[tokio::test]
    async fn run_with_config_uses_pinned_root() {
        let repo = repo_with_menu("exit 3\n");
        let config = LauncherConfig {
            root: Some(repo.path().to_path_buf()),
            ..LauncherConfig::default()
        };
        run_with_config(&config).await.unwrap();
    }

    #[tokio::test]
    async fn zero_exit_is_ok() {
        let repo = repo_with_menu("exit 0\n");
        let outcome = Launcher::new(repo.path(), &LauncherConfig::default())
            .launch()
            .await
            .unwrap();
        assert_eq!(outcome.code(), Some(0));
    }

    #[tokio::test]
    async fn non_zero_exit_is_not_an_error() {
        let repo = repo_with_menu("exit 1\n");
        let outcome = Launcher::new(repo.path(), &LauncherConfig::default())
            .launch()
            .await
            .unwrap();
        assert_eq!(outcome.code(), Some(1));
        assert!(!outcome.success());
    }

    #[tokio::test]
    async fn missing_script_is_left_to_the_interpreter() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = Launcher::new(dir.path(), &LauncherConfig::default())
            .launch()
            .await
            .unwrap();
        assert!(!outcome.success());
    }

    #[tokio::test]
    async fn snapshot_is_the_child_environment() {
        let repo = repo_with_menu("printf '%s|%s' \"$HOMELAB_MARKER\" \"${HOMELAB_DROPPED-unset}\"\n");
        let mut env: EnvSnapshot = std::env::vars_os()
            .filter(|(k, _)| k == "PATH")
            .collect();
        env.set("HOMELAB_MARKER", "forwarded");
        env.set("HOMELAB_DROPPED", "x");
        env.remove("HOMELAB_DROPPED");

        let launcher = Launcher::new(repo.path(), &LauncherConfig::default()).with_env(env);
        let output = launcher.command().output().await.unwrap();
        assert_eq!(String::from_utf8_lossy(&output.stdout), "forwarded|unset");
        assert_eq!(
            launcher.env().get("HOMELAB_MARKER"),
            Some(OsString::from("forwarded").as_os_str())
        );
    }

    #[tokio::test]
    async fn missing_interpreter_is_a_spawn_error() {
        let repo = repo_with_menu("exit 0\n");
        let config = LauncherConfig {
            interpreter: "homelab-no-such-shell".to_string(),
            ..LauncherConfig::default()
        };
        let err = Launcher::new(repo.path(), &config)
            .launch()
            .await
            .unwrap_err();
        match err {
            HomelabError::Spawn { program, .. } => assert_eq!(program, "homelab-no-such-shell"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
