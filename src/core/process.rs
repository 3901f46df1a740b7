use crate::core::error::{HomelabError, Result};
use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use tokio::process::Command;

/// Owned copy of a process environment.
///
/// Changes made to a snapshot stay local to it; the live environment of
/// the current process is never written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<OsString, OsString>,
}

impl EnvSnapshot {
    /// Copy every variable visible to the current process, including ones
    /// that are not valid UTF-8.
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars_os().collect(),
        }
    }

    pub fn get(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.vars.get(key.as_ref()).map(OsString::as_os_str)
    }

    pub fn set(&mut self, key: impl Into<OsString>, value: impl Into<OsString>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: impl AsRef<OsStr>) -> Option<OsString> {
        self.vars.remove(key.as_ref())
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }

    /// Replace the environment of `command` with exactly this snapshot.
    pub fn apply(&self, command: &mut Command) {
        command.env_clear();
        command.envs(self.iter());
    }
}

impl FromIterator<(OsString, OsString)> for EnvSnapshot {
    fn from_iter<I: IntoIterator<Item = (OsString, OsString)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

pub struct ProcessExecutor;

impl ProcessExecutor {
    pub async fn execute_with_output(cmd: &str, args: &[&str]) -> Result<String> {
        let output = Command::new(cmd)
            .args(args)
            .output()
            .await
            .map_err(|source| HomelabError::Spawn {
                program: cmd.to_string(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(HomelabError::CommandFailed(format!(
                "{} failed: {}",
                cmd,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    pub fn check_command_exists(cmd: &str) -> bool {
        which::which(cmd).is_ok()
    }
}
