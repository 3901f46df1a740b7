use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_INTERPRETER: &str = "bash";
pub const DEFAULT_MENU_SCRIPT: &str = "scripts/menu.sh";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct GlobalConfig {
    #[serde(default)]
    pub launcher: LauncherConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LauncherConfig {
    #[serde(default = "default_interpreter")]
    pub interpreter: String,
    /// Relative to the repository root unless absolute.
    #[serde(default = "default_menu_script")]
    pub menu_script: String,
    /// Explicit repository root; derived from the executable location when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            menu_script: default_menu_script(),
            root: None,
        }
    }
}

impl LauncherConfig {
    pub fn with_overrides(mut self, overrides: &LauncherOverrides) -> Self {
        if let Some(root) = &overrides.root {
            self.root = Some(root.clone());
        }
        if let Some(interpreter) = &overrides.interpreter {
            self.interpreter = interpreter.clone();
        }
        self
    }
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct LauncherOverrides {
    pub root: Option<PathBuf>,
    pub interpreter: Option<String>,
}

fn default_interpreter() -> String {
    DEFAULT_INTERPRETER.to_string()
}

fn default_menu_script() -> String {
    DEFAULT_MENU_SCRIPT.to_string()
}
