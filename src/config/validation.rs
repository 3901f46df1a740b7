use crate::config::schema::LauncherConfig;
use crate::core::error::{HomelabError, Result};

pub fn validate_launcher_config(config: &LauncherConfig) -> Result<()> {
    if config.interpreter.trim().is_empty() {
        return Err(HomelabError::Config(
            "launcher.interpreter cannot be empty".to_string(),
        ));
    }

    if config.menu_script.trim().is_empty() {
        return Err(HomelabError::Config(
            "launcher.menu_script cannot be empty".to_string(),
        ));
    }

    if let Some(root) = &config.root {
        if !root.is_absolute() {
            return Err(HomelabError::Config(format!(
                "launcher.root must be an absolute path (got {})",
                root.display()
            )));
        }
    }

    Ok(())
}
