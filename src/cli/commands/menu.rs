use crate::config::LauncherConfig;
use crate::core::error::Result;
use crate::launcher;

pub async fn execute(config: &LauncherConfig) -> Result<()> {
    launcher::run_with_config(config).await
}
