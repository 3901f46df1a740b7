pub mod global;
pub mod schema;
pub mod validation;

pub use global::GlobalConfigManager;
pub use schema::{
    GlobalConfig, LauncherConfig, LauncherOverrides, DEFAULT_INTERPRETER, DEFAULT_MENU_SCRIPT,
};
pub use validation::validate_launcher_config;
