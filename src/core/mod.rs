pub mod error;
pub mod path;
pub mod process;

pub use error::{HomelabError, Result};
pub use path::{repo_root_from, resolve_path, REPO_ROOT_DEPTH};
pub use process::{EnvSnapshot, ProcessExecutor};
