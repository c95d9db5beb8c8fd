//! CLI command handlers. Each command is in its own file.

mod check;
mod config;
mod module;
mod path;

pub use check::run_check;
pub use config::run_config;
pub use module::run_module;
pub use path::run_path;
