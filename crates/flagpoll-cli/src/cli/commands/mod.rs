//! CLI command handlers, one per file.

mod config;
mod exec;
mod file;

pub use config::run_config;
pub use exec::run_exec;
pub use file::run_file;
