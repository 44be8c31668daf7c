//! `flagpoll config` – print where the config lives and what it says.

use anyhow::Result;
use flagpoll_core::config::{self, FlagpollConfig};

pub fn run_config(cfg: &FlagpollConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
