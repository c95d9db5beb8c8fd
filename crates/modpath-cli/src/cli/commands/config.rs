//! `modpath config` – show config location and effective settings.

use anyhow::Result;
use modpath_core::config::{self, ModpathConfig};

pub fn run_config(cfg: &ModpathConfig) -> Result<()> {
    println!("config: {}", config::config_path()?.display());
    println!("resource_name: {}", cfg.resource_name);
    if cfg.search_dirs.is_empty() {
        println!("search_dirs: (executable directory)");
    } else {
        for dir in &cfg.search_dirs {
            println!("search_dir: {}", dir.display());
        }
    }
    for (name, url) in &cfg.registry {
        println!("registry: {} = {}", name, url);
    }
    Ok(())
}
