//! `modpath module <ID>` – print the URI of a module under the resolved directory.

use anyhow::Result;
use modpath_core::{ModulePathResolver, ResourceLookup};

pub fn run_module<L: ResourceLookup>(resolver: &ModulePathResolver<L>, id: &str) -> Result<()> {
    let url = resolver.module_url_for(id)?;
    tracing::debug!("module {} resolved to {}", id, url);
    println!("{}", url);
    Ok(())
}
