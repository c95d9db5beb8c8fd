//! `modpath path` – print the resolved URI.

use anyhow::Result;
use modpath_core::{ModulePathResolver, ResourceLookup};

pub fn run_path<L: ResourceLookup>(resolver: &ModulePathResolver<L>, json: bool) -> Result<()> {
    println!("{}", render_path(resolver, json)?);
    Ok(())
}

fn render_path<L: ResourceLookup>(resolver: &ModulePathResolver<L>, json: bool) -> Result<String> {
    let resolved = resolver.resolve()?;
    if json {
        Ok(serde_json::to_string(&resolved)?)
    } else {
        Ok(resolved.uri)
    }
}
