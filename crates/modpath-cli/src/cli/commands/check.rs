//! `modpath check` – resolve and confirm the URI string round-trips.

use anyhow::{bail, Result};
use modpath_core::{ModulePathResolver, ResourceLookup};
use url::Url;

pub fn run_check<L: ResourceLookup>(resolver: &ModulePathResolver<L>) -> Result<()> {
    let path = resolver.module_path()?;
    verify_round_trip(&path)?;
    println!("ok  {}  {}", resolver.name(), path);
    Ok(())
}

/// Re-parses `path` and fails unless rendering it again gives the same text.
fn verify_round_trip(path: &str) -> Result<()> {
    let reparsed = Url::parse(path)?;
    if reparsed.as_str() != path {
        bail!("unstable round-trip: {} re-renders as {}", path, reparsed);
    }
    Ok(())
}
