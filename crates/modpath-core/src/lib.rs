//! Resolve the URI of a bundled module directory (`lib` by default) so it can
//! be handed to a script engine or module loader as a search root.

pub mod config;
pub mod error;
pub mod location;
pub mod logging;
pub mod lookup;
pub mod resolver;

pub use error::{LocationError, UriError};
pub use location::ResourceLocation;
pub use lookup::ResourceLookup;
pub use resolver::{ModulePathResolver, DEFAULT_RESOURCE_NAME};

/// Module path for the running program, using the user's config (read-only).
///
/// Without a config file this resolves `lib` beside the executable.
pub fn module_path() -> anyhow::Result<String> {
    let cfg = config::load()?;
    let resolver = ModulePathResolver::with_name(cfg.lookup()?, cfg.resource_name.as_str());
    Ok(resolver.module_path()?)
}
