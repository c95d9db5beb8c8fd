//! Module path resolution.
//!
//! A [`ModulePathResolver`] asks its lookup for a named resource (by default
//! `lib`) and renders the resulting location as a URI string that a script
//! engine or module loader can use as a search root.

use std::path::{Component, Path};

use serde::Serialize;
use url::Url;

use crate::error::LocationError;
use crate::lookup::ResourceLookup;

/// Resource name looked up when none is given.
pub const DEFAULT_RESOURCE_NAME: &str = "lib";

/// Resolves a named resource through a lookup and renders it as a URI.
#[derive(Debug, Clone)]
pub struct ModulePathResolver<L> {
    lookup: L,
    name: String,
}

/// Serializable result of a resolution, for tooling that wants structured output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedModulePath {
    pub name: String,
    pub uri: String,
}

impl<L: ResourceLookup> ModulePathResolver<L> {
    pub fn new(lookup: L) -> Self {
        Self::with_name(lookup, DEFAULT_RESOURCE_NAME)
    }

    pub fn with_name(lookup: L, name: impl Into<String>) -> Self {
        Self {
            lookup,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolves the resource and returns its URI.
    ///
    /// Fails with [`LocationError::NotFound`] when the lookup has nothing under
    /// this name and with [`LocationError::Unresolvable`] when the location it
    /// returned is not a valid URI.
    pub fn module_url(&self) -> Result<Url, LocationError> {
        let location = self
            .lookup
            .find(&self.name)
            .ok_or_else(|| LocationError::NotFound {
                name: self.name.clone(),
                anchor: self.lookup.describe(),
            })?;
        location
            .to_url()
            .map_err(|source| LocationError::Unresolvable {
                location: location.to_string(),
                source,
            })
    }

    /// Resolves the resource and returns its URI in string form.
    ///
    /// The string re-parses to the same URI: `Url::parse(&s)?.as_str() == s`.
    pub fn module_path(&self) -> Result<String, LocationError> {
        self.module_url().map(String::from)
    }

    pub fn resolve(&self) -> Result<ResolvedModulePath, LocationError> {
        Ok(ResolvedModulePath {
            name: self.name.clone(),
            uri: self.module_path()?,
        })
    }

    /// URI of a module below the resolved resource, e.g. `geoscript/geom`.
    pub fn module_url_for(&self, module_id: &str) -> Result<Url, LocationError> {
        validate_module_id(module_id)?;
        let mut base = self.module_url()?;
        // Url::join replaces the last segment unless the base ends in '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let joined = base
            .join(module_id)
            .map_err(|e| LocationError::Unresolvable {
                location: format!("{}{}", base, module_id),
                source: e.into(),
            })?;
        // Dot segments can still arrive percent-encoded; the joined URL must stay under the base.
        if !joined.path().starts_with(base.path()) || joined.path() == base.path() {
            return Err(LocationError::InvalidModuleId(module_id.to_string()));
        }
        Ok(joined)
    }
}

fn validate_module_id(module_id: &str) -> Result<(), LocationError> {
    let invalid = || LocationError::InvalidModuleId(module_id.to_string());
    if module_id.is_empty() || module_id.starts_with('/') || module_id.contains('\\') {
        return Err(invalid());
    }
    if module_id.contains([':', '?', '#', '%']) {
        return Err(invalid());
    }
    let all_normal = Path::new(module_id)
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    if !all_normal {
        return Err(invalid());
    }
    Ok(())
}
