//! Resource lookup interface for finding bundled resources by name.
//!
//! The resolver only depends on this trait and does not know whether a
//! resource lives in a directory beside the executable, on a search path,
//! or inside an archive described by URL text.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::location::ResourceLocation;

/// Trait implemented by anything that can locate a named resource.
pub trait ResourceLookup {
    /// Returns the location of `name`, or `None` when it is not present.
    fn find(&self, name: &str) -> Option<ResourceLocation>;

    /// Human-readable description of the anchor, used in error messages.
    fn describe(&self) -> String;
}

impl<T: ResourceLookup + ?Sized> ResourceLookup for &T {
    fn find(&self, name: &str) -> Option<ResourceLocation> {
        (**self).find(name)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: ResourceLookup + ?Sized> ResourceLookup for Box<T> {
    fn find(&self, name: &str) -> Option<ResourceLocation> {
        (**self).find(name)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Looks for `base/<name>` on the filesystem.
#[derive(Debug, Clone)]
pub struct DirLookup {
    base: PathBuf,
}

impl DirLookup {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Anchors at the directory holding the running executable.
    pub fn beside_executable() -> io::Result<Self> {
        let exe = std::env::current_exe()?;
        let dir = exe.parent().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("executable {} has no parent directory", exe.display()),
            )
        })?;
        Ok(Self::new(dir))
    }

    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl ResourceLookup for DirLookup {
    // Relative bases resolve against the current directory.
    fn find(&self, name: &str) -> Option<ResourceLocation> {
        let candidate = self.base.join(name);
        if !candidate.exists() {
            return None;
        }
        let candidate = std::path::absolute(&candidate).unwrap_or(candidate);
        Some(ResourceLocation::Path(candidate))
    }

    fn describe(&self) -> String {
        self.base.display().to_string()
    }
}

/// Ordered list of directories; the first one containing the resource wins.
#[derive(Debug, Clone, Default)]
pub struct SearchPath {
    roots: Vec<DirLookup>,
}

impl SearchPath {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(DirLookup::new).collect(),
        }
    }
}

impl ResourceLookup for SearchPath {
    fn find(&self, name: &str) -> Option<ResourceLocation> {
        self.roots.iter().find_map(|root| root.find(name))
    }

    fn describe(&self) -> String {
        let roots: Vec<String> = self.roots.iter().map(|r| r.describe()).collect();
        format!("search path [{}]", roots.join(", "))
    }
}

/// Fixed name → URL text table for resources that are not plain directories.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: BTreeMap<String, String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, url: impl Into<String>) {
        self.entries.insert(name.into(), url.into());
    }
}

impl FromIterator<(String, String)> for Registry {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl ResourceLookup for Registry {
    fn find(&self, name: &str) -> Option<ResourceLocation> {
        self.entries
            .get(name)
            .map(|url| ResourceLocation::Url(url.clone()))
    }

    fn describe(&self) -> String {
        format!("registry ({} entries)", self.entries.len())
    }
}

/// Tries each lookup in order.
pub struct Chain {
    links: Vec<Box<dyn ResourceLookup + Send + Sync>>,
}

impl Chain {
    pub fn new() -> Self {
        Self { links: Vec::new() }
    }

    pub fn then(mut self, lookup: impl ResourceLookup + Send + Sync + 'static) -> Self {
        self.links.push(Box::new(lookup));
        self
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceLookup for Chain {
    fn find(&self, name: &str) -> Option<ResourceLocation> {
        self.links.iter().find_map(|l| l.find(name))
    }

    fn describe(&self) -> String {
        let parts: Vec<String> = self.links.iter().map(|l| l.describe()).collect();
        parts.join(" then ")
    }
}
