use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::lookup::{Chain, DirLookup, Registry, SearchPath};
use crate::resolver::DEFAULT_RESOURCE_NAME;

fn default_resource_name() -> String {
    DEFAULT_RESOURCE_NAME.to_string()
}

/// Global configuration loaded from `~/.config/modpath/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModpathConfig {
    /// Name of the bundled resource to resolve.
    #[serde(default = "default_resource_name")]
    pub resource_name: String,
    /// Directories searched in order. Empty means the executable's directory.
    #[serde(default)]
    pub search_dirs: Vec<PathBuf>,
    /// Resources pinned to URL text, e.g. `lib = "jar:file:/opt/app.jar!/lib/"`.
    /// Checked before `search_dirs`.
    #[serde(default)]
    pub registry: BTreeMap<String, String>,
}

impl Default for ModpathConfig {
    fn default() -> Self {
        Self {
            resource_name: default_resource_name(),
            search_dirs: Vec::new(),
            registry: BTreeMap::new(),
        }
    }
}

impl ModpathConfig {
    /// Builds the lookup described by this config: registry, then search dirs
    /// (or the executable's directory when none are listed).
    pub fn lookup(&self) -> Result<Chain> {
        let mut chain = Chain::new();
        if !self.registry.is_empty() {
            let registry: Registry = self
                .registry
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            chain = chain.then(registry);
        }
        if self.search_dirs.is_empty() {
            let beside = DirLookup::beside_executable().context("locate executable directory")?;
            chain = chain.then(beside);
        } else {
            chain = chain.then(SearchPath::new(self.search_dirs.iter().cloned()));
        }
        Ok(chain)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("modpath")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Reads a config file, returning defaults if it does not exist.
pub fn load_from(path: &Path) -> Result<ModpathConfig> {
    if !path.exists() {
        return Ok(ModpathConfig::default());
    }
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: ModpathConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}

/// Load configuration without touching the filesystem beyond reading it.
pub fn load() -> Result<ModpathConfig> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("modpath")?;
    match xdg_dirs.find_config_file("config.toml") {
        Some(path) => load_from(&path),
        None => Ok(ModpathConfig::default()),
    }
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ModpathConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ModpathConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::ResourceLookup;
    use crate::location::ResourceLocation;

    #[test]
    fn default_config_values() {
        let cfg = ModpathConfig::default();
        assert_eq!(cfg.resource_name, "lib");
        assert!(cfg.search_dirs.is_empty());
        assert!(cfg.registry.is_empty());
    }

    #[test]
    fn config_toml_roundtrip() {
        let mut cfg = ModpathConfig::default();
        cfg.search_dirs.push(PathBuf::from("/opt/app"));
        cfg.registry
            .insert("lib".to_string(), "file:///srv/lib/".to_string());
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ModpathConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: ModpathConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, ModpathConfig::default());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            resource_name = "modules"
            search_dirs = ["/usr/share/app", "/opt/app"]

            [registry]
            lib = "jar:file:/opt/app.jar!/lib/"
        "#;
        let cfg: ModpathConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.resource_name, "modules");
        assert_eq!(cfg.search_dirs.len(), 2);
        assert_eq!(
            cfg.registry.get("lib").map(String::as_str),
            Some("jar:file:/opt/app.jar!/lib/")
        );
    }

    #[test]
    fn load_from_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(cfg, ModpathConfig::default());
    }

    #[test]
    fn load_from_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "search_dirs = 3").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("parse config"));
    }

    #[test]
    fn lookup_prefers_registry_then_search_dirs() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("lib")).unwrap();
        fs::create_dir(dir.path().join("extra")).unwrap();
        let mut cfg = ModpathConfig::default();
        cfg.search_dirs.push(dir.path().to_path_buf());
        cfg.registry
            .insert("lib".to_string(), "file:///pinned/lib/".to_string());

        let lookup = cfg.lookup().unwrap();
        assert_eq!(
            lookup.find("lib"),
            Some(ResourceLocation::Url("file:///pinned/lib/".to_string()))
        );
        assert_eq!(
            lookup.find("extra"),
            Some(ResourceLocation::Path(dir.path().join("extra")))
        );
    }

    #[test]
    fn lookup_defaults_to_executable_dir() {
        let lookup = ModpathConfig::default().lookup().unwrap();
        assert_eq!(lookup.len(), 1);
        let exe = std::env::current_exe().unwrap();
        let dir = exe.parent().unwrap();
        assert_eq!(lookup.describe(), dir.display().to_string());
    }
}
