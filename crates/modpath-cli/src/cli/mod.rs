//! CLI for the modpath resolver.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use modpath_core::config::{self, ModpathConfig};
use modpath_core::lookup::{Chain, DirLookup};
use modpath_core::ModulePathResolver;
use std::path::PathBuf;

use commands::{run_check, run_config, run_module, run_path};

/// Top-level CLI for modpath.
#[derive(Debug, Parser)]
#[command(name = "modpath")]
#[command(about = "modpath: locate a bundled module directory as a URI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Options shared by every command that resolves something.
#[derive(Debug, Clone, Default, Args)]
pub struct ResolveArgs {
    /// Resource name to look up (default from config, normally "lib").
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Look only in this directory instead of the configured lookup.
    #[arg(long, value_name = "DIR")]
    pub base: Option<PathBuf>,
}

impl ResolveArgs {
    /// Builds a resolver from these flags layered over the config.
    pub fn resolver(&self, cfg: &ModpathConfig) -> Result<ModulePathResolver<Chain>> {
        let lookup = match &self.base {
            Some(base) => Chain::new().then(DirLookup::new(base)),
            None => cfg.lookup()?,
        };
        let name = self
            .name
            .clone()
            .unwrap_or_else(|| cfg.resource_name.clone());
        Ok(ModulePathResolver::with_name(lookup, name))
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the URI of the bundled resource directory.
    Path {
        #[command(flatten)]
        resolve: ResolveArgs,

        /// Print a JSON object with the name and URI.
        #[arg(long)]
        json: bool,
    },

    /// Print the URI of a module under the resolved directory.
    Module {
        /// Module identifier relative to the directory, e.g. "geoscript/geom".
        id: String,

        #[command(flatten)]
        resolve: ResolveArgs,
    },

    /// Resolve and verify the URI re-parses to the same string.
    Check {
        #[command(flatten)]
        resolve: ResolveArgs,
    },

    /// Show the config file path and effective settings.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Path { resolve, json } => run_path(&resolve.resolver(&cfg)?, json)?,
            CliCommand::Module { id, resolve } => run_module(&resolve.resolver(&cfg)?, &id)?,
            CliCommand::Check { resolve } => run_check(&resolve.resolver(&cfg)?)?,
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
