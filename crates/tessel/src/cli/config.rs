use std::path::PathBuf;

use anyhow::Result;
use tessel_resolve::{RunConfig, resolve};

use crate::workers;

/// Resolve the run configuration for one shard, or the whole tree.
#[derive(Debug, clap::Args)]
pub struct Config {
    /// Target shard; omit for fallback mode covering the whole tree
    #[arg(long)]
    shard: Option<String>,

    /// Registry file; defaults to the built-in registry
    #[arg(long)]
    registry: Option<PathBuf>,

    /// Pretty-print the emitted configuration
    #[arg(long)]
    pretty: bool,
}

impl Config {
    pub fn run(self) -> Result<()> {
        let registry = super::load_registry(self.registry.as_deref())?;
        let base = RunConfig::fallback(registry.suffixes(), workers::max_workers());
        let resolved = resolve(self.shard.as_deref(), &registry, base)?;

        let line = if self.pretty {
            serde_json::to_string_pretty(&resolved)?
        } else {
            serde_json::to_string(&resolved)?
        };
        println!("{line}");
        Ok(())
    }
}
