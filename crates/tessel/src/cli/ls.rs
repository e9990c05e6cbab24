use std::path::PathBuf;

use anyhow::Result;
use tabled::{Table, Tabled};
use tessel_registry::PatternKind;

/// List the shard registry in declaration order.
#[derive(Debug, clap::Args)]
#[clap(visible_alias = "list")]
pub struct Ls {
    /// Registry file; defaults to the built-in registry
    #[arg(long)]
    registry: Option<PathBuf>,
}

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "shard")]
    name: String,
    #[tabled(rename = "test globs")]
    globs: String,
    #[tabled(rename = "threshold override")]
    threshold: String,
}

impl Ls {
    pub fn run(self) -> Result<()> {
        let registry = super::load_registry(self.registry.as_deref())?;
        let rules = registry.suffixes();

        let rows: Vec<Row> = registry
            .iter()
            .map(|def| Row {
                name: def.name.clone(),
                globs: def
                    .patterns
                    .iter()
                    .map(|p| p.normalize(PatternKind::TestFile, rules))
                    .collect::<Vec<_>>()
                    .join(", "),
                threshold: def
                    .threshold
                    .map(|t| t.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            })
            .collect();

        println!("{}", Table::new(rows));
        Ok(())
    }
}
