use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tessel_matrix::{Platform, PlatformCaps, build};
use tessel_resolve::{parse_changed_files, select};

/// Generate the runner-group matrix for a changed-file set.
#[derive(Debug, clap::Args)]
pub struct Matrix {
    /// JSON array of changed paths; `-` reads stdin, omit for an empty set
    #[arg(long, value_name = "FILE")]
    changed_files: Option<String>,

    /// Override a platform's runner budget (e.g. `linux=4`)
    #[arg(long = "cap", value_name = "PLATFORM=N")]
    caps: Vec<String>,

    /// Collect coverage on a platform
    #[arg(long = "coverage", value_name = "PLATFORM")]
    coverage: Vec<String>,

    /// Registry file; defaults to the built-in registry
    #[arg(long)]
    registry: Option<PathBuf>,
}

impl Matrix {
    pub fn run(self) -> Result<()> {
        let registry = super::load_registry(self.registry.as_deref())?;

        let changed = match self.changed_files.as_deref() {
            None => Vec::new(),
            Some(source) => parse_changed_files(&read_input(source)?)?,
        };

        let mut caps = PlatformCaps::default();
        for spec in &self.caps {
            let (platform, count) = parse_cap(spec)?;
            caps.set_max_runners(platform, count);
        }
        for name in &self.coverage {
            caps.set_coverage(name.parse::<Platform>()?, true);
        }

        let selected = select(&changed, &registry);
        let matrix = build(&selected, &caps)?;

        if matrix.skip {
            eprintln!("no shards matched; skipping test run");
        }

        println!(
            "matrix={}",
            serde_json::to_string(&serde_json::json!({ "include": &matrix.groups }))?
        );
        println!("skip={}", matrix.skip);
        println!(
            "coverage_reports={}",
            serde_json::to_string(&matrix.coverage_reports)?
        );
        Ok(())
    }
}

fn read_input(source: &str) -> Result<String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading changed files from stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(source)
            .with_context(|| format!("reading changed files from {source}"))
    }
}

fn parse_cap(spec: &str) -> Result<(Platform, usize)> {
    let (platform, count) = spec
        .split_once('=')
        .with_context(|| format!("invalid cap `{spec}`; expected PLATFORM=N"))?;
    let platform = platform.parse::<Platform>()?;
    let count = count
        .parse::<usize>()
        .with_context(|| format!("invalid runner count in `{spec}`"))?;
    Ok((platform, count))
}
