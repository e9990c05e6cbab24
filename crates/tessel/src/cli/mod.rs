//! Command-line surface.

use std::path::Path;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tessel_registry::ShardRegistry;

mod config;
mod ls;
mod matrix;

pub use config::Config;
pub use ls::Ls;
pub use matrix::Matrix;

/// CI test-shard planner.
#[derive(Debug, Parser)]
#[command(name = "tessel", version, about)]
pub struct App {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    Config(Config),
    Matrix(Matrix),
    Ls(Ls),
}

impl App {
    pub fn run(self) -> anyhow::Result<()> {
        match self.cmd {
            Cmd::Config(cmd) => cmd.run(),
            Cmd::Matrix(cmd) => cmd.run(),
            Cmd::Ls(cmd) => cmd.run(),
        }
    }
}

fn load_registry(path: Option<&Path>) -> anyhow::Result<ShardRegistry> {
    match path {
        Some(path) => ShardRegistry::from_path(path)
            .with_context(|| format!("loading shard registry from {}", path.display())),
        None => Ok(ShardRegistry::builtin().clone()),
    }
}
