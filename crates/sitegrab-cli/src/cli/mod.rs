//! CLI for sitegrab.
//!
//! There are no subcommands: the program is an interactive loop on stdin, and
//! the flags only move where files land or where settings are read from.

use anyhow::Result;
use clap::Parser;
use sitegrab_core::config::{self, SitegrabConfig};
use sitegrab_core::fetch::CurlFetcher;
use sitegrab_core::session::Session;
use std::io;
use std::path::PathBuf;

/// Top-level CLI for sitegrab.
#[derive(Debug, Parser)]
#[command(name = "sitegrab", version)]
#[command(
    about = "Prompt for hosts, fetch each over plain HTTP, save 200 bodies under <host>/<path>",
    long_about = None
)]
pub struct Cli {
    /// Directory under which per-host folders are created (default: current directory).
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Read settings from this TOML file instead of ~/.config/sitegrab/config.toml.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        let output_root = self.output_root(&cfg);
        tracing::info!("saving under {:?}", output_root);

        let mut session = Session::new(CurlFetcher::new(), output_root).with_prompt(cfg.prompt);
        session.run(io::stdin().lock(), io::stdout().lock())
    }

    /// Flag over config file; empty path (current directory) when neither is set.
    fn output_root(&self, cfg: &SitegrabConfig) -> PathBuf {
        self.output_dir
            .clone()
            .or_else(|| cfg.output_dir.clone())
            .unwrap_or_default()
    }
}
