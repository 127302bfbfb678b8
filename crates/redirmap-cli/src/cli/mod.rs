//! CLI for redirmap.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use redirmap_core::config::{self, RedirmapConfig};
use std::path::{Path, PathBuf};

use commands::{run_analyze, run_batch, run_build, run_extract, run_resolve, BuildArgs};

/// Top-level CLI for redirmap.
#[derive(Debug, Parser)]
#[command(name = "redirmap")]
#[command(about = "Map a retiring site's URLs onto its successor's for bulk redirect import", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/redirmap/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Collect every <loc> URL from the sitemaps under a directory.
    Extract {
        /// Directory (searched recursively) or a single sitemap file.
        root: PathBuf,
        /// CSV output with a single `url` column.
        #[arg(long, default_value = "all_urls.csv")]
        out: PathBuf,
        /// Also write a plain list, one URL per line.
        #[arg(long, value_name = "PATH")]
        txt: Option<PathBuf>,
    },

    /// Match old URLs to new URLs and write the redirect list plus import batches.
    Build {
        /// Old-site inventory (CSV with a `url` column, or .txt).
        #[arg(long)]
        old: PathBuf,
        /// New-site inventory (CSV with a `url` column, or .txt).
        #[arg(long)]
        new: PathBuf,
        /// Extra manual overrides (CSV with `path` and `target` columns).
        #[arg(long, value_name = "PATH")]
        overrides: Option<PathBuf>,
        /// Output directory for redirects.csv and the batch files.
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        /// Write targets on the new site as paths instead of absolute URLs.
        #[arg(long)]
        relative_targets: bool,
        /// Print the summary as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Split an existing redirect CSV into import batches.
    Batch {
        /// CSV with `path` and `target` columns.
        input: PathBuf,
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        /// Records per file (default from config).
        #[arg(long, value_name = "N")]
        size: Option<usize>,
        /// File name prefix (default from config).
        #[arg(long)]
        prefix: Option<String>,
        /// Write targets on the new site as paths instead of absolute URLs.
        #[arg(long)]
        relative_targets: bool,
    },

    /// Explain how the first N old URLs are matched.
    Analyze {
        #[arg(long)]
        old: PathBuf,
        #[arg(long)]
        new: PathBuf,
        /// Number of old URLs to explain.
        #[arg(long, default_value = "100", value_name = "N")]
        limit: usize,
        #[arg(long, default_value = "redirect_analysis.csv")]
        out: PathBuf,
    },

    /// Resolve a single old URL against a new inventory.
    Resolve {
        url: String,
        #[arg(long)]
        new: PathBuf,
    },
}

fn load_config(path: Option<&Path>) -> Result<RedirmapConfig> {
    let cfg = match path {
        Some(p) => config::load_from_path(p)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Extract { root, out, txt } => {
                run_extract(&root, &out, txt.as_deref())?;
            }
            CliCommand::Build {
                old,
                new,
                overrides,
                out_dir,
                relative_targets,
                json,
            } => {
                let cfg = load_config(cli.config.as_deref())?;
                let args = BuildArgs {
                    old: &old,
                    new: &new,
                    overrides: overrides.as_deref(),
                    out_dir: &out_dir,
                    relative_targets: relative_targets || cfg.relative_targets,
                    json,
                };
                run_build(&cfg, &args)?;
            }
            CliCommand::Batch {
                input,
                out_dir,
                size,
                prefix,
                relative_targets,
            } => {
                let cfg = load_config(cli.config.as_deref())?;
                run_batch(
                    &cfg,
                    &input,
                    &out_dir,
                    size.unwrap_or(cfg.batch_size),
                    prefix.as_deref().unwrap_or(&cfg.batch_prefix),
                    relative_targets || cfg.relative_targets,
                )?;
            }
            CliCommand::Analyze {
                old,
                new,
                limit,
                out,
            } => {
                let cfg = load_config(cli.config.as_deref())?;
                run_analyze(&cfg, &old, &new, limit, &out)?;
            }
            CliCommand::Resolve { url, new } => {
                let cfg = load_config(cli.config.as_deref())?;
                run_resolve(&cfg, &url, &new)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
