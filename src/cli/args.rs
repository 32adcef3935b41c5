//! CLI argument parsing and configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{FilterConfig, default_search_paths, find_config};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::filter::InitialFilters;
use crate::models::SnapshotFormat;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Quest Mapper - interactive grid of the quest curriculum
#[derive(Debug, Parser)]
#[command(name = "quest-mapper", version = VERSION)]
#[command(after_help = "Examples:
  quest-mapper                              # Everything enabled, first pattern
  quest-mapper --stage 0-1 --role GR        # Youngest stage, Grind only
  quest-mapper --pattern Y-Y-G-H-P --embed  # Compact layout, second pattern
  QUERY_STRING=embed=1 quest-mapper         # Same as --embed
  quest-mapper --snapshot json              # Print the derived view and exit")]
pub struct Args {
    /// Force the compact embedded layout
    #[arg(long)]
    pub embed: bool,

    /// Initially enabled stage (0-1, 2-3, 4+); repeatable
    #[arg(short, long = "stage", value_name = "KEY")]
    pub stages: Vec<String>,

    /// Initially enabled role (UL, GR, SU, RW, CH, CD); repeatable
    #[arg(short, long = "role", value_name = "CODE")]
    pub roles: Vec<String>,

    /// Initially highlighted quest pattern id
    #[arg(short, long, value_name = "ID")]
    pub pattern: Option<String>,

    /// Config file (default: ./quest-mapper.json, then the user config dir)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the derived view instead of starting the interactive grid
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub snapshot: Option<SnapshotFormat>,

    /// Write logs to this file (filter with QUEST_MAPPER_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Filter selections given on the command line
    pub fn filter_overrides(&self) -> FilterConfig {
        FilterConfig {
            initial_stage_filter: (!self.stages.is_empty()).then(|| self.stages.clone()),
            initial_role_filter: (!self.roles.is_empty()).then(|| self.roles.clone()),
            initial_pattern: self.pattern.clone(),
        }
    }
}

/// Resolved configuration for one run
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub initial: InitialFilters,
    pub force_embed: bool,
    pub snapshot: Option<SnapshotFormat>,
    pub log_file: Option<PathBuf>,
    /// Config file that was applied, if any
    pub config_source: Option<PathBuf>,
}

impl CliConfig {
    /// Check `dataset`, then combine parsed arguments with the config file
    /// found on disk
    pub fn from_args(args: Args, dataset: &Dataset, search_paths: &[PathBuf]) -> Result<Self> {
        dataset.validate()?;

        let found = find_config(args.config.as_deref(), search_paths)?;
        let (file_config, config_source) = match found {
            Some((config, path)) => (config, Some(path)),
            None => (FilterConfig::default(), None),
        };

        let initial = file_config.merge(args.filter_overrides()).resolve(dataset)?;

        Ok(Self {
            initial,
            force_embed: args.embed,
            snapshot: args.snapshot,
            log_file: args.log_file,
            config_source,
        })
    }
}

/// Parse CLI arguments and return configuration
pub fn parse_args(dataset: &Dataset) -> Result<CliConfig> {
    CliConfig::from_args(Args::parse(), dataset, &default_search_paths())
}
