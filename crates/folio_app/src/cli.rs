use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use folio_core::{ColumnSeeds, Layout, Seed, Selection};
use folio_engine::FetchSettings;

use crate::config::AppConfig;
use crate::platform::app::RunOptions;
use crate::platform::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(about = "Render a filterable portfolio page from a JSON entries document", long_about = None)]
pub struct Cli {
    /// Entries document: an http(s) URL or a file path
    #[arg(short, long)]
    pub source: Option<String>,
    /// Base URL a relative source is resolved against
    #[arg(long)]
    pub base_url: Option<String>,
    /// Config file (defaults to ./folio.ron when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Directory the page and filter state are written to
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Architecture filter ("All" for no constraint)
    #[arg(short, long)]
    pub architecture: Option<String>,
    /// Technology filter ("All" for no constraint)
    #[arg(short, long)]
    pub technology: Option<String>,
    #[arg(long, value_enum)]
    pub layout: Option<LayoutArg>,
    /// Request timeout in seconds; unset waits indefinitely
    #[arg(long)]
    pub timeout_secs: Option<u64>,
    #[arg(long, value_enum, default_value_t = LogArg::Terminal)]
    pub log: LogArg,
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    Single,
    Columns,
}

impl From<LayoutArg> for Layout {
    fn from(value: LayoutArg) -> Self {
        match value {
            LayoutArg::Single => Layout::Single,
            LayoutArg::Columns => Layout::Columns,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogArg {
    Terminal,
    File,
    Both,
}

impl From<LogArg> for LogDestination {
    fn from(value: LogArg) -> Self {
        match value {
            LogArg::Terminal => LogDestination::Terminal,
            LogArg::File => LogDestination::File,
            LogArg::Both => LogDestination::Both,
        }
    }
}

/// Command-line flags win over the config file.
pub fn resolve_options(cli: Cli, config: AppConfig) -> RunOptions {
    let timeout_secs = cli.timeout_secs.or(config.request_timeout_secs);
    let fetch = FetchSettings {
        request_timeout: timeout_secs.map(Duration::from_secs),
        max_bytes: config.max_bytes,
        ..FetchSettings::default()
    };

    RunOptions {
        source: cli.source.unwrap_or(config.source),
        base_url: cli.base_url.or(config.base_url),
        output_dir: cli.output.unwrap_or(config.output_dir),
        layout: cli.layout.map(Layout::from).unwrap_or(config.layout),
        seeds: ColumnSeeds {
            primary: Seed(config.primary_seed),
            secondary: Seed(config.secondary_seed),
        },
        fetch,
        architecture: cli.architecture.as_deref().map(Selection::parse),
        technology: cli.technology.as_deref().map(Selection::parse),
    }
}
