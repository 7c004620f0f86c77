//! FM Analyze - Role scores and best formations for Football Manager exports
//!
//! Reads a player export (HTML or CSV), scores every player for every role,
//! picks the best line-up for each formation and writes reports.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use fm_role_analyzer::pipeline::{self, ReportConfig};
use fm_role_analyzer::{AnalysisConfig, RankMetric, RoleCatalog, RoleGroup};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fm-analyze")]
#[command(about = "Score Football Manager players by role and rank formations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    options: CommonOptions,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

/// Options shared by every subcommand
#[derive(Args)]
struct CommonOptions {
    /// Number of formations to keep after ranking
    #[arg(long, global = true, default_value = "5")]
    top_k: usize,

    /// Rank formations by "total" or "average" (per slot)
    #[arg(long, global = true, default_value = "total")]
    rank_by: String,

    /// CSV field delimiter
    #[arg(long, global = true, default_value = ",")]
    delimiter: char,

    /// Ignore export rows beyond this many players
    #[arg(long, global = true, default_value = "10000")]
    max_players: usize,

    /// Keep UID columns from the export
    #[arg(long, global = true)]
    keep_uid: bool,

    /// Leave the export's own columns out of CSV/XLSX output
    #[arg(long, global = true)]
    no_raw: bool,

    /// Number of parallel scoring threads (default: number of CPU cores)
    #[arg(long, global = true)]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the HTML report (and optionally XLSX/CSV) for an export
    Report {
        /// Export file; the newest export in the folder when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Folder holding exports; reports are written here
        #[arg(long, env = "FM_ANALYSIS_FOLDER", default_value = ".")]
        folder: PathBuf,

        /// Formation file (built-in formations when omitted)
        #[arg(short, long, env = "FM_FORMATIONS_FILE")]
        formations: Option<PathBuf>,

        /// Also write an XLSX workbook
        #[arg(long)]
        xlsx: bool,

        /// Also write the enriched player table as CSV
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Print the best formations for an export
    Formations {
        /// Export file (HTML or CSV)
        #[arg(short, long)]
        input: PathBuf,

        /// Formation file (built-in formations when omitted)
        #[arg(short, long, env = "FM_FORMATIONS_FILE")]
        formations: Option<PathBuf>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Write every player's role scores to CSV
    Score {
        /// Export file (HTML or CSV)
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// List the role catalog
    Roles {
        /// Only this group (GK, D, M or F)
        #[arg(short, long)]
        group: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    if let Some(n) = cli.options.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    let config = build_config(&cli.options)?;

    match cli.command {
        Commands::Report {
            input,
            folder,
            formations,
            xlsx,
            csv,
        } => {
            let report_config = ReportConfig {
                input,
                folder,
                formations,
                xlsx,
                csv_output: csv,
            };
            println!("{}", pipeline::generate_report(&report_config, &config)?);
        }
        Commands::Formations {
            input,
            formations,
            json,
        } => {
            println!(
                "{}",
                pipeline::best_formations(&input, formations.as_deref(), &config, json)?
            );
        }
        Commands::Score { input, output } => {
            println!("{}", pipeline::score_to_csv(&input, &output, &config)?);
        }
        Commands::Roles { group } => {
            let group = group
                .map(|g| g.parse::<RoleGroup>())
                .transpose()?;
            println!("{}", pipeline::list_roles(&RoleCatalog::standard(), group)?);
        }
    }

    Ok(())
}

fn build_config(options: &CommonOptions) -> Result<AnalysisConfig> {
    if !options.delimiter.is_ascii() {
        anyhow::bail!("Delimiter must be a single ASCII character");
    }
    let metric: RankMetric = options
        .rank_by
        .parse()
        .context("Invalid --rank-by value")?;

    let mut config = AnalysisConfig::default()
        .with_top_k(options.top_k)
        .with_rank_metric(metric)
        .with_max_players(options.max_players)
        .with_delimiter(options.delimiter as u8);
    if options.keep_uid {
        config = config.with_uid_columns();
    }
    if options.no_raw {
        config = config.without_raw_attributes();
    }
    Ok(config)
}
