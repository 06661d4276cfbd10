//! Telemetry Dashboard CLI
//!
//! Aggregates per-session game telemetry into floor histograms, usage
//! rankings, win shares and co-occurrence charts.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use telemetry_dashboard::chart::BarChartConfig;
use telemetry_dashboard::commands::{
    display_schema, display_version, execute_pairs, execute_report, validate_args,
    validate_dataset, validate_pair_args, PairArgs, PinnedItem, ReportArgs, ReportOptions,
};

/// Telemetry Dashboard - session statistics for run-based game telemetry
#[derive(Parser, Debug)]
#[command(name = "telemetry-dash")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Options shared by commands that aggregate a dataset
#[derive(Args, Debug)]
struct DatasetOpts {
    /// Dataset JSON file or http(s) URL
    #[arg(short, long, env = "TELEMETRY_DATA", default_value = "combined.json")]
    data: String,

    /// Player class to report on ("all" for every class)
    #[arg(short, long, env = "TELEMETRY_CLASS", default_value = "all")]
    class: String,

    /// Number of entries per ranking
    #[arg(long, default_value = "5")]
    top: usize,

    /// Chart width in pixels
    #[arg(long, default_value = "640")]
    width: usize,

    /// Chart height in pixels
    #[arg(long, default_value = "360")]
    height: usize,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the full dashboard for one class
    Report {
        #[command(flatten)]
        dataset: DatasetOpts,

        /// Trinket to pin for the pair chart (defaults to the most owned)
        #[arg(long)]
        trinket: Option<String>,

        /// Card to pin for the pair chart (defaults to the most used)
        #[arg(long)]
        card: Option<String>,

        /// Output path for the JSON report
        #[arg(short, long, default_value = "report.json")]
        output: PathBuf,

        /// Directory for SVG charts (optional)
        #[arg(long)]
        charts: Option<PathBuf>,

        /// Directory holding Enemies/ and Characters/ images
        #[arg(long)]
        assets: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Rank items that co-occur with one trinket or card
    Pairs {
        #[command(flatten)]
        dataset: DatasetOpts,

        /// Trinket name to pin
        #[arg(long, conflicts_with = "card", required_unless_present = "card")]
        trinket: Option<String>,

        /// Card name to pin
        #[arg(long)]
        card: Option<String>,

        /// Output path for the SVG chart (optional)
        #[arg(long)]
        chart: Option<PathBuf>,
    },

    /// Load a dataset and print its statistics
    Validate {
        /// Dataset JSON file or http(s) URL
        #[arg(short, long, env = "TELEMETRY_DATA", default_value = "combined.json")]
        data: String,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Report {
            dataset,
            trinket,
            card,
            output,
            charts,
            assets,
            summary,
        } => {
            let args = ReportArgs {
                chart_config: chart_config(&dataset),
                data_source: dataset.data,
                options: ReportOptions {
                    selected_class: dataset.class,
                    top_n: dataset.top,
                    trinket,
                    card,
                },
                output_json: Some(output),
                chart_dir: charts,
                asset_root: assets,
                print_summary: summary,
            };

            validate_args(&args)?;

            if let Err(e) = execute_report(args) {
                // Load failures leave the dashboard unpopulated; nothing is written
                log::error!("{:#}", e);
                return Err(e);
            }
        }

        Commands::Pairs {
            dataset,
            trinket,
            card,
            chart,
        } => {
            let pinned = match (trinket, card) {
                (Some(trinket), _) => PinnedItem::Trinket(trinket),
                (None, Some(card)) => PinnedItem::Card(card),
                (None, None) => anyhow::bail!("Either --trinket or --card is required"),
            };

            let args = PairArgs {
                chart_config: chart_config(&dataset),
                data_source: dataset.data,
                selected_class: dataset.class,
                top_n: dataset.top,
                pinned,
                output_svg: chart,
            };

            validate_pair_args(&args)?;
            execute_pairs(args)?;
        }

        Commands::Validate { data } => {
            validate_dataset(&data)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

fn chart_config(dataset: &DatasetOpts) -> BarChartConfig {
    BarChartConfig::new().with_size(dataset.width, dataset.height)
}
