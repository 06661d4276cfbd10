use crate::chart::BarChartConfig;
use crate::utils::config::{ALL_CLASSES, DEFAULT_TOP_N};
use std::path::PathBuf;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Dataset file path or http(s) URL
    pub data_source: String,

    /// Aggregation options
    pub options: ReportOptions,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Directory for SVG charts (optional)
    pub chart_dir: Option<PathBuf>,

    /// Root directory holding Enemies/ and Characters/ images (optional)
    pub asset_root: Option<PathBuf>,

    pub chart_config: BarChartConfig,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            data_source: "combined.json".to_string(),
            options: ReportOptions::default(),
            output_json: Some(PathBuf::from("report.json")),
            chart_dir: None,
            asset_root: None,
            chart_config: BarChartConfig::default(),
            print_summary: false,
        }
    }
}

/// What to aggregate and how many entries to keep
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    /// Class selector, `"all"` for every class
    pub selected_class: String,

    /// Entries kept per ranking
    pub top_n: usize,

    /// Trinket to pin for the pair chart; defaults to the most owned one
    pub trinket: Option<String>,

    /// Card to pin for the pair chart; defaults to the most used one
    pub card: Option<String>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            selected_class: ALL_CLASSES.to_string(),
            top_n: DEFAULT_TOP_N,
            trinket: None,
            card: None,
        }
    }
}

/// Which kind of item a pair lookup is pinned on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PinnedItem {
    Trinket(String),
    Card(String),
}

/// Arguments for the pairs command
#[derive(Debug, Clone)]
pub struct PairArgs {
    pub data_source: String,
    pub selected_class: String,
    pub top_n: usize,
    pub pinned: PinnedItem,

    /// Output path for the SVG chart (optional)
    pub output_svg: Option<PathBuf>,
    pub chart_config: BarChartConfig,
}

impl Default for PairArgs {
    fn default() -> Self {
        Self {
            data_source: "combined.json".to_string(),
            selected_class: ALL_CLASSES.to_string(),
            top_n: DEFAULT_TOP_N,
            pinned: PinnedItem::Trinket(String::new()),
            output_svg: None,
            chart_config: BarChartConfig::default(),
        }
    }
}
