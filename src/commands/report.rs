//! Report command implementation.
//!
//! The report command:
//! 1. Loads the dataset
//! 2. Computes every dashboard statistic for the selected class
//! 3. Renders charts into the chart registry
//! 4. Writes output files
//! 5. Optionally prints a text summary

use super::models::{ReportArgs, ReportOptions};
use crate::aggregator::{
    best_card_pairs, best_trinket_pairs, filter_by_class, floor_histogram, latest_per_session,
    pick_rate, top_cards, top_combos, top_enemies, top_trinkets,
};
use crate::chart::{generate_text_summary, ChartRegistry, ChartRenderer, SvgBarChart};
use crate::output::presentation::{
    card_cards, card_pair_chart, combo_chart, enemy_cards, floor_chart, floor_histogram_view,
    pick_rate_label, trinket_cards, trinket_pair_chart, AssetResolver, EnemyCard, StatCard,
};
use crate::output::{write_charts, write_report};
use crate::parser::schema::{DashboardReport, PairSection};
use crate::parser::{load_dataset, Record};
use crate::utils::config::{CARD_PREFIX, MAX_TOP_N, SCHEMA_VERSION, TRINKET_PREFIX};
use crate::utils::error::ChartError;
use crate::utils::naming::{display_name, normalize_input, to_identifier};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Everything the dashboard shows for one class selection
#[derive(Debug)]
pub struct DashboardView<R> {
    pub report: DashboardReport,
    pub charts: ChartRegistry<R>,
    pub pick_rate_label: String,
    pub character_image: String,
    pub trinket_cards: Vec<StatCard>,
    pub card_cards: Vec<StatCard>,
    pub enemy_cards: Vec<EnemyCard>,
}

/// Compute every dashboard statistic for `options.selected_class`
///
/// **Public** - pure over `records`; callable repeatedly
///
/// Pair sections pin the explicit trinket/card when given, otherwise the
/// top-ranked trinket and card. Without either, the section stays empty.
pub fn build_report(records: &[Record], options: &ReportOptions) -> DashboardReport {
    let class = options.selected_class.as_str();
    let n = options.top_n;

    let matching = filter_by_class(records, class);
    let session_count = latest_per_session(matching.iter().copied()).len();
    debug!(
        "{} of {} records match class '{}' ({} sessions)",
        matching.len(),
        records.len(),
        class,
        session_count
    );

    let top_trinkets = top_trinkets(records, class, n);
    let top_cards = top_cards(records, class, n);

    let trinket_pin = options
        .trinket
        .as_deref()
        .and_then(normalize_input)
        .map(|t| to_identifier(&t, TRINKET_PREFIX))
        .or_else(|| top_trinkets.first().map(|t| t.key.clone()));
    let card_pin = options
        .card
        .as_deref()
        .and_then(normalize_input)
        .map(|c| to_identifier(&c, CARD_PREFIX))
        .or_else(|| top_cards.first().map(|c| c.key.clone()));

    let trinket_pairs = match trinket_pin {
        Some(pin) => PairSection {
            pairs: best_trinket_pairs(records, class, &pin, n),
            pinned: Some(pin),
        },
        None => PairSection::empty(),
    };
    let card_pairs = match card_pin {
        Some(pin) => PairSection {
            pairs: best_card_pairs(records, class, &pin, n),
            pinned: Some(pin),
        },
        None => PairSection::empty(),
    };

    DashboardReport {
        version: SCHEMA_VERSION.to_string(),
        selected_class: class.to_string(),
        record_count: matching.len(),
        session_count,
        pick_rate: pick_rate(records, class),
        floor_histogram: floor_histogram_view(&floor_histogram(records, class)),
        top_combos: top_combos(records, class, n),
        top_trinkets,
        top_cards,
        top_enemies: top_enemies(records, class, n),
        trinket_pairs,
        card_pairs,
        generated_at: chrono::Utc::now().to_rfc3339(),
    }
}

/// Turn a report into charts and display cards
///
/// **Public** - the four chart slots are always drawn, even when empty
pub fn render_dashboard<R: ChartRenderer>(
    report: DashboardReport,
    renderer: R,
    assets: &AssetResolver,
) -> Result<DashboardView<R>, ChartError> {
    let mut charts = ChartRegistry::new(renderer);

    charts.draw(floor_chart(&report.floor_histogram))?;
    charts.draw(combo_chart(&report.top_combos))?;

    let trinket_title = report
        .trinket_pairs
        .pinned
        .as_deref()
        .map(|pin| display_name(pin, TRINKET_PREFIX))
        .unwrap_or_default();
    charts.draw(trinket_pair_chart(&trinket_title, &report.trinket_pairs.pairs))?;

    let card_title = report
        .card_pairs
        .pinned
        .as_deref()
        .map(|pin| display_name(pin, CARD_PREFIX))
        .unwrap_or_default();
    charts.draw(card_pair_chart(&card_title, &report.card_pairs.pairs))?;

    Ok(DashboardView {
        pick_rate_label: pick_rate_label(report.pick_rate),
        character_image: assets.character_image(&report.selected_class),
        trinket_cards: trinket_cards(&report.top_trinkets),
        card_cards: card_cards(&report.top_cards),
        enemy_cards: enemy_cards(&report.top_enemies, assets),
        charts,
        report,
    })
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Dataset load failures (file, HTTP, JSON)
/// * Chart rendering errors
/// * File write errors
pub fn execute_report(args: ReportArgs) -> Result<DashboardReport> {
    let start_time = Instant::now();

    info!("Building dashboard for class: {}", args.options.selected_class);

    info!("Step 1/4: Loading dataset...");
    let records = load_dataset(&args.data_source)
        .with_context(|| format!("Failed to load dataset from {}", args.data_source))?;
    info!("Loaded {} records", records.len());

    info!("Step 2/4: Aggregating statistics...");
    let report = build_report(&records, &args.options);

    info!("Step 3/4: Rendering charts...");
    let assets = AssetResolver::new(args.asset_root.clone());
    let view = render_dashboard(report, SvgBarChart::new(args.chart_config.clone()), &assets)
        .context("Failed to render charts")?;

    info!("Step 4/4: Writing output files...");
    if let Some(path) = &args.output_json {
        write_report(&view.report, path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }
    if let Some(dir) = &args.chart_dir {
        let written = write_charts(&view.charts, dir).context("Failed to write charts")?;
        info!("✓ {} charts written to: {}", written.len(), dir.display());
    }

    if args.print_summary {
        print_summary(&view);
    }

    info!(
        "Report completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(view.report)
}

fn print_summary<R>(view: &DashboardView<R>) {
    println!("\n{}", "=".repeat(80));
    println!("DASHBOARD SUMMARY");
    println!("{}", "=".repeat(80));
    println!("{}", generate_text_summary(&view.report));
    println!();
    println!("  Character image: {}", view.character_image);
    for card in &view.enemy_cards {
        println!("  {:<28} {:<14} {}", card.name, card.caption(), card.image);
    }
    println!("{}", "=".repeat(80));
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.data_source.trim().is_empty() {
        anyhow::bail!("Dataset source cannot be empty");
    }

    validate_options(&args.options)
}

/// Validate aggregation options
pub fn validate_options(options: &ReportOptions) -> Result<()> {
    if options.selected_class.trim().is_empty() {
        anyhow::bail!("Class cannot be empty (use \"all\" for every class)");
    }

    validate_top_n(options.top_n)?;

    if matches!(options.trinket.as_deref(), Some(t) if normalize_input(t).is_none()) {
        anyhow::bail!("Trinket name cannot be empty");
    }
    if matches!(options.card.as_deref(), Some(c) if normalize_input(c).is_none()) {
        anyhow::bail!("Card name cannot be empty");
    }

    Ok(())
}

pub(crate) fn validate_top_n(top_n: usize) -> Result<()> {
    if top_n == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if top_n > MAX_TOP_N {
        anyhow::bail!("top is too large (max {})", MAX_TOP_N);
    }

    Ok(())
}
