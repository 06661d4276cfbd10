//! Pair lookup command implementation.
//!
//! Recomputes one co-occurrence ranking for a user-supplied trinket or
//! card, the way the dashboard's pair lookup buttons do.

use super::models::{PairArgs, PinnedItem};
use super::report::validate_top_n;
use crate::aggregator::{best_card_pairs, best_trinket_pairs};
use crate::chart::{ChartRegistry, SvgBarChart};
use crate::output::presentation::{card_pair_chart, trinket_pair_chart, ChartSpec};
use crate::output::write_svg;
use crate::parser::{load_dataset, Record};
use crate::utils::config::TRINKET_PREFIX;
use crate::utils::naming::{normalize_input, to_identifier};
use anyhow::{Context, Result};
use log::info;

/// Chart for a pinned item over `records`
///
/// **Public** - `pinned` holds the raw user text; it is trimmed and
/// lower-cased here. Returns `None` when the text is blank.
pub fn pair_chart(
    records: &[Record],
    selected_class: &str,
    pinned: &PinnedItem,
    top_n: usize,
) -> Option<ChartSpec> {
    match pinned {
        PinnedItem::Trinket(raw) => {
            let name = normalize_input(raw)?;
            let id = to_identifier(&name, TRINKET_PREFIX);
            let pairs = best_trinket_pairs(records, selected_class, &id, top_n);
            Some(trinket_pair_chart(&name, &pairs).with_title(lookup_title(&name)))
        }
        PinnedItem::Card(raw) => {
            let name = normalize_input(raw)?;
            let pairs = best_card_pairs(records, selected_class, &name, top_n);
            Some(card_pair_chart(&name, &pairs).with_title(lookup_title(&name)))
        }
    }
}

/// Lookup charts name only the pinned item, without its kind
fn lookup_title(name: &str) -> String {
    format!("best combos with {}", name)
}

/// Execute the pairs command
///
/// **Public** - prints the ranking and optionally writes the chart
pub fn execute_pairs(args: PairArgs) -> Result<ChartSpec> {
    let records = load_dataset(&args.data_source)
        .with_context(|| format!("Failed to load dataset from {}", args.data_source))?;

    let spec = pair_chart(&records, &args.selected_class, &args.pinned, args.top_n)
        .context("Pinned item name cannot be empty")?;

    println!("{}", spec.title);
    for (i, (label, value)) in spec.labels.iter().zip(&spec.values).enumerate() {
        println!("  {}. {:<28} {:>10}", i + 1, label, value);
    }
    if spec.is_empty() {
        println!("  (no co-occurring items)");
    }

    if let Some(path) = &args.output_svg {
        let mut registry = ChartRegistry::new(SvgBarChart::new(args.chart_config.clone()));
        registry.draw(spec.clone()).context("Failed to render chart")?;
        if let Some(chart) = registry.get(&spec.id) {
            write_svg(&chart.document, path).context("Failed to write chart SVG")?;
            info!("✓ Chart written to: {}", path.display());
        }
    }

    Ok(spec)
}

/// Validate pair arguments
pub fn validate_pair_args(args: &PairArgs) -> Result<()> {
    if args.data_source.trim().is_empty() {
        anyhow::bail!("Dataset source cannot be empty");
    }

    let raw = match &args.pinned {
        PinnedItem::Trinket(raw) | PinnedItem::Card(raw) => raw,
    };
    if normalize_input(raw).is_none() {
        anyhow::bail!("Pinned item name cannot be empty");
    }

    validate_top_n(args.top_n)
}
