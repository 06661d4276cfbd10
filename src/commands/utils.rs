use crate::parser::{dataset_stats, load_dataset};
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};

/// Load a dataset and print what it contains
pub fn validate_dataset(source: &str) -> Result<()> {
    println!("Validating dataset: {}", source);

    let records = load_dataset(source)
        .with_context(|| format!("Failed to load dataset from {}", source))?;
    let stats = dataset_stats(&records);

    println!("✓ Valid dataset JSON");
    println!("  Records: {}", stats.record_count);
    println!("  Sessions: {}", stats.session_count);
    println!("  Without class: {}", stats.unclassed);
    println!("  Classes:");
    for (class, count) in &stats.classes {
        println!("    {:<20} {}", class, count);
    }

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Telemetry Dashboard Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  selected_class: string     - Class selector ('all' for every class)");
        println!("  record_count: number       - Records matching the class");
        println!("  session_count: number      - Distinct sessions matching the class");
        println!("  pick_rate: number?         - Percent of classed records (absent for 'all')");
        println!("  floor_histogram: object    - Latest-floor counts per session");
        println!("    labels: string[]         - '1', '2', '3', '4', '5+'");
        println!("    counts: number[]         - Sessions per bin");
        println!("  top_combos: array          - {{ key, name, value }} cumulative uses");
        println!("  top_trinkets: array        - {{ key, name, owners, percent_owned }}");
        println!("  top_cards: array           - {{ key, name, value }} cumulative uses");
        println!("  top_enemies: array         - {{ key, name, wins, win_rate }}");
        println!("  trinket_pairs: object      - {{ pinned, pairs }} mean damage, 1 decimal");
        println!("  card_pairs: object         - {{ pinned, pairs }} mean damage, integer");
        println!("  generated_at: string       - RFC 3339 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Telemetry Dashboard v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Session telemetry aggregation and chart generation.");
}
