//! Terminal summary of a dashboard report.

use crate::aggregator::Ranked;
use crate::output::presentation::pick_rate_label;
use crate::parser::schema::DashboardReport;

const BAR_WIDTH: usize = 30;

/// Render a report as plain text sections with proportional bars
pub fn generate_text_summary(report: &DashboardReport) -> String {
    let mut lines = Vec::new();

    lines.push(format!("  CLASS: {}", report.selected_class));
    lines.push(format!(
        "  Records: {} | Sessions: {} | {}",
        report.record_count,
        report.session_count,
        pick_rate_label(report.pick_rate)
    ));

    lines.push(String::new());
    lines.push("  HIGHEST FLOOR REACHED".to_string());
    let floor_max = report.floor_histogram.counts.iter().copied().max().unwrap_or(0) as f64;
    for (label, count) in report
        .floor_histogram
        .labels
        .iter()
        .zip(&report.floor_histogram.counts)
    {
        lines.push(format!(
            "  {:>4} {:<width$} {}",
            label,
            bar(*count as f64, floor_max),
            count,
            width = BAR_WIDTH
        ));
    }

    push_ranked(&mut lines, "TOP CARD COMBOS", &report.top_combos, |v| v.to_string());

    lines.push(String::new());
    lines.push("  TOP TRINKETS".to_string());
    for trinket in &report.top_trinkets {
        lines.push(format!("  {:<28} {:>12}", trinket.name, trinket.stat()));
    }
    if report.top_trinkets.is_empty() {
        lines.push("  (none)".to_string());
    }

    push_ranked(&mut lines, "TOP CARDS", &report.top_cards, |v| format!("{} uses", v));

    lines.push(String::new());
    lines.push("  TOP ENEMIES (share of wins)".to_string());
    for enemy in &report.top_enemies {
        lines.push(format!("  {:<28} {:>5}%", enemy.name, enemy.win_rate));
    }
    if report.top_enemies.is_empty() {
        lines.push("  (none)".to_string());
    }

    if let Some(pinned) = &report.trinket_pairs.pinned {
        let title = format!("BEST COMBOS WITH {} (avg dmg)", pinned);
        push_ranked(&mut lines, &title, &report.trinket_pairs.pairs, |v| format!("{:.1}", v));
    }
    if let Some(pinned) = &report.card_pairs.pinned {
        let title = format!("BEST COMBOS WITH {} (avg dmg)", pinned);
        push_ranked(&mut lines, &title, &report.card_pairs.pairs, |v| v.to_string());
    }

    lines.join("\n")
}

fn push_ranked<M>(
    lines: &mut Vec<String>,
    title: &str,
    entries: &[Ranked<M>],
    format_value: impl Fn(&M) -> String,
) {
    lines.push(String::new());
    lines.push(format!("  {}", title));
    for (i, entry) in entries.iter().enumerate() {
        lines.push(format!(
            "  {}. {:<26} {:>12}",
            i + 1,
            entry.name,
            format_value(&entry.value)
        ));
    }
    if entries.is_empty() {
        lines.push("  (none)".to_string());
    }
}

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let cells = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(cells.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_scales_to_max() {
        assert_eq!(bar(10.0, 10.0).chars().count(), BAR_WIDTH);
        assert_eq!(bar(5.0, 10.0).chars().count(), BAR_WIDTH / 2);
        assert_eq!(bar(0.0, 10.0), "");
        assert_eq!(bar(3.0, 0.0), "");
    }

    #[test]
    fn test_push_ranked_marks_empty_sections() {
        let mut lines = Vec::new();
        let entries: Vec<Ranked<i64>> = Vec::new();
        push_ranked(&mut lines, "TOP CARDS", &entries, |v| v.to_string());
        assert_eq!(lines, vec!["", "  TOP CARDS", "  (none)"]);
    }
}
