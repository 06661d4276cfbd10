//! Display-ready views of aggregator output.
//!
//! Turns rankings and histograms into chart specifications, stat cards
//! and enemy cards. Nothing here computes statistics; it only labels,
//! formats and picks colors.

use crate::aggregator::{EnemyWinRate, Ranked, TrinketOwnership};
use crate::parser::schema::FloorHistogram;
use crate::utils::config::{
    ALL_CLASSES, CHARACTER_ASSET_DIR, COMBOS_COLOR, ENEMY_ASSET_DIR, FLOORS_COLOR, FLOOR_LABELS,
    PAIRS_COLOR, PLACEHOLDER_IMAGE, SLOT_CARD_PAIRS, SLOT_COMBOS, SLOT_FLOORS, SLOT_TRINKET_PAIRS,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything a renderer needs to draw one bar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Display slot; drawing the same id again replaces the chart
    pub id: String,
    pub title: String,
    pub series_name: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub color: String,
}

impl ChartSpec {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        series_name: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            series_name: series_name.into(),
            labels: Vec::new(),
            values: Vec::new(),
            color: color.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Append one labelled bar
    pub fn with_bar(mut self, label: impl Into<String>, value: f64) -> Self {
        self.labels.push(label.into());
        self.values.push(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Name plus a formatted statistic, e.g. `("lucky_coin", "40% owned")`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub name: String,
    pub stat: String,
}

/// One enemy tile: name, win share and portrait path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyCard {
    pub name: String,
    pub win_rate: u32,
    pub image: String,
}

impl EnemyCard {
    pub fn caption(&self) -> String {
        format!("Win Rate: {}%", self.win_rate)
    }
}

/// Resolves portrait paths, falling back to the placeholder image
///
/// Without an asset root every path is returned unchecked.
#[derive(Debug, Clone, Default)]
pub struct AssetResolver {
    root: Option<PathBuf>,
}

impl AssetResolver {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    pub fn enemy_image(&self, name: &str) -> String {
        self.resolve(format!("{}/{}.png", ENEMY_ASSET_DIR, name))
    }

    /// Character portrait, or the placeholder for the `"all"` selector
    pub fn character_image(&self, class: &str) -> String {
        if class == ALL_CLASSES {
            return PLACEHOLDER_IMAGE.to_string();
        }
        self.resolve(format!("{}/{}.png", CHARACTER_ASSET_DIR, class))
    }

    fn resolve(&self, relative: String) -> String {
        match &self.root {
            Some(root) if !root.join(&relative).is_file() => PLACEHOLDER_IMAGE.to_string(),
            _ => relative,
        }
    }
}

/// Labels and counts for the floor histogram
pub fn floor_histogram_view(bins: &[u64]) -> FloorHistogram {
    FloorHistogram {
        labels: FLOOR_LABELS.iter().map(|l| l.to_string()).collect(),
        counts: bins.to_vec(),
    }
}

pub fn floor_chart(histogram: &FloorHistogram) -> ChartSpec {
    histogram.labels.iter().zip(&histogram.counts).fold(
        ChartSpec::new(SLOT_FLOORS, "Highest Floor Reached", "Times", FLOORS_COLOR),
        |spec, (label, count)| spec.with_bar(label.clone(), *count as f64),
    )
}

pub fn combo_chart(combos: &[Ranked<i64>]) -> ChartSpec {
    ranked_chart(
        ChartSpec::new(SLOT_COMBOS, "Top Card Combos", "Uses", COMBOS_COLOR),
        combos,
        |v| *v as f64,
    )
}

/// Trinket co-occurrence chart; `pinned` is the display name
pub fn trinket_pair_chart(pinned: &str, pairs: &[Ranked<f64>]) -> ChartSpec {
    ranked_chart(
        ChartSpec::new(
            SLOT_TRINKET_PAIRS,
            format!("best combos with trinket {}", pinned),
            "Avg Dmg",
            PAIRS_COLOR,
        ),
        pairs,
        |v| *v,
    )
}

/// Card co-occurrence chart; `pinned` is the display name
pub fn card_pair_chart(pinned: &str, pairs: &[Ranked<i64>]) -> ChartSpec {
    ranked_chart(
        ChartSpec::new(
            SLOT_CARD_PAIRS,
            format!("best combos with card {}", pinned),
            "Avg Dmg",
            PAIRS_COLOR,
        ),
        pairs,
        |v| *v as f64,
    )
}

fn ranked_chart<M>(spec: ChartSpec, entries: &[Ranked<M>], value: impl Fn(&M) -> f64) -> ChartSpec {
    entries
        .iter()
        .fold(spec, |spec, entry| spec.with_bar(entry.name.clone(), value(&entry.value)))
}

pub fn trinket_cards(trinkets: &[TrinketOwnership]) -> Vec<StatCard> {
    trinkets
        .iter()
        .map(|t| StatCard {
            name: t.name.clone(),
            stat: t.stat(),
        })
        .collect()
}

pub fn card_cards(cards: &[Ranked<i64>]) -> Vec<StatCard> {
    cards
        .iter()
        .map(|c| StatCard {
            name: c.name.clone(),
            stat: format!("{} uses", c.value),
        })
        .collect()
}

pub fn enemy_cards(enemies: &[EnemyWinRate], assets: &AssetResolver) -> Vec<EnemyCard> {
    enemies
        .iter()
        .map(|e| EnemyCard {
            name: e.name.clone(),
            win_rate: e.win_rate,
            image: assets.enemy_image(&e.name),
        })
        .collect()
}

/// `"Pick Rate: 12.5%"`, or a dash when no class is selected
pub fn pick_rate_label(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("Pick Rate: {:.1}%", rate),
        None => "Pick Rate: —".to_string(),
    }
}
