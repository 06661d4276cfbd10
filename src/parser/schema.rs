//! Output JSON schema for dashboard reports.
//!
//! This module defines the structure of report files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::aggregator::{EnemyWinRate, Ranked, TrinketOwnership};
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Class selector the report was computed for (`"all"` for everyone)
    pub selected_class: String,

    /// Records matching the class selector
    pub record_count: usize,

    /// Distinct sessions matching the class selector
    pub session_count: usize,

    /// Share of classed records picking the selected class; absent for `"all"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pick_rate: Option<f64>,

    pub floor_histogram: FloorHistogram,

    pub top_combos: Vec<Ranked<i64>>,

    pub top_trinkets: Vec<TrinketOwnership>,

    pub top_cards: Vec<Ranked<i64>>,

    pub top_enemies: Vec<EnemyWinRate>,

    /// Mean damage of trinkets equipped with the pinned trinket
    pub trinket_pairs: PairSection<f64>,

    /// Mean damage of cards played with the pinned card
    pub card_pairs: PairSection<i64>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// Session counts per highest-floor bin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorHistogram {
    pub labels: Vec<String>,
    pub counts: Vec<u64>,
}

/// Co-occurrence ranking around one pinned item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairSection<M> {
    /// Pinned identifier; `None` when nothing could be pinned
    pub pinned: Option<String>,
    pub pairs: Vec<Ranked<M>>,
}

impl<M> PairSection<M> {
    pub fn empty() -> Self {
        Self {
            pinned: None,
            pairs: Vec::new(),
        }
    }
}
