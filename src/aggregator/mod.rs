//! Aggregation of telemetry records into dashboard statistics.
//!
//! Every aggregator starts from the class filter. State queries (floors,
//! equipped trinkets) then reduce to the latest record per session;
//! usage, win and pair statistics fold over all matching records.

pub mod enemies;
pub mod filter;
pub mod floors;
pub mod pairs;
pub mod rank;
pub mod session;
pub mod trinkets;
pub mod usage;

// Re-export main types and functions
pub use enemies::{top_enemies, EnemyWinRate};
pub use filter::{filter_by_class, matches_class, pick_rate};
pub use floors::{floor_bin, floor_histogram};
pub use pairs::{best_card_pairs, best_trinket_pairs, DamageSum};
pub use rank::{percent, round_tenths, top_n, Ranked, Tally};
pub use session::latest_per_session;
pub use trinkets::{top_trinkets, TrinketOwnership};
pub use usage::{top_cards, top_combos};
