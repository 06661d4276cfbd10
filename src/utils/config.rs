//! Configuration and constants for the dashboard.

use std::time::Duration;

/// Default timeout for HTTP dataset fetches
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Class selector value that disables class filtering
pub const ALL_CLASSES: &str = "all";

/// Default number of entries in every top-N ranking
pub const DEFAULT_TOP_N: usize = 5;
pub const MAX_TOP_N: usize = 100;

/// `winnerIndex` code meaning the record's owning player won
pub const WINNER_CODE: &str = "2";

// Floor histogram bins: exact floors 1-4, then everything from 5 up
pub const FLOOR_BIN_COUNT: usize = 5;
pub const FLOOR_LABELS: [&str; FLOOR_BIN_COUNT] = ["1", "2", "3", "4", "5+"];

// Identifier prefixes and the separator used inside identifiers
pub const TRINKET_PREFIX: &str = "trinket_";
pub const CARD_PREFIX: &str = "card_";
pub const ENEMY_PREFIX: &str = "enemy_";
pub const NAME_SEPARATOR: char = '_';

// Chart slots, keyed by the registry
pub const SLOT_FLOORS: &str = "floors";
pub const SLOT_COMBOS: &str = "combos";
pub const SLOT_TRINKET_PAIRS: &str = "trinket-pairs";
pub const SLOT_CARD_PAIRS: &str = "card-pairs";

pub const FLOORS_COLOR: &str = "#5865f2";
pub const COMBOS_COLOR: &str = "#f28e2b";
pub const PAIRS_COLOR: &str = "#2dd4bf";
pub const DEFAULT_BAR_COLOR: &str = "#4e79a7";

// Image assets, relative to the asset root
pub const ENEMY_ASSET_DIR: &str = "Enemies";
pub const CHARACTER_ASSET_DIR: &str = "Characters";
pub const PLACEHOLDER_IMAGE: &str = "Enemies/placeholder.png";
