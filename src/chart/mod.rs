//! Chart rendering.
//!
//! This module converts presentation `ChartSpec`s into SVG bar charts,
//! keeps one rendered chart per display slot, and formats terminal
//! summaries of a dashboard report.

pub mod bar;
pub mod registry;
pub mod text;

// Re-export main types
pub use bar::{BarChartConfig, SvgBarChart};
pub use registry::{ChartRegistry, ChartRenderer, RenderedChart};
pub use text::generate_text_summary;
