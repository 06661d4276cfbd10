//! SVG bar chart rendering.
//!
//! Hand-built SVG with a title, a zero-based y axis with gridlines and one
//! bar per label. Each bar has its value printed above it. No scripting,
//! no external stylesheet.

use super::registry::ChartRenderer;
use crate::output::presentation::ChartSpec;
use crate::utils::error::ChartError;
use log::debug;

const MIN_WIDTH: usize = 200;
const MIN_HEIGHT: usize = 150;
const TITLE_HEIGHT: f64 = 40.0;
const AXIS_MARGIN: f64 = 50.0;
const LABEL_HEIGHT: f64 = 40.0;
const GRID_LINES: usize = 4;

/// Bar chart dimensions
#[derive(Debug, Clone)]
pub struct BarChartConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 360,
        }
    }
}

impl BarChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Renders `ChartSpec`s as standalone SVG documents
#[derive(Debug, Clone, Default)]
pub struct SvgBarChart {
    pub config: BarChartConfig,
}

impl SvgBarChart {
    pub fn new(config: BarChartConfig) -> Self {
        Self { config }
    }
}

impl ChartRenderer for SvgBarChart {
    fn render(&self, spec: &ChartSpec) -> Result<String, ChartError> {
        generate_bar_chart(spec, &self.config)
    }
}

/// Generate an SVG bar chart
///
/// **Public** - negative values draw as empty bars on the zero line; an
/// empty series draws the axes with a "No data" note.
pub fn generate_bar_chart(spec: &ChartSpec, config: &BarChartConfig) -> Result<String, ChartError> {
    if config.width < MIN_WIDTH || config.height < MIN_HEIGHT {
        return Err(ChartError::InvalidDimensions {
            width: config.width,
            height: config.height,
        });
    }
    if spec.labels.len() != spec.values.len() {
        return Err(ChartError::MismatchedSeries {
            labels: spec.labels.len(),
            values: spec.values.len(),
        });
    }

    let width = config.width as f64;
    let height = config.height as f64;
    let plot_left = AXIS_MARGIN;
    let plot_top = TITLE_HEIGHT;
    let plot_width = width - AXIS_MARGIN - 20.0;
    let plot_height = height - TITLE_HEIGHT - LABEL_HEIGHT;
    let baseline = plot_top + plot_height;

    let max_value = spec.values.iter().cloned().fold(0.0_f64, f64::max);
    let scale_max = if max_value > 0.0 { max_value } else { 1.0 };

    let mut svg = String::new();

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        config.width, config.height, config.width, config.height
    ));
    svg.push_str(r#"<style>.bar:hover { opacity: 0.8; } text { font-family: sans-serif; }</style>"#);
    svg.push_str(&format!(
        r#"<text x="{}" y="26" font-size="20" text-anchor="middle" font-weight="bold">{}</text>"#,
        width / 2.0,
        escape_xml(&spec.title)
    ));

    // Gridlines and y-axis ticks, starting at zero
    for i in 0..=GRID_LINES {
        let fraction = i as f64 / GRID_LINES as f64;
        let y = baseline - fraction * plot_height;
        svg.push_str(&format!(
            r##"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="#dddddd" stroke-width="1"/>"##,
            plot_left,
            y,
            plot_left + plot_width,
            y
        ));
        svg.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="11" text-anchor="end">{}</text>"#,
            plot_left - 6.0,
            y + 4.0,
            format_value(fraction * scale_max)
        ));
    }

    if spec.is_empty() {
        svg.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="14" text-anchor="middle" fill="gray">No data</text>"#,
            plot_left + plot_width / 2.0,
            plot_top + plot_height / 2.0
        ));
    }

    let slot_width = plot_width / spec.values.len().max(1) as f64;
    let bar_width = slot_width * 0.7;

    for (i, (label, value)) in spec.labels.iter().zip(&spec.values).enumerate() {
        let bar_height = (value.max(0.0) / scale_max) * plot_height;
        let x = plot_left + i as f64 * slot_width + (slot_width - bar_width) / 2.0;
        let y = baseline - bar_height;
        let center = x + bar_width / 2.0;

        svg.push_str(&format!(
            r#"<rect class="bar" x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"><title>{}: {} {}</title></rect>"#,
            x,
            y,
            bar_width,
            bar_height,
            escape_xml(&spec.color),
            escape_xml(label),
            format_value(*value),
            escape_xml(&spec.series_name)
        ));
        svg.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="11" text-anchor="middle">{}</text>"#,
            center,
            y - 4.0,
            format_value(*value)
        ));
        svg.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" font-size="12" text-anchor="middle">{}</text>"#,
            center,
            baseline + 18.0,
            escape_xml(label)
        ));
    }

    // Axes drawn last so bars never cover them
    svg.push_str(&format!(
        r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="black" stroke-width="1"/>"#,
        plot_left, plot_top, plot_left, baseline
    ));
    svg.push_str(&format!(
        r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="black" stroke-width="1"/>"#,
        plot_left,
        baseline,
        plot_left + plot_width,
        baseline
    ));

    svg.push_str("</svg>");

    debug!(
        "Rendered chart '{}' with {} bars ({} bytes)",
        spec.id,
        spec.values.len(),
        svg.len()
    );
    Ok(svg)
}

/// Integers without a fraction, everything else with one decimal
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
