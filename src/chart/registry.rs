//! One rendered chart per display slot.
//!
//! The registry is plain owned state: whoever drives the dashboard holds
//! it and passes it where charts are drawn.

use crate::output::presentation::ChartSpec;
use crate::utils::error::ChartError;
use log::debug;
use std::collections::BTreeMap;

/// Turns a chart specification into a drawable document
pub trait ChartRenderer {
    fn render(&self, spec: &ChartSpec) -> Result<String, ChartError>;
}

/// A chart as currently shown in its slot
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    pub spec: ChartSpec,
    pub document: String,
}

/// Slot id → current chart
///
/// Drawing into an occupied slot replaces the previous chart outright.
/// A failed render leaves the slot untouched.
#[derive(Debug)]
pub struct ChartRegistry<R> {
    renderer: R,
    charts: BTreeMap<String, RenderedChart>,
}

impl<R: ChartRenderer> ChartRegistry<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            charts: BTreeMap::new(),
        }
    }

    /// Render `spec` into its slot
    ///
    /// Returns `true` when an existing chart was replaced.
    pub fn draw(&mut self, spec: ChartSpec) -> Result<bool, ChartError> {
        if spec.id.is_empty() {
            return Err(ChartError::EmptySlot);
        }

        let document = self.renderer.render(&spec)?;
        let slot = spec.id.clone();
        let replaced = self
            .charts
            .insert(slot.clone(), RenderedChart { spec, document })
            .is_some();

        debug!(
            "{} chart in slot '{}'",
            if replaced { "Replaced" } else { "Drew" },
            slot
        );
        Ok(replaced)
    }

    pub fn get(&self, slot: &str) -> Option<&RenderedChart> {
        self.charts.get(slot)
    }

    pub fn remove(&mut self, slot: &str) -> Option<RenderedChart> {
        self.charts.remove(slot)
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// Charts in slot-id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RenderedChart)> {
        self.charts.iter().map(|(slot, chart)| (slot.as_str(), chart))
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Renders the title and bar count, enough to tell charts apart
    struct EchoRenderer;

    impl ChartRenderer for EchoRenderer {
        fn render(&self, spec: &ChartSpec) -> Result<String, ChartError> {
            Ok(format!("{}:{}", spec.title, spec.values.len()))
        }
    }

    struct FailingRenderer;

    impl ChartRenderer for FailingRenderer {
        fn render(&self, _spec: &ChartSpec) -> Result<String, ChartError> {
            Err(ChartError::InvalidDimensions { width: 0, height: 0 })
        }
    }

    #[test]
    fn test_redraw_replaces() {
        let mut registry = ChartRegistry::new(EchoRenderer);

        let first = ChartSpec::new("floors", "Old", "Times", "#000").with_bar("1", 1.0);
        assert!(!registry.draw(first).unwrap());

        let second = ChartSpec::new("floors", "New", "Times", "#000")
            .with_bar("1", 1.0)
            .with_bar("2", 2.0);
        assert!(registry.draw(second).unwrap());

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("floors").unwrap().document, "New:2");
    }

    #[test]
    fn test_slots_are_independent() {
        let mut registry = ChartRegistry::new(EchoRenderer);
        registry.draw(ChartSpec::new("b", "B", "s", "#000")).unwrap();
        registry.draw(ChartSpec::new("a", "A", "s", "#000")).unwrap();

        let slots: Vec<&str> = registry.iter().map(|(slot, _)| slot).collect();
        assert_eq!(slots, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_slot_rejected() {
        let mut registry = ChartRegistry::new(EchoRenderer);
        let result = registry.draw(ChartSpec::new("", "T", "s", "#000"));
        assert!(matches!(result, Err(ChartError::EmptySlot)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_failed_render_keeps_nothing() {
        let mut registry = ChartRegistry::new(FailingRenderer);
        assert!(registry.draw(ChartSpec::new("a", "T", "s", "#000")).is_err());
        assert!(registry.get("a").is_none());
    }
}
