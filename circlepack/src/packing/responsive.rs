//! Responsive selection across several packing strategies.

use crate::error::PackingError;
use crate::primitives::Point;

use super::{CirclePacking, GridPacking, HoneycombPacking};

/// Holds an ordered list of strategies and answers with the one yielding
/// the largest radius.
///
/// Inputs fan out to every strategy. [`circles_radius`](CirclePacking::circles_radius)
/// re-selects the winner on every call; center queries go to whichever
/// strategy the most recent radius query selected, so call it first in
/// each pass. Ties go to the strategy declared first.
pub struct ResponsivePacking {
    strategies: Vec<Box<dyn CirclePacking>>,
    selected: Option<usize>,
}

impl ResponsivePacking {
    /// Create a selector over `strategies`, in tie-break order.
    pub fn new(strategies: Vec<Box<dyn CirclePacking>>) -> Self {
        Self {
            strategies,
            selected: None,
        }
    }

    /// Number of strategies held.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Index of the strategy chosen by the last radius query.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
}

impl Default for ResponsivePacking {
    fn default() -> Self {
        Self::new(vec![
            Box::new(GridPacking::default()),
            Box::new(HoneycombPacking::default()),
        ])
    }
}

impl std::fmt::Debug for ResponsivePacking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponsivePacking")
            .field("strategies", &self.strategies.len())
            .field("selected", &self.selected)
            .finish()
    }
}

impl CirclePacking for ResponsivePacking {
    fn set_container_size(&mut self, width: f32, height: f32) {
        for strategy in &mut self.strategies {
            strategy.set_container_size(width, height);
        }
    }

    fn set_circles_count(&mut self, count: usize) {
        for strategy in &mut self.strategies {
            strategy.set_circles_count(count);
        }
    }

    /// Any strategy changed. May report a change even when the winner's
    /// output is identical to before.
    fn has_changed(&self) -> bool {
        self.strategies.iter().any(|s| s.has_changed())
    }

    fn circles_radius(&mut self) -> f32 {
        let mut best: Option<(usize, f32)> = None;
        for (index, strategy) in self.strategies.iter_mut().enumerate() {
            let radius = strategy.circles_radius();
            // Strict comparison keeps the first of equal radii.
            if best.is_none_or(|(_, r)| radius > r) {
                best = Some((index, radius));
            }
        }
        self.selected = best.map(|(index, _)| index);
        best.map_or(0.0, |(_, radius)| radius)
    }

    fn invalidate(&mut self) {
        for strategy in &mut self.strategies {
            strategy.invalidate();
        }
    }

    fn circle_center(&mut self, index: usize) -> Result<Point, PackingError> {
        let selected = self.selected.ok_or(PackingError::NoStrategy)?;
        self.strategies[selected].circle_center(index)
    }
}
