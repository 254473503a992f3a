//! Circle packing strategies.
//!
//! A strategy computes, for a container size and a circle count, one
//! common radius and a center for every circle index. Strategies memoize
//! their result and report through [`CirclePacking::has_changed`] whether
//! the inputs moved since the geometry was last computed.
//!
//! [`ResponsivePacking`] fans inputs out to several strategies and answers
//! with whichever yields the largest radius.

mod grid;
mod honeycomb;
mod responsive;

pub use grid::Grid;
pub use honeycomb::Honeycomb;
pub use responsive::ResponsivePacking;

use crate::error::PackingError;
use crate::primitives::{Point, Size};

/// Grid arrangement with memoized results.
pub type GridPacking = Packer<Grid>;

/// Honeycomb arrangement with memoized results.
pub type HoneycombPacking = Packer<Honeycomb>;

/// The contract every packing strategy fulfils.
pub trait CirclePacking {
    fn set_container_size(&mut self, width: f32, height: f32);

    fn set_circles_count(&mut self, count: usize);

    /// True while the geometry has not been recomputed for the current inputs.
    fn has_changed(&self) -> bool;

    /// Common radius for the current inputs, recomputing if needed.
    fn circles_radius(&mut self) -> f32;

    /// Center of circle `index`. Requires `index < count`.
    fn circle_center(&mut self, index: usize) -> Result<Point, PackingError>;

    /// Drop memoized geometry so the next query recomputes it.
    fn invalidate(&mut self) {}

    fn circle_center_x(&mut self, index: usize) -> Result<f32, PackingError> {
        self.circle_center(index).map(|p| p.x)
    }

    fn circle_center_y(&mut self, index: usize) -> Result<f32, PackingError> {
        self.circle_center(index).map(|p| p.y)
    }
}

/// A computed packing: one radius, one center per circle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PackingLayout {
    pub radius: f32,
    pub centers: Vec<Point>,
}

impl PackingLayout {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Pure geometry of one packing family.
pub trait Arrangement {
    fn arrange(&self, size: Size, count: usize) -> PackingLayout;
}

/// Wraps an [`Arrangement`] with input tracking and a memoized result.
#[derive(Debug, Clone)]
pub struct Packer<A> {
    arrangement: A,
    size: Size,
    count: usize,
    dirty: bool,
    layout: PackingLayout,
}

impl<A: Arrangement> Packer<A> {
    pub fn new(arrangement: A) -> Self {
        Self {
            arrangement,
            size: Size::ZERO,
            count: 0,
            dirty: true,
            layout: PackingLayout::empty(),
        }
    }

    /// Recompute the layout if inputs moved since the last computation.
    fn ensure_layout(&mut self) -> &PackingLayout {
        if self.dirty {
            self.layout = self.arrangement.arrange(self.size, self.count);
            self.dirty = false;
        }
        &self.layout
    }
}

impl<A: Arrangement + Default> Default for Packer<A> {
    fn default() -> Self {
        Self::new(A::default())
    }
}

impl<A: Arrangement> CirclePacking for Packer<A> {
    fn set_container_size(&mut self, width: f32, height: f32) {
        let size = Size::new(width, height);
        if size != self.size {
            self.size = size;
            self.dirty = true;
        }
    }

    fn set_circles_count(&mut self, count: usize) {
        if count != self.count {
            self.count = count;
            self.dirty = true;
        }
    }

    fn has_changed(&self) -> bool {
        self.dirty
    }

    fn circles_radius(&mut self) -> f32 {
        self.ensure_layout().radius
    }

    fn invalidate(&mut self) {
        self.dirty = true;
    }

    fn circle_center(&mut self, index: usize) -> Result<Point, PackingError> {
        let count = self.count;
        self.ensure_layout()
            .centers
            .get(index)
            .copied()
            .ok_or(PackingError::CenterOutOfRange { index, count })
    }
}

/// Scan column counts `1..=count` and keep the one yielding the largest
/// radius. `radius_for(columns, rows)` returns the radius for that shape.
pub(crate) fn best_columns(
    count: usize,
    radius_for: impl Fn(usize, usize) -> f32,
) -> (usize, f32) {
    let mut best = (1, 0.0f32);
    for columns in 1..=count {
        let rows = count.div_ceil(columns);
        let radius = radius_for(columns, rows);
        if radius > best.1 {
            best = (columns, radius);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Places circles in a single row of fixed radius.
    #[derive(Default)]
    struct Row;

    impl Arrangement for Row {
        fn arrange(&self, _size: Size, count: usize) -> PackingLayout {
            PackingLayout {
                radius: 1.0,
                centers: (0..count).map(|i| Point::new(1.0 + 2.0 * i as f32, 1.0)).collect(),
            }
        }
    }

    #[test]
    fn test_packer_starts_dirty() {
        let packer = Packer::new(Row);
        assert!(packer.has_changed());
    }

    #[test]
    fn test_radius_query_clears_dirty() {
        let mut packer = Packer::new(Row);
        packer.set_circles_count(3);
        packer.set_container_size(10.0, 10.0);
        assert!(packer.has_changed());
        assert_eq!(packer.circles_radius(), 1.0);
        assert!(!packer.has_changed());
    }

    #[test]
    fn test_unchanged_inputs_stay_clean() {
        let mut packer = Packer::new(Row);
        packer.set_circles_count(3);
        packer.set_container_size(10.0, 10.0);
        packer.circles_radius();

        packer.set_circles_count(3);
        packer.set_container_size(10.0, 10.0);
        assert!(!packer.has_changed());

        packer.set_container_size(12.0, 10.0);
        assert!(packer.has_changed());
    }

    #[test]
    fn test_invalidate_forces_recompute() {
        let mut packer = Packer::new(Row);
        packer.set_circles_count(2);
        packer.circles_radius();
        assert!(!packer.has_changed());

        packer.invalidate();
        assert!(packer.has_changed());
        assert_eq!(packer.circle_center_x(1), Ok(3.0));
        assert!(!packer.has_changed());
    }

    #[test]
    fn test_center_out_of_range() {
        let mut packer = Packer::new(Row);
        packer.set_circles_count(2);
        assert_eq!(packer.circle_center_x(1), Ok(3.0));
        assert_eq!(packer.circle_center_y(1), Ok(1.0));
        assert_eq!(
            packer.circle_center(2),
            Err(PackingError::CenterOutOfRange { index: 2, count: 2 })
        );
    }

    #[test]
    fn test_best_columns_prefers_first_maximum() {
        // Radius depends only on rows: 4, 2, 2 and 1 rows for 1..=4 columns.
        let (columns, radius) = best_columns(4, |_, rows| 1.0 / rows as f32);
        assert_eq!(columns, 4);
        assert_eq!(radius, 1.0);

        let (columns, _) = best_columns(4, |_, _| 1.0);
        assert_eq!(columns, 1);
    }

    #[test]
    fn test_best_columns_zero_count() {
        assert_eq!(best_columns(0, |_, _| 5.0), (1, 0.0));
    }
}
