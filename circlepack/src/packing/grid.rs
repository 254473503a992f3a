//! Rectangular grid packing.

use crate::primitives::{Point, Size};

use super::{best_columns, Arrangement, PackingLayout};

/// Circles on a rectangular grid, filled row by row.
///
/// Every column count is tried; the one giving the largest radius wins and
/// the resulting block is centered in the container.
#[derive(Debug, Clone, Copy, Default)]
pub struct Grid;

impl Grid {
    fn radius(size: Size, columns: usize, rows: usize) -> f32 {
        let by_width = size.width / (2.0 * columns as f32);
        let by_height = size.height / (2.0 * rows as f32);
        by_width.min(by_height)
    }
}

impl Arrangement for Grid {
    fn arrange(&self, size: Size, count: usize) -> PackingLayout {
        if count == 0 {
            return PackingLayout::empty();
        }

        let (columns, radius) =
            best_columns(count, |columns, rows| Self::radius(size, columns, rows));
        let rows = count.div_ceil(columns);
        let diameter = 2.0 * radius;
        let offset_x = (size.width - diameter * columns as f32) / 2.0;
        let offset_y = (size.height - diameter * rows as f32) / 2.0;

        let centers = (0..count)
            .map(|index| {
                let column = index % columns;
                let row = index / columns;
                Point::new(
                    offset_x + radius + diameter * column as f32,
                    offset_y + radius + diameter * row as f32,
                )
            })
            .collect();

        PackingLayout { radius, centers }
    }
}
