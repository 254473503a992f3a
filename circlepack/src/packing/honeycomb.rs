//! Hexagonal (honeycomb) packing.

use crate::primitives::{Point, Size};

use super::{best_columns, Arrangement, PackingLayout};

const SQRT_3: f32 = 1.732_050_8;

/// Circles in offset rows: odd rows shift right by one radius and rows sit
/// `√3·r` apart, so each circle nests between two of the row above.
#[derive(Debug, Clone, Copy, Default)]
pub struct Honeycomb;

impl Honeycomb {
    fn radius(size: Size, columns: usize, rows: usize) -> f32 {
        let shift = if rows > 1 { 1.0 } else { 0.0 };
        let by_width = size.width / (2.0 * columns as f32 + shift);
        let by_height = size.height / (2.0 + (rows - 1) as f32 * SQRT_3);
        by_width.min(by_height)
    }
}

impl Arrangement for Honeycomb {
    fn arrange(&self, size: Size, count: usize) -> PackingLayout {
        if count == 0 {
            return PackingLayout::empty();
        }

        let (columns, radius) =
            best_columns(count, |columns, rows| Self::radius(size, columns, rows));
        let rows = count.div_ceil(columns);
        let diameter = 2.0 * radius;
        let row_pitch = SQRT_3 * radius;
        let shift = if rows > 1 { radius } else { 0.0 };
        let block_width = diameter * columns as f32 + shift;
        let block_height = diameter + row_pitch * (rows - 1) as f32;
        let offset_x = (size.width - block_width) / 2.0;
        let offset_y = (size.height - block_height) / 2.0;

        let centers = (0..count)
            .map(|index| {
                let column = index % columns;
                let row = index / columns;
                let odd = if row % 2 == 1 { radius } else { 0.0 };
                Point::new(
                    offset_x + radius + diameter * column as f32 + odd,
                    offset_y + radius + row_pitch * row as f32,
                )
            })
            .collect();

        PackingLayout { radius, centers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance(a: Point, b: Point) -> f32 {
        ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
    }

    #[test]
    fn test_single_row_matches_grid() {
        let layout = Honeycomb.arrange(Size::new(300.0, 100.0), 3);
        assert_eq!(layout.radius, 50.0);
        assert_eq!(layout.centers[0], Point::new(50.0, 50.0));
    }

    #[test]
    fn test_offset_rows_beat_grid_in_short_box() {
        let layout = Honeycomb.arrange(Size::new(100.0, 75.0), 3);
        assert!((layout.radius - 20.0).abs() < 1e-4, "radius {}", layout.radius);
        // The nested circle touches both circles above it without overlap.
        let r = layout.radius;
        assert!(distance(layout.centers[0], layout.centers[2]) >= 2.0 * r - 1e-3);
        assert!(distance(layout.centers[1], layout.centers[2]) >= 2.0 * r - 1e-3);
    }

    #[test]
    fn test_circles_stay_inside_container() {
        let size = Size::new(240.0, 180.0);
        for count in 1..12 {
            let layout = Honeycomb.arrange(size, count);
            let r = layout.radius;
            for center in &layout.centers {
                assert!(center.x - r >= -1e-3 && center.x + r <= size.width + 1e-3);
                assert!(center.y - r >= -1e-3 && center.y + r <= size.height + 1e-3);
            }
        }
    }

    #[test]
    fn test_no_overlap() {
        let layout = Honeycomb.arrange(Size::new(240.0, 180.0), 7);
        let r = layout.radius;
        for (i, a) in layout.centers.iter().enumerate() {
            for b in &layout.centers[i + 1..] {
                assert!(distance(*a, *b) >= 2.0 * r - 1e-3);
            }
        }
    }
}
