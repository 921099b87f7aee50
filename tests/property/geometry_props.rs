//! Radar chart geometry identities.

use folio::geometry::{grid_polygon, point_for, quadrant_of, tooltip_offset, Point, Quadrant};
use proptest::prelude::*;

const CENTER: Point = Point::new(200.0, 200.0);

proptest! {
    #[test]
    fn prop_points_stay_inside_radius(
        value in -50.0f64..150.0,
        index in 0usize..12,
        count in 1usize..12,
        radius in 1.0f64..300.0,
    ) {
        let p = point_for(value, 100.0, index, count, CENTER, radius);
        prop_assert!(p.distance(CENTER) <= radius + 1e-9);
    }

    #[test]
    fn prop_grid_ring_has_count_vertices(level in 1usize..6, count in 0usize..16) {
        let ring = grid_polygon(level, 5, count, CENTER, 100.0);
        prop_assert_eq!(ring.len(), count);
        let expected = 100.0 * level.min(5) as f64 / 5.0;
        for p in ring {
            prop_assert!((p.distance(CENTER) - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_tooltip_never_covers_point(
        x in 0.0f64..400.0,
        y in 0.0f64..400.0,
        width in 1.0f64..200.0,
        height in 1.0f64..80.0,
    ) {
        let p = Point::new(x, y);
        let corner = tooltip_offset(p, CENTER, width, height);
        let covers = p.x >= corner.x && p.x <= corner.x + width
            && p.y >= corner.y && p.y <= corner.y + height;
        prop_assert!(!covers);
    }

    #[test]
    fn prop_tooltip_opens_away_from_center(x in 0.0f64..400.0, y in 0.0f64..400.0) {
        let p = Point::new(x, y);
        let corner = tooltip_offset(p, CENTER, 60.0, 20.0);
        match quadrant_of(p, CENTER) {
            Quadrant::TopRight => prop_assert!(corner.x > p.x && corner.y < p.y),
            Quadrant::BottomRight => prop_assert!(corner.x > p.x && corner.y > p.y),
            Quadrant::BottomLeft => prop_assert!(corner.x < p.x && corner.y > p.y),
            Quadrant::TopLeft => prop_assert!(corner.x < p.x && corner.y < p.y),
        }
    }
}
