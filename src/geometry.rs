// Copyright 2025-present The folio Authors
// SPDX-License-Identifier: Apache-2.0

//! Radar-chart geometry for the skills chart.
//!
//! Closed-form trigonometry, no state. Spokes are evenly spaced, the first one
//! points straight up and the rest follow clockwise. Screen coordinates: `y`
//! grows downward, so "up" is negative `y`.
//!
//! Labels and tooltips are placed by quadrant so they never sit on top of the
//! plotted point they describe.

use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, TAU};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Quadrant {
    TopRight,
    BottomRight,
    BottomLeft,
    TopLeft,
}

/// SVG `text-anchor` for a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Label {
    pub position: Point,
    pub anchor: TextAnchor,
}

/// Labels within this many px of the vertical axis are centered.
pub const CENTER_ANCHOR_EPSILON: f64 = 1.0;

/// Gap between a plotted point and the nearest tooltip edge.
pub const TOOLTIP_GAP: f64 = 8.0;

/// Angle of spoke `index` out of `count`, radians. Spoke 0 points up.
pub fn angle_for(index: usize, count: usize) -> f64 {
    if count == 0 {
        return -FRAC_PI_2;
    }
    TAU * (index % count) as f64 / count as f64 - FRAC_PI_2
}

/// Point at `distance` from `center` along spoke `index`.
pub fn spoke_point(index: usize, count: usize, center: Point, distance: f64) -> Point {
    let (sin, cos) = angle_for(index, count).sin_cos();
    Point::new(center.x + distance * cos, center.y + distance * sin)
}

/// Plot `value` on its spoke. Values clamp into `[0, max_value]`.
pub fn point_for(
    value: f64,
    max_value: f64,
    index: usize,
    count: usize,
    center: Point,
    radius: f64,
) -> Point {
    let ratio = if max_value > 0.0 {
        (value / max_value).clamp(0.0, 1.0)
    } else {
        0.0
    };
    spoke_point(index, count, center, radius * ratio)
}

/// Vertices of grid ring `level` (1-based, `levels` is the outermost).
pub fn grid_polygon(
    level: usize,
    levels: usize,
    count: usize,
    center: Point,
    radius: f64,
) -> Vec<Point> {
    if levels == 0 {
        return Vec::new();
    }
    let ring_radius = radius * level.min(levels) as f64 / levels as f64;
    (0..count)
        .map(|i| spoke_point(i, count, center, ring_radius))
        .collect()
}

/// All grid rings, innermost first.
pub fn grid(levels: usize, count: usize, center: Point, radius: f64) -> Vec<Vec<Point>> {
    (1..=levels)
        .map(|level| grid_polygon(level, levels, count, center, radius))
        .collect()
}

/// Which quadrant `point` is in relative to `center`.
///
/// Points on an axis go to the quadrant clockwise from it, so straight up is
/// `TopRight` and straight down is `BottomLeft`.
pub fn quadrant_of(point: Point, center: Point) -> Quadrant {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    match (dx >= 0.0, dy < 0.0) {
        (true, true) => Quadrant::TopRight,
        (true, false) if dx > 0.0 || dy == 0.0 => Quadrant::BottomRight,
        (true, false) => Quadrant::BottomLeft,
        (false, false) => Quadrant::BottomLeft,
        (false, true) => Quadrant::TopLeft,
    }
}

/// Label for spoke `index`, pushed `offset` px past the rim.
///
/// Labels right of center start at the anchor, labels left of it end there,
/// labels on the vertical axis are centered.
pub fn label_position(index: usize, count: usize, center: Point, radius: f64, offset: f64) -> Label {
    let position = spoke_point(index, count, center, radius + offset);
    let dx = position.x - center.x;
    let anchor = if dx.abs() < CENTER_ANCHOR_EPSILON {
        TextAnchor::Middle
    } else if dx > 0.0 {
        TextAnchor::Start
    } else {
        TextAnchor::End
    };
    Label { position, anchor }
}

/// Top-left corner for a `width` x `height` tooltip describing `point`.
///
/// The box opens away from the center: a point in the top-right quadrant gets
/// its tooltip up and to the right, and so on. The box never contains the point.
pub fn tooltip_offset(point: Point, center: Point, width: f64, height: f64) -> Point {
    let (right, down) = match quadrant_of(point, center) {
        Quadrant::TopRight => (true, false),
        Quadrant::BottomRight => (true, true),
        Quadrant::BottomLeft => (false, true),
        Quadrant::TopLeft => (false, false),
    };
    let x = if right {
        point.x + TOOLTIP_GAP
    } else {
        point.x - TOOLTIP_GAP - width
    };
    let y = if down {
        point.y + TOOLTIP_GAP
    } else {
        point.y - TOOLTIP_GAP - height
    };
    Point::new(x, y)
}
