// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handle positions of a rectangle rotated about its center.

use core::ops::Index;

use kurbo::{Affine, Point, Rect};

use crate::{Direction, Handles};

/// The eight handle positions of a rotated rectangle.
///
/// Corner directions hold the rotated corners, edge directions the rotated
/// edge midpoints. Positions are in the same frame as the source rect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotatedCorners {
    points: [Point; Direction::COUNT],
}

/// Rotates the corners and edge midpoints of `rect` about its center.
///
/// `degrees` rotates clockwise on screen (y grows downward), matching CSS
/// `rotate()` with the default `transform-origin` of `center`.
#[must_use]
pub fn rotated_corners(rect: Rect, degrees: f64) -> RotatedCorners {
    let rotation = Affine::rotate_about(degrees.to_radians(), rect.center());
    let rect = rect.abs();
    let mid_x = 0.5 * (rect.x0 + rect.x1);
    let mid_y = 0.5 * (rect.y0 + rect.y1);
    let local = [
        Point::new(mid_x, rect.y0),
        Point::new(rect.x1, rect.y0),
        Point::new(rect.x1, mid_y),
        Point::new(rect.x1, rect.y1),
        Point::new(mid_x, rect.y1),
        Point::new(rect.x0, rect.y1),
        Point::new(rect.x0, mid_y),
        Point::new(rect.x0, rect.y0),
    ];
    RotatedCorners {
        points: local.map(|p| rotation * p),
    }
}

impl RotatedCorners {
    /// Position of the handle for `direction`.
    #[must_use]
    pub fn get(&self, direction: Direction) -> Point {
        self.points[direction.index()]
    }

    /// All positions in clockwise [`Direction`] order.
    #[must_use]
    pub fn points(&self) -> &[Point; Direction::COUNT] {
        &self.points
    }

    /// Iterates `(direction, position)` pairs in clockwise order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, Point)> + '_ {
        Direction::ALL.into_iter().zip(self.points.iter().copied())
    }

    /// The enabled handle nearest to `point`, if it lies within `radius`.
    ///
    /// Ties go to the handle that comes first clockwise from the top edge.
    #[must_use]
    pub fn handle_at(&self, point: Point, radius: f64, handles: Handles) -> Option<Direction> {
        let limit = radius * radius;
        let mut best: Option<(Direction, f64)> = None;
        for (direction, position) in self.iter() {
            if !handles.allows(direction) {
                continue;
            }
            let dist = (position - point).hypot2();
            if dist > limit {
                continue;
            }
            if best.is_none_or(|(_, d)| dist < d) {
                best = Some((direction, dist));
            }
        }
        best.map(|(direction, _)| direction)
    }
}

impl Index<Direction> for RotatedCorners {
    type Output = Point;

    fn index(&self, direction: Direction) -> &Point {
        &self.points[direction.index()]
    }
}
