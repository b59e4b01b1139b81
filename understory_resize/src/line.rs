// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Infinite lines in implicit form.

use kurbo::{Point, Vec2};

use crate::GeometryError;

/// Determinant magnitude below which two unit-normal lines count as parallel.
const PARALLEL_TOLERANCE: f64 = 1e-10;

/// An infinite line `a·x + b·y + c = 0`.
///
/// The normal `(a, b)` is kept at unit length, so evaluating the left-hand
/// side at a point yields its signed distance from the line. Vertical lines
/// are just `b == 0` and need no special casing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineEquation {
    a: f64,
    b: f64,
    c: f64,
}

impl LineEquation {
    /// The line through `p1` and `p2`.
    ///
    /// Fails with [`GeometryError::CoincidentPoints`] when the points are equal.
    pub fn through_points(p1: Point, p2: Point) -> Result<Self, GeometryError> {
        let dir = p2 - p1;
        if dir.hypot2() == 0.0 {
            return Err(GeometryError::CoincidentPoints);
        }
        Ok(Self::with_direction(p1, dir))
    }

    /// The line through `point` whose direction is `degrees` from the positive
    /// x-axis.
    ///
    /// Angles are measured the way CSS rotates: clockwise on screen, where y
    /// grows downward. `90` and `270` give vertical lines.
    #[must_use]
    pub fn at_angle(point: Point, degrees: f64) -> Self {
        Self::with_direction(point, Vec2::from_angle(degrees.to_radians()))
    }

    fn with_direction(point: Point, dir: Vec2) -> Self {
        let normal = Vec2::new(dir.y, -dir.x).normalize();
        Self {
            a: normal.x,
            b: normal.y,
            c: -(normal.x * point.x + normal.y * point.y),
        }
    }

    /// Coefficients `(a, b, c)` with `(a, b)` of unit length.
    #[must_use]
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// Signed distance of `point` from the line.
    #[must_use]
    pub fn signed_distance(&self, point: Point) -> f64 {
        self.a * point.x + self.b * point.y + self.c
    }

    /// Perpendicular distance of `point` from the line.
    #[must_use]
    pub fn distance_to(&self, point: Point) -> f64 {
        self.signed_distance(point).abs()
    }

    /// The single point shared by both lines.
    ///
    /// Fails with [`GeometryError::ParallelLines`] when the lines are parallel
    /// (or the same line).
    pub fn intersection(&self, other: &Self) -> Result<Point, GeometryError> {
        let det = self.a * other.b - other.a * self.b;
        if det.abs() < PARALLEL_TOLERANCE {
            return Err(GeometryError::ParallelLines);
        }
        Ok(Point::new(
            (self.b * other.c - other.b * self.c) / det,
            (other.a * self.c - self.a * other.c) / det,
        ))
    }
}
