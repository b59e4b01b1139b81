// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-point resolution for a resize drag.
//!
//! Dragging a handle keeps one point of the rotated rectangle pinned. For a
//! corner handle that is the opposite corner. Edge handles have no opposite
//! corner, so both the fixed point and the apex are taken one step clockwise
//! from where a corner drag would put them:
//!
//! | handle        | fixed        | apex         |
//! |---------------|--------------|--------------|
//! | `Top`         | `BottomLeft` | `TopRight`   |
//! | `Right`       | `TopLeft`    | `BottomRight`|
//! | `Bottom`      | `TopRight`   | `BottomLeft` |
//! | `Left`        | `BottomRight`| `TopLeft`    |
//! | corner `d`    | `d.opposite()` | `d`        |
//!
//! The fixed point and apex are always diagonal corners, so the diagonal line
//! between them is never parallel to either edge line of a non-empty rect.

use kurbo::{Point, Rect};

use crate::{Direction, DirectionKind, LineEquation, RotatedCorners, rotated_corners};

/// A named corner position captured at drag start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorPoint {
    /// Which corner of the rectangle this is.
    pub direction: Direction,
    /// Its rotated position.
    pub position: Point,
}

/// Geometry captured when a resize drag starts.
///
/// Everything here is derived from the frame, rotation and dragged handle at
/// drag start and is not changed during the drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragAnchor {
    /// The dragged handle.
    pub direction: Direction,
    /// Edge or corner classification of the dragged handle.
    pub kind: DirectionKind,
    /// Rotation in degrees the anchor was resolved at.
    pub rotate: f64,
    /// All eight rotated handle positions.
    pub corners: RotatedCorners,
    /// Rotated position of the dragged handle.
    pub start_point: Point,
    /// The corner that stays put.
    pub fixed: AnchorPoint,
    /// The corner diagonally across from [`DragAnchor::fixed`].
    pub apex: AnchorPoint,
    /// Line through the fixed point along the rotated x-axis.
    ///
    /// Distance from this line is the new height.
    pub fix_width: LineEquation,
    /// Line through the fixed point along the rotated y-axis.
    ///
    /// Distance from this line is the new width.
    pub fix_height: LineEquation,
    /// Line through the apex and the fixed point.
    ///
    /// `None` only when the rectangle has collapsed to a single point.
    pub diagonal: Option<LineEquation>,
}

impl DragAnchor {
    /// Resolves the anchor for dragging `direction` on `rect` rotated by
    /// `rotate` degrees about its center.
    #[must_use]
    pub fn resolve(rect: Rect, rotate: f64, direction: Direction) -> Self {
        let corners = rotated_corners(rect, rotate);
        let kind = direction.kind();

        let mut fixed_index = direction.opposite().index();
        let mut apex_index = direction.index();
        if let DirectionKind::Edge(_) = kind {
            fixed_index = Direction::rotate_index(fixed_index, 1);
            apex_index = Direction::rotate_index(apex_index, 1);
        }
        let fixed_direction = Direction::from_index(fixed_index);
        let apex_direction = Direction::from_index(apex_index);
        let fixed = AnchorPoint {
            direction: fixed_direction,
            position: corners[fixed_direction],
        };
        let apex = AnchorPoint {
            direction: apex_direction,
            position: corners[apex_direction],
        };

        Self {
            direction,
            kind,
            rotate,
            corners,
            start_point: corners[direction],
            fixed,
            apex,
            fix_width: LineEquation::at_angle(fixed.position, rotate),
            fix_height: LineEquation::at_angle(fixed.position, rotate + 90.0),
            diagonal: LineEquation::through_points(apex.position, fixed.position).ok(),
        }
    }
}
