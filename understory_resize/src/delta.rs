// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer displacement to candidate rectangle.
//!
//! The dragged handle follows the pointer; the result is projected back onto
//! the anchor geometry so that the fixed point stays put, edge handles move a
//! single edge, and a locked aspect ratio keeps the new corner on the lock
//! line. No size or bounds constraints are applied here, see
//! [`crate::SizeLimits`] and [`crate::clamp_position`].

use kurbo::{Point, Rect, Size, Vec2};
use tracing::warn;

use crate::{Axis, DirectionKind, DragAnchor, GeometryError, LineEquation};

/// Per-move input to [`resize_rect`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeInput {
    /// Pointer position minus pointer position at drag start, in client space.
    pub pointer_delta: Vec2,
    /// Line the dragged corner must stay on while the aspect ratio is locked.
    ///
    /// See [`lock_line`].
    pub lock: Option<LineEquation>,
    /// Multiplier applied to the pointer displacement.
    pub resize_ratio: f64,
    /// Ambient scale the element is displayed at; the displacement is divided by it.
    pub scale: f64,
}

impl ResizeInput {
    /// Input for an unlocked drag with unit ratio and scale.
    #[must_use]
    pub fn new(pointer_delta: Vec2) -> Self {
        Self {
            pointer_delta,
            lock: None,
            resize_ratio: 1.0,
            scale: 1.0,
        }
    }
}

/// The line a locked drag moves the dragged corner along.
///
/// Returns `None` when `ratio` (width over height) is not finite and positive,
/// which leaves the drag unlocked. When `ratio` matches the rect at drag start
/// this is the anchor diagonal; otherwise the line leaves the fixed point
/// toward the apex quadrant with slope `1 / ratio` in the rotated frame.
#[must_use]
pub fn lock_line(anchor: &DragAnchor, ratio: f64) -> Option<LineEquation> {
    if !ratio.is_finite() || ratio <= 0.0 {
        return None;
    }
    let to_apex = anchor.apex.position - anchor.fixed.position;
    let x_axis = Vec2::from_angle(anchor.rotate.to_radians());
    let y_axis = x_axis.turn_90();
    let local = Vec2::new(to_apex.dot(x_axis), to_apex.dot(y_axis));
    if local.x.abs() > 0.0 && local.y.abs() > 0.0 {
        let current = local.x.abs() / local.y.abs();
        if (current - ratio).abs() <= 1e-9 * ratio.max(1.0)
            && let Some(diagonal) = anchor.diagonal
        {
            return Some(diagonal);
        }
    }
    let sign_x = if local.x < 0.0 { -1.0 } else { 1.0 };
    let sign_y = if local.y < 0.0 { -1.0 } else { 1.0 };
    let dir = x_axis * (sign_x * ratio) + y_axis * sign_y;
    LineEquation::through_points(anchor.fixed.position, anchor.fixed.position + dir).ok()
}

/// Computes the unconstrained logical rectangle for one pointer move.
///
/// The returned rect is the pre-rotation box: rotating it by
/// [`DragAnchor::rotate`] about its center places the fixed point where it
/// was at drag start.
#[must_use]
pub fn resize_rect(anchor: &DragAnchor, input: &ResizeInput) -> Rect {
    let scale = if input.scale != 0.0 { input.scale } else { 1.0 };
    let delta = input.pointer_delta * input.resize_ratio / scale;
    let candidate = anchor.start_point + delta;
    let point = project(anchor, input.lock.as_ref(), candidate).unwrap_or_else(|err| {
        warn!(
            ?err,
            direction = ?anchor.direction,
            "resize projection failed, using the raw pointer point"
        );
        candidate
    });

    let width = anchor.fix_height.distance_to(point);
    let height = anchor.fix_width.distance_to(point);
    let center = anchor.fixed.position.midpoint(point);
    Rect::from_center_size(center, Size::new(width, height))
}

fn project(
    anchor: &DragAnchor,
    lock: Option<&LineEquation>,
    candidate: Point,
) -> Result<Point, GeometryError> {
    let along_x = anchor.rotate;
    let along_y = anchor.rotate + 90.0;

    if let Some(lock) = lock {
        let first = LineEquation::at_angle(candidate, along_y).intersection(lock)?;
        let second = LineEquation::at_angle(candidate, along_x).intersection(lock)?;
        return Ok(match anchor.kind {
            DirectionKind::Edge(Axis::Vertical) => second,
            DirectionKind::Edge(Axis::Horizontal) => first,
            DirectionKind::Corner => {
                let fixed_x = anchor.fixed.position.x;
                if second.x - fixed_x > first.x - fixed_x {
                    second
                } else {
                    first
                }
            }
        });
    }

    match anchor.kind {
        DirectionKind::Edge(Axis::Vertical) => LineEquation::at_angle(candidate, along_x)
            .intersection(&LineEquation::at_angle(anchor.apex.position, along_y)),
        DirectionKind::Edge(Axis::Horizontal) => LineEquation::at_angle(candidate, along_y)
            .intersection(&LineEquation::at_angle(anchor.apex.position, along_x)),
        DirectionKind::Corner => Ok(candidate),
    }
}
