// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element frames and the per-drag resize session.
//!
//! A [`ResizeSession`] captures everything a drag needs when it starts: the
//! anchor geometry, the lock line, the resolved limits and bounds. After that
//! each pointer position maps to a [`ResizeDelta`] without touching any
//! shared state.

use alloc::string::String;

use kurbo::{Affine, Point, Rect, Size, Vec2};
use tracing::{debug, trace};

use crate::{
    BoundsError, BoundsResolver, Direction, DragAnchor, ElementTransform, ResizeConfig,
    ResizeInput, RotatedCorners, SizeLimits, clamp_position, lock_line, resize_rect,
    rotated_corners,
};

/// Position and size reported for one resize step.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResizeDelta {
    /// New `left`/`top` of the element.
    pub position: Point,
    /// New width and height.
    pub size: Size,
}

impl ResizeDelta {
    /// The logical, pre-rotation rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }
}

/// Placement of a resizable element.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Frame {
    /// `left`/`top` of the unrotated box.
    pub position: Point,
    /// Size of the unrotated box.
    pub size: Size,
    /// Rotation about the box center in degrees, clockwise on screen.
    pub rotate: f64,
    /// Scale the element is displayed at.
    pub scale: f64,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            position: Point::ZERO,
            size: Size::ZERO,
            rotate: 0.0,
            scale: 1.0,
        }
    }
}

impl Frame {
    /// An unrotated, unscaled frame.
    #[must_use]
    pub fn new(position: Point, size: Size) -> Self {
        Self {
            position,
            size,
            ..Self::default()
        }
    }

    /// Sets the rotation in degrees.
    #[must_use]
    pub fn with_rotate(mut self, rotate: f64) -> Self {
        self.rotate = rotate;
        self
    }

    /// Sets the display scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// The logical, pre-rotation rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// Rotated handle positions.
    #[must_use]
    pub fn corners(&self) -> RotatedCorners {
        rotated_corners(self.rect(), self.rotate)
    }

    /// Maps element-local coordinates (origin at the unrotated top-left) to
    /// the position frame.
    #[must_use]
    pub fn affine(&self) -> Affine {
        let center = Point::new(0.5 * self.size.width, 0.5 * self.size.height);
        Affine::translate(self.position.to_vec2())
            * Affine::rotate_about(self.rotate.to_radians(), center)
    }

    /// CSS `transform` that places the element.
    #[must_use]
    pub fn transform_css(&self) -> String {
        ElementTransform {
            translate: self.position.to_vec2(),
            rotate: self.rotate,
            scale_x: self.scale,
        }
        .to_css()
    }

    /// Applies a resize step.
    #[must_use]
    pub fn with_delta(self, delta: ResizeDelta) -> Self {
        Self {
            position: delta.position,
            size: delta.size,
            ..self
        }
    }
}

/// Immutable state of one resize drag.
#[derive(Clone, Debug, PartialEq)]
pub struct ResizeSession {
    direction: Direction,
    start_frame: Frame,
    start_pointer: Point,
    anchor: DragAnchor,
    input: ResizeInput,
    limits: SizeLimits,
    bounds: Option<Rect>,
}

impl ResizeSession {
    /// Starts a drag of `direction` on `frame` with the pointer at `pointer`.
    ///
    /// Named bounds are resolved here, once; a bad bounds target fails the
    /// drag before anything moves.
    pub fn start<R>(
        frame: Frame,
        direction: Direction,
        pointer: Point,
        config: &ResizeConfig,
        resolver: &R,
    ) -> Result<Self, BoundsError>
    where
        R: BoundsResolver + ?Sized,
    {
        let bounds = match &config.bounds {
            Some(spec) => Some((spec, spec.resolve(resolver)?)),
            None => None,
        };
        let limits = SizeLimits::resolve(config.limits, bounds);
        let bounds = bounds.map(|(_, rect)| rect);

        let anchor = DragAnchor::resolve(frame.rect(), frame.rotate, direction);
        let ratio = config.lock_aspect_ratio.ratio_for(frame.size);
        let lock = ratio.and_then(|ratio| lock_line(&anchor, ratio));
        let input = ResizeInput {
            pointer_delta: Vec2::ZERO,
            lock,
            resize_ratio: config.resize_ratio,
            scale: config.scale.unwrap_or(frame.scale),
        };

        debug!(
            ?direction,
            rotate = frame.rotate,
            width = frame.size.width,
            height = frame.size.height,
            ?ratio,
            locked = lock.is_some(),
            bounded = bounds.is_some(),
            "resize session started"
        );

        Ok(Self {
            direction,
            start_frame: frame,
            start_pointer: pointer,
            anchor,
            input,
            limits,
            bounds,
        })
    }

    /// The dragged handle.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The frame at drag start.
    #[must_use]
    pub fn start_frame(&self) -> Frame {
        self.start_frame
    }

    /// Anchor geometry captured at drag start.
    #[must_use]
    pub fn anchor(&self) -> &DragAnchor {
        &self.anchor
    }

    /// Limits in effect for this drag.
    #[must_use]
    pub fn limits(&self) -> SizeLimits {
        self.limits
    }

    /// Resolved bounds, if any.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Returns `true` if the aspect ratio is locked for this drag.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.input.lock.is_some()
    }

    /// Computes the constrained position and size for the pointer at `pointer`.
    #[must_use]
    pub fn update(&self, pointer: Point) -> ResizeDelta {
        let input = ResizeInput {
            pointer_delta: pointer - self.start_pointer,
            ..self.input
        };
        let rect = resize_rect(&self.anchor, &input);

        let mut size = self.limits.clamp(rect.size());
        if self.is_locked() && size != rect.size() {
            trace!(
                width = rect.width(),
                height = rect.height(),
                "locked size out of limits, keeping the starting size"
            );
            size = self.start_frame.size;
        }

        let mut position = rect.origin();
        if size != rect.size() {
            // Keep the fixed corner where it was for the size actually emitted.
            let fixed = self.anchor.fixed;
            let local = Rect::from_origin_size(Point::ZERO, size);
            let placed = rotated_corners(local, self.anchor.rotate);
            position = fixed.position - placed[fixed.direction].to_vec2();
        }
        if let Some(bounds) = self.bounds {
            let range = Rect::new(
                bounds.x0,
                bounds.y0,
                bounds.x1 - size.width,
                bounds.y1 - size.height,
            );
            position = clamp_position(position, range);
        }

        ResizeDelta { position, size }
    }
}
