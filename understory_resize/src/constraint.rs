// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Size limits and position clamping.
//!
//! Limits are plain `Option<f64>`s: `None` leaves an axis unconstrained and
//! `Some(0.0)` is a real limit.

use kurbo::{Point, Rect, Size};

use crate::BoundsSpec;

/// Minimum size used when neither the host nor explicit bounds give one.
pub const DEFAULT_MIN_SIZE: f64 = 1.0;

/// Per-axis size limits.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SizeLimits {
    /// Smallest allowed width.
    pub min_width: Option<f64>,
    /// Smallest allowed height.
    pub min_height: Option<f64>,
    /// Largest allowed width.
    pub max_width: Option<f64>,
    /// Largest allowed height.
    pub max_height: Option<f64>,
}

impl SizeLimits {
    /// No limits on either axis.
    pub const NONE: Self = Self {
        min_width: None,
        min_height: None,
        max_width: None,
        max_height: None,
    };

    /// Clamps `size` into these limits.
    ///
    /// Each axis is capped by its maximum first and then raised to its
    /// minimum, so a minimum above the maximum wins. Clamping an already
    /// clamped size returns it unchanged.
    #[must_use]
    pub fn clamp(&self, size: Size) -> Size {
        Size::new(
            clamp_axis(size.width, self.min_width, self.max_width),
            clamp_axis(size.height, self.min_height, self.max_height),
        )
    }

    /// Returns `true` if clamping would change `size`.
    #[must_use]
    pub fn violated_by(&self, size: Size) -> bool {
        self.clamp(size) != size
    }

    /// The limits a drag actually runs with.
    ///
    /// `bounds` is the configured bounds together with the rectangle it
    /// resolved to at drag start:
    ///
    /// - without bounds, unset minimums default to [`DEFAULT_MIN_SIZE`];
    /// - with an explicit [`BoundsSpec::Rect`], unset minimums default to zero;
    /// - with any bounds, each maximum is capped by the bounds span.
    #[must_use]
    pub fn resolve(user: Self, bounds: Option<(&BoundsSpec, Rect)>) -> Self {
        let Some((spec, rect)) = bounds else {
            return Self {
                min_width: Some(user.min_width.unwrap_or(DEFAULT_MIN_SIZE)),
                min_height: Some(user.min_height.unwrap_or(DEFAULT_MIN_SIZE)),
                ..user
            };
        };
        let min_default = if spec.is_explicit() {
            0.0
        } else {
            DEFAULT_MIN_SIZE
        };
        let rect = rect.abs();
        Self {
            min_width: Some(user.min_width.unwrap_or(min_default)),
            min_height: Some(user.min_height.unwrap_or(min_default)),
            max_width: Some(cap(user.max_width, rect.width())),
            max_height: Some(cap(user.max_height, rect.height())),
        }
    }
}

fn cap(user: Option<f64>, span: f64) -> f64 {
    user.map_or(span, |max| max.min(span))
}

fn clamp_axis(value: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    let mut value = value;
    if let Some(max) = max {
        value = value.min(max);
    }
    if let Some(min) = min {
        value = value.max(min);
    }
    value
}

/// Clamps an element position into `bounds`.
///
/// `bounds` holds the allowed range of the position itself: callers shrink
/// the far edges by the element size first. Each coordinate is raised to
/// the near edge and then capped by the far edge, so when the range is
/// empty the far edge wins.
#[must_use]
pub fn clamp_position(position: Point, bounds: Rect) -> Point {
    Point::new(
        position.x.max(bounds.x0).min(bounds.x1),
        position.y.max(bounds.y0).min(bounds.y1),
    )
}
