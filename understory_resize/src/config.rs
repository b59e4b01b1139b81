// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-element resize configuration.

use kurbo::Size;

use crate::{BoundsSpec, Handles, SizeLimits};

/// How the aspect ratio behaves during a drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum AspectRatio {
    /// Width and height change independently.
    #[default]
    Free,
    /// Keep the width/height ratio the element has when the drag starts.
    Current,
    /// Keep this width/height ratio.
    ///
    /// Ratios that are not finite and positive leave the drag unlocked.
    Fixed(f64),
}

impl AspectRatio {
    /// The ratio to lock to for an element of size `start`, if any.
    #[must_use]
    pub fn ratio_for(&self, start: Size) -> Option<f64> {
        let ratio = match *self {
            Self::Free => return None,
            Self::Current => start.width / start.height,
            Self::Fixed(ratio) => ratio,
        };
        (ratio.is_finite() && ratio > 0.0).then_some(ratio)
    }
}

/// Options for a [`Resizable`](crate::Resizable).
///
/// ```rust
/// use understory_resize::{AspectRatio, BoundsSpec, Handles, ResizeConfig};
///
/// let config = ResizeConfig::new()
///     .with_aspect_ratio(AspectRatio::Current)
///     .with_min_size(20.0, 20.0)
///     .with_bounds(BoundsSpec::Parent)
///     .with_handles(Handles::CORNERS);
/// assert!(config.enabled);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ResizeConfig {
    /// Aspect-ratio locking.
    pub lock_aspect_ratio: AspectRatio,
    /// Multiplier applied to pointer movement.
    pub resize_ratio: f64,
    /// Ambient scale of the element; `None` uses the frame's own scale.
    pub scale: Option<f64>,
    /// Host size limits, before bounds are taken into account.
    pub limits: SizeLimits,
    /// Region the element must stay inside.
    pub bounds: Option<BoundsSpec>,
    /// Handles that start a drag.
    pub handles: Handles,
    /// Whether resizing is possible at all.
    pub enabled: bool,
    /// Whether the host owns the frame.
    ///
    /// A controlled element reports its deltas but returns to the frame it
    /// had before the drag once the drag ends; the host is expected to push
    /// the final frame back with [`Resizable::set_frame`](crate::Resizable::set_frame).
    pub controlled: bool,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            lock_aspect_ratio: AspectRatio::Free,
            resize_ratio: 1.0,
            scale: None,
            limits: SizeLimits::NONE,
            bounds: None,
            handles: Handles::all(),
            enabled: true,
            controlled: false,
        }
    }
}

impl ResizeConfig {
    /// Default configuration: free aspect ratio, all handles, no bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets aspect-ratio locking.
    #[must_use]
    pub fn with_aspect_ratio(mut self, lock: AspectRatio) -> Self {
        self.lock_aspect_ratio = lock;
        self
    }

    /// Sets the pointer movement multiplier.
    #[must_use]
    pub fn with_resize_ratio(mut self, ratio: f64) -> Self {
        self.resize_ratio = ratio;
        self
    }

    /// Overrides the ambient scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Sets all size limits at once.
    #[must_use]
    pub fn with_limits(mut self, limits: SizeLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Sets the minimum width and height.
    #[must_use]
    pub fn with_min_size(mut self, width: f64, height: f64) -> Self {
        self.limits.min_width = Some(width);
        self.limits.min_height = Some(height);
        self
    }

    /// Sets the maximum width and height.
    #[must_use]
    pub fn with_max_size(mut self, width: f64, height: f64) -> Self {
        self.limits.max_width = Some(width);
        self.limits.max_height = Some(height);
        self
    }

    /// Confines the element to `bounds`.
    #[must_use]
    pub fn with_bounds(mut self, bounds: impl Into<BoundsSpec>) -> Self {
        self.bounds = Some(bounds.into());
        self
    }

    /// Sets which handles may start a drag.
    #[must_use]
    pub fn with_handles(mut self, handles: Handles) -> Self {
        self.handles = handles;
        self
    }

    /// Enables or disables resizing.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Switches controlled mode on or off.
    #[must_use]
    pub fn with_controlled(mut self, controlled: bool) -> Self {
        self.controlled = controlled;
        self
    }
}
