// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Resize: rotation-aware resize geometry for rectangles.
//!
//! This crate computes what happens to a rectangle, rotated about its center,
//! when one of its eight resize handles is dragged. It is headless: there is
//! no DOM, no rendering and no event loop here, only geometry and a small
//! state machine around it.
//!
//! - **Directions** ([`Direction`], [`Handles`]): the eight handles, numbered
//!   clockwise from the top edge, and sets of enabled handles.
//! - **Primitives** ([`LineEquation`], [`rotated_corners`], [`parse_transform`]):
//!   implicit lines, rotated handle positions, and CSS transform reading.
//! - **Anchors** ([`DragAnchor`]): which corner stays put for a drag and the
//!   lines the new size is measured from.
//! - **Deltas** ([`resize_rect`], [`lock_line`]): pointer movement to a new
//!   logical rectangle, optionally with a locked aspect ratio.
//! - **Constraints** ([`SizeLimits`], [`clamp_position`], [`BoundsSpec`]):
//!   min/max size and containment in a bounding rectangle.
//! - **Sessions** ([`ResizeSession`], [`Resizable`]): per-drag state captured
//!   at drag start, and an element that owns its [`Frame`] across drags and
//!   reports each step to a [`ResizeHandler`].
//!
//! ## Quick Start
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use understory_resize::{AspectRatio, Direction, Frame, NoBounds, Resizable, ResizeConfig};
//!
//! let frame = Frame::new(Point::new(50.0, 50.0), Size::new(100.0, 100.0)).with_rotate(30.0);
//! let config = ResizeConfig::new().with_aspect_ratio(AspectRatio::Current);
//! let mut element = Resizable::new(frame, config);
//!
//! // Grab the bottom-right handle where it is drawn and pull it outward.
//! let handle = frame.corners()[Direction::BottomRight];
//! element.begin(handle, Direction::BottomRight, &NoBounds, &mut ()).unwrap();
//! let step = element.update(handle + Vec2::new(30.0, 30.0), &mut ()).unwrap();
//! assert!((step.size.width - step.size.height).abs() < 1e-9);
//! element.end(&mut ());
//! ```
//!
//! ## Geometry
//!
//! Positions, sizes and bounds share one frame: the element's `left`/`top`
//! and the space its rotated corners live in. Rotations are in degrees and
//! turn clockwise on screen, as CSS `rotate()` does with y growing
//! downward. The reported [`ResizeDelta`] is always the unrotated box; rotating
//! it about its own center keeps the anchored corner where it was when the
//! drag started.
//!
//! ## Bounds
//!
//! [`BoundsSpec`] names the region an element must stay inside. Named targets
//! (window, parent, body, selector) are resolved once per drag through a
//! host-supplied [`BoundsResolver`]; [`BoundsTable`] answers from precomputed
//! rectangles and [`NoBounds`] rejects every named target. Resolution
//! failures are returned from drag start as [`BoundsError`].
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. Disable default features and
//! enable `libm` for targets without `std`.
//!
//! ## Features
//!
//! - `std` (default): use the standard library's float functions.
//! - `libm`: use `libm` float functions for `no_std` targets.
//! - `ui_events_adapter` (default): [`Resizable::encode`] for
//!   `ui_events::pointer::PointerEvent`.
//! - `serde`: serialization for configuration and value types.

#![no_std]

extern crate alloc;

mod anchor;
mod bounds;
mod config;
mod constraint;
mod corners;
mod delta;
mod direction;
mod error;
mod line;
#[cfg(feature = "ui_events_adapter")]
mod pointer;
mod resizable;
mod session;
mod transform;

pub use anchor::{AnchorPoint, DragAnchor};
pub use bounds::{BoundsResolver, BoundsSpec, BoundsTable, BoundsTarget, NoBounds};
pub use config::{AspectRatio, ResizeConfig};
pub use constraint::{DEFAULT_MIN_SIZE, SizeLimits, clamp_position};
pub use corners::{RotatedCorners, rotated_corners};
pub use delta::{ResizeInput, lock_line, resize_rect};
pub use direction::{Axis, Direction, DirectionKind, Handles, ResizeCursor};
pub use error::{BoundsError, GeometryError};
pub use line::LineEquation;
pub use resizable::{Resizable, ResizeHandler, ResizeResponse};
pub use session::{Frame, ResizeDelta, ResizeSession};
pub use transform::{ElementTransform, parse_affine, parse_transform};
