// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize handle directions and the index arithmetic over them.
//!
//! The eight handles are numbered clockwise starting at the top edge:
//!
//! ```text
//!  7 ── 0 ── 1
//!  │         │
//!  6         2
//!  │         │
//!  5 ── 4 ── 3
//! ```
//!
//! Opposite handles are four steps apart. Anchor resolution only ever moves
//! through this table with [`Direction::rotate_index`], so it can never name a
//! handle that does not exist.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use bitflags::bitflags;

/// One of the eight resize handles on a rectangle's outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Direction {
    /// Midpoint of the top edge.
    Top,
    /// Top-right corner.
    TopRight,
    /// Midpoint of the right edge.
    Right,
    /// Bottom-right corner.
    BottomRight,
    /// Midpoint of the bottom edge.
    Bottom,
    /// Bottom-left corner.
    BottomLeft,
    /// Midpoint of the left edge.
    Left,
    /// Top-left corner.
    TopLeft,
}

/// The axis along which an edge handle moves its edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Top and bottom handles: the drag changes the height.
    Vertical,
    /// Left and right handles: the drag changes the width.
    Horizontal,
}

/// Whether a handle sits on an edge or on a corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DirectionKind {
    /// An edge midpoint handle that resizes along a single axis.
    Edge(Axis),
    /// A corner handle that resizes both axes at once.
    Corner,
}

impl Direction {
    /// All handles in clockwise index order.
    pub const ALL: [Self; 8] = [
        Self::Top,
        Self::TopRight,
        Self::Right,
        Self::BottomRight,
        Self::Bottom,
        Self::BottomLeft,
        Self::Left,
        Self::TopLeft,
    ];

    /// Number of handles.
    pub const COUNT: usize = 8;

    /// Position of this handle in the clockwise table.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::TopRight => 1,
            Self::Right => 2,
            Self::BottomRight => 3,
            Self::Bottom => 4,
            Self::BottomLeft => 5,
            Self::Left => 6,
            Self::TopLeft => 7,
        }
    }

    /// Handle at `index`, wrapping modulo eight.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// Moves `index` by `steps` positions clockwise (negative is counter-clockwise).
    ///
    /// The result is always in `0..8`.
    #[must_use]
    pub const fn rotate_index(index: usize, steps: isize) -> usize {
        let count = Self::COUNT as isize;
        let base = (index % Self::COUNT) as isize;
        (base + steps).rem_euclid(count) as usize
    }

    /// The handle `steps` positions clockwise from this one.
    #[must_use]
    pub const fn rotated(self, steps: isize) -> Self {
        Self::from_index(Self::rotate_index(self.index(), steps))
    }

    /// The handle diagonally (or directly) across the rectangle.
    #[must_use]
    pub const fn opposite(self) -> Self {
        self.rotated(4)
    }

    /// Edge or corner classification.
    #[must_use]
    pub const fn kind(self) -> DirectionKind {
        match self {
            Self::Top | Self::Bottom => DirectionKind::Edge(Axis::Vertical),
            Self::Left | Self::Right => DirectionKind::Edge(Axis::Horizontal),
            Self::TopRight | Self::BottomRight | Self::BottomLeft | Self::TopLeft => {
                DirectionKind::Corner
            }
        }
    }

    /// Returns `true` for the four edge midpoint handles.
    #[must_use]
    pub const fn is_edge(self) -> bool {
        matches!(self.kind(), DirectionKind::Edge(_))
    }

    /// The [`Handles`] flag for this direction.
    #[must_use]
    pub const fn handle(self) -> Handles {
        match self {
            Self::Top => Handles::TOP,
            Self::TopRight => Handles::TOP_RIGHT,
            Self::Right => Handles::RIGHT,
            Self::BottomRight => Handles::BOTTOM_RIGHT,
            Self::Bottom => Handles::BOTTOM,
            Self::BottomLeft => Handles::BOTTOM_LEFT,
            Self::Left => Handles::LEFT,
            Self::TopLeft => Handles::TOP_LEFT,
        }
    }

    /// The resize cursor to show over this handle when the element is rotated
    /// by `rotate` degrees.
    ///
    /// Rotation is snapped to the nearest 45° step, so the returned cursor is
    /// the closest of the four two-headed resize arrows.
    #[must_use]
    pub fn cursor(self, rotate: f64) -> ResizeCursor {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "angles are snapped to a handful of 45 degree steps"
        )]
        let steps = if rotate.is_finite() {
            ((rotate / 45.0).round() as i64).rem_euclid(Self::COUNT as i64) as isize
        } else {
            0
        };
        match self.rotated(steps) {
            Self::Top | Self::Bottom => ResizeCursor::NorthSouth,
            Self::Left | Self::Right => ResizeCursor::EastWest,
            Self::TopRight | Self::BottomLeft => ResizeCursor::NorthEastSouthWest,
            Self::TopLeft | Self::BottomRight => ResizeCursor::NorthWestSouthEast,
        }
    }
}

/// Two-headed resize cursor shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeCursor {
    /// Vertical arrow.
    NorthSouth,
    /// Horizontal arrow.
    EastWest,
    /// Arrow along the rising diagonal.
    NorthEastSouthWest,
    /// Arrow along the falling diagonal.
    NorthWestSouthEast,
}

impl ResizeCursor {
    /// CSS `cursor` keyword for this shape.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::NorthSouth => "ns-resize",
            Self::EastWest => "ew-resize",
            Self::NorthEastSouthWest => "nesw-resize",
            Self::NorthWestSouthEast => "nwse-resize",
        }
    }
}

bitflags! {
    /// A set of enabled resize handles.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Handles: u8 {
        /// Top edge.
        const TOP = 1 << 0;
        /// Top-right corner.
        const TOP_RIGHT = 1 << 1;
        /// Right edge.
        const RIGHT = 1 << 2;
        /// Bottom-right corner.
        const BOTTOM_RIGHT = 1 << 3;
        /// Bottom edge.
        const BOTTOM = 1 << 4;
        /// Bottom-left corner.
        const BOTTOM_LEFT = 1 << 5;
        /// Left edge.
        const LEFT = 1 << 6;
        /// Top-left corner.
        const TOP_LEFT = 1 << 7;
        /// The four edge midpoints.
        const EDGES = Self::TOP.bits()
            | Self::RIGHT.bits()
            | Self::BOTTOM.bits()
            | Self::LEFT.bits();
        /// The four corners.
        const CORNERS = Self::TOP_RIGHT.bits()
            | Self::BOTTOM_RIGHT.bits()
            | Self::BOTTOM_LEFT.bits()
            | Self::TOP_LEFT.bits();
    }
}

impl Default for Handles {
    fn default() -> Self {
        Self::all()
    }
}

impl Handles {
    /// Returns `true` if `direction` is enabled.
    #[must_use]
    pub const fn allows(self, direction: Direction) -> bool {
        self.contains(direction.handle())
    }

    /// Enabled directions in clockwise order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.allows(*d))
    }
}
