// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative bounds and their resolution to rectangles.
//!
//! A resizable element may be confined to the window, its parent, the
//! document body, an ancestor picked by selector, or an explicit rectangle.
//! This crate never looks at a document; named targets are resolved by a
//! host-provided [`BoundsResolver`] once per drag, when the drag starts.
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_resize::{BoundsSpec, BoundsTable};
//!
//! let table = BoundsTable::new()
//!     .with_parent(Rect::new(0.0, 0.0, 400.0, 300.0))
//!     .with_selector("#board", Rect::new(-20.0, -20.0, 800.0, 600.0), true);
//!
//! assert_eq!(
//!     BoundsSpec::Parent.resolve(&table),
//!     Ok(Rect::new(0.0, 0.0, 400.0, 300.0))
//! );
//! assert!(BoundsSpec::selector("#missing").resolve(&table).is_err());
//! ```

use alloc::{string::String, vec::Vec};

use kurbo::Rect;

use crate::BoundsError;

/// Where a resizable element's bounds come from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum BoundsSpec {
    /// The viewport.
    Window,
    /// The element's parent.
    Parent,
    /// The document body.
    Body,
    /// An ancestor element matched by a selector.
    Selector(String),
    /// A fixed rectangle in the element's position frame.
    Rect(Rect),
}

impl BoundsSpec {
    /// Bounds given by a selector.
    #[must_use]
    pub fn selector(selector: impl Into<String>) -> Self {
        Self::Selector(selector.into())
    }

    /// Returns `true` for [`BoundsSpec::Rect`].
    #[must_use]
    pub fn is_explicit(&self) -> bool {
        matches!(self, Self::Rect(_))
    }

    /// Resolves to a rectangle in the element's position frame.
    ///
    /// Explicit rects are returned as-is (normalized); named targets go
    /// through `resolver`.
    pub fn resolve<R>(&self, resolver: &R) -> Result<Rect, BoundsError>
    where
        R: BoundsResolver + ?Sized,
    {
        let target = match self {
            Self::Rect(rect) => return Ok(rect.abs()),
            Self::Window => BoundsTarget::Window,
            Self::Parent => BoundsTarget::Parent,
            Self::Body => BoundsTarget::Body,
            Self::Selector(selector) => BoundsTarget::Selector(selector),
        };
        resolver.resolve(&target).map(|rect| rect.abs())
    }
}

impl From<Rect> for BoundsSpec {
    fn from(rect: Rect) -> Self {
        Self::Rect(rect)
    }
}

/// A named bounds target handed to a [`BoundsResolver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundsTarget<'a> {
    /// The viewport.
    Window,
    /// The element's parent.
    Parent,
    /// The document body.
    Body,
    /// An ancestor matched by this selector.
    Selector(&'a str),
}

impl BoundsTarget<'_> {
    /// Short name used in error messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Window => "window",
            Self::Parent => "parent",
            Self::Body => "body",
            Self::Selector(_) => "selector",
        }
    }
}

/// Host hook that turns a named bounds target into a rectangle.
///
/// The rectangle must be in the same frame as the element's position, i.e.
/// already made relative to wherever the element's `left`/`top` are measured
/// from. Selector targets that match nothing, or match something that does
/// not contain the element, should fail with [`BoundsError::NotFound`] or
/// [`BoundsError::NotAncestor`].
pub trait BoundsResolver {
    /// Resolves `target` or reports why it cannot be used.
    fn resolve(&self, target: &BoundsTarget<'_>) -> Result<Rect, BoundsError>;
}

impl<F> BoundsResolver for F
where
    F: Fn(&BoundsTarget<'_>) -> Result<Rect, BoundsError>,
{
    fn resolve(&self, target: &BoundsTarget<'_>) -> Result<Rect, BoundsError> {
        self(target)
    }
}

/// A resolver with no named targets at all.
///
/// Suitable for hosts that only ever use [`BoundsSpec::Rect`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NoBounds;

impl BoundsResolver for NoBounds {
    fn resolve(&self, target: &BoundsTarget<'_>) -> Result<Rect, BoundsError> {
        Err(BoundsError::Unavailable(target.name()))
    }
}

#[derive(Clone, Debug, PartialEq)]
struct SelectorEntry {
    selector: String,
    rect: Rect,
    is_ancestor: bool,
}

/// A resolver backed by precomputed rectangles.
///
/// Headless hosts (and tests) can measure the relevant elements up front and
/// answer every drag from this table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoundsTable {
    window: Option<Rect>,
    parent: Option<Rect>,
    body: Option<Rect>,
    selectors: Vec<SelectorEntry>,
}

impl BoundsTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window rectangle.
    #[must_use]
    pub fn with_window(mut self, rect: Rect) -> Self {
        self.window = Some(rect);
        self
    }

    /// Sets the parent rectangle.
    #[must_use]
    pub fn with_parent(mut self, rect: Rect) -> Self {
        self.parent = Some(rect);
        self
    }

    /// Sets the body rectangle.
    #[must_use]
    pub fn with_body(mut self, rect: Rect) -> Self {
        self.body = Some(rect);
        self
    }

    /// Adds (or replaces) a selector entry.
    ///
    /// `is_ancestor` records whether the matched element contains the
    /// resizing element; non-ancestors are rejected at resolution time.
    #[must_use]
    pub fn with_selector(
        mut self,
        selector: impl Into<String>,
        rect: Rect,
        is_ancestor: bool,
    ) -> Self {
        let selector = selector.into();
        self.selectors.retain(|entry| entry.selector != selector);
        self.selectors.push(SelectorEntry {
            selector,
            rect,
            is_ancestor,
        });
        self
    }
}

impl BoundsResolver for BoundsTable {
    fn resolve(&self, target: &BoundsTarget<'_>) -> Result<Rect, BoundsError> {
        let unavailable = || BoundsError::Unavailable(target.name());
        match target {
            BoundsTarget::Window => self.window.ok_or_else(unavailable),
            BoundsTarget::Parent => self.parent.ok_or_else(unavailable),
            BoundsTarget::Body => self.body.ok_or_else(unavailable),
            BoundsTarget::Selector(selector) => {
                let entry = self
                    .selectors
                    .iter()
                    .find(|entry| entry.selector == *selector)
                    .ok_or_else(|| BoundsError::NotFound(String::from(*selector)))?;
                if entry.is_ancestor {
                    Ok(entry.rect)
                } else {
                    Err(BoundsError::NotAncestor(String::from(*selector)))
                }
            }
        }
    }
}
