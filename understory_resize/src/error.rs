// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for geometry primitives and bounds resolution.

use alloc::string::String;

use thiserror::Error;

/// Degenerate input to a line primitive.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// A line was requested through two identical points.
    #[error("cannot build a line through two coincident points")]
    CoincidentPoints,
    /// Two lines have (numerically) the same direction and never meet.
    #[error("lines are parallel and have no single intersection")]
    ParallelLines,
}

/// A declarative bounds target could not be turned into a rectangle.
///
/// These are configuration errors: they are reported when a drag starts and
/// retrying without changing the configuration fails the same way.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum BoundsError {
    /// No element matches the selector.
    #[error("bounds target `{0}` does not exist")]
    NotFound(String),
    /// The selector matches an element that does not contain the resizing element.
    #[error("bounds target `{0}` is not an ancestor of the resizing element")]
    NotAncestor(String),
    /// The resolver has no answer for this kind of target.
    #[error("no {0} bounds are available")]
    Unavailable(&'static str),
}
