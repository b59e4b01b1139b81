// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reading and writing the CSS `transform` of a resizable element.
//!
//! Hosts that already position an element with a transform can bootstrap its
//! position, rotation and scale with [`parse_transform`]. Both the computed
//! form (`matrix(...)` / `matrix3d(...)`) and authored function lists such as
//! `translate(10px, 20px) rotate(30deg)` are understood.

use alloc::{format, string::String, vec::Vec};
use core::f64::consts::{PI, TAU};

use kurbo::{Affine, Vec2};
use tracing::debug;

/// Translation, rotation and horizontal scale decomposed from a 2D transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementTransform {
    /// Translation in CSS pixels.
    pub translate: Vec2,
    /// Rotation in degrees, clockwise on screen, in `(-180, 180]`.
    pub rotate: f64,
    /// Length of the transformed x basis vector.
    pub scale_x: f64,
}

impl ElementTransform {
    /// Decomposes an affine transform.
    #[must_use]
    pub fn from_affine(affine: Affine) -> Self {
        let [a, b, _, _, e, f] = affine.as_coeffs();
        let x_basis = Vec2::new(a, b);
        Self {
            translate: Vec2::new(e, f),
            rotate: x_basis.atan2().to_degrees(),
            scale_x: x_basis.hypot(),
        }
    }

    /// Formats this transform the way a resizable element writes it.
    ///
    /// The scale is left to the host, which applies it on an outer element.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) rotate({}deg)",
            self.translate.x, self.translate.y, self.rotate
        )
    }
}

/// Parses a CSS `transform` value into an [`ElementTransform`].
///
/// Returns `None` for an empty string, for `none`, and for anything that
/// cannot be read as a 2D transform.
#[must_use]
pub fn parse_transform(transform: &str) -> Option<ElementTransform> {
    let affine = parse_affine(transform)?;
    Some(ElementTransform::from_affine(affine))
}

/// Parses a CSS `transform` value into an [`Affine`].
///
/// Function lists compose left to right, as in CSS.
#[must_use]
pub fn parse_affine(transform: &str) -> Option<Affine> {
    let transform = transform.trim();
    if transform.is_empty() || transform.eq_ignore_ascii_case("none") {
        return None;
    }
    let mut affine = Affine::IDENTITY;
    let mut rest = transform;
    while !rest.is_empty() {
        let Some(open) = rest.find('(') else {
            debug!(transform, "unterminated transform function");
            return None;
        };
        let Some(close) = rest[open..].find(')').map(|i| i + open) else {
            debug!(transform, "unterminated transform function");
            return None;
        };
        let name = rest[..open].trim();
        let args: Vec<&str> = rest[open + 1..close]
            .split(|c: char| c == ',' || c.is_ascii_whitespace())
            .filter(|s| !s.is_empty())
            .collect();
        let Some(step) = function_affine(name, &args) else {
            debug!(transform, function = name, "unsupported transform function");
            return None;
        };
        affine *= step;
        rest = rest[close + 1..].trim_start();
    }
    Some(affine)
}

fn function_affine(name: &str, args: &[&str]) -> Option<Affine> {
    let affine = match (name, args) {
        ("matrix", [a, b, c, d, e, f]) => Affine::new([
            number(a)?,
            number(b)?,
            number(c)?,
            number(d)?,
            number(e)?,
            number(f)?,
        ]),
        ("matrix3d", args) if args.len() == 16 => Affine::new([
            number(args[0])?,
            number(args[1])?,
            number(args[4])?,
            number(args[5])?,
            number(args[12])?,
            number(args[13])?,
        ]),
        ("translate", [x]) => Affine::translate((length(x)?, 0.0)),
        ("translate", [x, y]) => Affine::translate((length(x)?, length(y)?)),
        ("translateX", [x]) => Affine::translate((length(x)?, 0.0)),
        ("translateY", [y]) => Affine::translate((0.0, length(y)?)),
        ("rotate", [angle]) => Affine::rotate(angle_radians(angle)?),
        ("scale", [s]) => Affine::scale(number(s)?),
        ("scale", [sx, sy]) => Affine::scale_non_uniform(number(sx)?, number(sy)?),
        ("scaleX", [sx]) => Affine::scale_non_uniform(number(sx)?, 1.0),
        ("scaleY", [sy]) => Affine::scale_non_uniform(1.0, number(sy)?),
        _ => return None,
    };
    Some(affine)
}

fn number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn length(s: &str) -> Option<f64> {
    let s = s.trim();
    number(s.strip_suffix("px").unwrap_or(s))
}

fn angle_radians(s: &str) -> Option<f64> {
    let s = s.trim();
    if let Some(v) = s.strip_suffix("deg") {
        Some(number(v)?.to_radians())
    } else if let Some(v) = s.strip_suffix("grad") {
        Some(number(v)? * PI / 200.0)
    } else if let Some(v) = s.strip_suffix("rad") {
        number(v)
    } else if let Some(v) = s.strip_suffix("turn") {
        Some(number(v)? * TAU)
    } else if number(s)? == 0.0 {
        Some(0.0)
    } else {
        None
    }
}
