// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_resize` crate.
//!
//! The scenarios drive whole drags through [`Resizable`]; the property tests
//! check the geometry invariants over random rectangles, rotations and
//! pointer movements.

use kurbo::{Affine, Point, Rect, Size, Vec2};
use proptest::prelude::*;
use understory_resize::{
    AspectRatio, BoundsSpec, BoundsTable, Direction, DragAnchor, Frame, NoBounds, Resizable,
    ResizeConfig, ResizeDelta, ResizeInput, SizeLimits, clamp_position, lock_line, resize_rect,
    rotated_corners,
};

const EPS: f64 = 1e-6;

fn square() -> Frame {
    Frame::new(Point::new(50.0, 50.0), Size::new(100.0, 100.0))
}

fn assert_delta(delta: ResizeDelta, position: (f64, f64), size: (f64, f64)) {
    let ok = (delta.position - Point::from(position)).hypot() < EPS
        && (delta.size.width - size.0).abs() < EPS
        && (delta.size.height - size.1).abs() < EPS;
    assert!(ok, "{delta:?} != {position:?} {size:?}");
}

/// Starts a drag on `direction` where its handle is drawn and moves it by `by`.
fn drag(element: &mut Resizable, direction: Direction, by: Vec2) -> ResizeDelta {
    let start = element.frame().corners()[direction];
    assert!(
        element
            .begin(start, direction, &NoBounds, &mut ())
            .expect("no bounds configured")
    );
    element
        .update(start + by, &mut ())
        .expect("drag is active")
}

#[test]
fn unrotated_bottom_right_drag() {
    let mut element = Resizable::new(square(), ResizeConfig::new());
    let delta = drag(&mut element, Direction::BottomRight, Vec2::new(20.0, 10.0));
    assert_delta(delta, (50.0, 50.0), (120.0, 110.0));
}

#[test]
fn rotated_right_edge_drag() {
    let mut element = Resizable::new(square().with_rotate(45.0), ResizeConfig::new());
    let along = Vec2::from_angle(45.0_f64.to_radians()) * 20.0;
    let delta = drag(&mut element, Direction::Right, along);

    // The center moves by half the growth along the rotated x-axis.
    let shift = along * 0.5;
    let center = Point::new(100.0, 100.0) + shift;
    assert_delta(delta, (center.x - 60.0, center.y - 50.0), (120.0, 100.0));
}

#[test]
fn min_width_clamps_and_lock_reverts() {
    let config = ResizeConfig::new().with_min_size(80.0, 10.0);
    let mut element = Resizable::new(square(), config.clone());
    let delta = drag(&mut element, Direction::Right, Vec2::new(-50.0, 0.0));
    assert_delta(delta, (50.0, 50.0), (80.0, 100.0));

    let locked = config.with_aspect_ratio(AspectRatio::Fixed(2.0));
    let start = Frame::new(Point::new(50.0, 50.0), Size::new(200.0, 100.0));
    let mut element = Resizable::new(start, locked);
    let delta = drag(&mut element, Direction::BottomRight, Vec2::new(-150.0, -75.0));
    // Locked at 2:1 the width would be 50; instead of 80x40 the size reverts.
    assert!((delta.size.width - 200.0).abs() < EPS);
    assert!((delta.size.height - 100.0).abs() < EPS);
}

#[test]
fn bounded_drag_stays_inside_parent() {
    let parent = Rect::new(0.0, 0.0, 300.0, 200.0);
    let table = BoundsTable::new().with_parent(parent);
    let config = ResizeConfig::new().with_bounds(BoundsSpec::Parent);
    let mut element = Resizable::new(square(), config);

    let start = element.frame().corners()[Direction::TopLeft];
    assert!(
        element
            .begin(start, Direction::TopLeft, &table, &mut ())
            .unwrap()
    );
    let delta = element.update(Point::new(-500.0, -500.0), &mut ()).unwrap();
    assert!(delta.size.width <= parent.width() + EPS);
    assert!(delta.size.height <= parent.height() + EPS);
    assert!(delta.position.x >= 0.0 && delta.position.y >= 0.0);
    let rect = delta.rect();
    assert!(rect.x1 <= parent.x1 + EPS && rect.y1 <= parent.y1 + EPS);
}

#[test]
fn missing_selector_fails_drag_start() {
    let config = ResizeConfig::new().with_bounds(BoundsSpec::selector("#canvas"));
    let mut element = Resizable::new(square(), config);
    let start = element.frame().corners()[Direction::Right];
    assert!(
        element
            .begin(start, Direction::Right, &BoundsTable::new(), &mut ())
            .is_err()
    );
    assert!(!element.is_resizing());
}

#[test]
fn bootstrapped_element_resizes_in_place() {
    let mut element = Resizable::from_transform(
        "matrix(0, 1, -1, 0, 50, 50)",
        Size::new(100.0, 100.0),
        ResizeConfig::new(),
    );
    assert!((element.frame().rotate - 90.0).abs() < EPS);
    // Rotated a quarter turn, the right handle points down.
    let delta = drag(&mut element, Direction::Right, Vec2::new(0.0, 20.0));
    assert!((delta.size.width - 120.0).abs() < EPS);
    assert!((delta.size.height - 100.0).abs() < EPS);
}

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (
        -500.0_f64..500.0,
        -500.0_f64..500.0,
        20.0_f64..400.0,
        20.0_f64..400.0,
    )
        .prop_map(|(x, y, w, h)| Rect::from_origin_size((x, y), (w, h)))
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    (0_usize..8).prop_map(Direction::from_index)
}

/// Pointer movements small enough that the dragged handle never crosses the
/// fixed point.
fn nudge_strategy() -> impl Strategy<Value = (f64, f64)> {
    (-0.35_f64..0.35, -0.35_f64..0.35)
}

fn limits_strategy() -> impl Strategy<Value = SizeLimits> {
    let bound = || proptest::option::of(0.0_f64..500.0);
    (bound(), bound(), bound(), bound()).prop_map(|(min_width, min_height, max_width, max_height)| {
        SizeLimits {
            min_width,
            min_height,
            max_width,
            max_height,
        }
    })
}

/// Pointer scale for locked drags that keeps the projected corner well away
/// from the fixed point.
fn lock_reach(rect: Rect, ratio: f64) -> f64 {
    rect.width().min(rect.height()) / ratio.max(1.0 / ratio)
}

fn check_fixed_point_stays(
    rect: Rect,
    rotate: f64,
    direction: Direction,
    nudge: (f64, f64),
    locked: bool,
) -> Result<(), TestCaseError> {
    let anchor = DragAnchor::resolve(rect, rotate, direction);
    let reach = rect.width().min(rect.height());
    let input = ResizeInput {
        lock: if locked {
            lock_line(&anchor, rect.width() / rect.height())
        } else {
            None
        },
        ..ResizeInput::new(Vec2::new(nudge.0 * reach, nudge.1 * reach))
    };
    let resized = resize_rect(&anchor, &input);
    let corner = rotated_corners(resized, rotate)[anchor.fixed.direction];
    prop_assert!(
        (corner - anchor.fixed.position).hypot() < EPS,
        "{corner:?} drifted from {:?}",
        anchor.fixed.position
    );
    Ok(())
}

proptest! {
    #[test]
    fn rotation_round_trip(rect in rect_strategy(), rotate in -720.0_f64..720.0) {
        let corners = rotated_corners(rect, rotate);
        let back = Affine::rotate_about(-rotate.to_radians(), rect.center());
        let expected = rotated_corners(rect, 0.0);
        for direction in Direction::ALL {
            let recovered = back * corners[direction];
            prop_assert!((recovered - expected[direction]).hypot() < EPS);
        }
    }

    #[test]
    fn anchor_symmetry(
        rect in rect_strategy(),
        rotate in -360.0_f64..360.0,
        direction in direction_strategy(),
    ) {
        let a = DragAnchor::resolve(rect, rotate, direction);
        let b = DragAnchor::resolve(rect, rotate, direction.opposite());
        prop_assert_eq!(a.fixed.direction, b.apex.direction);
        prop_assert_eq!(a.apex.direction, b.fixed.direction);
        prop_assert!((a.fixed.position - b.apex.position).hypot() < EPS);
        prop_assert!((a.apex.position - b.fixed.position).hypot() < EPS);
    }

    #[test]
    fn unrotated_corner_drag_is_axis_aligned(
        rect in rect_strategy(),
        dx in -9.0_f64..200.0,
        dy in -9.0_f64..200.0,
    ) {
        let anchor = DragAnchor::resolve(rect, 0.0, Direction::BottomRight);
        let resized = resize_rect(&anchor, &ResizeInput::new(Vec2::new(dx, dy)));
        prop_assert!((resized.origin() - rect.origin()).hypot() < EPS);
        prop_assert!((resized.width() - (rect.width() + dx)).abs() < EPS);
        prop_assert!((resized.height() - (rect.height() + dy)).abs() < EPS);
    }

    #[test]
    fn fixed_point_stays_put(
        rect in rect_strategy(),
        rotate in -360.0_f64..360.0,
        direction in direction_strategy(),
        nudge in nudge_strategy(),
        locked in any::<bool>(),
    ) {
        check_fixed_point_stays(rect, rotate, direction, nudge, locked)?;
    }

    #[test]
    fn locked_ratio_holds_for_every_step(
        rect in rect_strategy(),
        rotate in -360.0_f64..360.0,
        direction in direction_strategy(),
        ratio in 0.25_f64..4.0,
        steps in proptest::collection::vec(nudge_strategy(), 1..8),
    ) {
        let frame = Frame::new(rect.origin(), rect.size()).with_rotate(rotate);
        let config = ResizeConfig::new().with_aspect_ratio(AspectRatio::Fixed(ratio));
        let mut element = Resizable::new(frame, config);
        let start = frame.corners()[direction];
        prop_assert!(element.begin(start, direction, &NoBounds, &mut ()).unwrap());
        let reach = lock_reach(rect, ratio);
        for (fx, fy) in steps {
            let delta = element
                .update(start + Vec2::new(fx * reach, fy * reach), &mut ())
                .unwrap();
            prop_assert!(
                (delta.size.width / delta.size.height - ratio).abs() < 1e-6,
                "{delta:?}"
            );
        }
    }

    #[test]
    fn locked_steps_outside_limits_revert(
        rect in rect_strategy(),
        rotate in -360.0_f64..360.0,
        direction in direction_strategy(),
        ratio in 0.25_f64..4.0,
        limits in limits_strategy(),
        steps in proptest::collection::vec(nudge_strategy(), 1..8),
    ) {
        let frame = Frame::new(rect.origin(), rect.size()).with_rotate(rotate);
        let config = ResizeConfig::new()
            .with_aspect_ratio(AspectRatio::Fixed(ratio))
            .with_limits(limits);
        let mut element = Resizable::new(frame, config);
        let start = frame.corners()[direction];
        prop_assert!(element.begin(start, direction, &NoBounds, &mut ()).unwrap());
        let session = element.session().cloned().unwrap();
        let lock = lock_line(session.anchor(), ratio);
        let reach = lock_reach(rect, ratio);
        for (fx, fy) in steps {
            let pointer = start + Vec2::new(fx * reach, fy * reach);
            let delta = element.update(pointer, &mut ()).unwrap();
            let input = ResizeInput {
                lock,
                ..ResizeInput::new(pointer - start)
            };
            let raw = resize_rect(session.anchor(), &input).size();
            if session.limits().violated_by(raw) {
                prop_assert_eq!(delta.size, rect.size());
            } else {
                prop_assert_eq!(delta.size, raw);
                prop_assert!(
                    (delta.size.width / delta.size.height - ratio).abs() < 1e-6,
                    "{delta:?}"
                );
            }
        }
    }

    #[test]
    fn clamp_is_idempotent(
        limits in limits_strategy(),
        w in 0.0_f64..1000.0,
        h in 0.0_f64..1000.0,
    ) {
        let once = limits.clamp(Size::new(w, h));
        prop_assert_eq!(limits.clamp(once), once);
    }

    #[test]
    fn clamped_position_is_contained(
        bounds in rect_strategy(),
        fw in 0.0_f64..1.0,
        fh in 0.0_f64..1.0,
        x in -1000.0_f64..1000.0,
        y in -1000.0_f64..1000.0,
    ) {
        let size = Size::new(bounds.width() * fw, bounds.height() * fh);
        let range = Rect::new(
            bounds.x0,
            bounds.y0,
            bounds.x1 - size.width,
            bounds.y1 - size.height,
        );
        let p = clamp_position(Point::new(x, y), range);
        prop_assert!(p.x >= bounds.x0 && p.x <= bounds.x1 - size.width);
        prop_assert!(p.y >= bounds.y0 && p.y <= bounds.y1 - size.height);
    }
}
