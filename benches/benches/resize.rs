// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use understory_resize::{
    AspectRatio, Direction, DragAnchor, Frame, NoBounds, Resizable, ResizeConfig, ResizeInput,
    lock_line, resize_rect,
};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }

    fn offset(&mut self, span: f64) -> Vec2 {
        Vec2::new(
            (self.next_f64() - 0.5) * span,
            (self.next_f64() - 0.5) * span,
        )
    }
}

fn pointer_path(len: usize, seed: u64) -> Vec<Vec2> {
    let mut rng = Lcg::new(seed);
    (0..len).map(|_| rng.offset(80.0)).collect()
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_resize");
    let rect = Rect::from_origin_size((50.0, 50.0), (160.0, 90.0));

    group.bench_function("anchor_resolve(all directions)", |b| {
        b.iter(|| {
            for direction in Direction::ALL {
                black_box(DragAnchor::resolve(black_box(rect), 33.0, direction));
            }
        });
    });

    for &locked in &[false, true] {
        let path = pointer_path(1_024, 0x5E51_2E00_0000_0001);
        group.bench_function(format!("resize_rect(locked={locked},moves=1024)"), |b| {
            let anchor = DragAnchor::resolve(rect, 33.0, Direction::BottomRight);
            let lock = locked
                .then(|| lock_line(&anchor, rect.width() / rect.height()))
                .flatten();
            b.iter(|| {
                for delta in &path {
                    let input = ResizeInput {
                        lock,
                        ..ResizeInput::new(*delta)
                    };
                    black_box(resize_rect(&anchor, &input));
                }
            });
        });
    }

    let path = pointer_path(256, 0x5E51_2E00_0000_0002);
    group.bench_function("resizable_drag(moves=256)", |b| {
        b.iter_batched(
            || {
                let frame = Frame::new(Point::new(50.0, 50.0), Size::new(160.0, 90.0))
                    .with_rotate(-20.0);
                let config = ResizeConfig::new()
                    .with_aspect_ratio(AspectRatio::Current)
                    .with_min_size(16.0, 9.0)
                    .with_bounds(Rect::new(0.0, 0.0, 800.0, 600.0));
                Resizable::new(frame, config)
            },
            |mut element| {
                let start = element.frame().corners()[Direction::TopLeft];
                let _ = element.begin(start, Direction::TopLeft, &NoBounds, &mut ());
                for delta in &path {
                    black_box(element.update(start + *delta, &mut ()));
                }
                black_box(element.end(&mut ()));
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_resize);
criterion_main!(benches);
