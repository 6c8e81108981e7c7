// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use sextant_tracker::config::{ActivationBand, TrackerConfig};
use sextant_tracker::host::{Scroller, SectionLayout};
use sextant_tracker::observer::{BandObserver, IntersectionSource};
use sextant_tracker::progress::SectionSpan;
use sextant_tracker::tracker::SectionTracker;
use sextant_tracker::types::{ScrollBehavior, SectionDescriptor};

const WIDTH: f64 = 1024.0;
const VIEWPORT: f64 = 900.0;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Stacked sections with heights in `[min_h, max_h)`.
fn gen_sections(count: usize, min_h: f64, max_h: f64) -> Vec<Rect> {
    let mut rng = Rng::new(0x5E47_A417_0BAD_CAFE);
    let mut out = Vec::with_capacity(count);
    let mut y = 0.0;
    for _ in 0..count {
        let h = min_h + rng.next_f64() * (max_h - min_h);
        out.push(Rect::new(0.0, y, WIDTH, y + h));
        y += h;
    }
    out
}

#[derive(Clone)]
struct Page {
    boxes: Vec<Rect>,
    scroll: f64,
}

impl Page {
    fn height(&self) -> f64 {
        self.boxes.last().map_or(0.0, |r| r.y1)
    }
}

impl SectionLayout<usize> for Page {
    fn bounds_of(&self, target: &usize) -> Option<Rect> {
        self.boxes.get(*target).copied()
    }

    fn viewport(&self) -> Rect {
        Rect::new(0.0, self.scroll, WIDTH, self.scroll + VIEWPORT)
    }
}

impl Scroller for Page {
    fn scroll_to(&mut self, y: f64, _behavior: ScrollBehavior) {
        self.scroll = y;
    }
}

fn descriptors(n: usize) -> Vec<SectionDescriptor<usize>> {
    (0..n)
        .map(|i| SectionDescriptor::new(format!("s{i}"), format!("Section {i}"), i))
        .collect()
}

fn bench_observer(c: &mut Criterion) {
    let mut group = c.benchmark_group("band_observer");
    for &n in &[16usize, 128, 1024] {
        let boxes = gen_sections(n, 300.0, 1800.0);
        let total = boxes.last().map_or(0.0, |r| r.y1);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("sweep_take_records_n{n}"), |b| {
            b.iter_batched(
                || {
                    let mut obs = BandObserver::new(ActivationBand::default(), 10);
                    for (i, r) in boxes.iter().copied().enumerate() {
                        obs.observe(i, r);
                    }
                    obs
                },
                |mut obs| {
                    let mut y = 0.0;
                    let mut records = 0;
                    while y < total {
                        let vp = Rect::new(0.0, y, WIDTH, y + VIEWPORT);
                        records += obs.take_records(vp).len();
                        y += 40.0;
                    }
                    black_box(records);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_progress(c: &mut Criterion) {
    let mut group = c.benchmark_group("progress");
    let boxes = gen_sections(1024, 300.0, 1800.0);
    group.bench_function("span_from_bounds_n1024", |b| {
        b.iter(|| black_box(SectionSpan::from_bounds(boxes.iter().copied())))
    });
    if let Some(span) = SectionSpan::from_bounds(boxes.iter().copied()) {
        let vp = Rect::new(0.0, span.total() * 0.5, WIDTH, span.total() * 0.5 + VIEWPORT);
        group.bench_function("progress_at_midpoint", |b| {
            b.iter(|| black_box(span.progress(black_box(vp), 0.4)))
        });
    }
    group.finish();
}

fn bench_tracker(c: &mut Criterion) {
    let mut group = c.benchmark_group("tracker");
    for &n in &[16usize, 128, 1024] {
        let page = Page {
            boxes: gen_sections(n, 300.0, 1800.0),
            scroll: 0.0,
        };
        let height = page.height();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("on_scroll_sweep_n{n}"), |b| {
            b.iter_batched(
                || {
                    SectionTracker::new(descriptors(n), TrackerConfig::default(), page.clone())
                        .ok()
                },
                |tracker| {
                    let Some(mut tracker) = tracker else { return };
                    let mut t = 0;
                    let mut changes = 0;
                    while tracker.host().scroll < height {
                        tracker.host_mut().scroll += 120.0;
                        t += 16;
                        if tracker.on_scroll(Duration::from_millis(t)).transition.is_some() {
                            changes += 1;
                        }
                    }
                    black_box((changes, tracker.progress()));
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("refresh_n{n}"), |b| {
            b.iter_batched(
                || {
                    SectionTracker::new(descriptors(n), TrackerConfig::default(), page.clone())
                        .ok()
                },
                |tracker| {
                    if let Some(mut tracker) = tracker {
                        black_box(tracker.refresh());
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_observer, bench_progress, bench_tracker);
criterion_main!(benches);
