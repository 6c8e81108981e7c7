// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for progress and active-section selection over random layouts.

use core::time::Duration;

use kurbo::Rect;
use proptest::prelude::*;
use sextant_tracker::host::{Scroller, SectionLayout};
use sextant_tracker::progress::SectionSpan;
use sextant_tracker::types::{ScrollBehavior, SectionDescriptor};
use sextant_tracker::{SectionTracker, TrackerConfig};

struct Page {
    boxes: Vec<Rect>,
    scroll: f64,
    height: f64,
}

impl SectionLayout<usize> for Page {
    fn bounds_of(&self, target: &usize) -> Option<Rect> {
        self.boxes.get(*target).copied()
    }

    fn viewport(&self) -> Rect {
        Rect::new(0.0, self.scroll, 1000.0, self.scroll + self.height)
    }
}

impl Scroller for Page {
    fn scroll_to(&mut self, y: f64, _behavior: ScrollBehavior) {
        self.scroll = y;
    }
}

fn stacked(heights: &[f64]) -> Vec<Rect> {
    let mut y = 0.0;
    heights
        .iter()
        .map(|h| {
            let r = Rect::new(0.0, y, 1000.0, y + h);
            y += h;
            r
        })
        .collect()
}

fn mount(heights: &[f64], viewport: f64) -> SectionTracker<usize, Page> {
    let boxes = stacked(heights);
    let sections = (0..boxes.len())
        .map(|i| SectionDescriptor::new(format!("s{i}"), format!("Section {i}"), i))
        .collect();
    let page = Page {
        boxes,
        scroll: 0.0,
        height: viewport,
    };
    SectionTracker::new(sections, TrackerConfig::default(), page).unwrap()
}

proptest! {
    #[test]
    fn progress_is_always_a_fraction(
        heights in prop::collection::vec(0.0_f64..3000.0, 0..8),
        viewport in 1.0_f64..2000.0,
        scrolls in prop::collection::vec(-5000.0_f64..30000.0, 1..20),
    ) {
        let mut t = mount(&heights, viewport);
        for (i, y) in scrolls.into_iter().enumerate() {
            t.host_mut().scroll = y;
            let _ = t.on_scroll(Duration::from_millis(i as u64 * 16));
            let p = t.progress();
            prop_assert!((0.0..=1.0).contains(&p), "progress {} at scroll {}", p, y);
        }
    }

    #[test]
    fn single_section_never_progresses(
        height in 1.0_f64..10000.0,
        scroll in -1000.0_f64..20000.0,
    ) {
        let span = SectionSpan::from_bounds([Rect::new(0.0, 0.0, 100.0, height)]).unwrap();
        let viewport = Rect::new(0.0, scroll, 100.0, scroll + 800.0);
        prop_assert_eq!(span.progress(viewport, 0.4), 0.0);
    }

    #[test]
    fn progress_is_monotonic_in_scroll(
        heights in prop::collection::vec(100.0_f64..3000.0, 2..8),
        a in 0.0_f64..20000.0,
        b in 0.0_f64..20000.0,
    ) {
        let span = SectionSpan::from_bounds(stacked(&heights)).unwrap();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let at = |y: f64| span.progress(Rect::new(0.0, y, 1000.0, y + 800.0), 0.4);
        prop_assert!(at(lo) <= at(hi));
    }

    #[test]
    fn active_section_has_the_largest_band_share(
        heights in prop::collection::vec(200.0_f64..3000.0, 1..8),
        scrolls in prop::collection::vec(0.0_f64..20000.0, 1..6),
    ) {
        let mut t = mount(&heights, 800.0);
        for (i, y) in scrolls.into_iter().enumerate() {
            t.host_mut().scroll = y;
            let _ = t.on_scroll(Duration::from_millis(i as u64 * 16));
            let reported: Vec<(String, f64)> = t
                .visibilities()
                .map(|v| (v.id.as_str().to_owned(), v.visibility_ratio))
                .collect();
            match t.active_id() {
                Some(active) => {
                    let best = t.visibility(active.as_str()).unwrap().visibility_ratio;
                    for (id, ratio) in &reported {
                        prop_assert!(
                            *ratio <= best,
                            "{} reports {} above active {} at {}", id, ratio, best, y
                        );
                    }
                }
                None => {
                    prop_assert!(reported.iter().all(|(_, r)| *r <= 0.0));
                }
            }
        }
    }
}
