// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Section tracking over a simulated page.
//!
//! Three 1000px sections, an 800px viewport, and a handful of scroll positions.
//! Prints the active section and progress after each step.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p sextant_demos --example tracker_basics`

use std::time::Duration;

use kurbo::Rect;
use sextant_tracker::host::{Scroller, SectionLayout};
use sextant_tracker::types::{ScrollBehavior, SectionDescriptor};
use sextant_tracker::{SectionTracker, TrackerConfig};
use tracing_subscriber::EnvFilter;

const WIDTH: f64 = 1024.0;

struct Page {
    tops: Vec<(&'static str, Rect)>,
    scroll: f64,
    height: f64,
}

impl SectionLayout<&'static str> for Page {
    fn bounds_of(&self, anchor: &&'static str) -> Option<Rect> {
        self.tops
            .iter()
            .find(|(name, _)| name == anchor)
            .map(|(_, r)| *r)
    }

    fn viewport(&self) -> Rect {
        Rect::new(0.0, self.scroll, WIDTH, self.scroll + self.height)
    }
}

impl Scroller for Page {
    fn scroll_to(&mut self, y: f64, _behavior: ScrollBehavior) {
        self.scroll = y;
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let page = Page {
        tops: vec![
            ("#intro", Rect::new(0.0, 0.0, WIDTH, 1000.0)),
            ("#usage", Rect::new(0.0, 1000.0, WIDTH, 2000.0)),
            ("#faq", Rect::new(0.0, 2000.0, WIDTH, 3000.0)),
        ],
        scroll: 0.0,
        height: 800.0,
    };
    let sections = vec![
        SectionDescriptor::new("intro", "Introduction", "#intro"),
        SectionDescriptor::new("usage", "Usage", "#usage"),
        SectionDescriptor::new("faq", "FAQ", "#faq"),
        // Not on the page: logged and skipped.
        SectionDescriptor::new("changelog", "Changelog", "#changelog"),
    ];

    let mut tracker = SectionTracker::new(sections, TrackerConfig::default(), page)
        .expect("default config is valid");
    tracker.set_on_change(|c| println!("  change: {:?} -> {:?}", c.previous, c.current));

    println!("== Mounted ==");
    println!("  active={:?} progress={:.3}", tracker.active_id(), tracker.progress());

    for (i, y) in [300.0, 1200.0, 1700.0, 2200.0].into_iter().enumerate() {
        tracker.host_mut().scroll = y;
        let now = Duration::from_millis(16 * i as u64);
        let update = tracker.on_scroll(now);
        println!(
            "== scroll={y:.0} ==\n  changed={:?} active={:?} progress={:.3}",
            update.changed,
            tracker.active_id(),
            tracker.progress()
        );
    }

    let _ = tracker.tick(Duration::from_secs(1));
    println!("== Settled ==\n  scrolling={}", tracker.is_scrolling());

    for v in tracker.visibilities() {
        println!(
            "  {:<8} ratio={:.2} active={} position={:?}",
            v.id.as_str(),
            v.visibility_ratio,
            v.is_active,
            v.position
        );
    }
}
