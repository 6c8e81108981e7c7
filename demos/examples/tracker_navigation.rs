// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Programmatic navigation with a sticky header and an animated scroll.
//!
//! The host animates smooth scrolls over several frames and reports each frame
//! back to the tracker, so the active section follows the animation rather than
//! jumping with the request.
//!
//! Run:
//! - `cargo run -p sextant_demos --example tracker_navigation`

use std::time::Duration;

use kurbo::Rect;
use sextant_interaction::adapters::tracker::apply_update;
use sextant_interaction::nav_mode::NavModeState;
use sextant_tracker::host::{Scroller, SectionLayout};
use sextant_tracker::search::filter_sections;
use sextant_tracker::types::{Direction, ScrollBehavior, ScrollOptions, SectionDescriptor};
use sextant_tracker::{SectionTracker, TrackerConfig};

const FRAMES: u32 = 6;

#[derive(Default)]
struct AnimatedPage {
    heights: Vec<f64>,
    scroll: f64,
    goal: Option<f64>,
}

impl AnimatedPage {
    /// Advance one frame toward the goal. Returns false when idle.
    fn step(&mut self) -> bool {
        let Some(goal) = self.goal else {
            return false;
        };
        let delta = (goal - self.scroll) / 2.0;
        if delta.abs() < 1.0 {
            self.scroll = goal;
            self.goal = None;
        } else {
            self.scroll += delta;
        }
        true
    }
}

impl SectionLayout<usize> for AnimatedPage {
    fn bounds_of(&self, index: &usize) -> Option<Rect> {
        let top: f64 = self.heights.iter().take(*index).sum();
        let h = *self.heights.get(*index)?;
        Some(Rect::new(0.0, top, 800.0, top + h))
    }

    fn viewport(&self) -> Rect {
        Rect::new(0.0, self.scroll, 800.0, self.scroll + 600.0)
    }
}

impl Scroller for AnimatedPage {
    fn scroll_to(&mut self, y: f64, behavior: ScrollBehavior) {
        match behavior {
            ScrollBehavior::Smooth => self.goal = Some(y),
            ScrollBehavior::Instant => {
                self.scroll = y;
                self.goal = None;
            }
        }
    }
}

fn main() {
    let config: TrackerConfig =
        serde_json::from_str(r#"{ "scroll_offset": 56.0, "settle": { "secs": 0, "nanos": 80000000 } }"#)
            .expect("valid config");
    let page = AnimatedPage {
        heights: vec![700.0, 1200.0, 500.0, 900.0],
        ..AnimatedPage::default()
    };
    let sections = vec![
        SectionDescriptor::new("overview", "Overview", 0),
        SectionDescriptor::new("install", "Installation", 1).with_description("Add to a project"),
        SectionDescriptor::new("config", "Configuration", 2),
        SectionDescriptor::new("project", "Project box", 3),
    ];
    let mut tracker = SectionTracker::new(sections, config, page).expect("valid config");
    let mut mode = NavModeState::new();
    let mut clock = Duration::ZERO;

    let query = "proj";
    let hits: Vec<_> = filter_sections(tracker.sections(), query)
        .into_iter()
        .map(|s| s.id.clone())
        .collect();
    println!("== Palette query {query:?} -> {hits:?} ==");

    for id in &hits {
        let _ = tracker.scroll_to_section(id.as_str(), ScrollOptions::default());
        run_animation(&mut tracker, &mut mode, &mut clock);
    }

    println!("== Keyboard: previous section ==");
    let _ = tracker.scroll_to_adjacent(Direction::Previous);
    run_animation(&mut tracker, &mut mode, &mut clock);

    println!("== Stale id ==");
    let moved = tracker.scroll_to_section("removed-section", ScrollOptions::default());
    println!("  moved={moved}");

    tracker.unmount();
}

fn run_animation(
    tracker: &mut SectionTracker<usize, AnimatedPage>,
    mode: &mut NavModeState,
    clock: &mut Duration,
) {
    let frame = Duration::from_millis(16);
    for _ in 0..FRAMES * 4 {
        if !tracker.host_mut().step() {
            break;
        }
        *clock += frame;
        let update = tracker.on_scroll(*clock);
        if let Some(change) = apply_update(mode, &update, tracker.is_scrolling()) {
            println!("  mode {:?} -> {:?}", change.from, change.to);
        }
        if let Some(t) = update.transition {
            println!("  active {:?} -> {:?}", t.previous, t.current);
        }
    }
    *clock += Duration::from_millis(200);
    let update = tracker.tick(*clock);
    if let Some(change) = apply_update(mode, &update, tracker.is_scrolling()) {
        println!("  mode {:?} -> {:?}", change.from, change.to);
    }
    println!(
        "  settled at scroll={:.0} active={:?} progress={:.3}",
        tracker.host().scroll,
        tracker.active_id(),
        tracker.progress()
    );
}
