// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Long-press reveal with a wobbling pointer.
//!
//! The first press drifts too far and cancels. The second holds still, reaches
//! `Ready`, and reveals on release.
//!
//! Run:
//! - `cargo run -p sextant_demos --example interaction_long_press`

use std::time::Duration;

use kurbo::Point;
use sextant_interaction::long_press::{LongPress, LongPressConfig, LongPressEvent, Stage};

fn main() {
    let config = LongPressConfig {
        move_tolerance: 8.0,
        ..LongPressConfig::default()
    };
    config.validate().expect("valid long-press config");
    let mut lp = LongPress::new(config);
    let ms = Duration::from_millis;

    println!("== Drifting press ==");
    report(lp.press(Point::new(50.0, 50.0), ms(0)));
    report(lp.pointer_move(Point::new(54.0, 52.0), ms(40)));
    report(lp.tick(ms(160)));
    report(lp.pointer_move(Point::new(62.0, 50.0), ms(200)));
    assert_eq!(lp.stage(), Stage::Idle);

    println!("== Steady press ==");
    report(lp.press(Point::new(50.0, 50.0), ms(1000)));
    for t in (1016..=1600).step_by(96) {
        let events = lp.tick(ms(t));
        if !events.is_empty() {
            println!("  t={t} progress={:.2}", lp.progress());
        }
        report(events);
    }
    // Wandering after Ready is fine.
    report(lp.pointer_move(Point::new(140.0, 90.0), ms(1610)));
    report(lp.release(ms(1620)));
    assert_eq!(lp.stage(), Stage::Revealed);
    report(lp.dismiss());
}

fn report(events: Vec<LongPressEvent>) {
    for e in events {
        println!("  {e:?}");
    }
}
