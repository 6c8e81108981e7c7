// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter helpers for Sextant Tracker.
//!
//! ## Feature
//!
//! Enable with `tracker_adapter`.
//!
//! ## Notes
//!
//! The tracker reports scroll activity through [`Update::changed`]. These helpers
//! turn that into [`NavInput`]s so a navigation widget engages while the page
//! scrolls and relaxes once it settles.

use sextant_tracker::types::{Changed, Update};

use crate::nav_mode::{ModeChange, NavInput, NavModeState};

/// Translate a tracker update into a navigation input.
///
/// `scrolling` is the tracker's [`is_scrolling`](sextant_tracker::SectionTracker::is_scrolling)
/// after the update. Returns `None` unless the scrolling flag flipped.
pub fn scroll_input(update: &Update, scrolling: bool) -> Option<NavInput> {
    if !update.changed.contains(Changed::SCROLLING) {
        return None;
    }
    Some(if scrolling {
        NavInput::ScrollStart
    } else {
        NavInput::ScrollSettled
    })
}

/// Feed a tracker update into `state`, returning the resulting mode change.
pub fn apply_update(
    state: &mut NavModeState,
    update: &Update,
    scrolling: bool,
) -> Option<ModeChange> {
    scroll_input(update, scrolling).and_then(|input| state.handle(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav_mode::NavMode;

    fn flipped() -> Update {
        Update {
            changed: Changed::SCROLLING | Changed::PROGRESS,
            transition: None,
        }
    }

    #[test]
    fn only_scrolling_flips_produce_inputs() {
        let quiet = Update {
            changed: Changed::PROGRESS,
            transition: None,
        };
        assert_eq!(scroll_input(&quiet, true), None);
        assert_eq!(scroll_input(&flipped(), true), Some(NavInput::ScrollStart));
        assert_eq!(scroll_input(&flipped(), false), Some(NavInput::ScrollSettled));
    }

    #[test]
    fn scroll_engages_then_settles() {
        let mut state = NavModeState::new();
        let up = apply_update(&mut state, &flipped(), true);
        assert_eq!(up.map(|c| c.to), Some(NavMode::Engaged));
        let down = apply_update(&mut state, &flipped(), false);
        assert_eq!(down.map(|c| c.to), Some(NavMode::Ambient));
    }
}
