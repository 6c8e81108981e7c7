// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sextant Tracker: headless, `no_std` section tracking for UI.
//!
//! ## Overview
//!
//! This crate implements the logic behind scroll-spy widgets: section
//! navigation rails, "you are here" pills, progress tracks and jump menus.
//! It does not render anything and it does not talk to a browser.
//! Instead, a host implements two small capabilities and forwards its events:
//!
//! - [`SectionLayout`](crate::host::SectionLayout): resolve a section target to a
//!   document-space box and report the viewport.
//! - [`Scroller`](crate::host::Scroller): move the scroll position.
//!
//! Visibility records come from an [`IntersectionSource`](crate::observer::IntersectionSource).
//! The bundled [`BandObserver`](crate::observer::BandObserver) derives them from
//! section boxes; a browser binding can feed intersection-observer callbacks instead.
//!
//! ## What it reports
//!
//! - The active section: the one with the highest share of its box inside the
//!   activation band (by default the 20%–60% slice of the viewport).
//! - Per-section [`SectionVisibility`](crate::types::SectionVisibility): ratio,
//!   threshold flag and coarse [`SectionPosition`](crate::types::SectionPosition).
//! - Progress in `[0, 1]` through the union of all sections. See [`progress`].
//! - Whether the page is currently scrolling, settled by a debounce window.
//!
//! ## Workflow
//!
//! 1) Build [`SectionDescriptor`](crate::types::SectionDescriptor)s and a
//!    [`TrackerConfig`](crate::config::TrackerConfig).
//! 2) Mount with [`SectionTracker::new`](crate::tracker::SectionTracker::new).
//! 3) Forward scroll events, resizes and timer ticks. Each call returns an
//!    [`Update`](crate::types::Update) naming what changed.
//! 4) Call [`SectionTracker::scroll_to_section`](crate::tracker::SectionTracker::scroll_to_section)
//!    from navigation UI.
//! 5) [`SectionTracker::unmount`](crate::tracker::SectionTracker::unmount) (or drop) tears everything down.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::Rect;
//! use sextant_tracker::config::TrackerConfig;
//! use sextant_tracker::host::{Scroller, SectionLayout};
//! use sextant_tracker::tracker::SectionTracker;
//! use sextant_tracker::types::{ScrollBehavior, SectionDescriptor};
//!
//! struct Page { scroll: f64 }
//!
//! impl SectionLayout<f64> for Page {
//!     // Targets are section tops; every section is 1000px tall.
//!     fn bounds_of(&self, top: &f64) -> Option<Rect> {
//!         Some(Rect::new(0.0, *top, 400.0, top + 1000.0))
//!     }
//!     fn viewport(&self) -> Rect {
//!         Rect::new(0.0, self.scroll, 400.0, self.scroll + 800.0)
//!     }
//! }
//!
//! impl Scroller for Page {
//!     fn scroll_to(&mut self, y: f64, _behavior: ScrollBehavior) {
//!         self.scroll = y;
//!     }
//! }
//!
//! let sections = vec![
//!     SectionDescriptor::new("a", "Alpha", 0.0),
//!     SectionDescriptor::new("b", "Beta", 1000.0),
//!     SectionDescriptor::new("c", "Gamma", 2000.0),
//! ];
//! let mut tracker = SectionTracker::new(sections, TrackerConfig::default(), Page { scroll: 0.0 }).unwrap();
//! assert_eq!(tracker.active_id().unwrap(), "a");
//!
//! tracker.host_mut().scroll = 1200.0;
//! let update = tracker.on_scroll(Duration::from_millis(16));
//! assert_eq!(update.transition.unwrap().current.unwrap(), "b");
//! assert!((tracker.progress() - 1520.0 / 3000.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod geometry;
pub mod host;
pub mod observer;
pub mod progress;
pub mod search;
pub mod selector;
pub mod tracker;
pub mod types;

pub use config::{ActivationBand, TrackerConfig};
pub use error::ConfigError;
pub use tracker::SectionTracker;
