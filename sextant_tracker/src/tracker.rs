// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The section tracker: active section, visibility table, progress, and navigation.
//!
//! ## Lifecycle
//!
//! Construction mounts the tracker. Targets are resolved through the host, every
//! resolved section is handed to the [`IntersectionSource`], and an initial batch
//! is processed so the active section and progress are correct right away.
//! [`SectionTracker::unmount`] (also run on drop) disconnects the source and
//! clears the settle deadline. After that every entry point is inert.
//!
//! ## Event flow
//!
//! The host forwards its events:
//! - [`on_scroll`](SectionTracker::on_scroll) for every scroll event, with a timestamp.
//! - [`on_resize`](SectionTracker::on_resize) when layout may have changed.
//! - [`tick`](SectionTracker::tick) from a timer to settle the "is scrolling" flag.
//! - [`on_intersections`](SectionTracker::on_intersections) if its intersection
//!   records arrive out of band (for example from a browser callback).
//!
//! Each returns an [`Update`] describing what changed. A whole batch is applied to
//! the visibility table before the active section is selected, so selection always
//! sees a consistent snapshot.

use alloc::boxed::Box;
use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::time::Duration;

use kurbo::Rect;
use tracing::{debug, trace, warn};

use crate::config::TrackerConfig;
use crate::error::ConfigError;
use crate::host::{Scroller, SectionLayout};
use crate::observer::{BandObserver, IntersectionEntry, IntersectionSource};
use crate::progress::SectionSpan;
use crate::selector::select_active;
use crate::types::{
    Changed, Direction, ScrollOptions, SectionChange, SectionDescriptor, SectionId,
    SectionVisibility, Update,
};

type ChangeListener = Box<dyn FnMut(&SectionChange)>;

/// Tracks which of a set of page sections is active as the page scrolls.
///
/// `T` is the section target type, `H` the host providing layout and scrolling,
/// and `S` the intersection source (a [`BandObserver`] unless supplied via
/// [`SectionTracker::with_source`]).
pub struct SectionTracker<T, H, S = BandObserver>
where
    S: IntersectionSource,
{
    sections: Vec<SectionDescriptor<T>>,
    bounds: Vec<Option<Rect>>,
    visibility: Vec<Option<SectionVisibility>>,
    span: Option<SectionSpan>,
    active: Option<usize>,
    progress: f64,
    scrolling: bool,
    settle_deadline: Option<Duration>,
    mounted: bool,
    config: TrackerConfig,
    host: H,
    source: S,
    on_change: Option<ChangeListener>,
}

impl<T, H, S> core::fmt::Debug for SectionTracker<T, H, S>
where
    S: IntersectionSource,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SectionTracker")
            .field("sections", &self.sections.len())
            .field("active", &self.active)
            .field("progress", &self.progress)
            .field("scrolling", &self.scrolling)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

impl<T, H> SectionTracker<T, H, BandObserver>
where
    H: SectionLayout<T> + Scroller,
{
    /// Mount a tracker that derives visibility from section boxes.
    pub fn new(
        sections: Vec<SectionDescriptor<T>>,
        config: TrackerConfig,
        host: H,
    ) -> Result<Self, ConfigError> {
        let source = BandObserver::new(config.band, config.steps);
        Self::with_source(sections, config, host, source)
    }
}

impl<T, H, S> SectionTracker<T, H, S>
where
    H: SectionLayout<T> + Scroller,
    S: IntersectionSource,
{
    /// Mount a tracker fed by a custom intersection source.
    pub fn with_source(
        sections: Vec<SectionDescriptor<T>>,
        config: TrackerConfig,
        host: H,
        source: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        check_ids(&sections)?;

        let n = sections.len();
        let mut tracker = Self {
            sections,
            bounds: alloc::vec![None; n],
            visibility: alloc::vec![None; n],
            span: None,
            active: None,
            progress: 0.0,
            scrolling: false,
            settle_deadline: None,
            mounted: true,
            config,
            host,
            source,
            on_change: None,
        };
        tracker.resolve(true);
        let _ = tracker.pump();
        debug!(
            sections = n,
            resolved = tracker.bounds.iter().flatten().count(),
            "section tracker mounted"
        );
        Ok(tracker)
    }

    /// Forward a scroll event observed at `now`.
    pub fn on_scroll(&mut self, now: Duration) -> Update {
        if !self.mounted {
            trace!("scroll after unmount ignored");
            return Update::default();
        }
        let mut update = Update::default();
        if !self.scrolling {
            self.scrolling = true;
            update.changed |= Changed::SCROLLING;
        }
        self.settle_deadline = Some(now + self.config.settle);
        update.merge(self.pump());
        update
    }

    /// Forward a resize; section boxes are re-resolved.
    pub fn on_resize(&mut self) -> Update {
        self.refresh()
    }

    /// Settle the "is scrolling" flag once the debounce window has elapsed.
    pub fn tick(&mut self, now: Duration) -> Update {
        let mut update = Update::default();
        if let Some(deadline) = self.settle_deadline
            && now >= deadline
        {
            self.settle_deadline = None;
            if self.scrolling {
                self.scrolling = false;
                update.changed |= Changed::SCROLLING;
            }
        }
        update
    }

    /// Apply intersection records delivered outside of [`on_scroll`](Self::on_scroll).
    pub fn on_intersections(
        &mut self,
        records: impl IntoIterator<Item = IntersectionEntry>,
    ) -> Update {
        if !self.mounted {
            trace!("intersection batch after unmount ignored");
            return Update::default();
        }
        let mut update = self.apply(records);
        update.merge(self.reselect());
        update.merge(self.recompute_progress(self.host.viewport()));
        update
    }

    /// Re-resolve every section's box after a layout change.
    ///
    /// Progress and visibility reflect the new layout immediately; no remount needed.
    pub fn refresh(&mut self) -> Update {
        if !self.mounted {
            return Update::default();
        }
        let mut update = Update::default();
        if self.resolve(false) {
            update.changed |= Changed::VISIBILITY;
        }
        update.merge(self.pump());
        update
    }

    /// Scroll the host so section `id` sits at the viewport top (minus the offset).
    ///
    /// Returns `false` and logs a warning when `id` is unknown or its target could
    /// not be resolved. The active section is not changed here; it follows from the
    /// scroll events the host reports afterwards.
    pub fn scroll_to_section(&mut self, id: &str, options: ScrollOptions) -> bool {
        if !self.mounted {
            trace!(section = id, "navigation after unmount ignored");
            return false;
        }
        let Some(index) = self.index_of(id) else {
            warn!(section = id, "scroll_to_section: unknown section id");
            return false;
        };
        let Some(bounds) = self.bounds[index] else {
            warn!(section = id, "scroll_to_section: section target is not resolved");
            return false;
        };
        let offset = options.offset.unwrap_or(self.config.scroll_offset);
        let behavior = options.behavior.unwrap_or(self.config.behavior);
        let y = (bounds.y0 - offset).max(0.0);
        debug!(section = id, y, ?behavior, "scrolling to section");
        self.host.scroll_to(y, behavior);
        true
    }

    /// Scroll to the resolved section after or before the active one.
    ///
    /// With no active section, `Next` goes to the first and `Previous` to the last
    /// resolved section. Returns `false` when there is nowhere to go.
    pub fn scroll_to_adjacent(&mut self, direction: Direction) -> bool {
        let resolved = |i: &usize| self.bounds[*i].is_some();
        let n = self.sections.len();
        let target = match (direction, self.active) {
            (Direction::Next, Some(a)) => (a + 1..n).find(resolved),
            (Direction::Next, None) => (0..n).find(resolved),
            (Direction::Previous, Some(a)) => (0..a).rev().find(resolved),
            (Direction::Previous, None) => (0..n).rev().find(resolved),
        };
        match target {
            Some(i) => {
                let id = self.sections[i].id.clone();
                self.scroll_to_section(id.as_str(), ScrollOptions::default())
            }
            None => false,
        }
    }

    fn pump(&mut self) -> Update {
        if !self.mounted {
            return Update::default();
        }
        let viewport = self.host.viewport();
        let records = self.source.take_records(viewport);
        let mut update = self.apply(records);
        update.merge(self.reselect());
        update.merge(self.recompute_progress(viewport));
        update
    }

    /// Resolve targets and sync the source. Returns true if a visibility entry was dropped.
    fn resolve(&mut self, mounting: bool) -> bool {
        let mut dropped = false;
        for (i, section) in self.sections.iter().enumerate() {
            match self.host.bounds_of(&section.target) {
                Some(b) => {
                    self.bounds[i] = Some(b);
                    self.source.observe(i, b);
                }
                None => {
                    if mounting || self.bounds[i].is_some() {
                        warn!(section = %section.id, "section target could not be resolved");
                    }
                    if !mounting {
                        self.source.unobserve(i);
                    }
                    self.bounds[i] = None;
                    dropped |= self.visibility[i].take().is_some();
                }
            }
        }
        self.span = SectionSpan::from_bounds(self.bounds.iter().flatten().copied());
        dropped
    }

    fn apply(&mut self, records: impl IntoIterator<Item = IntersectionEntry>) -> Update {
        let mut update = Update::default();
        let threshold = self.config.threshold;
        let mut count = 0_usize;
        for r in records {
            count += 1;
            if r.index >= self.sections.len() || self.bounds[r.index].is_none() {
                trace!(index = r.index, "record for unknown or unresolved section dropped");
                continue;
            }
            let ratio = if r.ratio.is_finite() {
                r.ratio.clamp(0.0, 1.0)
            } else {
                0.0
            };
            let next = SectionVisibility {
                id: self.sections[r.index].id.clone(),
                visibility_ratio: ratio,
                is_active: r.is_intersecting && ratio > threshold,
                position: r.position,
            };
            if self.visibility[r.index].as_ref() != Some(&next) {
                self.visibility[r.index] = Some(next);
                update.changed |= Changed::VISIBILITY;
            }
        }
        trace!(records = count, "visibility batch applied");
        update
    }

    fn reselect(&mut self) -> Update {
        let ratios: Vec<Option<f64>> = self
            .visibility
            .iter()
            .map(|v| v.as_ref().map(|v| v.visibility_ratio))
            .collect();
        let next = select_active(&ratios, self.active);
        if next == self.active {
            return Update::default();
        }
        let change = SectionChange {
            current: next.map(|i| self.sections[i].id.clone()),
            previous: self.active.map(|i| self.sections[i].id.clone()),
        };
        debug!(current = ?change.current, previous = ?change.previous, "active section changed");
        self.active = next;
        if let Some(listener) = self.on_change.as_mut() {
            listener(&change);
        }
        Update {
            changed: Changed::ACTIVE,
            transition: Some(change),
        }
    }

    fn recompute_progress(&mut self, viewport: Rect) -> Update {
        let progress = self
            .span
            .map(|span| span.progress(viewport, self.config.progress_anchor))
            .unwrap_or(0.0);
        if progress == self.progress {
            return Update::default();
        }
        self.progress = progress;
        Update {
            changed: Changed::PROGRESS,
            transition: None,
        }
    }
}

impl<T, H, S> SectionTracker<T, H, S>
where
    S: IntersectionSource,
{
    /// Tear down: disconnect the source, clear the settle deadline, drop the listener.
    ///
    /// Safe to call more than once.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.source.disconnect();
        self.settle_deadline = None;
        self.scrolling = false;
        self.on_change = None;
        debug!("section tracker unmounted");
    }
}

impl<T, H, S> SectionTracker<T, H, S>
where
    S: IntersectionSource,
{
    /// Register a listener called with every active-section transition.
    pub fn set_on_change(&mut self, listener: impl FnMut(&SectionChange) + 'static) {
        self.on_change = Some(Box::new(listener));
    }

    /// Remove the transition listener.
    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    /// The currently active section, if any.
    pub fn active_section(&self) -> Option<&SectionDescriptor<T>> {
        self.active.map(|i| &self.sections[i])
    }

    /// Id of the currently active section, if any.
    pub fn active_id(&self) -> Option<&SectionId> {
        self.active_section().map(|s| &s.id)
    }

    /// Latest visibility report for section `id`.
    pub fn visibility(&self, id: &str) -> Option<&SectionVisibility> {
        self.index_of(id).and_then(|i| self.visibility[i].as_ref())
    }

    /// All visibility reports, in registration order.
    pub fn visibilities(&self) -> impl Iterator<Item = &SectionVisibility> {
        self.visibility.iter().flatten()
    }

    /// Scroll progress through all sections, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// True between a scroll event and the end of its settle window.
    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    /// False once [`unmount`](Self::unmount) has run.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Registered sections, in order.
    pub fn sections(&self) -> &[SectionDescriptor<T>] {
        &self.sections
    }

    /// The configuration this tracker was mounted with.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably (for example to drive a simulated page).
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id.as_str() == id)
    }
}

fn check_ids<T>(sections: &[SectionDescriptor<T>]) -> Result<(), ConfigError> {
    let mut seen = BTreeSet::new();
    for s in sections {
        if s.id.as_str().is_empty() {
            return Err(ConfigError::EmptySectionId);
        }
        if !seen.insert(s.id.as_str()) {
            return Err(ConfigError::DuplicateSection(s.id.clone()));
        }
    }
    Ok(())
}

impl<T, H, S> Drop for SectionTracker<T, H, S>
where
    S: IntersectionSource,
{
    fn drop(&mut self) {
        self.unmount();
    }
}
