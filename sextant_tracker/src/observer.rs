// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility observation: the [`IntersectionSource`] capability and the
//! geometry-backed [`BandObserver`].
//!
//! ## Usage
//!
//! The tracker registers every resolved section with [`IntersectionSource::observe`]
//! and drains [`IntersectionSource::take_records`] whenever the host reports a
//! scroll or resize. A browser binding can implement the trait by queueing
//! intersection-observer callbacks and handing them out from `take_records`;
//! headless hosts use [`BandObserver`], which derives the same records from boxes.
//!
//! ```
//! use kurbo::Rect;
//! use sextant_tracker::config::ActivationBand;
//! use sextant_tracker::observer::{BandObserver, IntersectionSource};
//!
//! let mut obs = BandObserver::new(ActivationBand::default(), 10);
//! obs.observe(0, Rect::new(0.0, 0.0, 400.0, 1000.0));
//! obs.observe(1, Rect::new(0.0, 1000.0, 400.0, 2000.0));
//!
//! // The first poll reports every observed section.
//! let viewport = Rect::new(0.0, 0.0, 400.0, 800.0);
//! assert_eq!(obs.take_records(viewport).len(), 2);
//! // Nothing moved, nothing to report.
//! assert!(obs.take_records(viewport).is_empty());
//! ```

use alloc::vec::Vec;

use kurbo::Rect;

use crate::config::ActivationBand;
use crate::geometry::{classify, intersection_ratio, is_intersecting};
use crate::types::SectionPosition;

/// One visibility record for an observed section.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntersectionEntry {
    /// Registration index of the section.
    pub index: usize,
    /// Fraction of the section inside the activation band.
    pub ratio: f64,
    /// True when the section overlaps the band at all.
    pub is_intersecting: bool,
    /// Placement relative to the band.
    pub position: SectionPosition,
}

/// A source of intersection records for registered sections.
pub trait IntersectionSource {
    /// Start (or keep) observing section `index`, whose document-space box is `bounds`.
    ///
    /// Observing an index again updates its box without forcing a new report.
    fn observe(&mut self, index: usize, bounds: Rect);

    /// Stop observing section `index`. Unknown indices are ignored.
    fn unobserve(&mut self, index: usize);

    /// Drain the records produced since the last call.
    ///
    /// `viewport` is the current document-space viewport.
    fn take_records(&mut self, viewport: Rect) -> Vec<IntersectionEntry>;

    /// Stop observing everything. Calling this more than once is harmless.
    fn disconnect(&mut self);
}

#[derive(Copy, Clone, Debug)]
struct Observed {
    index: usize,
    bounds: Rect,
    last: Option<Reported>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Reported {
    step: u32,
    intersecting: bool,
    position: SectionPosition,
}

/// Computes intersection records from section boxes and an [`ActivationBand`].
///
/// A section is reported on its first poll after being observed, and afterwards
/// only when its ratio crosses one of `steps` equal boundaries, when it starts
/// or stops intersecting, or when its coarse position changes. This bounds event
/// volume the same way a browser's threshold list does.
#[derive(Clone, Debug)]
pub struct BandObserver {
    band: ActivationBand,
    steps: u32,
    targets: Vec<Observed>,
}

impl BandObserver {
    /// Create an observer reporting every `1 / steps` change in ratio.
    ///
    /// A `steps` of zero is treated as one.
    pub fn new(band: ActivationBand, steps: u32) -> Self {
        Self {
            band,
            steps: steps.max(1),
            targets: Vec::new(),
        }
    }

    /// Number of sections currently observed.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// True if nothing is observed.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "ratio is clamped to [0, 1], so the product fits in u32"
    )]
    fn step_of(&self, ratio: f64) -> u32 {
        (ratio * f64::from(self.steps)) as u32
    }
}

impl IntersectionSource for BandObserver {
    fn observe(&mut self, index: usize, bounds: Rect) {
        match self.targets.iter_mut().find(|t| t.index == index) {
            Some(t) => t.bounds = bounds,
            None => self.targets.push(Observed {
                index,
                bounds,
                last: None,
            }),
        }
    }

    fn unobserve(&mut self, index: usize) {
        self.targets.retain(|t| t.index != index);
    }

    fn take_records(&mut self, viewport: Rect) -> Vec<IntersectionEntry> {
        let band = self.band.apply(viewport);
        let mut out = Vec::new();
        for i in 0..self.targets.len() {
            let Observed { index, bounds, last } = self.targets[i];
            let ratio = intersection_ratio(bounds, band);
            let now = Reported {
                step: self.step_of(ratio),
                intersecting: is_intersecting(bounds, band),
                position: classify(bounds, band),
            };
            if last == Some(now) {
                continue;
            }
            self.targets[i].last = Some(now);
            out.push(IntersectionEntry {
                index,
                ratio,
                is_intersecting: now.intersecting,
                position: now.position,
            });
        }
        tracing::trace!(reported = out.len(), observed = self.targets.len(), "band observer poll");
        out
    }

    fn disconnect(&mut self) {
        self.targets.clear();
    }
}
