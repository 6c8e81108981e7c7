// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll progress across the union of all tracked sections.
//!
//! ## Definition
//!
//! Let `first_top` be the smallest section top and `last_bottom` the largest
//! section bottom (document space). The reference point sits `anchor` of the way
//! down the viewport (40% by default, roughly where a reader's eyes rest):
//!
//! ```text
//! progress = clamp((scroll + height * anchor - first_top) / (last_bottom - first_top), 0, 1)
//! ```
//!
//! A viewport scrolled to or above `first_top` reads `0`, so the top of the page
//! is not already part-way through. The far end reads `1` only once the reference
//! point reaches `last_bottom`. Fewer than two sections, or a span that is not
//! positive, always reads `0`.

use kurbo::Rect;

/// Document-space vertical extent covered by a set of sections.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SectionSpan {
    /// Smallest section top.
    pub first_top: f64,
    /// Largest section bottom.
    pub last_bottom: f64,
    count: usize,
}

impl SectionSpan {
    /// Compute the span of `bounds`. Returns `None` for an empty iterator.
    pub fn from_bounds(bounds: impl IntoIterator<Item = Rect>) -> Option<Self> {
        let mut it = bounds.into_iter();
        let first = it.next()?;
        let init = Self {
            first_top: first.y0,
            last_bottom: first.y1,
            count: 1,
        };
        Some(it.fold(init, |acc, r| Self {
            first_top: acc.first_top.min(r.y0),
            last_bottom: acc.last_bottom.max(r.y1),
            count: acc.count + 1,
        }))
    }

    /// `last_bottom - first_top`.
    pub fn total(&self) -> f64 {
        self.last_bottom - self.first_top
    }

    /// Number of sections folded into this span.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Progress for a document-space `viewport` using a reference point `anchor`
    /// of the way down it.
    pub fn progress(&self, viewport: Rect, anchor: f64) -> f64 {
        let total = self.total();
        if self.count < 2 || !total.is_finite() || total <= 0.0 {
            return 0.0;
        }
        if viewport.y0 <= self.first_top {
            return 0.0;
        }
        let reference = viewport.y0 + viewport.height() * anchor;
        let p = (reference - self.first_top) / total;
        if p.is_finite() { p.clamp(0.0, 1.0) } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn approx(a: f64, b: f64) -> bool {
        let d = a - b;
        d < 1e-9 && d > -1e-9
    }

    fn three_stacked() -> SectionSpan {
        let bounds: Vec<Rect> = (0..3)
            .map(|i| {
                let y = f64::from(i) * 1000.0;
                Rect::new(0.0, y, 400.0, y + 1000.0)
            })
            .collect();
        SectionSpan::from_bounds(bounds).unwrap()
    }

    fn viewport_at(scroll: f64) -> Rect {
        Rect::new(0.0, scroll, 400.0, scroll + 800.0)
    }

    #[test]
    fn span_covers_all_sections() {
        let span = three_stacked();
        assert_eq!(span.first_top, 0.0);
        assert_eq!(span.last_bottom, 3000.0);
        assert_eq!(span.count(), 3);
    }

    #[test]
    fn top_of_page_reads_zero() {
        assert_eq!(three_stacked().progress(viewport_at(0.0), 0.4), 0.0);
    }

    #[test]
    fn reference_point_inside_second_section() {
        let p = three_stacked().progress(viewport_at(1200.0), 0.4);
        assert!(approx(p, 1520.0 / 3000.0), "progress was {p}");
    }

    #[test]
    fn last_screen_follows_the_reference_point() {
        let span = three_stacked();
        // Viewport bottom sits on the last bottom; the reference point does not yet.
        let p = span.progress(viewport_at(2200.0), 0.4);
        assert!(approx(p, 2520.0 / 3000.0), "progress was {p}");
        let before = span.progress(viewport_at(2199.0), 0.4);
        assert!(p - before < 1e-3, "jump from {before} to {p}");
    }

    #[test]
    fn reference_point_past_last_bottom_reads_one() {
        assert_eq!(three_stacked().progress(viewport_at(2680.0), 0.4), 1.0);
        assert_eq!(three_stacked().progress(viewport_at(9000.0), 0.4), 1.0);
    }

    #[test]
    fn single_section_is_always_zero() {
        let span = SectionSpan::from_bounds([Rect::new(0.0, 0.0, 400.0, 5000.0)]).unwrap();
        for scroll in [0.0, 100.0, 2500.0, 10_000.0] {
            assert_eq!(span.progress(viewport_at(scroll), 0.4), 0.0);
        }
    }

    #[test]
    fn degenerate_span_is_zero() {
        let line = Rect::new(0.0, 500.0, 400.0, 500.0);
        let span = SectionSpan::from_bounds([line, line]).unwrap();
        assert_eq!(span.total(), 0.0);
        assert_eq!(span.progress(viewport_at(600.0), 0.4), 0.0);
    }

    #[test]
    fn empty_bounds_have_no_span() {
        assert!(SectionSpan::from_bounds(core::iter::empty()).is_none());
    }
}
