// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intersection math between section boxes and the activation band.

use kurbo::Rect;

use crate::types::SectionPosition;

/// Fraction of `section` that lies inside `band`, in `[0, 1]`.
///
/// Sections with no height report `1.0` when they sit within the band's
/// vertical span and `0.0` otherwise, matching how a browser treats empty targets.
/// Sections with height but no width are measured by the share of their height
/// inside the band, provided they sit within its horizontal span.
pub fn intersection_ratio(section: Rect, band: Rect) -> f64 {
    let height = section.height();
    if height <= 0.0 {
        return if overlaps_vertically(section, band) {
            1.0
        } else {
            0.0
        };
    }
    let overlap = section.intersect(band);
    let ratio = if section.width() <= 0.0 {
        if section.x0 < band.x0 || section.x0 > band.x1 {
            return 0.0;
        }
        overlap.height() / height
    } else {
        overlap.area() / section.area()
    };
    if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// True when the two boxes share any vertical extent (edges included).
pub fn overlaps_vertically(section: Rect, band: Rect) -> bool {
    section.y0 <= band.y1 && section.y1 >= band.y0
}

/// True when `section` overlaps `band` with a positive ratio, or touches it for
/// a section with no height.
pub fn is_intersecting(section: Rect, band: Rect) -> bool {
    if section.height() <= 0.0 {
        overlaps_vertically(section, band)
    } else {
        section.y0 < band.y1
            && section.y1 > band.y0
            && section.x0 <= band.x1
            && section.x1 >= band.x0
            && intersection_ratio(section, band) > 0.0
    }
}

/// Classify where `section` sits relative to `band`.
pub fn classify(section: Rect, band: Rect) -> SectionPosition {
    if section.y1 <= band.y0 && section.y0 < band.y0 {
        SectionPosition::Above
    } else if section.y0 >= band.y1 && section.y1 > band.y1 {
        SectionPosition::Below
    } else {
        SectionPosition::Visible
    }
}
