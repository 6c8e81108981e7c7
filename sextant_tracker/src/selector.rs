// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-section selection.
//!
//! ## Ties
//!
//! Candidates are ranked by visibility ratio. On an exact tie the previously
//! active section keeps its place, so scrolling through a symmetric layout does
//! not flicker. Otherwise the earliest registered candidate wins.

/// Pick the active section from per-section ratios, in registration order.
///
/// `ratios[i]` is `None` for sections that have never been reported (or could not
/// be resolved). Only sections with a ratio strictly above zero are candidates.
/// `previous` is the index of the currently active section, if any.
pub fn select_active(ratios: &[Option<f64>], previous: Option<usize>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, ratio) in ratios.iter().enumerate() {
        let Some(r) = *ratio else { continue };
        if r <= 0.0 {
            continue;
        }
        match best {
            None => best = Some((i, r)),
            Some((_, b)) if r > b => best = Some((i, r)),
            Some((_, b)) if r == b && Some(i) == previous => best = Some((i, r)),
            Some(_) => {}
        }
    }
    best.map(|(i, _)| i)
}
