// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host capabilities the tracker consumes.
//!
//! The tracker never touches a document directly. A host (a browser binding, a
//! layout engine, or a test fake) implements these traits and owns the actual
//! scroll position.
//!
//! All rectangles are in document space: element offset plus the current scroll
//! position, so values stay put while the page scrolls.

use kurbo::Rect;

use crate::types::ScrollBehavior;

/// Resolve section targets to boxes and report the viewport.
pub trait SectionLayout<T> {
    /// Returns the document-space box of `target`, or `None` if it cannot be located.
    fn bounds_of(&self, target: &T) -> Option<Rect>;

    /// Returns the visible region of the document.
    ///
    /// `y0` is the current scroll offset and `height()` the viewport height.
    fn viewport(&self) -> Rect;
}

/// Move the host's scroll position.
pub trait Scroller {
    /// Scroll so that document coordinate `y` sits at the viewport top.
    ///
    /// Smooth scrolls complete asynchronously; the host reports the movement back
    /// through [`SectionTracker::on_scroll`](crate::tracker::SectionTracker::on_scroll).
    fn scroll_to(&mut self, y: f64, behavior: ScrollBehavior);
}
