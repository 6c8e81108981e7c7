// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the tracker: section identity, descriptors, visibility, and navigation options.
//!
//! ## Overview
//!
//! These types describe what a caller registers and what the tracker reports back.
//! They are referenced by the [`tracker`](crate::tracker) and used by downstream widgets.

use alloc::string::String;
use core::fmt;

/// Stable key of a section.
///
/// Section ids are plain strings so that they can be shared with markup anchors
/// (for example `#pricing`) and persisted in URLs.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SectionId(String);

impl SectionId {
    /// Create a section id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Return the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A navigable section registered with the tracker.
///
/// `target` is opaque to the tracker. It is handed to
/// [`SectionLayout::bounds_of`](crate::host::SectionLayout::bounds_of) to find the
/// section's box, so it can be an element handle, a node id, or a lookup key.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionDescriptor<T> {
    /// Unique key.
    pub id: SectionId,
    /// Display text. Also matched by [`filter_sections`](crate::search::filter_sections).
    pub label: String,
    /// Handle used to locate the section's box.
    pub target: T,
    /// Optional icon name, opaque to tracking.
    pub icon: Option<String>,
    /// Optional description, opaque to tracking.
    pub description: Option<String>,
}

impl<T> SectionDescriptor<T> {
    /// Create a descriptor with no icon or description.
    pub fn new(id: impl Into<SectionId>, label: impl Into<String>, target: T) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            target,
            icon: None,
            description: None,
        }
    }

    /// Set the icon name.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Coarse placement of a section relative to the activation band.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SectionPosition {
    /// Entirely above the band (already scrolled past).
    Above,
    /// Overlapping the band.
    Visible,
    /// Entirely below the band (not reached yet).
    #[default]
    Below,
}

/// Latest visibility report for a section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionVisibility {
    /// Section this report belongs to.
    pub id: SectionId,
    /// Fraction of the section's box inside the activation band, in `[0, 1]`.
    pub visibility_ratio: f64,
    /// True when the section intersects and `visibility_ratio` exceeds the configured threshold.
    pub is_active: bool,
    /// Placement relative to the activation band.
    pub position: SectionPosition,
}

/// How a programmatic scroll should move.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ScrollBehavior {
    /// Animate to the destination.
    #[default]
    Smooth,
    /// Jump to the destination.
    Instant,
}

/// One-shot overrides for [`SectionTracker::scroll_to_section`](crate::tracker::SectionTracker::scroll_to_section).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollOptions {
    /// Overrides the configured scroll behavior.
    pub behavior: Option<ScrollBehavior>,
    /// Overrides the configured offset (for example a sticky header height).
    pub offset: Option<f64>,
}

/// Direction for keyboard-style navigation between neighboring sections.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The section after the active one.
    Next,
    /// The section before the active one.
    Previous,
}

/// A transition of the active section.
///
/// Only produced when the active section actually changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionChange {
    /// Newly active section, if any.
    pub current: Option<SectionId>,
    /// Previously active section, if any.
    pub previous: Option<SectionId>,
}

bitflags::bitflags! {
    /// Which parts of the tracker's observable state changed during an update.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Changed: u8 {
        /// At least one section's visibility report changed.
        const VISIBILITY = 0b0000_0001;
        /// The active section changed.
        const ACTIVE     = 0b0000_0010;
        /// The progress scalar changed.
        const PROGRESS   = 0b0000_0100;
        /// The "is scrolling" flag flipped.
        const SCROLLING  = 0b0000_1000;
    }
}

/// Result of feeding an event into the tracker.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Update {
    /// Parts of the state that changed.
    pub changed: Changed,
    /// Active-section transition, when [`Changed::ACTIVE`] is set.
    pub transition: Option<SectionChange>,
}

impl Update {
    /// True if nothing observable changed.
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty()
    }

    pub(crate) fn merge(&mut self, other: Self) {
        self.changed |= other.changed;
        if other.transition.is_some() {
            self.transition = other.transition;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_id_compares_with_str() {
        let id = SectionId::from("intro");
        assert_eq!(id, "intro");
        assert_eq!(id.as_str(), "intro");
        assert_eq!(alloc::format!("{id}"), "intro");
    }

    #[test]
    fn descriptor_builders_fill_optional_fields() {
        let d = SectionDescriptor::new("faq", "FAQ", 3_u32)
            .with_icon("help")
            .with_description("Common questions");
        assert_eq!(d.icon.as_deref(), Some("help"));
        assert_eq!(d.description.as_deref(), Some("Common questions"));
        assert_eq!(d.target, 3);
    }

    #[test]
    fn update_merge_keeps_latest_transition() {
        let mut a = Update {
            changed: Changed::PROGRESS,
            transition: None,
        };
        a.merge(Update {
            changed: Changed::ACTIVE,
            transition: Some(SectionChange {
                current: Some("b".into()),
                previous: Some("a".into()),
            }),
        });
        assert_eq!(a.changed, Changed::PROGRESS | Changed::ACTIVE);
        assert_eq!(
            a.transition.and_then(|t| t.current),
            Some(SectionId::from("b"))
        );
    }
}
