// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracker configuration and its defaults.
//!
//! | Field | Default |
//! |---|---|
//! | [`band`](TrackerConfig::band) | top `0.2`, bottom `0.4` |
//! | [`threshold`](TrackerConfig::threshold) | `0.3` |
//! | [`behavior`](TrackerConfig::behavior) | [`ScrollBehavior::Smooth`] |
//! | [`scroll_offset`](TrackerConfig::scroll_offset) | `0.0` |
//! | [`settle`](TrackerConfig::settle) | 50 ms |
//! | [`progress_anchor`](TrackerConfig::progress_anchor) | `0.4` |
//! | [`steps`](TrackerConfig::steps) | `10` |
//!
//! With the `serde` feature both types deserialize with missing fields filled from
//! these defaults.

use core::time::Duration;

use kurbo::Rect;

use crate::error::{ConfigError, check_unit};
use crate::types::ScrollBehavior;

/// The sub-region of the viewport in which sections compete for "active".
///
/// Margins are fractions of the viewport height inset from the top and bottom
/// edges. The default band spans 20%–60% of the viewport, so a section becomes
/// active a little before it is centered.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ActivationBand {
    /// Fraction of the viewport height excluded at the top.
    pub top: f64,
    /// Fraction of the viewport height excluded at the bottom.
    pub bottom: f64,
}

impl Default for ActivationBand {
    fn default() -> Self {
        Self {
            top: 0.2,
            bottom: 0.4,
        }
    }
}

impl ActivationBand {
    /// A band covering the whole viewport.
    pub const FULL: Self = Self {
        top: 0.0,
        bottom: 0.0,
    };

    /// Inset a document-space viewport rectangle to this band.
    pub fn apply(&self, viewport: Rect) -> Rect {
        let h = viewport.height();
        Rect::new(
            viewport.x0,
            viewport.y0 + h * self.top,
            viewport.x1,
            viewport.y1 - h * self.bottom,
        )
    }

    /// Check that both margins are fractions and leave a non-empty band.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unit("band.top", self.top)?;
        check_unit("band.bottom", self.bottom)?;
        if self.top + self.bottom >= 1.0 {
            return Err(ConfigError::EmptyBand {
                top: self.top,
                bottom: self.bottom,
            });
        }
        Ok(())
    }
}

/// Configuration for a [`SectionTracker`](crate::tracker::SectionTracker).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct TrackerConfig {
    /// Where in the viewport sections compete for "active".
    pub band: ActivationBand,
    /// Ratio a section must exceed to be flagged [`is_active`](crate::types::SectionVisibility::is_active).
    pub threshold: f64,
    /// Default behavior of programmatic scrolls.
    pub behavior: ScrollBehavior,
    /// Default distance kept between a navigated section's top and the viewport top.
    pub scroll_offset: f64,
    /// How long after the last scroll event the tracker stops reporting "scrolling".
    pub settle: Duration,
    /// Fraction of the viewport height used as the progress reference point.
    pub progress_anchor: f64,
    /// Number of equal ratio steps that trigger a visibility report.
    pub steps: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            band: ActivationBand::default(),
            threshold: 0.3,
            behavior: ScrollBehavior::Smooth,
            scroll_offset: 0.0,
            settle: Duration::from_millis(50),
            progress_anchor: 0.4,
            steps: 10,
        }
    }
}

impl TrackerConfig {
    /// Check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.band.validate()?;
        check_unit("threshold", self.threshold)?;
        check_unit("progress_anchor", self.progress_anchor)?;
        if !self.scroll_offset.is_finite() {
            return Err(ConfigError::NonFiniteOffset(self.scroll_offset));
        }
        if self.steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        Ok(())
    }
}
