// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.
//!
//! Runtime conditions such as an unresolvable section target or a stale
//! navigation id are not errors; they are logged and ignored.

use thiserror::Error;

use crate::types::SectionId;

/// Invalid tracker configuration or section registry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A fraction-valued setting was outside `[0, 1]` (or not finite).
    #[error("{name} must be within [0, 1], got {value}")]
    OutOfUnitRange {
        /// Name of the offending setting.
        name: &'static str,
        /// Supplied value.
        value: f64,
    },

    /// Band margins leave no room for the band itself.
    #[error("activation band margins must sum to less than 1 (top {top}, bottom {bottom})")]
    EmptyBand {
        /// Top inset fraction.
        top: f64,
        /// Bottom inset fraction.
        bottom: f64,
    },

    /// The observer needs at least one step.
    #[error("intersection steps must be at least 1")]
    ZeroSteps,

    /// The scroll offset must be a finite number.
    #[error("scroll offset must be finite, got {0}")]
    NonFiniteOffset(f64),

    /// An empty string was used as a section id.
    #[error("section ids must not be empty")]
    EmptySectionId,

    /// Two sections share an id.
    #[error("duplicate section id `{0}`")]
    DuplicateSection(SectionId),
}

/// Check that `value` is a finite fraction.
pub(crate) fn check_unit(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { name, value })
    }
}
