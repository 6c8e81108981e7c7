// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to integrate with other Sextant crates.
//!
//! Enabled via feature flags to keep the core small and `no_std` by default.

#[cfg(feature = "tracker_adapter")]
pub mod tracker;
