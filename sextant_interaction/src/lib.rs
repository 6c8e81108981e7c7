// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sextant Interaction: deterministic, `no_std` state machines for UI input.
//!
//! ## Overview
//!
//! Small, linear state machines that sit next to widgets rather than inside a
//! toolkit. None of them read a clock or touch a platform API; the host forwards
//! events (with timestamps where timing matters) and applies the transitions
//! they return.
//!
//! - [`escape`]: an owned, priority-ordered stack of Escape handlers. Only the
//!   topmost enabled handler runs; equal priorities prefer the latest push.
//! - [`long_press`]: idle → pressing → preview → ready → revealed, cancelled by
//!   movement beyond a tolerance or by releasing early.
//! - [`nav_mode`]: ambient → engaged → palette-open for section-navigation widgets.
//!
//! ## Layering
//!
//! These machines only compute transitions. Rendering, focus management and
//! animation belong to the host. With the `tracker_adapter` feature,
//! [`adapters::tracker`](crate::adapters) feeds `sextant_tracker` updates into
//! [`nav_mode`].
//!
//! ## Workflow
//!
//! 1) Own one [`EscapeStack`](crate::escape::EscapeStack) per overlay root and push a
//!    handler whenever a dismissible surface opens; remove it when the surface closes.
//! 2) Route key presses: on Escape call [`EscapeStack::dispatch`](crate::escape::EscapeStack::dispatch);
//!    if it returns `None`, let the key fall through.
//! 3) Drive [`LongPress`](crate::long_press::LongPress) from pointer events and an
//!    animation-frame tick; render from [`Stage`](crate::long_press::Stage) and `progress()`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod escape;
pub mod long_press;
pub mod nav_mode;
