// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Long-press gesture: a linear stage machine with movement tolerance.
//!
//! ## Stages
//!
//! ```text
//! Idle ─press─▶ Pressing ─preview_after─▶ Preview ─ready_after─▶ Ready ─release─▶ Revealed ─dismiss─▶ Idle
//! ```
//!
//! - Moving farther than `move_tolerance` from the press point before `Ready`
//!   cancels back to `Idle`. After `Ready` the pointer may wander.
//! - Releasing before `Ready` cancels; releasing at `Ready` reveals.
//! - [`LongPress::cancel`] (pointer cancel, focus loss) aborts any stage before `Revealed`.
//!
//! The machine never reads a clock. Feed it the host's timestamps and call
//! [`LongPress::tick`] from an animation frame or timer to advance stages while
//! the pointer is still.
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::Point;
//! use sextant_interaction::long_press::{LongPress, LongPressConfig, LongPressEvent, Stage};
//!
//! let mut lp = LongPress::new(LongPressConfig::default());
//! let at = |ms| Duration::from_millis(ms);
//! let _ = lp.press(Point::new(10.0, 10.0), at(0));
//! let _ = lp.tick(at(600));
//! assert_eq!(lp.stage(), Stage::Ready);
//! assert_eq!(lp.release(at(650)), vec![LongPressEvent::Stage(Stage::Revealed)]);
//! ```

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::Point;
use thiserror::Error;
use tracing::debug;

/// Stage of a long press.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Stage {
    /// No pointer down.
    #[default]
    Idle,
    /// Pointer down, nothing shown yet.
    Pressing,
    /// A preview of the hidden content is showing.
    Preview,
    /// Held long enough; releasing now reveals.
    Ready,
    /// Content revealed; waits for [`LongPress::dismiss`].
    Revealed,
}

/// Why a press was abandoned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CancelReason {
    /// The pointer moved beyond the tolerance before `Ready`.
    Moved,
    /// The pointer was released before `Ready`.
    ReleasedEarly,
    /// The host aborted the press.
    Interrupted,
}

/// Transition reported by [`LongPress`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LongPressEvent {
    /// Entered the given stage.
    Stage(Stage),
    /// The press was abandoned; a `Stage(Idle)` follows.
    Cancelled(CancelReason),
}

/// Invalid long-press timing or tolerance.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LongPressConfigError {
    /// `ready_after` must be later than `preview_after`.
    #[error("ready delay ({ready:?}) must be later than the preview delay ({preview:?})")]
    StagesOutOfOrder {
        /// Configured preview delay.
        preview: Duration,
        /// Configured ready delay.
        ready: Duration,
    },
    /// The tolerance must be a finite, non-negative distance.
    #[error("move tolerance must be finite and non-negative, got {0}")]
    BadTolerance(f64),
}

/// Timings and tolerance for [`LongPress`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LongPressConfig {
    /// Hold time before the preview shows. Default 150 ms.
    pub preview_after: Duration,
    /// Hold time before release reveals. Default 500 ms.
    pub ready_after: Duration,
    /// Pointer travel, in logical pixels, tolerated before `Ready`. Default 10.
    pub move_tolerance: f64,
}

impl Default for LongPressConfig {
    fn default() -> Self {
        Self {
            preview_after: Duration::from_millis(150),
            ready_after: Duration::from_millis(500),
            move_tolerance: 10.0,
        }
    }
}

impl LongPressConfig {
    /// Check stage ordering and tolerance.
    pub fn validate(&self) -> Result<(), LongPressConfigError> {
        if self.ready_after <= self.preview_after {
            return Err(LongPressConfigError::StagesOutOfOrder {
                preview: self.preview_after,
                ready: self.ready_after,
            });
        }
        if !self.move_tolerance.is_finite() || self.move_tolerance < 0.0 {
            return Err(LongPressConfigError::BadTolerance(self.move_tolerance));
        }
        Ok(())
    }
}

/// Long-press state machine.
#[derive(Clone, Debug)]
pub struct LongPress {
    config: LongPressConfig,
    stage: Stage,
    origin: Point,
    pressed_at: Duration,
    elapsed: Duration,
}

impl LongPress {
    /// Create an idle machine.
    pub fn new(config: LongPressConfig) -> Self {
        Self {
            config,
            stage: Stage::Idle,
            origin: Point::ZERO,
            pressed_at: Duration::ZERO,
            elapsed: Duration::ZERO,
        }
    }

    /// Current stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Hold progress toward `Ready`, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        match self.stage {
            Stage::Idle => 0.0,
            Stage::Ready | Stage::Revealed => 1.0,
            Stage::Pressing | Stage::Preview => {
                let total = self.config.ready_after.as_secs_f64();
                if total <= 0.0 {
                    1.0
                } else {
                    (self.elapsed.as_secs_f64() / total).clamp(0.0, 1.0)
                }
            }
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &LongPressConfig {
        &self.config
    }

    /// Pointer down at `point`. Ignored unless idle.
    pub fn press(&mut self, point: Point, now: Duration) -> Vec<LongPressEvent> {
        if self.stage != Stage::Idle {
            return Vec::new();
        }
        self.origin = point;
        self.pressed_at = now;
        self.elapsed = Duration::ZERO;
        let mut out = Vec::new();
        self.enter(Stage::Pressing, &mut out);
        self.advance(now, &mut out);
        out
    }

    /// Pointer moved to `point`.
    ///
    /// Time is settled first, so a move that arrives after the ready delay is
    /// judged as a move in `Ready`, where it is allowed.
    pub fn pointer_move(&mut self, point: Point, now: Duration) -> Vec<LongPressEvent> {
        let mut out = Vec::new();
        self.advance(now, &mut out);
        if !matches!(self.stage, Stage::Pressing | Stage::Preview) {
            return out;
        }
        let tol = self.config.move_tolerance;
        if (point - self.origin).hypot2() > tol * tol {
            self.abort(CancelReason::Moved, &mut out);
        }
        out
    }

    /// Advance stages by the time elapsed since the press.
    pub fn tick(&mut self, now: Duration) -> Vec<LongPressEvent> {
        let mut out = Vec::new();
        self.advance(now, &mut out);
        out
    }

    /// Pointer up.
    pub fn release(&mut self, now: Duration) -> Vec<LongPressEvent> {
        let mut out = Vec::new();
        self.advance(now, &mut out);
        match self.stage {
            Stage::Ready => self.enter(Stage::Revealed, &mut out),
            Stage::Pressing | Stage::Preview => self.abort(CancelReason::ReleasedEarly, &mut out),
            Stage::Idle | Stage::Revealed => {}
        }
        out
    }

    /// Abort an in-flight press (pointer cancel, blur).
    pub fn cancel(&mut self) -> Vec<LongPressEvent> {
        let mut out = Vec::new();
        if matches!(self.stage, Stage::Pressing | Stage::Preview | Stage::Ready) {
            self.abort(CancelReason::Interrupted, &mut out);
        }
        out
    }

    /// Close revealed content and return to idle.
    pub fn dismiss(&mut self) -> Vec<LongPressEvent> {
        let mut out = Vec::new();
        if self.stage == Stage::Revealed {
            self.enter(Stage::Idle, &mut out);
        }
        out
    }

    fn advance(&mut self, now: Duration, out: &mut Vec<LongPressEvent>) {
        if !matches!(self.stage, Stage::Pressing | Stage::Preview) {
            return;
        }
        self.elapsed = now.saturating_sub(self.pressed_at);
        if self.stage == Stage::Pressing && self.elapsed >= self.config.preview_after {
            self.enter(Stage::Preview, out);
        }
        if self.stage == Stage::Preview && self.elapsed >= self.config.ready_after {
            self.enter(Stage::Ready, out);
        }
    }

    fn abort(&mut self, reason: CancelReason, out: &mut Vec<LongPressEvent>) {
        debug!(?reason, stage = ?self.stage, "long press cancelled");
        out.push(LongPressEvent::Cancelled(reason));
        self.enter(Stage::Idle, out);
    }

    fn enter(&mut self, stage: Stage, out: &mut Vec<LongPressEvent>) {
        debug!(from = ?self.stage, to = ?stage, "long press stage");
        self.stage = stage;
        if stage == Stage::Idle {
            self.elapsed = Duration::ZERO;
        }
        out.push(LongPressEvent::Stage(stage));
    }
}
