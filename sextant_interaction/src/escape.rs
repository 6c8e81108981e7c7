// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Escape-key stack: only the topmost handler reacts to Escape.
//!
//! ## Ordering
//!
//! - Handlers are ranked by priority; higher wins.
//! - Equal priorities are stable and the most recently pushed wins, so a dialog
//!   opened over another dialog closes first.
//! - Disabled handlers are skipped as if absent, but keep their place.
//!
//! ## Ownership
//!
//! An [`EscapeStack`] is an ordinary value. Give each window, overlay root, or
//! test its own instance; there is no global registry.
//!
//! ## Minimal example
//!
//! ```
//! use sextant_interaction::escape::EscapeStack;
//!
//! let mut closed = Vec::new();
//! {
//!     let mut stack: EscapeStack<Box<dyn FnMut() + '_>> = EscapeStack::new();
//!     let _menu = stack.push(Box::new(|| closed.push("menu")), 10);
//!     assert!(stack.dispatch().is_some());
//! }
//! assert_eq!(closed, ["menu"]);
//! ```

use alloc::vec::Vec;

use tracing::{debug, trace};

/// Handle returned by [`EscapeStack::push`].
///
/// Ids are never reused within a stack, so a stale id cannot remove a newer handler.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandlerId(u64);

#[derive(Debug)]
struct Entry<H> {
    id: HandlerId,
    priority: i32,
    enabled: bool,
    handler: H,
}

/// A priority-ordered stack of escape handlers.
///
/// `H` is usually a closure type such as `Box<dyn FnMut()>`; any payload works
/// for [`peek`](Self::peek)/[`pop`](Self::pop), and [`dispatch`](Self::dispatch)
/// is available when `H: FnMut()`.
#[derive(Debug)]
pub struct EscapeStack<H> {
    entries: Vec<Entry<H>>,
    next_id: u64,
}

impl<H> Default for EscapeStack<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> EscapeStack<H> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Register `handler` at `priority` and return its id.
    pub fn push(&mut self, handler: H, priority: i32) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            priority,
            enabled: true,
            handler,
        });
        trace!(?id, priority, depth = self.entries.len(), "escape handler pushed");
        id
    }

    /// Remove and return the handler that would receive the next Escape.
    pub fn pop(&mut self) -> Option<H> {
        let i = self.top_index()?;
        Some(self.entries.remove(i).handler)
    }

    /// The handler that would receive the next Escape.
    pub fn peek(&self) -> Option<&H> {
        self.top_index().map(|i| &self.entries[i].handler)
    }

    /// Id of the handler that would receive the next Escape.
    pub fn peek_id(&self) -> Option<HandlerId> {
        self.top_index().map(|i| self.entries[i].id)
    }

    /// Remove a specific handler, wherever it sits. Unknown ids return `None`.
    pub fn remove(&mut self, id: HandlerId) -> Option<H> {
        let i = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(i).handler)
    }

    /// Enable or disable a handler without changing its place.
    ///
    /// Returns `false` if `id` is unknown.
    pub fn set_enabled(&mut self, id: HandlerId, enabled: bool) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(e) => {
                e.enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Number of registered handlers, enabled or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every handler.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // Single pass without sorting: higher priority wins, equal priority prefers
    // the later entry (stable last wins).
    fn top_index(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, e) in self.entries.iter().enumerate() {
            if !e.enabled {
                continue;
            }
            match best {
                Some(j) if self.entries[j].priority > e.priority => {}
                _ => best = Some(i),
            }
        }
        best
    }
}

impl<H: FnMut()> EscapeStack<H> {
    /// Deliver an Escape press to the topmost enabled handler.
    ///
    /// Returns the id of the handler that ran, or `None` if the key should fall
    /// through to the host.
    pub fn dispatch(&mut self) -> Option<HandlerId> {
        let i = self.top_index()?;
        let entry = &mut self.entries[i];
        debug!(id = ?entry.id, priority = entry.priority, "escape dispatched");
        (entry.handler)();
        Some(entry.id)
    }
}
