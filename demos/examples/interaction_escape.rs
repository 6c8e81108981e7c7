// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Escape handling across stacked overlays.
//!
//! A page opens a menu, then a dialog over it, then a tooltip at the same
//! priority as the dialog. Each Escape closes exactly one surface, topmost first.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p sextant_demos --example interaction_escape`

use std::cell::RefCell;
use std::rc::Rc;

use sextant_interaction::escape::EscapeStack;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let open = Rc::new(RefCell::new(vec!["menu", "dialog", "tooltip"]));
    let closer = |name: &'static str| {
        let open = open.clone();
        Box::new(move || open.borrow_mut().retain(|s| *s != name)) as Box<dyn FnMut()>
    };

    let mut stack = EscapeStack::new();
    let _ = stack.push(closer("menu"), 10);
    let dialog = stack.push(closer("dialog"), 20);
    let _ = stack.push(closer("tooltip"), 20);

    // The dialog is busy (e.g. a confirmation is pending); skip it for now.
    let _ = stack.set_enabled(dialog, false);

    for press in 1..=4 {
        let handled = stack.dispatch();
        if let Some(id) = handled {
            let _ = stack.remove(id);
        }
        println!(
            "Escape #{press}: handled={:?} open={:?}",
            handled,
            open.borrow()
        );
        if press == 2 {
            let _ = stack.set_enabled(dialog, true);
        }
    }

    assert!(open.borrow().is_empty());
    assert!(stack.is_empty());
}
