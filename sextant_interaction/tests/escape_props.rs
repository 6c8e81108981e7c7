// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for escape-stack ordering.

use proptest::prelude::*;
use sextant_interaction::escape::EscapeStack;

proptest! {
    #[test]
    fn pop_order_is_priority_then_latest(priorities in prop::collection::vec(-5_i32..5, 0..32)) {
        let mut stack = EscapeStack::new();
        for (i, p) in priorities.iter().enumerate() {
            let _ = stack.push((*p, i), *p);
        }

        // Expected: highest priority first, later pushes first among equals.
        let mut expected: Vec<(i32, usize)> = priorities.iter().copied().zip(0..).collect();
        expected.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));

        let mut popped = Vec::new();
        while let Some(entry) = stack.pop() {
            popped.push(entry);
        }
        prop_assert_eq!(popped, expected);
    }

    #[test]
    fn dispatch_runs_exactly_one_handler(count in 1_usize..16, top in 0_usize..16) {
        let top = top % count;
        let mut hits = vec![0_u32; count];
        {
            let mut stack: EscapeStack<Box<dyn FnMut() + '_>> = EscapeStack::new();
            for (i, slot) in hits.iter_mut().enumerate() {
                let priority = if i == top { 100 } else { 0 };
                let _ = stack.push(Box::new(move || *slot += 1), priority);
            }
            prop_assert!(stack.dispatch().is_some());
        }
        prop_assert_eq!(hits.iter().sum::<u32>(), 1);
        prop_assert_eq!(hits[top], 1);
    }
}
