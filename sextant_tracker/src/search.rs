// Copyright 2025 the Sextant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Section lookup for command-palette style jump menus.

use alloc::string::String;
use alloc::vec::Vec;

use crate::types::SectionDescriptor;

/// Return the sections whose label or description contains `query`,
/// ignoring case, in registration order.
///
/// Surrounding whitespace in `query` is ignored; an empty query matches everything.
///
/// ```
/// use sextant_tracker::search::filter_sections;
/// use sextant_tracker::types::SectionDescriptor;
///
/// let sections = [
///     SectionDescriptor::new("intro", "Introduction", ()),
///     SectionDescriptor::new("api", "API", ()).with_description("Reference for every call"),
///     SectionDescriptor::new("faq", "FAQ", ()),
/// ];
/// let hits: Vec<_> = filter_sections(&sections, "ref").iter().map(|s| s.id.as_str()).collect();
/// assert_eq!(hits, ["api"]);
/// ```
pub fn filter_sections<'a, T>(
    sections: &'a [SectionDescriptor<T>],
    query: &str,
) -> Vec<&'a SectionDescriptor<T>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return sections.iter().collect();
    }
    sections
        .iter()
        .filter(|s| {
            contains_folded(&s.label, &needle)
                || s.description
                    .as_deref()
                    .is_some_and(|d| contains_folded(d, &needle))
        })
        .collect()
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    let folded: String = haystack.to_lowercase();
    folded.contains(needle)
}
