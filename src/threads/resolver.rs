//! Thread root resolution
//!
//! A cast's thread root is found by walking parent references upward while the
//! parent belongs to the same author and its record is present in the index.
//! The walk stops at the first cast with no parent, a cross-author parent, or
//! a parent hash the fetched page does not contain (casts outside the page or
//! already deleted). A hub should never hand back a parent cycle, but a broken
//! one must not hang the pipeline, so visited hashes are tracked.

use std::collections::HashMap;
use std::collections::HashSet;

use crate::models::Cast;

/// Resolve the thread root for `cast` within one page of casts.
#[must_use]
pub fn resolve_thread_root<'a>(
    cast: &'a Cast,
    index: &HashMap<&str, &'a Cast>,
    author_fid: u64,
) -> &'a Cast {
    let mut current = cast;
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(current.hash.as_str());

    while let Some(parent) = &current.parent {
        // Replies into another author's thread stop here; the grouper decides
        // whether the stopped-at cast is kept or excluded
        if parent.fid != author_fid {
            break;
        }
        let Some(&next) = index.get(parent.hash.as_str()) else {
            // Parent outside the fetched page: current cast becomes the root
            break;
        };
        if !visited.insert(next.hash.as_str()) {
            tracing::warn!(
                "Parent chain cycle detected at cast {}, stopping walk",
                next.hash
            );
            break;
        }
        current = next;
    }

    current
}
