//! Hash-keyed lookup over one page of casts

use std::collections::HashMap;

use crate::models::Cast;

/// Build a map from cast hash to cast.
///
/// Duplicate hashes are not expected from a hub, but if one appears the first
/// occurrence wins and later copies are ignored.
#[must_use]
pub fn build_cast_index(casts: &[Cast]) -> HashMap<&str, &Cast> {
    let mut index: HashMap<&str, &Cast> = HashMap::with_capacity(casts.len());
    for cast in casts {
        index.entry(cast.hash.as_str()).or_insert(cast);
    }
    index
}
