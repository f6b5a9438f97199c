//! Merge rules: defaults first, user file second, one level deep.

use serde_yaml::Mapping;
use tracing::debug;

/// Layer `overrides` on top of `base`.
///
/// Each top-level key in `overrides` replaces the entry in `base` wholesale,
/// keeping the base entry's position. Nested mappings are not merged: an
/// override of `docker-janitor` that only lists `safe_images` leaves no
/// `safe_containers` or `safe_volumes` behind.
pub fn shallow_merge(mut base: Mapping, overrides: Mapping) -> Mapping {
    for (key, value) in overrides {
        debug!(key = ?key, "Replacing settings entry from user file");
        base.insert(key, value);
    }
    base
}
