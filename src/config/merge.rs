//! Merge rules for layering the user's settings over the defaults.

pub mod merge_policy;
