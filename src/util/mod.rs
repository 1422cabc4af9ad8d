//! Internal utilities for word-level bit manipulation.
//!
//! Most users should not need to use these directly.

pub(crate) mod broadword;

pub(crate) use broadword::{low_mask, select_in_word};
