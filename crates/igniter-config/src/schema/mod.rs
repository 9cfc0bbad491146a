//! Per-revision config structures.
//!
//! Each submodule describes exactly one schema revision. Types that did not
//! change between revisions are re-exported from the revision that
//! introduced them. Only [`v3_0_exp`] is exposed to provisioning stages;
//! the rest exist to be decoded and translated.

pub mod v1;
pub mod v2_0;
pub mod v2_1;
pub mod v2_2;
pub mod v2_3;
pub mod v2_4_exp;
pub mod v3_0_exp;

/// The latest config shape.
pub use v3_0_exp as latest;
