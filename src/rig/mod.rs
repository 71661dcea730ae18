//! Rig descriptor module
//!
//! The static bone topology loaded from JSON, plus the Mixamo-specific entry
//! points built on top of it.

pub mod hierarchy;
pub mod mixamo;

pub use hierarchy::{HierarchyError, HierarchyNode};
