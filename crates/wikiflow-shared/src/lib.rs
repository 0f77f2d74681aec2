//! # wikiflow-shared
//!
//! Enums, constants and pure helpers shared by every WikiFlow crate.

pub mod constants;
pub mod permissions;
pub mod types;
