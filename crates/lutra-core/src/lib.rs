//! # lutra-core
//!
//! Core types for the lutra color-management engine.
//!
//! This crate provides the canonical definitions shared by the engine
//! crates. It is the foundation of the workspace and has no dependencies:
//!
//! ```text
//! lutra-core (this crate)
//!    ^
//!    |
//!    +-- lutra-ops (pixel operators, LUT processing)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod format;

pub use format::BitDepth;
