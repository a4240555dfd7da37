//! # lutra-ops
//!
//! Pixel operators for the lutra color-management engine.
//!
//! The centerpiece of this crate is the 1D LUT subsystem: a compact table
//! type with strict well-formedness invariants, a reliable inversion
//! scheme for tabulated curves, and functional composition of operators
//! into a single table.
//!
//! # Modules
//!
//! - [`lut1d`] - 1D LUT data model, inversion, composition
//! - [`matrix`] - Matrix operator
//! - [`range`] - Range (clamp/remap) operator
//! - [`op`] - The evaluator-chain interface all operators implement
//!
//! # Example
//!
//! ```rust
//! use lutra_ops::lut1d::{compose, ComposeMethod, Lut1D};
//!
//! let mut a = Lut1D::new(1024).unwrap();
//! let b = Lut1D::new(1024).unwrap();
//! compose(&mut a, &b, ComposeMethod::ResampleNo).unwrap();
//! assert!(a.is_identity());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod lut1d;
pub mod matrix;
pub mod op;
pub mod range;

pub use error::{OpsError, OpsResult};
pub use lut1d::Lut1D;
pub use op::{eval_transform, Op, OpVec};
