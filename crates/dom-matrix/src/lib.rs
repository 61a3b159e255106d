#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the matrix module.
pub mod error;

/// 4x4 transformation matrix with 2D alias accessors.
pub mod matrix;

mod bincode;
mod serde;

pub use crate::error::MatrixError;
pub use crate::matrix::DomMatrix;
