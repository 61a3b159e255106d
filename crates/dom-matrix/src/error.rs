/// An error type for the matrix module.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Error when the init sequence holds neither 6 nor 16 values.
    #[error("Invalid matrix length ({0}), expected 6 or 16 elements")]
    InvalidMatrixLength(usize),
}
