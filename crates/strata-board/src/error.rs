//! Board construction error types.

/// Errors raised when a grid or derived field is built from external sizes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Width or height is zero.
    #[error("invalid board dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// A backing buffer does not hold exactly `width * height` values.
    #[error("buffer of {actual} values does not match {width}x{height}")]
    SizeMismatch {
        /// Declared width.
        width: usize,
        /// Declared height.
        height: usize,
        /// Number of values supplied.
        actual: usize,
    },
}
