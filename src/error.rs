//! Error types for the plotbuf point-series store.

use thiserror::Error;

use crate::attributes::PlotAttribute;

/// The main error type for all plotbuf operations.
///
/// Every fallible operation in this crate reports its failure through this
/// enum. All errors are raised synchronously at the call site that detects
/// them; there is no deferred error channel and nothing to retry.
#[derive(Error, Debug)]
pub enum PlotError {
    /// Error during indexed access or in-place mutation.
    #[error("access error: {0}")]
    Access(#[from] AccessError),

    /// Error during attribute assignment.
    #[error("attribute error: {0}")]
    Attribute(#[from] AttributeError),
}

/// Errors raised by indexed access into a series.
#[derive(Error, Debug)]
pub enum AccessError {
    /// The requested index is not less than the current series length.
    #[error("index {index} out of range for series of length {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The series length at the time of the call.
        len: usize,
    },

    /// The parallel x and y storage lengths diverged in variable mode.
    ///
    /// This signals a prior invariant violation elsewhere in the process.
    /// It must be unreachable under correct use and should be treated as a
    /// fatal programming error, never caught and continued.
    #[error("corrupted series storage: {x_len} x samples but {y_len} y samples")]
    CorruptedStorage {
        /// Number of stored domain (x) samples.
        x_len: usize,
        /// Number of individually stored value (y) samples.
        y_len: usize,
    },
}

/// Errors raised when assigning display metadata.
#[derive(Error, Debug)]
pub enum AttributeError {
    /// The value's runtime kind does not match the kind the attribute
    /// requires. The value is rejected without being stored.
    #[error("attribute {attribute:?} expects a {expected} value, got {actual}")]
    TypeMismatch {
        /// The attribute being assigned.
        attribute: PlotAttribute,
        /// The value kind the attribute requires.
        expected: &'static str,
        /// The kind of the rejected value.
        actual: &'static str,
    },
}

/// Type alias for `Result<T, PlotError>`.
pub type Result<T> = std::result::Result<T, PlotError>;
