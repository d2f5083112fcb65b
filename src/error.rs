// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error type shared by all estimators in this crate.

use thiserror::Error;

/// Error variants for symbolisation, estimation and significance testing.
///
/// None of these are transient: every variant reports either invalid caller
/// input or a broken internal invariant, so nothing is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The number of ordinal dimensions must be at least one.
    #[error("invalid number of dimensions: {0} (must be >= 1)")]
    InvalidDimensions(usize),

    /// An estimator parameter (base, history length, surrogate count) is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A lookup table or alphabet would be too large to build.
    #[error("capacity exceeded: {0}")]
    Capacity(String),

    /// A value sequence did not encode to a valid permutation.
    #[error("encoding invariant violated: {0}")]
    EncodingInvariant(String),

    /// The requested operation is not provided by this estimator.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),

    /// Input arrays disagree in length or column count.
    #[error("shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: String, got: String },

    /// A discrete observation fell outside its alphabet.
    #[error("symbol {symbol} out of range for alphabet of size {base}")]
    SymbolOutOfRange { symbol: i64, base: usize },

    /// A surrogate ordering was not a permutation of the observation indices.
    #[error("invalid ordering at row {row}: {reason}")]
    InvalidOrdering { row: usize, reason: String },

    /// An operation was attempted before `initialise`.
    #[error("estimator not initialised; call initialise() first")]
    NotInitialised,

    /// A property name that the estimator does not recognise.
    #[error("unknown property: {0}")]
    UnknownProperty(String),

    /// A recognised property with an unparsable value.
    #[error("invalid value {value:?} for property {name}")]
    InvalidProperty { name: String, value: String },
}

/// A specialised Result type for estimator operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn shape(expected: impl ToString, got: impl ToString) -> Self {
        Error::ShapeMismatch {
            expected: expected.to_string(),
            got: got.to_string(),
        }
    }
}
