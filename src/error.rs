//! Error types for benchmark runs.

use std::error::Error as StdError;
use std::fmt;

use crate::algorithm::{Algorithm, WorkFactor};

/// Error raised by an underlying hashing primitive during one measured call.
///
/// The primitives are treated as black boxes, so their error types are
/// erased at the work-unit boundary. The sampler wraps this into
/// [`Error::MeasurementFailure`] together with the sample index.
pub type PrimitiveError = Box<dyn StdError + Send + Sync>;

/// Error returned when a benchmark run cannot start or complete.
///
/// Setup errors (`UnsupportedAlgorithm`, `InvalidParameter`) are detected
/// before any measurement work begins. `MeasurementFailure` aborts a run
/// that is already in flight; failed samples are never silently dropped or
/// retried, since retrying a timing measurement after a failure would
/// corrupt the sample's meaning.
#[derive(Debug)]
pub enum Error {
    /// The requested algorithm identifier is not in the supported set.
    UnsupportedAlgorithm {
        /// The identifier exactly as supplied by the caller.
        identifier: String,
    },

    /// A work-factor value is outside the primitive's accepted domain.
    InvalidParameter {
        /// The algorithm the value was supplied for.
        algorithm: Algorithm,
        /// The offending work-factor value.
        work_factor: WorkFactor,
        /// What the domain requires.
        reason: &'static str,
    },

    /// The underlying primitive failed mid-sample.
    MeasurementFailure {
        /// The algorithm being measured.
        algorithm: Algorithm,
        /// The work factor under measurement when the failure occurred.
        work_factor: WorkFactor,
        /// Zero-based index of the failed sample within its sample set.
        sample_index: usize,
        /// The primitive's own error.
        source: PrimitiveError,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedAlgorithm { identifier } => {
                write!(
                    f,
                    "unsupported algorithm '{}'. Supported algorithms: {}",
                    identifier,
                    Algorithm::identifiers().join(", ")
                )
            }
            Error::InvalidParameter { algorithm, work_factor, reason } => {
                write!(
                    f,
                    "work factor {} is not valid for {}: {}",
                    work_factor, algorithm, reason
                )
            }
            Error::MeasurementFailure { algorithm, work_factor, sample_index, source } => {
                write!(
                    f,
                    "{} failed at work factor {} (sample {}): {}",
                    algorithm, work_factor, sample_index, source
                )
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::MeasurementFailure { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
