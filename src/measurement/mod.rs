//! Measurement infrastructure: monotonic timing and sequential sampling.
//!
//! This module provides:
//! - [`Timer`] - monotonic wall-clock measurement around one invocation
//! - [`Sampler`] - drives a work unit `samples` times per work factor
//! - [`SampleSet`] - one work factor's ordered samples and their mean
//!
//! Sampling runs single-threaded and strictly sequentially. Each hash
//! invocation blocks the calling thread for its full duration; that is the
//! quantity being measured, so nothing here suspends, yields, or runs
//! concurrently with another invocation.

mod sampler;
mod timer;

pub use sampler::{SampleSet, Sampler};
pub use timer::Timer;
