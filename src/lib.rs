//! # hashbench
//!
//! Measure the wall-clock cost of password-hashing primitives across
//! work-factor parameters.
//!
//! Password-hashing work factors trade brute-force resistance against login
//! latency, and the right value depends entirely on the hardware the hashes
//! run on. This crate measures that cost where it matters: it resolves an
//! algorithm identifier to a work unit, exercises the unit repeatedly with
//! fresh random input at each requested work factor, times every call with
//! a monotonic clock, and reports the per-work-factor mean.
//!
//! Supported algorithms: `bcrypt`, `pbkdf2-sha256`, `pbkdf2-sha512`.
//!
//! ## What this is not
//!
//! Not a statistical benchmarking framework - there is no warm-up phase,
//! outlier rejection, or confidence-interval reporting. Not a security
//! auditor - hashes are produced and discarded, never verified. Results are
//! reported once per run and not persisted.
//!
//! ## Quick Start
//!
//! ```ignore
//! use hashbench::{Algorithm, Config, Sampler};
//!
//! let algorithm = Algorithm::resolve("bcrypt")?;
//! let sampler = Sampler::new(Config::new().samples(5));
//! let table = sampler.run(&algorithm.work_unit(), &[8, 10, 12])?;
//!
//! for entry in &table {
//!     println!("{}, {:.6} s", entry.work_factor, entry.mean_seconds);
//! }
//! ```
//!
//! Or start from a latency budget instead of a work-factor list:
//!
//! ```ignore
//! use std::time::Duration;
//! use hashbench::{suggest_work_factor, Algorithm, Config};
//!
//! let cost = suggest_work_factor(
//!     Algorithm::resolve("bcrypt")?,
//!     Duration::from_millis(250),
//!     Config::quick(),
//! )?;
//! ```
//!
//! ## Measurement discipline
//!
//! Every measured call hashes a fresh 32-byte random plaintext (and, for
//! PBKDF2, a fresh 8-byte salt) drawn from the operating system's CSPRNG,
//! so no cache effect or implementation shortcut can skew a sample.
//! Sampling is strictly sequential; each invocation blocks for its full
//! duration, and elapsed times are carried as `f64` fractional seconds,
//! converted from the monotonic clock in exactly one place.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod config;
pub mod error;
pub mod measurement;
pub mod output;
pub mod report;
pub mod tune;

pub use algorithm::{
    Algorithm, WorkFactor, WorkUnit, BCRYPT_MAX_COST, BCRYPT_MIN_COST, PBKDF2_OUTPUT_LEN,
    PLAINTEXT_LEN, SALT_LEN,
};
pub use config::Config;
pub use error::{Error, PrimitiveError};
pub use measurement::{SampleSet, Sampler, Timer};
pub use report::{Entry, ResultTable, RunReport};
pub use tune::{probe_work_factor, suggest_work_factor};
