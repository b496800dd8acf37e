//! Work-factor suggestion from a target latency.
//!
//! Picking a work factor usually starts from the other end: an operator
//! knows how much latency a login may cost (say 250 ms) and wants the work
//! factor that lands there. This module probes the algorithm once at a
//! fixed initial work factor, then extrapolates along the algorithm's
//! scaling law:
//!
//! - bcrypt cost is logarithmic (each increment doubles the work), so the
//!   probe mean extrapolates by `log2(target / mean)` cost steps;
//! - PBKDF2 iterations are linear, so the suggestion is the probe count
//!   scaled by `target / mean`, kept to whole multiples of the probe.
//!
//! The suggestion is an estimate, not a measurement: confirm it with a
//! regular benchmark run before deploying it.

use std::time::Duration;

use crate::algorithm::{Algorithm, WorkFactor, BCRYPT_MAX_COST, BCRYPT_MIN_COST};
use crate::config::Config;
use crate::error::Error;
use crate::measurement::Sampler;

/// Initial bcrypt cost measured before extrapolating.
const BCRYPT_PROBE_COST: WorkFactor = 10;

/// Initial PBKDF2 iteration count measured before extrapolating.
const PBKDF2_PROBE_ITERATIONS: WorkFactor = 10_000;

/// The probe work factor `suggest_work_factor` measures for `algorithm`.
///
/// PBKDF2 suggestions come back as whole multiples of this value.
pub fn probe_work_factor(algorithm: Algorithm) -> WorkFactor {
    match algorithm {
        Algorithm::Bcrypt => BCRYPT_PROBE_COST,
        Algorithm::Pbkdf2Sha256 | Algorithm::Pbkdf2Sha512 => PBKDF2_PROBE_ITERATIONS,
    }
}

/// Suggest the work factor whose mean cost approximates `target`.
///
/// Measures the probe work factor with a regular [`Sampler`] run under
/// `config`, then extrapolates. bcrypt suggestions are clamped to the
/// primitive's 4..=31 domain; PBKDF2 suggestions are at least one probe's
/// worth of iterations.
///
/// # Errors
///
/// Propagates [`Error::MeasurementFailure`] from the probe run.
pub fn suggest_work_factor(
    algorithm: Algorithm,
    target: Duration,
    config: Config,
) -> Result<WorkFactor, Error> {
    let probe = probe_work_factor(algorithm);
    let unit = algorithm.work_unit();
    let table = Sampler::new(config).run(&unit, &[probe])?;
    let mean_seconds = table.get(probe).expect("probe result present after successful run");
    Ok(extrapolate(algorithm, probe, mean_seconds, target.as_secs_f64()))
}

/// Extrapolate from one measured (probe, mean) point to the target.
fn extrapolate(
    algorithm: Algorithm,
    probe: WorkFactor,
    mean_seconds: f64,
    target_seconds: f64,
) -> WorkFactor {
    // Clock resolution floor: a mean of zero would make the ratio blow up.
    let ratio = target_seconds / mean_seconds.max(1e-9);

    match algorithm {
        Algorithm::Bcrypt => {
            let steps = ratio.log2().round() as i64;
            let cost = i64::from(probe).saturating_add(steps);
            cost.clamp(i64::from(BCRYPT_MIN_COST), i64::from(BCRYPT_MAX_COST)) as WorkFactor
        }
        Algorithm::Pbkdf2Sha256 | Algorithm::Pbkdf2Sha512 => {
            let multiples = ratio.round().max(1.0).min(f64::from(WorkFactor::MAX / probe));
            multiples as WorkFactor * probe
        }
    }
}
