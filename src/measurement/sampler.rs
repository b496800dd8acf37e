//! Sequential sample collection and aggregation.

use std::time::Duration;

use crate::algorithm::{WorkFactor, WorkUnit};
use crate::config::Config;
use crate::error::Error;
use crate::report::ResultTable;

/// An ordered set of elapsed-time samples taken under one work factor.
///
/// All samples in a set were produced by the same work unit at the same
/// work factor; each one timed a call over freshly generated random input.
/// Samples are stored in the crate's canonical elapsed-time unit,
/// fractional seconds as `f64` (converted once, on insertion, via
/// [`Duration::as_secs_f64`]). A set is discarded after its mean is taken;
/// raw samples are not retained across work factors.
#[derive(Debug, Clone)]
pub struct SampleSet {
    seconds: Vec<f64>,
}

impl SampleSet {
    pub(crate) fn with_capacity(samples: usize) -> Self {
        Self { seconds: Vec::with_capacity(samples) }
    }

    pub(crate) fn push(&mut self, elapsed: Duration) {
        self.seconds.push(elapsed.as_secs_f64());
    }

    /// Number of samples collected.
    pub fn len(&self) -> usize {
        self.seconds.len()
    }

    /// True if no samples have been collected.
    pub fn is_empty(&self) -> bool {
        self.seconds.is_empty()
    }

    /// The raw samples, in collection order, in seconds.
    pub fn as_secs(&self) -> &[f64] {
        &self.seconds
    }

    /// Arithmetic mean of the samples, in seconds.
    pub fn mean(&self) -> f64 {
        assert!(!self.seconds.is_empty(), "mean of an empty sample set");
        self.seconds.iter().sum::<f64>() / self.seconds.len() as f64
    }
}

/// Drives repeated measurement of a work unit across work factors.
///
/// Sampling is strictly sequential: one hash invocation at a time, each
/// blocking the calling thread for its full duration. Concurrent
/// invocations would contend for CPU and bias every measurement upward
/// non-uniformly, invalidating comparisons across work factors.
#[derive(Debug, Clone)]
pub struct Sampler {
    config: Config,
}

impl Sampler {
    /// Create a sampler with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Get the sampler's configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Measure `unit` at each work factor and aggregate per-value means.
    ///
    /// Every work factor is validated against the primitive's domain before
    /// any measurement starts; one invalid value rejects the whole run with
    /// no clock time spent. Each work factor is then measured exactly
    /// `samples` times in request order, and the arithmetic mean of its
    /// sample set is inserted into the table.
    ///
    /// Duplicate work factors are measured once per occurrence; the later
    /// mean overwrites the earlier table entry (map overwrite-on-insert
    /// semantics), so the table holds one entry per distinct value, at the
    /// position of its first occurrence.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParameter`] if any work factor is outside the
    ///   primitive's domain (detected before sampling).
    /// - [`Error::MeasurementFailure`] if the primitive fails mid-sample.
    ///   The run aborts as a whole: no partial table is returned, and the
    ///   failed sample is neither dropped nor retried.
    pub fn run(&self, unit: &WorkUnit, work_factors: &[WorkFactor]) -> Result<ResultTable, Error> {
        let algorithm = unit.algorithm();
        for &work_factor in work_factors {
            algorithm.validate_work_factor(work_factor)?;
        }

        let mut table = ResultTable::new();
        for &work_factor in work_factors {
            let set = self.collect(unit, work_factor)?;
            table.insert(work_factor, set.mean());
        }
        Ok(table)
    }

    /// Collect one full sample set for `work_factor`.
    fn collect(&self, unit: &WorkUnit, work_factor: WorkFactor) -> Result<SampleSet, Error> {
        let mut set = SampleSet::with_capacity(self.config.samples);
        for sample_index in 0..self.config.samples {
            let elapsed = unit.measure(work_factor).map_err(|source| {
                Error::MeasurementFailure {
                    algorithm: unit.algorithm(),
                    work_factor,
                    sample_index,
                    source,
                }
            })?;
            set.push(elapsed);
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::Algorithm;

    #[test]
    fn sample_set_mean_is_arithmetic() {
        let mut set = SampleSet::with_capacity(3);
        set.push(Duration::from_millis(10));
        set.push(Duration::from_millis(20));
        set.push(Duration::from_millis(30));
        assert_eq!(set.len(), 3);
        assert!((set.mean() - 0.020).abs() < 1e-9);
    }

    #[test]
    #[should_panic]
    fn sample_set_mean_rejects_empty() {
        SampleSet::with_capacity(0).mean();
    }

    #[test]
    fn run_collects_requested_sample_count() {
        let sampler = Sampler::new(Config::new().samples(4));
        let unit = Algorithm::Pbkdf2Sha256.work_unit();
        let set = sampler.collect(&unit, 1_000).unwrap();
        assert_eq!(set.len(), 4);
        assert!(set.as_secs().iter().all(|&s| s >= 0.0));
    }

    #[test]
    fn run_validates_before_measuring() {
        let sampler = Sampler::new(Config::quick());
        let unit = Algorithm::Pbkdf2Sha256.work_unit();
        // 0 sits behind a valid value; the whole run must still be rejected.
        let err = sampler.run(&unit, &[1_000, 0]).unwrap_err();
        match err {
            Error::InvalidParameter { work_factor, .. } => assert_eq!(work_factor, 0),
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn run_preserves_request_order() {
        let sampler = Sampler::new(Config::new().samples(1));
        let unit = Algorithm::Pbkdf2Sha256.work_unit();
        let table = sampler.run(&unit, &[3_000, 1_000, 2_000]).unwrap();
        let order: Vec<_> = table.entries().iter().map(|e| e.work_factor).collect();
        assert_eq!(order, vec![3_000, 1_000, 2_000]);
    }

    #[test]
    fn run_overwrites_duplicate_work_factors() {
        let sampler = Sampler::new(Config::new().samples(1));
        let unit = Algorithm::Pbkdf2Sha256.work_unit();
        let table = sampler.run(&unit, &[1_000, 2_000, 1_000]).unwrap();
        assert_eq!(table.len(), 2);
        let order: Vec<_> = table.entries().iter().map(|e| e.work_factor).collect();
        assert_eq!(order, vec![1_000, 2_000]);
    }
}
