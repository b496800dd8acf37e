//! Aggregated benchmark results.

use serde::{Deserialize, Serialize};

use crate::algorithm::{Algorithm, WorkFactor};

/// One work factor's aggregated measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// The work-factor value as requested.
    pub work_factor: WorkFactor,
    /// Arithmetic mean of the elapsed times, in seconds.
    pub mean_seconds: f64,
}

/// Mapping from work factor to mean elapsed seconds, in request order.
///
/// Keys are unique. Inserting an existing key overwrites its mean in place,
/// keeping the position of the key's first insertion, so iteration order is
/// the order work factors were first requested. Means are in the crate's
/// canonical elapsed-time unit, fractional seconds as `f64`, and are never
/// negative.
///
/// The table is built incrementally by [`Sampler::run`](crate::Sampler::run)
/// and not mutated once the run completes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultTable {
    entries: Vec<Entry>,
}

impl ResultTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a mean for `work_factor`, overwriting any existing entry.
    ///
    /// An overwritten entry keeps its original position.
    pub fn insert(&mut self, work_factor: WorkFactor, mean_seconds: f64) {
        match self.entries.iter_mut().find(|e| e.work_factor == work_factor) {
            Some(entry) => entry.mean_seconds = mean_seconds,
            None => self.entries.push(Entry { work_factor, mean_seconds }),
        }
    }

    /// Look up the mean for `work_factor`, in seconds.
    pub fn get(&self, work_factor: WorkFactor) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.work_factor == work_factor)
            .map(|e| e.mean_seconds)
    }

    /// Entries in request order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of distinct work factors in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A complete benchmark run: the algorithm, the sampling configuration it
/// ran under, and the per-work-factor results.
///
/// This is what the output formatters consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// The algorithm that was measured.
    pub algorithm: Algorithm,
    /// Samples taken per work-factor value.
    pub samples: usize,
    /// Mean elapsed seconds per work factor, in request order.
    pub results: ResultTable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_preserves_request_order() {
        let mut table = ResultTable::new();
        table.insert(12, 0.3);
        table.insert(8, 0.02);
        table.insert(10, 0.08);
        let order: Vec<_> = table.entries().iter().map(|e| e.work_factor).collect();
        assert_eq!(order, vec![12, 8, 10]);
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut table = ResultTable::new();
        table.insert(8, 0.02);
        table.insert(10, 0.08);
        table.insert(8, 0.025);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(8), Some(0.025));
        assert_eq!(table.entries()[0].work_factor, 8);
    }

    #[test]
    fn get_misses_return_none() {
        let table = ResultTable::new();
        assert_eq!(table.get(8), None);
        assert!(table.is_empty());
    }

    #[test]
    fn table_serializes_as_entry_array() {
        let mut table = ResultTable::new();
        table.insert(8, 0.02);
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json[0]["work_factor"], 8);
    }
}
