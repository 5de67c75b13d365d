use std::io::BufRead;
use std::path::Path;

use super::error::LoadError;
use super::loader;
use super::model::StateRenewable;
use super::report::SummaryReport;

/// Threshold (percent renewable) used by [`RenewableAnalyzer::summary_report`].
pub const SUMMARY_THRESHOLD: f64 = 15.0;

// ---------------------------------------------------------------------------
// RenewableAnalyzer – owner of the loaded rows
// ---------------------------------------------------------------------------

/// Ordered collection of [`StateRenewable`] rows plus the queries over them.
///
/// Rows are only ever appended, in input order. Queries scan the current
/// rows and never modify them.
#[derive(Debug, Clone, Default)]
pub struct RenewableAnalyzer {
    states: Vec<StateRenewable>,
}

impl RenewableAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every data row of the CSV file at `path`.
    ///
    /// On error, rows read before the failing line remain loaded.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let reader = loader::open(path)?;
        let added = self
            .load_reader(reader)
            .map_err(|e| e.with_path(path.to_path_buf()))?;
        log::info!("Loaded {added} states from {}", path.display());
        Ok(added)
    }

    /// Append every data row from an already-open source.
    pub fn load_reader<R: BufRead>(&mut self, reader: R) -> Result<usize, LoadError> {
        loader::append_rows(reader, &mut self.states)
    }

    /// All rows, in insertion order.
    pub fn records(&self) -> &[StateRenewable] {
        &self.states
    }

    pub fn count(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Rows whose renewable share is at or above `threshold`, in insertion order.
    pub fn above(&self, threshold: f64) -> Vec<&StateRenewable> {
        self.states
            .iter()
            .filter(|s| s.is_above_renewable_threshold(threshold))
            .collect()
    }

    pub fn highest_percent_renewable(&self) -> Option<&StateRenewable> {
        first_extremum(&self.states, StateRenewable::percent_renewable, |a, b| a > b)
    }

    pub fn lowest_percent_renewable(&self) -> Option<&StateRenewable> {
        first_extremum(&self.states, StateRenewable::percent_renewable, |a, b| a < b)
    }

    /// Mean renewable share; `0.0` when nothing is loaded.
    pub fn average_percent_renewable(&self) -> f64 {
        if self.states.is_empty() {
            return 0.0;
        }
        let sum = self
            .states
            .iter()
            .fold(0.0, |acc, s| acc + s.percent_renewable());
        sum / self.states.len() as f64
    }

    /// Sum of renewable generation; `+0.0` when nothing is loaded.
    pub fn total_renewable_gen_twh(&self) -> f64 {
        // Folding from +0.0: `Sum for f64` starts at -0.0.
        self.states
            .iter()
            .fold(0.0, |acc, s| acc + s.renewable_gen_twh())
    }

    pub fn highest_renewable_gen(&self) -> Option<&StateRenewable> {
        first_extremum(&self.states, StateRenewable::renewable_gen_twh, |a, b| a > b)
    }

    /// Summary at [`SUMMARY_THRESHOLD`].
    pub fn summary_report(&self) -> SummaryReport<'_> {
        self.summary_report_at(SUMMARY_THRESHOLD)
    }

    pub fn summary_report_at(&self, threshold: f64) -> SummaryReport<'_> {
        SummaryReport::compose(self, threshold)
    }
}

/// Single pass keeping the first row whose `key` beats every earlier one.
///
/// The best row is replaced only when `better(candidate, best)` holds, so
/// ties keep the earliest row.
fn first_extremum<'a>(
    states: &'a [StateRenewable],
    key: impl Fn(&StateRenewable) -> f64,
    better: impl Fn(f64, f64) -> bool,
) -> Option<&'a StateRenewable> {
    let mut iter = states.iter();
    let first = iter.next()?;
    let (best, _) = iter.fold((first, key(first)), |(best, best_key), candidate| {
        let candidate_key = key(candidate);
        if better(candidate_key, best_key) {
            (candidate, candidate_key)
        } else {
            (best, best_key)
        }
    });
    Some(best)
}

#[cfg(test)]
#[path = "analyzer_tests.rs"]
mod analyzer_tests;
