use std::path::{Path, PathBuf};

use renewables::data::filter::{SortKey, above_threshold_indices, sorted_indices};
use renewables::{RenewableAnalyzer, SUMMARY_THRESHOLD};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Every row loaded so far; loads only ever append.
    pub analyzer: RenewableAnalyzer,

    /// Renewable-share cutoff driving highlighting and the summary.
    pub threshold: f64,

    /// Indices of rows at or above `threshold` (cached).
    pub above_indices: Vec<usize>,

    /// Ordering of the records table.
    pub sort_key: SortKey,

    /// Files loaded successfully, in load order.
    pub loaded_files: Vec<PathBuf>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            analyzer: RenewableAnalyzer::new(),
            threshold: SUMMARY_THRESHOLD,
            above_indices: Vec::new(),
            sort_key: SortKey::default(),
            loaded_files: Vec::new(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Append the rows of `path` to the analyzer.
    ///
    /// On failure the message is kept for the status line; rows read before
    /// the failing line stay loaded and visible.
    pub fn load_file(&mut self, path: &Path) {
        match self.analyzer.load(path) {
            Ok(added) => {
                self.loaded_files.push(path.to_path_buf());
                log::debug!("{} rows total after {}", self.analyzer.count(), path.display());
                self.status_message =
                    (added == 0).then(|| format!("{} has no data rows", path.display()));
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.status_message = Some(format!("{}: {}", e.kind(), error_chain(&e)));
            }
        }
        self.refilter();
    }

    /// Recompute `above_indices` after a threshold or data change.
    pub fn refilter(&mut self) {
        self.above_indices = above_threshold_indices(self.analyzer.records(), self.threshold);
    }

    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = threshold;
        self.refilter();
    }

    pub fn is_above(&self, index: usize) -> bool {
        self.above_indices.binary_search(&index).is_ok()
    }

    /// Row indices in table order.
    pub fn table_order(&self) -> Vec<usize> {
        let all: Vec<usize> = (0..self.analyzer.count()).collect();
        sorted_indices(self.analyzer.records(), &all, self.sort_key)
    }
}

/// `error: cause: cause` on one line.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}
