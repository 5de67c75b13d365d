//! Per-state renewable electricity statistics.
//!
//! The [`data`] layer loads a comma-separated table of states and answers
//! aggregate queries over it. The viewer and report binaries are thin
//! display surfaces on top of it.

pub mod data;

pub use data::analyzer::{RenewableAnalyzer, SUMMARY_THRESHOLD};
pub use data::error::{ErrorKind, LoadError, ParseErrorKind};
pub use data::model::StateRenewable;
pub use data::report::SummaryReport;
