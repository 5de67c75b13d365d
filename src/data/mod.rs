/// Data layer: record type, loading, queries, and the composed report.
///
/// Architecture:
/// ```text
///  states.csv (header + 6 fields per line)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  split lines → StateRenewable, append in order
///   └──────────┘
///        │
///        ▼
///   ┌───────────────────┐
///   │ RenewableAnalyzer │  Vec<StateRenewable>, extrema / sums / filters
///   └───────────────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌──────────┐   ┌──────────┐
///   │  report   │   │  filter   │  viewer-side indices and ordering
///   └──────────┘   └──────────┘
/// ```

pub mod analyzer;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod report;
