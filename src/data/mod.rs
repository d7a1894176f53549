/// Data layer: core types, loading, statistics and binning.
///
/// Architecture:
/// ```text
///  .csv / .parquet / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table (typed columns)
///   └──────────┘
///        │  first numeric column → value series
///        ▼
///   ┌──────────┐      ┌───────────┐
///   │  stats    │      │ histogram │  20 equal-width bins
///   └──────────┘      └───────────┘
/// ```
pub mod histogram;
pub mod loader;
pub mod model;
pub mod stats;
