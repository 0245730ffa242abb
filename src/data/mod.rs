/// Data layer: core types, loading, and aggregation.
///
/// Architecture:
/// ```text
///  perf file (text)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  strip comments, parse header + trials → Series
///   └──────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ PerformanceMatrix │  N trials × M iterations
///   └──────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  mean / population std per iteration → Aggregate
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod stats;
