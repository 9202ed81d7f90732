/// Data layer: core types, loading, grouping and statistics.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset (12 columns, priced rows only)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ BoroughGroups │  neighborhood → listings, boroughs with 7+ listings
///   └──────────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ query             │  borough + utility filter → QueryResult
///   │  (filter, stats)  │
///   └──────────────────┘
/// ```

pub mod borough;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod query;
pub mod stats;

#[cfg(test)]
pub(crate) mod strategies;
