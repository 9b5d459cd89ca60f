/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  labels.json  index_metadata.json  banks-master.json
///        │               │                  │
///        ▼               ▼                  ▼
///   ┌─────────────────────────────────────────┐
///   │  loader   parse + validate → DashboardData│
///   └─────────────────────────────────────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ RecordStore   │  Vec<BankRecord>, per-country views
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  selection predicates → FilteredRow (display columns)
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
