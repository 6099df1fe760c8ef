//! LiftLog core: daglige fremgangsserier for styrkeøvelser.
//!
//! Rå observasjoner (dato + vekt) fra API-et gjøres om til en hullfri,
//! stigende dagsserie (maks vekt per dag) klar for grafen, pluss
//! sammendrag, paginering og dato-normalisering for range-spørringer.

pub mod cli;
pub mod dates;
pub mod error;
pub mod models;
pub mod pager;
pub mod report;
pub mod series;
pub mod source;
pub mod stats;
pub mod storage;
pub mod telemetry;

#[cfg(feature = "python")]
pub mod py;

pub use dates::{format_local_datetime, normalize_query_datetime, parse_timestamp, Timestamp};
pub use error::{ProgressError, Result};
pub use models::{DailySample, DateInterval, Observation, ReportConfig};
pub use pager::{page_count, paginate, paginate_with_config, Page};
pub use report::{build_report, build_report_json, ProgressReport};
pub use series::{build_series, build_series_between, ProgressSeriesBuilder};
pub use source::{HttpProgressSource, ProgressSource, StaticProgressSource};
pub use stats::{ProgressStats, RoundTo};
pub use storage::{load_config, save_config};
pub use telemetry::Metrics;
