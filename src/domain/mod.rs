//! Domain types and the aggregation core of the dashboard
//!
//! Data flows loader → projection → aggregation once at startup; afterwards
//! each session's `SelectionState` is resolved against the immutable
//! `DashboardContext` on every render.

pub mod aggregate;
pub mod config_types;
pub mod context;
pub mod dashboard;
pub mod dataset;
pub mod disease;
pub mod explanations;
pub mod projection;
pub mod resolver;
pub mod selection;
pub mod session;
pub mod types;

#[cfg(test)]
pub(crate) mod test_data;

pub use aggregate::{aggregate_by_region, aggregate_by_year, AggregateTable};
pub use context::{DashboardContext, DiseaseAggregates};
pub use dashboard::{ChartBar, ChartView, DashboardView, DatasetSummary};
pub use dataset::{CaseRecord, DatasetError, RawTable, RecordKeys, SchemaError};
pub use disease::{DiseaseKind, Metric};
pub use explanations::{explanations_for, MetricExplanation};
pub use projection::{project, DiseaseView};
pub use resolver::title_for;
pub use selection::{InvalidSelectionError, SelectionState, YearBounds, YearRange};
pub use session::SessionId;
pub use types::{CaseCount, CountryName, Iso3Code, Month, RegionName, Year};
