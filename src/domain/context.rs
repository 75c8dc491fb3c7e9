//! Immutable, process-wide dashboard data
//!
//! Built once at startup from the raw table and shared read-only by every
//! session (typically behind an `Arc`).

use crate::domain::aggregate::{aggregate_by_region, aggregate_by_year, AggregateTable};
use crate::domain::dataset::{DatasetError, RawTable};
use crate::domain::disease::DiseaseKind;
use crate::domain::projection::project;
use crate::domain::selection::{SelectionState, YearBounds};
use crate::domain::types::{RegionName, Year};
use tracing::{debug, instrument};

/// Precomputed aggregates of one disease
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiseaseAggregates {
    pub by_region: AggregateTable<RegionName>,
    pub by_year: AggregateTable<Year>,
}

/// Loaded dataset summary and every aggregate table the resolvers read
#[derive(Debug, Clone)]
pub struct DashboardContext {
    year_bounds: YearBounds,
    record_count: usize,
    measles: DiseaseAggregates,
    rubella: DiseaseAggregates,
}

impl DashboardContext {
    /// Project both diseases and aggregate them by region and by year
    #[instrument(skip(table), fields(rows = table.len()))]
    pub fn build(table: &RawTable) -> Result<Self, DatasetError> {
        let year_bounds = table.year_bounds().ok_or(DatasetError::Empty)?;

        let aggregates = |kind: DiseaseKind| -> Result<DiseaseAggregates, DatasetError> {
            let view = project(table, kind)?;
            let aggregates = DiseaseAggregates {
                by_region: aggregate_by_region(&view),
                by_year: aggregate_by_year(&view),
            };
            debug!(
                disease = %kind,
                regions = aggregates.by_region.len(),
                years = aggregates.by_year.len(),
                "Aggregates built"
            );
            Ok(aggregates)
        };

        Ok(Self {
            year_bounds,
            record_count: table.len(),
            measles: aggregates(DiseaseKind::Measles)?,
            rubella: aggregates(DiseaseKind::Rubella)?,
        })
    }

    pub fn year_bounds(&self) -> YearBounds {
        self.year_bounds
    }

    pub fn record_count(&self) -> usize {
        self.record_count
    }

    pub fn aggregates(&self, kind: DiseaseKind) -> &DiseaseAggregates {
        match kind {
            DiseaseKind::Measles => &self.measles,
            DiseaseKind::Rubella => &self.rubella,
        }
    }

    /// Selection a new session starts from
    pub fn new_selection(&self) -> SelectionState {
        SelectionState::new(self.year_bounds)
    }
}
