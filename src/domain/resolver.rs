//! Selection-driven view resolution
//!
//! Resolvers are pure reads of the immutable context plus the caller's
//! current `SelectionState`, so every call reflects the latest committed
//! selection.

use crate::domain::context::DashboardContext;
use crate::domain::disease::DiseaseKind;
use crate::domain::selection::SelectionState;
use crate::domain::types::{CaseCount, RegionName, Year};

impl DashboardContext {
    /// `(region, value)` for the selected metric over the whole dataset span
    ///
    /// Regions come out in ascending name order. Empty when no metric is
    /// selected.
    pub fn resolve_region_view(&self, state: &SelectionState) -> Vec<(RegionName, CaseCount)> {
        let Some(metric) = state.metric() else {
            return Vec::new();
        };
        self.aggregates(state.disease())
            .by_region
            .column(metric)
            .map(|column| {
                column
                    .map(|(region, value)| (region.clone(), value))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// `(year, value)` for the selected metric, restricted to the selected
    /// year range and sorted ascending by year
    ///
    /// Empty when no metric is selected or no year falls in the range.
    pub fn resolve_year_view(&self, state: &SelectionState) -> Vec<(Year, CaseCount)> {
        let Some(metric) = state.metric() else {
            return Vec::new();
        };
        let range = state.year_range();
        let mut rows: Vec<(Year, CaseCount)> = self
            .aggregates(state.disease())
            .by_year
            .column(metric)
            .map(|column| {
                column
                    .filter(|(year, _)| range.contains(**year))
                    .map(|(year, value)| (*year, value))
                    .collect()
            })
            .unwrap_or_default();
        rows.sort_by_key(|(year, _)| *year);
        rows
    }
}

/// Page title for the selected disease, e.g. "Measles cases analysis"
pub fn title_for(kind: DiseaseKind) -> String {
    format!("{} cases analysis", kind.label())
}
