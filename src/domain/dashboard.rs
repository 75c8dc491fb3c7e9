//! Render-ready snapshots handed to the presentation layer

use crate::domain::context::DashboardContext;
use crate::domain::disease::{DiseaseKind, Metric};
use crate::domain::explanations::{explanations_for, MetricExplanation};
use crate::domain::resolver::title_for;
use crate::domain::selection::{SelectionState, YearBounds, YearRange};
use crate::domain::types::{CaseCount, RegionName, Year};
use serde::Serialize;

pub const ABOUT_TEXT: &str = "The aim of this project is to visualise the WHO Diseases dataset from 2012-2025 for the submission of the #PyDyTuesday";
pub const REGION_CARD_HEADER: &str = "Cases by Region";
pub const YEAR_CARD_HEADER: &str = "Cases by Year";
pub const EXPLANATION_HEADER: &str = "Explanation of features:";

/// A single bar with its display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartBar<K> {
    pub category: K,
    pub value: CaseCount,
    /// Value as a plain integer string, used for the bar label
    pub label: String,
}

/// One bar chart card
///
/// `title` is `None` and `bars` is empty when no metric is selected; the
/// chart is then drawn as an empty placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartView<K> {
    pub header: &'static str,
    pub title: Option<String>,
    pub bars: Vec<ChartBar<K>>,
}

impl<K> ChartView<K> {
    fn new(header: &'static str, title: Option<String>, points: Vec<(K, CaseCount)>) -> Self {
        let bars = points
            .into_iter()
            .map(|(category, value)| ChartBar {
                category,
                value,
                label: value.to_string(),
            })
            .collect();
        Self {
            header,
            title,
            bars,
        }
    }
}

/// Everything the page shows for one selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub title: String,
    pub disease: DiseaseKind,
    pub metric: Option<Metric>,
    pub year_range: YearRange,
    pub region_chart: ChartView<RegionName>,
    pub year_chart: ChartView<Year>,
    pub explanation_header: &'static str,
    pub explanations: Vec<MetricExplanation>,
}

/// A disease choice with its selectable metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiseaseChoice {
    pub disease: DiseaseKind,
    pub label: &'static str,
    pub metrics: &'static [Metric],
}

/// Static page data independent of any session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub about: &'static str,
    pub record_count: usize,
    pub year_bounds: YearBounds,
    pub diseases: Vec<DiseaseChoice>,
}

impl DashboardContext {
    /// Resolve every view for `state` in one pass
    pub fn snapshot(&self, state: &SelectionState) -> DashboardView {
        let range = state.year_range();
        let region_title = state.metric().map(|metric| format!("{metric} by region"));
        let year_title = state
            .metric()
            .map(|metric| format!("{metric} by year ({}-{})", range.start(), range.end()));

        DashboardView {
            title: title_for(state.disease()),
            disease: state.disease(),
            metric: state.metric(),
            year_range: range,
            region_chart: ChartView::new(
                REGION_CARD_HEADER,
                region_title,
                self.resolve_region_view(state),
            ),
            year_chart: ChartView::new(YEAR_CARD_HEADER, year_title, self.resolve_year_view(state)),
            explanation_header: EXPLANATION_HEADER,
            explanations: explanations_for(state.disease()),
        }
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            about: ABOUT_TEXT,
            record_count: self.record_count(),
            year_bounds: self.year_bounds(),
            diseases: DiseaseKind::ALL
                .into_iter()
                .map(|disease| DiseaseChoice {
                    disease,
                    label: disease.label(),
                    metrics: disease.metrics(),
                })
                .collect(),
        }
    }
}
