//! Per-session selection state
//!
//! `SelectionState` is the only mutable entity in the dashboard. Its single
//! cross-field invariant is that the selected metric, when set, belongs to
//! the selected disease. Every setter either keeps that invariant or leaves
//! the state untouched.

use crate::domain::disease::{DiseaseKind, Metric};
use crate::domain::types::Year;
use serde::Serialize;
use thiserror::Error;

/// Rejected selection changes; the state is unchanged when one is returned
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSelectionError {
    #[error("unknown disease '{0}'")]
    UnknownDisease(String),

    #[error("unknown metric '{0}'")]
    UnknownMetric(String),

    #[error("metric '{metric}' does not belong to {disease}")]
    MetricNotInDisease { metric: Metric, disease: DiseaseKind },
}

/// Global year span of the loaded dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearBounds {
    min: Year,
    max: Year,
}

impl YearBounds {
    /// Bounds are normalised so that `min <= max`
    pub fn new(a: Year, b: Year) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn min(&self) -> Year {
        self.min
    }

    pub fn max(&self) -> Year {
        self.max
    }

    pub fn clamp(&self, year: i32) -> Year {
        Year::new(year.clamp(self.min.into_inner(), self.max.into_inner()))
    }

    pub fn full_range(&self) -> YearRange {
        YearRange {
            from: self.min,
            to: self.max,
        }
    }
}

/// Inclusive year interval with `from <= to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearRange {
    from: Year,
    to: Year,
}

impl YearRange {
    pub fn start(&self) -> Year {
        self.from
    }

    pub fn end(&self) -> Year {
        self.to
    }

    pub fn contains(&self, year: Year) -> bool {
        self.from <= year && year <= self.to
    }
}

/// Current UI choices of one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    disease: DiseaseKind,
    metric: Option<Metric>,
    year_range: YearRange,
    bounds: YearBounds,
}

impl SelectionState {
    /// Initial state: measles, its first metric, the full year span
    pub fn new(bounds: YearBounds) -> Self {
        let disease = DiseaseKind::default();
        Self {
            disease,
            metric: Some(disease.default_metric()),
            year_range: bounds.full_range(),
            bounds,
        }
    }

    pub fn disease(&self) -> DiseaseKind {
        self.disease
    }

    /// Selected metric; `None` while no metric is chosen
    pub fn metric(&self) -> Option<Metric> {
        self.metric
    }

    pub fn year_range(&self) -> YearRange {
        self.year_range
    }

    pub fn bounds(&self) -> YearBounds {
        self.bounds
    }

    /// Switch disease and reset the metric to the new disease's first metric
    pub fn set_disease(&mut self, disease: DiseaseKind) {
        self.disease = disease;
        self.metric = Some(disease.default_metric());
    }

    /// Select a metric of the current disease
    pub fn set_metric(&mut self, metric: Metric) -> Result<(), InvalidSelectionError> {
        if !self.disease.contains(metric) {
            return Err(InvalidSelectionError::MetricNotInDisease {
                metric,
                disease: self.disease,
            });
        }
        self.metric = Some(metric);
        Ok(())
    }

    /// Clear the metric selection; resolvers return empty views until a new
    /// metric is chosen
    pub fn clear_metric(&mut self) {
        self.metric = None;
    }

    /// Clamp both ends into the dataset bounds and order them
    pub fn set_year_range(&mut self, from: i32, to: i32) {
        let from = self.bounds.clamp(from);
        let to = self.bounds.clamp(to);
        self.year_range = YearRange {
            from: from.min(to),
            to: from.max(to),
        };
    }
}
