//! Column projection of the raw table into per-disease views

use crate::domain::dataset::{RawTable, RecordKeys, SchemaError};
use crate::domain::disease::{DiseaseKind, Metric};
use crate::domain::types::CaseCount;

/// One row of a disease view: the shared keys plus one slot per metric, in
/// the order of the disease's metric list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRow {
    pub keys: RecordKeys,
    values: Vec<Option<CaseCount>>,
}

impl ViewRow {
    pub fn values(&self) -> &[Option<CaseCount>] {
        &self.values
    }
}

/// The shared key columns plus the metric columns of a single disease
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiseaseView {
    kind: DiseaseKind,
    rows: Vec<ViewRow>,
}

impl DiseaseView {
    pub fn kind(&self) -> DiseaseKind {
        self.kind
    }

    pub fn metrics(&self) -> &'static [Metric] {
        self.kind.metrics()
    }

    pub fn rows(&self) -> &[ViewRow] {
        &self.rows
    }

    /// Values of `metric` in row order, `None` if the metric is not part of
    /// this view
    pub fn column(&self, metric: Metric) -> Option<impl Iterator<Item = Option<CaseCount>> + '_> {
        let index = self.kind.metric_index(metric)?;
        Some(self.rows.iter().map(move |row| row.values[index]))
    }
}

/// Select the key columns and the metric columns of `kind`, keeping row order
///
/// Fails if any declared metric column is absent from the table.
pub fn project(table: &RawTable, kind: DiseaseKind) -> Result<DiseaseView, SchemaError> {
    for metric in kind.metrics() {
        if metric.disease() != kind {
            return Err(SchemaError::MisconfiguredMetric {
                disease: kind,
                metric: *metric,
                owner: metric.disease(),
            });
        }
        if !table.has_metric_column(*metric) {
            return Err(SchemaError::missing_column(metric.column_name()));
        }
    }

    let rows = table
        .records()
        .iter()
        .map(|record| ViewRow {
            keys: record.keys.clone(),
            values: kind.metrics().iter().map(|m| record.metric(*m)).collect(),
        })
        .collect();

    Ok(DiseaseView { kind, rows })
}
