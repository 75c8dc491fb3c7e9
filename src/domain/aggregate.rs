//! Group-by-sum aggregation of disease views
//!
//! Tables are keyed with a `BTreeMap`, so the key → sums mapping and its
//! iteration order depend only on the set of rows, never on their order.

use crate::domain::disease::{DiseaseKind, Metric};
use crate::domain::projection::{DiseaseView, ViewRow};
use crate::domain::types::{CaseCount, RegionName, Year};
use std::collections::BTreeMap;

/// Summed metric values per grouping key, one sum per metric of the owning
/// disease (in metric-list order)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateTable<K> {
    kind: DiseaseKind,
    sums: BTreeMap<K, Vec<CaseCount>>,
}

impl<K: Ord + Clone> AggregateTable<K> {
    fn build(view: &DiseaseView, key: impl Fn(&ViewRow) -> K) -> Self {
        let width = view.metrics().len();
        let mut sums: BTreeMap<K, Vec<CaseCount>> = BTreeMap::new();

        for row in view.rows() {
            let totals = sums
                .entry(key(row))
                .or_insert_with(|| vec![CaseCount::zero(); width]);
            for (total, value) in totals.iter_mut().zip(row.values()) {
                // Absent values contribute nothing
                if let Some(value) = value {
                    *total = total.saturating_add(*value);
                }
            }
        }

        Self {
            kind: view.kind(),
            sums,
        }
    }

    pub fn kind(&self) -> DiseaseKind {
        self.kind
    }

    pub fn metrics(&self) -> &'static [Metric] {
        self.kind.metrics()
    }

    pub fn len(&self) -> usize {
        self.sums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.sums.keys()
    }

    /// All metric sums for one key
    pub fn get(&self, key: &K) -> Option<&[CaseCount]> {
        self.sums.get(key).map(Vec::as_slice)
    }

    /// `(key, sum)` pairs for one metric, `None` if the metric does not belong
    /// to this table's disease
    pub fn column(&self, metric: Metric) -> Option<impl Iterator<Item = (&K, CaseCount)> + '_> {
        let index = self.kind.metric_index(metric)?;
        Some(self.sums.iter().map(move |(key, values)| (key, values[index])))
    }

    /// Grand total of one metric over every key
    pub fn total(&self, metric: Metric) -> Option<CaseCount> {
        Some(self.column(metric)?.map(|(_, value)| value).sum())
    }
}

/// Sum every metric of `view` per region
pub fn aggregate_by_region(view: &DiseaseView) -> AggregateTable<RegionName> {
    AggregateTable::build(view, |row| row.keys.region.clone())
}

/// Sum every metric of `view` per year
pub fn aggregate_by_year(view: &DiseaseView) -> AggregateTable<Year> {
    AggregateTable::build(view, |row| row.keys.year)
}
