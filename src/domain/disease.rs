//! Disease kinds and their fixed metric columns
//!
//! The disease → column mapping is a closed set known at compile time, so it
//! is modelled as enums rather than string-keyed lookups. Each disease owns a
//! static, ordered metric list that never changes.

use crate::domain::selection::InvalidSelectionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two diseases covered by the dataset
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DiseaseKind {
    #[default]
    Measles,
    Rubella,
}

const MEASLES_METRICS: [Metric; 5] = [
    Metric::MeaslesSuspect,
    Metric::MeaslesClinical,
    Metric::MeaslesEpiLinked,
    Metric::MeaslesLabConfirmed,
    Metric::MeaslesTotal,
];

const RUBELLA_METRICS: [Metric; 4] = [
    Metric::RubellaClinical,
    Metric::RubellaEpiLinked,
    Metric::RubellaLabConfirmed,
    Metric::RubellaTotal,
];

impl DiseaseKind {
    /// All supported diseases, in display order
    pub const ALL: [DiseaseKind; 2] = [DiseaseKind::Measles, DiseaseKind::Rubella];

    /// Ordered metric columns belonging to this disease
    pub fn metrics(&self) -> &'static [Metric] {
        match self {
            DiseaseKind::Measles => &MEASLES_METRICS,
            DiseaseKind::Rubella => &RUBELLA_METRICS,
        }
    }

    /// First metric of the list, used whenever the disease selection changes
    pub fn default_metric(&self) -> Metric {
        self.metrics()[0]
    }

    /// Position of `metric` within this disease's metric list
    pub fn metric_index(&self, metric: Metric) -> Option<usize> {
        self.metrics().iter().position(|m| *m == metric)
    }

    pub fn contains(&self, metric: Metric) -> bool {
        self.metric_index(metric).is_some()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DiseaseKind::Measles => "measles",
            DiseaseKind::Rubella => "rubella",
        }
    }

    /// Capitalized name shown in selectors and titles
    pub fn label(&self) -> &'static str {
        match self {
            DiseaseKind::Measles => "Measles",
            DiseaseKind::Rubella => "Rubella",
        }
    }
}

impl fmt::Display for DiseaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DiseaseKind {
    type Err = InvalidSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "measles" => Ok(DiseaseKind::Measles),
            "rubella" => Ok(DiseaseKind::Rubella),
            _ => Err(InvalidSelectionError::UnknownDisease(s.to_string())),
        }
    }
}

/// A case-count column of the source dataset
///
/// Serialized as the dataset column name, e.g. `measles_lab_confirmed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    MeaslesSuspect,
    MeaslesClinical,
    MeaslesEpiLinked,
    MeaslesLabConfirmed,
    MeaslesTotal,
    RubellaClinical,
    RubellaEpiLinked,
    RubellaLabConfirmed,
    RubellaTotal,
}

impl Metric {
    /// Every metric column the loader recognises
    pub const ALL: [Metric; 9] = [
        Metric::MeaslesSuspect,
        Metric::MeaslesClinical,
        Metric::MeaslesEpiLinked,
        Metric::MeaslesLabConfirmed,
        Metric::MeaslesTotal,
        Metric::RubellaClinical,
        Metric::RubellaEpiLinked,
        Metric::RubellaLabConfirmed,
        Metric::RubellaTotal,
    ];

    pub fn disease(&self) -> DiseaseKind {
        match self {
            Metric::MeaslesSuspect
            | Metric::MeaslesClinical
            | Metric::MeaslesEpiLinked
            | Metric::MeaslesLabConfirmed
            | Metric::MeaslesTotal => DiseaseKind::Measles,
            Metric::RubellaClinical
            | Metric::RubellaEpiLinked
            | Metric::RubellaLabConfirmed
            | Metric::RubellaTotal => DiseaseKind::Rubella,
        }
    }

    /// Column name in the source CSV
    pub fn column_name(&self) -> &'static str {
        match self {
            Metric::MeaslesSuspect => "measles_suspect",
            Metric::MeaslesClinical => "measles_clinical",
            Metric::MeaslesEpiLinked => "measles_epi_linked",
            Metric::MeaslesLabConfirmed => "measles_lab_confirmed",
            Metric::MeaslesTotal => "measles_total",
            Metric::RubellaClinical => "rubella_clinical",
            Metric::RubellaEpiLinked => "rubella_epi_linked",
            Metric::RubellaLabConfirmed => "rubella_lab_confirmed",
            Metric::RubellaTotal => "rubella_total",
        }
    }

    pub fn from_column_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.column_name() == name)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

impl FromStr for Metric {
    type Err = InvalidSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_column_name(s.trim())
            .ok_or_else(|| InvalidSelectionError::UnknownMetric(s.to_string()))
    }
}
