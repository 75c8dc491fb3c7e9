//! Static descriptions of every metric, shown in the explanation table

use crate::domain::disease::{DiseaseKind, Metric};
use serde::Serialize;

/// One row of the explanation table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricExplanation {
    pub feature: Metric,
    pub explanation: &'static str,
}

impl Metric {
    /// Human-readable case definition for this metric
    pub fn explanation(&self) -> &'static str {
        match self {
            Metric::MeaslesSuspect => "Suspected measles cases: A suspected case is one in which a patient with fever and maculopapular (non-vesicular) rash, or in whom a health-care worker suspects measles",
            Metric::MeaslesClinical => "Clinically-compatible measles cases: A suspected case with fever and maculopapular (non-vesicular) rash and at least one of cough, coryza or conjunctivitis, but no adequate clinical specimen was taken and the case has not been linked epidemiologically to a laboratory-confirmed case of measles or other communicable disease",
            Metric::MeaslesEpiLinked => "Epidemiologically-linked measles cases: A suspected case of measles that has not been confirmed by a laboratory, but was geographically and temporally related with dates of rash onset occurring 7-23 days apart from a laboratory-confirmed case or another epidemiologically linked measles case",
            Metric::MeaslesLabConfirmed => "Laboratory-confirmed measles cases: A suspected case of measles that has been confirmed positive by testing in a proficient laboratory, and vaccine-associated illness has been ruled out",
            Metric::MeaslesTotal => "Total measles cases: the sum of clinically-compatible, epidemiologically linked and laboratory-confirmed cases",
            Metric::RubellaClinical => "Clinically-compatible rubella cases: A suspected case with fever and maculopapular rash and at least one of lymphadenopathy, arthralgia or conjunctivitis, but no adequate clinical specimen was taken",
            Metric::RubellaEpiLinked => "Epidemiologically-linked rubella cases: A suspected case of rubella that has not been confirmed by a laboratory, but was geographically and temporally related with dates of rash onset occurring 12-23 days apart from a laboratory-confirmed case",
            Metric::RubellaLabConfirmed => "Laboratory-confirmed rubella cases: A suspected case of rubella that has been confirmed positive by testing in a proficient laboratory, and vaccine-associated illness has been ruled out",
            Metric::RubellaTotal => "Total rubella cases: the sum of clinically-compatible, epidemiologically linked and laboratory-confirmed cases",
        }
    }
}

/// Explanation table for `kind`, in metric-list order
pub fn explanations_for(kind: DiseaseKind) -> Vec<MetricExplanation> {
    kind.metrics()
        .iter()
        .map(|metric| MetricExplanation {
            feature: *metric,
            explanation: metric.explanation(),
        })
        .collect()
}
