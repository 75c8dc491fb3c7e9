//! Raw monthly case table as loaded from the source CSV
//!
//! Key columns (region, country, iso3, year, month) are mandatory. Metric
//! columns are recognised by name and recorded as present or absent; the
//! projector decides whether an absent metric column is fatal.

use crate::domain::disease::{DiseaseKind, Metric};
use crate::domain::selection::YearBounds;
use crate::domain::types::{CaseCount, CountryName, Iso3Code, Month, RegionName, Year};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use thiserror::Error;

pub const REGION_COLUMN: &str = "region";
pub const COUNTRY_COLUMN: &str = "country";
pub const ISO3_COLUMN: &str = "iso3";
pub const YEAR_COLUMN: &str = "year";
pub const MONTH_COLUMN: &str = "month";

/// Markers treated as a missing value in numeric columns
const MISSING_MARKERS: [&str; 3] = ["NA", "NaN", "null"];

/// Structural problems with the input table or the metric configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("required column '{column}' is missing from the dataset")]
    MissingColumn { column: String },

    #[error("metric '{metric}' is declared for {disease} but belongs to {owner}")]
    MisconfiguredMetric {
        disease: DiseaseKind,
        metric: Metric,
        owner: DiseaseKind,
    },
}

impl SchemaError {
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }
}

/// Errors raised while loading the dataset; all of them are fatal at startup
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("invalid value {value:?} in column '{column}' at line {line}")]
    InvalidValue {
        line: u64,
        column: String,
        value: String,
    },

    #[error("dataset contains no rows")]
    Empty,
}

/// Shared key columns of every row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordKeys {
    pub region: RegionName,
    pub country: CountryName,
    pub iso3: Iso3Code,
    pub year: Year,
    pub month: Month,
}

/// One row of the source table
///
/// Only metrics with a reported value are stored; a missing entry means the
/// value was absent in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseRecord {
    pub keys: RecordKeys,
    metrics: BTreeMap<Metric, CaseCount>,
}

impl CaseRecord {
    pub fn new(keys: RecordKeys) -> Self {
        Self {
            keys,
            metrics: BTreeMap::new(),
        }
    }

    pub fn with_metric(mut self, metric: Metric, value: CaseCount) -> Self {
        self.metrics.insert(metric, value);
        self
    }

    /// Reported value of `metric`, or `None` if it was absent
    pub fn metric(&self, metric: Metric) -> Option<CaseCount> {
        self.metrics.get(&metric).copied()
    }
}

/// The full table in source row order
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    metric_columns: BTreeSet<Metric>,
    records: Vec<CaseRecord>,
}

impl RawTable {
    pub fn new(metric_columns: impl IntoIterator<Item = Metric>, records: Vec<CaseRecord>) -> Self {
        Self {
            metric_columns: metric_columns.into_iter().collect(),
            records,
        }
    }

    /// Parse a CSV table with a header row
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
        let layout = ColumnLayout::from_headers(csv_reader.headers()?)?;

        let mut records = Vec::new();
        for (index, row) in csv_reader.records().enumerate() {
            let row = row?;
            let line = row
                .position()
                .map(|position| position.line())
                .unwrap_or(index as u64 + 2);
            records.push(layout.parse_row(&row, line)?);
        }

        Ok(Self {
            metric_columns: layout.metrics.iter().map(|(metric, _)| *metric).collect(),
            records,
        })
    }

    pub fn records(&self) -> &[CaseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the source table carried a column for `metric`
    pub fn has_metric_column(&self, metric: Metric) -> bool {
        self.metric_columns.contains(&metric)
    }

    /// Smallest and largest year over every row, `None` for an empty table
    pub fn year_bounds(&self) -> Option<YearBounds> {
        let min = self.records.iter().map(|r| r.keys.year).min()?;
        let max = self.records.iter().map(|r| r.keys.year).max()?;
        Some(YearBounds::new(min, max))
    }
}

/// Column indexes resolved from the header row
struct ColumnLayout {
    region: usize,
    country: usize,
    iso3: usize,
    year: usize,
    month: usize,
    metrics: Vec<(Metric, usize)>,
}

impl ColumnLayout {
    fn from_headers(headers: &StringRecord) -> Result<Self, SchemaError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or_else(|| SchemaError::missing_column(name))
        };

        let metrics = Metric::ALL
            .into_iter()
            .filter_map(|metric| {
                headers
                    .iter()
                    .position(|header| header == metric.column_name())
                    .map(|index| (metric, index))
            })
            .collect();

        Ok(Self {
            region: find(REGION_COLUMN)?,
            country: find(COUNTRY_COLUMN)?,
            iso3: find(ISO3_COLUMN)?,
            year: find(YEAR_COLUMN)?,
            month: find(MONTH_COLUMN)?,
            metrics,
        })
    }

    fn parse_row(&self, row: &StringRecord, line: u64) -> Result<CaseRecord, DatasetError> {
        let field = |index: usize| row.get(index).unwrap_or_default();
        let invalid = |column: &str, value: &str| DatasetError::InvalidValue {
            line,
            column: column.to_string(),
            value: value.to_string(),
        };

        let region = RegionName::try_new(field(self.region).to_string())
            .map_err(|_| invalid(REGION_COLUMN, field(self.region)))?;
        let country = CountryName::try_new(field(self.country).to_string())
            .map_err(|_| invalid(COUNTRY_COLUMN, field(self.country)))?;
        let iso3 = Iso3Code::try_new(field(self.iso3).to_string())
            .map_err(|_| invalid(ISO3_COLUMN, field(self.iso3)))?;
        let year = parse_whole_number(field(self.year))
            .and_then(|value| i32::try_from(value).ok())
            .map(Year::new)
            .ok_or_else(|| invalid(YEAR_COLUMN, field(self.year)))?;
        let month = parse_whole_number(field(self.month))
            .and_then(|value| u8::try_from(value).ok())
            .and_then(|value| Month::try_new(value).ok())
            .ok_or_else(|| invalid(MONTH_COLUMN, field(self.month)))?;

        let mut record = CaseRecord::new(RecordKeys {
            region,
            country,
            iso3,
            year,
            month,
        });

        for (metric, index) in &self.metrics {
            let raw = field(*index);
            if is_missing(raw) {
                continue;
            }
            let value = parse_whole_number(raw)
                .and_then(|value| u64::try_from(value).ok())
                .ok_or_else(|| invalid(metric.column_name(), raw))?;
            record = record.with_metric(*metric, CaseCount::new(value));
        }

        Ok(record)
    }
}

fn is_missing(raw: &str) -> bool {
    raw.is_empty()
        || MISSING_MARKERS
            .iter()
            .any(|marker| raw.eq_ignore_ascii_case(marker))
}

/// Integer, or a float with no fractional part ("12.0")
fn parse_whole_number(raw: &str) -> Option<i64> {
    if let Ok(value) = raw.parse::<i64>() {
        return Some(value);
    }
    let value = raw.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}
