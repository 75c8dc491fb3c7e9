//! Shared CSV fixtures for unit tests

use crate::domain::dataset::RawTable;

/// Header row of the monthly case table, every column in source order
pub const CSV_HEADER: &str = "region,country,iso3,year,month,\
measles_suspect,measles_clinical,measles_epi_linked,measles_lab_confirmed,measles_total,\
rubella_clinical,rubella_epi_linked,rubella_lab_confirmed,rubella_total";

/// Header plus `rows`, one line each
pub fn csv(rows: &[&str]) -> String {
    std::iter::once(CSV_HEADER)
        .chain(rows.iter().copied())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Header with `column` removed
pub fn header_without(column: &str) -> String {
    CSV_HEADER
        .split(',')
        .filter(|name| *name != column)
        .collect::<Vec<_>>()
        .join(",")
}

pub fn table(rows: &[&str]) -> RawTable {
    RawTable::from_reader(csv(rows).as_bytes()).expect("fixture rows are valid")
}
