//! Loading the monthly case table from the local filesystem

use crate::domain::dataset::{DatasetError, RawTable};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{info, instrument};

/// Read and parse the CSV at `path`
///
/// Fetching the upstream file is done outside the process; this only reads
/// the local copy once at startup.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_dataset(path: impl AsRef<Path>) -> Result<RawTable, DatasetError> {
    let file = File::open(path.as_ref())?;
    let table = RawTable::from_reader(BufReader::new(file))?;

    match table.year_bounds() {
        Some(bounds) => info!(
            rows = table.len(),
            year_min = %bounds.min(),
            year_max = %bounds.max(),
            "Dataset loaded"
        ),
        None => info!(rows = 0, "Dataset loaded without rows"),
    }

    Ok(table)
}
