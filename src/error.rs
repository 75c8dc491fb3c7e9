use crate::domain::dataset::DatasetError;
use thiserror::Error;

/// Dashboard application error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::SchemaError;

    #[test]
    fn test_schema_errors_surface_as_dataset_errors() {
        let err: Error = DatasetError::from(SchemaError::missing_column("rubella_total")).into();
        assert_eq!(
            err.to_string(),
            "Dataset error: required column 'rubella_total' is missing from the dataset"
        );
    }

    #[test]
    fn test_dataset_errors_convert() {
        let err: Error = DatasetError::Empty.into();
        assert!(matches!(err, Error::Dataset(DatasetError::Empty)));
    }

    #[test]
    fn test_bind_failures_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err: Error = io.into();
        assert_eq!(err.to_string(), "IO error: address in use");
    }
}
