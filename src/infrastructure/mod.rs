//! Infrastructure layer for the dashboard
//!
//! This module contains the implementations for external concerns: reading
//! the dataset file and wiring up tracing output.

pub mod dataset_file;
pub mod telemetry;

pub use dataset_file::load_dataset;
pub use telemetry::init_tracing;
