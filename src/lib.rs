//! Measles and rubella dashboard
//!
//! Loads the WHO monthly case table once, precomputes per-disease aggregates
//! by region and by year, and serves interactive per-session views of them
//! over a small JSON API.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod server;

pub use application::Application;
pub use error::{Error, Result};
