//! Application startup and serving
//!
//! Wires configuration, dataset loading and the HTTP server together.

pub mod app;

pub use app::Application;
